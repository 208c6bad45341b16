//! IPv4 address value type.
//!
//! Provides [`Address`], an immutable 32 bit IPv4 address, along with the
//! netmask bit helpers shared by [`Netmask`](super::Netmask) and
//! [`Subnet`](super::Subnet).

use super::block::AddressBlock;
use super::subnet::Subnet;
use super::version::IpVersion;
use crate::error::{IpError, IpResult};
use lazy_static::lazy_static;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Highest integer value an IPv4 address can hold.
pub const MAX_VALUE: i64 = u32::MAX as i64;

/// Convert a CIDR prefix length to a netmask as u32.
///
/// # Examples
/// ```
/// use ipv4_tools::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> IpResult<u32> {
    if len > MAX_LENGTH {
        Err(IpError::Range(format!("Invalid CIDR value {len}")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Find the CIDR length whose netmask pattern equals `mask`, searching from /32 down to /0.
pub fn cidr_from_mask(mask: u32) -> Option<u8> {
    (0..=MAX_LENGTH)
        .rev()
        .find(|len| get_cidr_mask(*len).map_or(false, |m| m == mask))
}

/// Classful routing class of an address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        f.write_str(s)
    }
}

/// One element of the array form of an address: an integer or a digit only string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Octet<'a> {
    Int(i64),
    Text(&'a str),
}

impl From<i64> for Octet<'_> {
    fn from(value: i64) -> Self {
        Octet::Int(value)
    }
}

impl<'a> From<&'a str> for Octet<'a> {
    fn from(value: &'a str) -> Self {
        Octet::Text(value)
    }
}

impl Octet<'_> {
    /// Validate the element and return its byte value.
    fn to_byte(self) -> IpResult<u32> {
        let value = match self {
            Octet::Int(value) => value,
            Octet::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(IpError::Format(
                        "Octet strings must contain an integer, empty value found".into(),
                    ));
                }
                if !text.chars().all(|c| c.is_ascii_digit()) {
                    return Err(IpError::Format(format!(
                        "Octet strings must contain an integer, found {text}"
                    )));
                }
                // only digits left, a parse failure can only be an overflow
                text.parse::<i64>().map_err(|_| {
                    IpError::Range(format!("Cannot convert {text} to an IPv4 address octet"))
                })?
            }
        };
        if !(0..=0xff).contains(&value) {
            return Err(IpError::Range(format!(
                "Cannot convert {value} to an IPv4 address octet"
            )));
        }
        Ok(value as u32)
    }
}

lazy_static! {
    static ref RFC1918_SUBNETS: [Subnet; 3] = [
        reference_subnet([10, 0, 0, 0], 8),
        reference_subnet([172, 16, 0, 0], 12),
        reference_subnet([192, 168, 0, 0], 16),
    ];
    static ref RFC6598_SUBNET: Subnet = reference_subnet([100, 64, 0, 0], 10);
}

fn reference_subnet(octets: [u8; 4], cidr: u8) -> Subnet {
    Subnet::from_cidr(Address::from(octets), cidr, true).expect("Invalid reference subnet?")
}

/// Immutable IPv4 address stored as a 32 bit unsigned integer.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Address {
    value: u32,
}

impl Address {
    /// Create an [`Address`] from an integer in `0..=0xFFFFFFFF`.
    pub fn from_integer(value: i64) -> IpResult<Address> {
        if !(0..=MAX_VALUE).contains(&value) {
            return Err(IpError::Range(format!(
                "Cannot convert {value} to an IPv4 address"
            )));
        }
        Ok(Address {
            value: value as u32,
        })
    }

    /// Create an [`Address`] from a dotted quad string (e.g. "192.168.1.10").
    ///
    /// # Examples
    /// ```
    /// use ipv4_tools::models::Address;
    /// let ip = Address::from_string("192.168.1.10").unwrap();
    /// assert_eq!(ip.as_integer(), 3232235786);
    /// ```
    pub fn from_string(address: &str) -> IpResult<Address> {
        let parts: Vec<Octet> = address.split('.').map(Octet::Text).collect();
        Address::from_array(&parts)
    }

    /// Create an [`Address`] from 4 big endian octets.
    ///
    /// Every element is either an integer or a string holding only digits.
    pub fn from_array(octets: &[Octet]) -> IpResult<Address> {
        if octets.len() != 4 {
            return Err(IpError::Format(format!(
                "Array must contain 4 octets, {} found",
                octets.len()
            )));
        }
        let mut buffer: u32 = 0;
        for octet in octets {
            buffer = (buffer << 8) | octet.to_byte()?;
        }
        Ok(Address { value: buffer })
    }

    /// Create the netmask shaped address for a CIDR length (24 gives 255.255.255.0).
    pub fn from_cidr(cidr: u8) -> IpResult<Address> {
        Ok(Address {
            value: get_cidr_mask(cidr)?,
        })
    }

    /// 0.0.0.0
    pub fn min_address() -> Address {
        Address { value: 0 }
    }

    /// 255.255.255.255
    pub fn max_address() -> Address {
        Address { value: u32::MAX }
    }

    pub fn as_integer(&self) -> u32 {
        self.value
    }

    pub fn as_dot_quad(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            (self.value >> 24) & 0xff,
            (self.value >> 16) & 0xff,
            (self.value >> 8) & 0xff,
            self.value & 0xff
        )
    }

    /// Returns the CIDR length when the address is a netmask (255.255.255.0 gives 24).
    pub fn as_cidr(&self) -> IpResult<u8> {
        cidr_from_mask(self.value).ok_or_else(|| {
            IpError::Domain(format!("Cannot convert address {self} to CIDR, not a netmask"))
        })
    }

    pub fn is_netmask(&self) -> bool {
        self.as_cidr().is_ok()
    }

    /// Get the classful routing class from the high order bits of the first octet.
    pub fn get_class(&self) -> AddressClass {
        let higher_octet = self.value >> 24;
        if higher_octet & 0x80 == 0 {
            AddressClass::A
        } else if higher_octet & 0xC0 == 0x80 {
            AddressClass::B
        } else if higher_octet & 0xE0 == 0xC0 {
            AddressClass::C
        } else if higher_octet & 0xF0 == 0xE0 {
            AddressClass::D
        } else {
            AddressClass::E
        }
    }

    pub fn is_multicast(&self) -> bool {
        self.get_class() == AddressClass::D
    }

    /// Private address pool of RFC 1918 (10/8, 172.16/12, 192.168/16).
    pub fn is_rfc1918(&self) -> bool {
        RFC1918_SUBNETS.iter().any(|subnet| subnet.contains(self))
    }

    /// Shared address space of RFC 6598 (100.64/10).
    pub fn is_rfc6598(&self) -> bool {
        RFC6598_SUBNET.contains(self)
    }

    pub fn is_private(&self) -> bool {
        self.is_rfc1918() || self.is_rfc6598()
    }

    /// True when the address lies within the bounds of `block`.
    pub fn is_in<B: AddressBlock + ?Sized>(&self, block: &B) -> bool {
        block.contains(self)
    }

    /// Value equality.
    pub fn matches(&self, other: &Address) -> bool {
        self.value == other.value
    }

    /// Move the address by `offset` (may be negative).
    ///
    /// Fails with [`IpError::Range`] when the result leaves `0.0.0.0..=255.255.255.255`.
    pub fn shift(&self, offset: i64) -> IpResult<Address> {
        let shifted = i64::from(self.value).checked_add(offset).ok_or_else(|| {
            IpError::Range(format!("Cannot shift {self} by {offset}"))
        })?;
        Address::from_integer(shifted).map_err(|e| {
            log::debug!("shift({offset}) of {self} rejected: {e}");
            e
        })
    }

    pub fn next(&self) -> IpResult<Address> {
        self.shift(1)
    }

    pub fn previous(&self) -> IpResult<Address> {
        self.shift(-1)
    }

    pub fn version(&self) -> IpVersion {
        IpVersion::V4
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address { value }
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Address {
            value: u32::from_be_bytes(octets),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address {
            value: u32::from(addr),
        }
    }
}

impl From<Address> for Ipv4Addr {
    fn from(address: Address) -> Self {
        Ipv4Addr::from(address.value)
    }
}

impl From<Address> for u32 {
    fn from(address: Address) -> Self {
        address.value
    }
}

impl FromStr for Address {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_string(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.as_dot_quad())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.as_dot_quad())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_string(&s)
            .map_err(|e| de::Error::custom(format!("invalid IP address {s}: {e}")))
    }
}
