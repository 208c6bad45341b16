//! IPv4 netmask: an [`Address`] restricted to a contiguous run of 1 bits followed by 0 bits.

use super::address::{cidr_from_mask, get_cidr_mask, Address, MAX_LENGTH};
use super::version::IpVersion;
use crate::error::{IpError, IpResult};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Validated netmask, e.g. 255.255.255.0 (/24).
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Netmask {
    address: Address,
    cidr: u8,
}

impl Netmask {
    /// Create a [`Netmask`] from an integer.
    ///
    /// # Returns
    /// * `Err(IpError::Range)` - value outside `0..=0xFFFFFFFF`
    /// * `Err(IpError::Domain)` - value is not a netmask bit pattern
    pub fn new(value: i64) -> IpResult<Netmask> {
        Netmask::from_address(Address::from_integer(value)?)
    }

    pub fn from_integer(value: i64) -> IpResult<Netmask> {
        Netmask::new(value)
    }

    /// Create a [`Netmask`] from a CIDR length between 0 and 32.
    ///
    /// # Examples
    /// ```
    /// use ipv4_tools::models::Netmask;
    /// assert_eq!(Netmask::from_cidr(24).unwrap().to_string(), "255.255.255.0");
    /// assert_eq!(Netmask::from_cidr(24).unwrap().count(), 256);
    /// ```
    pub fn from_cidr(cidr: u8) -> IpResult<Netmask> {
        let mask = get_cidr_mask(cidr)?;
        Ok(Netmask {
            address: Address::from(mask),
            cidr,
        })
    }

    /// Reinterpret an [`Address`] as a [`Netmask`], revalidating the bit pattern.
    pub fn from_address(address: Address) -> IpResult<Netmask> {
        match cidr_from_mask(address.as_integer()) {
            Some(cidr) => Ok(Netmask { address, cidr }),
            None => Err(IpError::Domain(format!(
                "Cannot convert {:#x} ({address}) to netmask",
                address.as_integer()
            ))),
        }
    }

    pub fn from_string(netmask: &str) -> IpResult<Netmask> {
        Netmask::from_address(Address::from_string(netmask)?)
    }

    pub fn as_cidr(&self) -> u8 {
        self.cidr
    }

    pub fn as_address(&self) -> Address {
        self.address
    }

    pub fn as_integer(&self) -> u32 {
        self.address.as_integer()
    }

    pub fn as_dot_quad(&self) -> String {
        self.address.as_dot_quad()
    }

    /// Number of addresses covered by the netmask, 2^(32 - cidr).
    pub fn count(&self) -> u64 {
        u64::from(!self.as_integer()) + 1
    }

    /// Move the CIDR length by `offset` (/24 shifted by 1 gives /25).
    pub fn shift(&self, offset: i64) -> IpResult<Netmask> {
        let cidr = i64::from(self.cidr)
            .checked_add(offset)
            .filter(|c| (0..=i64::from(MAX_LENGTH)).contains(c))
            .ok_or_else(|| {
                IpError::Range(format!("Cannot shift netmask /{} by {offset}", self.cidr))
            })?;
        Netmask::from_cidr(cidr as u8)
    }

    pub fn version(&self) -> IpVersion {
        IpVersion::V4
    }
}

impl From<Netmask> for Address {
    fn from(netmask: Netmask) -> Self {
        netmask.address
    }
}

impl TryFrom<Address> for Netmask {
    type Error = IpError;

    fn try_from(address: Address) -> Result<Self, Self::Error> {
        Netmask::from_address(address)
    }
}

impl AsRef<Address> for Netmask {
    fn as_ref(&self) -> &Address {
        &self.address
    }
}

impl FromStr for Netmask {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Netmask::from_string(s)
    }
}

impl std::fmt::Display for Netmask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl Serialize for Netmask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.as_dot_quad())
    }
}

impl<'de> Deserialize<'de> for Netmask {
    fn deserialize<D>(deserializer: D) -> Result<Netmask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Netmask::from_string(&s)
            .map_err(|e| de::Error::custom(format!("invalid netmask {s}: {e}")))
    }
}
