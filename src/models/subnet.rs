//! CIDR aligned subnet: a [`Range`] bounded by a network and a broadcast address.

use super::address::Address;
use super::block::{AddressBlock, BlockIter};
use super::netmask::Netmask;
use super::range::Range;
use crate::error::{IpError, IpResult};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

lazy_static! {
    // exactly one '/' with something on both sides
    static ref SUBNET_RE: Regex = Regex::new(r"^([^/]+)/([^/]+)$").expect("Invalid Regex?");
    static ref CIDR_RE: Regex = Regex::new(r"^\d+$").expect("Invalid Regex?");
}

/// IPv4 subnet, e.g. 10.0.0.0/24.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    range: Range,
    netmask: Netmask,
}

impl Subnet {
    /// Create a [`Subnet`] from a network address and a netmask.
    ///
    /// With `strict`, the network address must not have bits set outside the
    /// netmask, otherwise [`IpError::Range`] is returned. Without it, the
    /// address is masked down to the network containing it.
    pub fn new(network: Address, netmask: Netmask, strict: bool) -> IpResult<Subnet> {
        let mask_bits = netmask.as_integer();
        let network_bits = network.as_integer() & mask_bits;
        if strict && network_bits != network.as_integer() {
            log::debug!("Unaligned network {network} rejected for netmask {netmask}");
            return Err(IpError::Range(format!(
                "Invalid network address {network}, this address is not usable with the CIDR {}",
                netmask.as_cidr()
            )));
        }
        let broadcast_bits = network_bits | !mask_bits;
        let subnet = Subnet {
            range: Range::new(Address::from(network_bits), Address::from(broadcast_bits)),
            netmask,
        };
        log::trace!("Subnet::new({subnet})");
        Ok(subnet)
    }

    /// Create a [`Subnet`] from a network address and a CIDR length.
    ///
    /// # Examples
    /// ```
    /// use ipv4_tools::models::{Address, AddressBlock, Subnet};
    /// let subnet = Subnet::from_cidr(Address::from_string("10.0.0.0").unwrap(), 24, true).unwrap();
    /// assert_eq!(subnet.broadcast_address().to_string(), "10.0.0.255");
    /// assert_eq!(subnet.count(), 256);
    /// ```
    pub fn from_cidr(network: Address, cidr: u8, strict: bool) -> IpResult<Subnet> {
        Subnet::new(network, Netmask::from_cidr(cidr)?, strict)
    }

    /// Create a [`Subnet`] with the netmask given as a plain [`Address`].
    pub fn from_addresses(network: Address, netmask: Address, strict: bool) -> IpResult<Subnet> {
        Subnet::new(network, Netmask::from_address(netmask)?, strict)
    }

    /// Subnet of length `cidr` containing `address`.
    #[deprecated(note = "use Subnet::from_cidr(address, cidr, false)")]
    pub fn from_contained_address_cidr(address: Address, cidr: u8) -> IpResult<Subnet> {
        Subnet::from_cidr(address, cidr, false)
    }

    /// Parse "a.b.c.d/n" where n is a CIDR length or a dotted quad netmask.
    ///
    /// # Arguments
    /// * `s` - subnet string, e.g. "10.0.0.0/24" or "10.0.0.0/255.255.255.0"
    /// * `strict` - reject network addresses with host bits set
    pub fn from_string(s: &str, strict: bool) -> IpResult<Subnet> {
        let caps = SUBNET_RE
            .captures(s.trim())
            .ok_or_else(|| IpError::Format(format!("Invalid subnet {s}, expected address/mask")))?;
        let (network, mask) = (&caps[1], &caps[2]);

        let network = Address::from_string(network)?;
        let netmask = if CIDR_RE.is_match(mask) {
            let cidr: u8 = mask
                .parse()
                .map_err(|_| IpError::Range(format!("Invalid CIDR value {mask}")))?;
            Netmask::from_cidr(cidr)?
        } else if mask.contains('.') {
            Netmask::from_string(mask)?
        } else {
            return Err(IpError::Format(format!(
                "Invalid subnet {s}, mask must be a CIDR length or a netmask"
            )));
        };
        Subnet::new(network, netmask, strict)
    }

    pub fn network_address(&self) -> Address {
        self.range.lower_bound()
    }

    pub fn netmask_address(&self) -> Address {
        self.netmask.as_address()
    }

    pub fn netmask(&self) -> Netmask {
        self.netmask
    }

    pub fn broadcast_address(&self) -> Address {
        self.range.upper_bound()
    }

    pub fn as_cidr(&self) -> u8 {
        self.netmask.as_cidr()
    }

    /// "network/cidr", e.g. "10.0.0.0/24".
    pub fn as_dot_quad_and_cidr(&self) -> String {
        self.as_dot_quad_and_cidr_with("/")
    }

    pub fn as_dot_quad_and_cidr_with(&self, separator: &str) -> String {
        format!(
            "{}{separator}{}",
            self.network_address(),
            self.netmask.as_cidr()
        )
    }

    pub fn to_range(&self) -> Range {
        self.range
    }

    /// Same network and broadcast addresses.
    pub fn matches<B: AddressBlock + ?Sized>(&self, other: &B) -> bool {
        self.range.matches(other)
    }

    /// Move the subnet by `offset` subnets of the same size, keeping the netmask.
    pub fn shift(&self, offset: i64) -> IpResult<Subnet> {
        let delta = offset.checked_mul(self.count() as i64).ok_or_else(|| {
            IpError::Range(format!("Cannot shift {self} by {offset} subnets"))
        })?;
        let network = self.network_address().shift(delta)?;
        Subnet::from_cidr(network, self.netmask.as_cidr(), true)
    }

    pub fn next(&self) -> IpResult<Subnet> {
        self.shift(1)
    }

    pub fn previous(&self) -> IpResult<Subnet> {
        self.shift(-1)
    }
}

impl AddressBlock for Subnet {
    fn lower_bound(&self) -> Address {
        self.range.lower_bound()
    }

    fn upper_bound(&self) -> Address {
        self.range.upper_bound()
    }

    fn count(&self) -> u64 {
        self.netmask.count()
    }
}

impl From<Subnet> for Range {
    fn from(subnet: Subnet) -> Self {
        subnet.range
    }
}

impl<'a> IntoIterator for &'a Subnet {
    type Item = Address;
    type IntoIter = BlockIter<'a, Subnet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.as_dot_quad_and_cidr())
    }
}

impl FromStr for Subnet {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subnet::from_string(s, true)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.as_dot_quad_and_cidr())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::from_string(&s, true)
            .map_err(|e| de::Error::custom(format!("invalid CIDR format {s}: {e}")))
    }
}
