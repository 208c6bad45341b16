//! Arbitrary inclusive range of IPv4 addresses.

use super::address::Address;
use super::block::{AddressBlock, BlockIter};
use crate::error::{IpError, IpResult};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Inclusive range of consecutive addresses, `lower <= upper`.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Range {
    lower: Address,
    upper: Address,
}

impl Range {
    /// Create a range from two addresses, in any order.
    pub fn new(ip1: Address, ip2: Address) -> Range {
        let (lower, upper) = if ip1 <= ip2 { (ip1, ip2) } else { (ip2, ip1) };
        log::trace!("Range::new({lower}-{upper})");
        Range { lower, upper }
    }

    /// Create a range of `count` addresses starting at `base`.
    ///
    /// A negative `count` extends backwards, `base` then being the upper bound.
    ///
    /// # Examples
    /// ```
    /// use ipv4_tools::models::{Address, AddressBlock, Range};
    /// let base = Address::from_string("10.2.35.10").unwrap();
    /// let range = Range::from_count(base, -7).unwrap();
    /// assert_eq!(range.lower_bound().to_string(), "10.2.35.4");
    /// assert_eq!(range.count(), 7);
    /// ```
    pub fn from_count(base: Address, count: i64) -> IpResult<Range> {
        if count == 0 {
            return Err(IpError::Format(
                "A range cannot be built from a count of 0".into(),
            ));
        }
        let offset = if count > 0 { count - 1 } else { count + 1 };
        let other = base.shift(offset)?;
        Ok(Range::new(base, other))
    }

    /// Same lower and upper bounds.
    pub fn matches<B: AddressBlock + ?Sized>(&self, other: &B) -> bool {
        self.lower.matches(&other.lower_bound()) && self.upper.matches(&other.upper_bound())
    }

    /// Move the range by `offset` whole range widths.
    ///
    /// A range of 256 addresses shifted by 1 starts 256 addresses higher.
    pub fn shift(&self, offset: i64) -> IpResult<Range> {
        let width = self.count() as i64;
        let delta = offset.checked_mul(width).ok_or_else(|| {
            IpError::Range(format!("Cannot shift {self} by {offset} ranges"))
        })?;
        Ok(Range::new(self.lower.shift(delta)?, self.upper.shift(delta)?))
    }

    pub fn next(&self) -> IpResult<Range> {
        self.shift(1)
    }

    pub fn previous(&self) -> IpResult<Range> {
        self.shift(-1)
    }

    /// Parse the "a.b.c.d-e.f.g.h" form produced by [`Display`](std::fmt::Display).
    pub fn from_string(s: &str) -> IpResult<Range> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 2 {
            return Err(IpError::Format(format!("Invalid range {s}")));
        }
        Ok(Range::new(
            Address::from_string(parts[0])?,
            Address::from_string(parts[1])?,
        ))
    }
}

impl AddressBlock for Range {
    fn lower_bound(&self) -> Address {
        self.lower
    }

    fn upper_bound(&self) -> Address {
        self.upper
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = Address;
    type IntoIter = BlockIter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.lower, self.upper)
    }
}

impl FromStr for Range {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::from_string(s)
    }
}

impl Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Range, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Range::from_string(&s).map_err(|e| de::Error::custom(format!("invalid range {s}: {e}")))
    }
}
