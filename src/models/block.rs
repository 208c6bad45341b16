//! Shared behaviour of contiguous address blocks.
//!
//! [`Range`](super::Range) and [`Subnet`](super::Subnet) both describe an
//! inclusive block of addresses. Counting, containment, indexed access and
//! iteration only depend on the two bounds, so they live here as provided
//! methods of [`AddressBlock`].

use super::address::Address;
use super::version::IpVersion;
use crate::error::{IpError, IpResult};
use std::iter::FusedIterator;

/// An inclusive, ordered block of IPv4 addresses.
pub trait AddressBlock {
    /// Lowest address of the block.
    fn lower_bound(&self) -> Address;

    /// Highest address of the block.
    fn upper_bound(&self) -> Address;

    /// Number of addresses in the block, between 1 and 2^32.
    fn count(&self) -> u64 {
        u64::from(self.upper_bound().as_integer()) - u64::from(self.lower_bound().as_integer())
            + 1
    }

    fn contains(&self, address: &Address) -> bool {
        self.lower_bound() <= *address && *address <= self.upper_bound()
    }

    /// True when this block lies entirely within `container`.
    fn is_in<B: AddressBlock + ?Sized>(&self, container: &B) -> bool {
        container.lower_bound() <= self.lower_bound()
            && self.upper_bound() <= container.upper_bound()
    }

    /// Address at `offset` from the lower bound.
    ///
    /// # Returns
    /// * `Err(IpError::Range)` - when `offset` is negative or not below [`count`](Self::count)
    fn at(&self, offset: i64) -> IpResult<Address> {
        let in_bounds = u64::try_from(offset).map_or(false, |o| o < self.count());
        if !in_bounds {
            return Err(IpError::Range(format!(
                "Offset {offset} is outside the block {}-{}",
                self.lower_bound(),
                self.upper_bound()
            )));
        }
        self.lower_bound().shift(offset)
    }

    /// Same as [`at`](Self::at) with the offset given as a decimal string.
    ///
    /// Fails with [`IpError::Format`] when `offset` is not made only of digits.
    fn at_str(&self, offset: &str) -> IpResult<Address> {
        let offset = offset.trim();
        if offset.is_empty() || !offset.chars().all(|c| c.is_ascii_digit()) {
            return Err(IpError::Format(format!(
                "Invalid offset '{offset}', only integers can be used to access an address"
            )));
        }
        let offset: i64 = offset
            .parse()
            .map_err(|_| IpError::Range(format!("Offset {offset} is too large")))?;
        self.at(offset)
    }

    /// Lazy iterator over every address of the block, lowest first.
    ///
    /// Each call starts a fresh cursor at offset 0.
    fn iter(&self) -> BlockIter<'_, Self>
    where
        Self: Sized,
    {
        BlockIter {
            block: self,
            position: 0,
        }
    }

    fn version(&self) -> IpVersion {
        IpVersion::V4
    }
}

/// Index cursor over an [`AddressBlock`], stepping through [`AddressBlock::at`].
#[derive(Debug, Clone)]
pub struct BlockIter<'a, B: AddressBlock> {
    block: &'a B,
    position: i64,
}

impl<B: AddressBlock> BlockIter<'_, B> {
    /// Offset of the next address to be yielded.
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Restart the cursor at offset 0.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

impl<B: AddressBlock> Iterator for BlockIter<'_, B> {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        match self.block.at(self.position) {
            Ok(address) => {
                self.position += 1;
                Some(address)
            }
            Err(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.block.count().saturating_sub(self.position as u64);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<B: AddressBlock> FusedIterator for BlockIter<'_, B> {}
