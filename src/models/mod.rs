//! IPv4 value types.
//!
//! This module contains the immutable value objects of the crate:
//! - [`Address`] - a single IPv4 address
//! - [`Netmask`] - an address restricted to a valid netmask bit pattern
//! - [`Range`] - an inclusive range of addresses
//! - [`Subnet`] - a CIDR aligned range carrying its netmask
//!
//! [`Range`] and [`Subnet`] share counting, containment, indexed access and
//! iteration through the [`AddressBlock`] trait.

mod address;
mod block;
mod netmask;
mod range;
mod subnet;
mod version;

// Re-export public types
pub use address::{
    cidr_from_mask, get_cidr_mask, Address, AddressClass, Octet, MAX_LENGTH, MAX_VALUE,
};
pub use block::{AddressBlock, BlockIter};
pub use netmask::Netmask;
pub use range::Range;
pub use subnet::Subnet;
pub use version::IpVersion;
