//! Immutable IPv4 value objects: addresses, netmasks, ranges and CIDR subnets.
//!
//! ```
//! use ipv4_tools::{Address, AddressBlock, Subnet};
//!
//! let subnet = Subnet::from_string("10.2.4.1/30", false).unwrap();
//! assert_eq!(subnet.network_address().to_string(), "10.2.4.0");
//! assert_eq!(subnet.broadcast_address().to_string(), "10.2.4.3");
//! assert!(subnet.contains(&Address::from_string("10.2.4.2").unwrap()));
//! ```

mod error;
pub mod models;

pub use error::{IpError, IpResult};
pub use models::{
    Address, AddressBlock, AddressClass, BlockIter, IpVersion, Netmask, Octet, Range, Subnet,
};
