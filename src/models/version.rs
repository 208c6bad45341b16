//! IP protocol version marker.

/// IP protocol version of a value. Only IPv4 values exist in this crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4 = 4,
    V6 = 6,
}

impl IpVersion {
    /// Numeric version, 4 or 6.
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for IpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "IPv{}", self.number())
    }
}
