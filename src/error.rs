//! Error taxonomy shared by every IPv4 value type.

use thiserror::Error;

/// Errors raised while building or transforming IPv4 values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpError {
    /// Malformed textual or array input (wrong element count, non numeric content, bad separators).
    #[error("invalid format: {0}")]
    Format(String),
    /// Well formed input outside the representable bounds.
    #[error("out of range: {0}")]
    Range(String),
    /// In range value that breaks a semantic invariant, e.g. a non contiguous netmask.
    #[error("invalid value: {0}")]
    Domain(String),
}

impl IpError {
    pub fn is_format(&self) -> bool {
        matches!(self, IpError::Format(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, IpError::Range(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, IpError::Domain(_))
    }
}

/// Result alias used across the crate.
pub type IpResult<T> = Result<T, IpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_predicates() {
        assert!(IpError::Format("x".into()).is_format());
        assert!(IpError::Range("x".into()).is_range());
        assert!(IpError::Domain("x".into()).is_domain());
        assert!(!IpError::Domain("x".into()).is_range());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            IpError::Range("Cannot convert 4294967296 to an IPv4 address".into()).to_string(),
            "out of range: Cannot convert 4294967296 to an IPv4 address"
        );
    }
}
