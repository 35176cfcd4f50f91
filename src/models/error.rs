//! Parse errors surfaced to callers.

use thiserror::Error;

/// The only error kind of the calculator: the input text was not a valid
/// `a.b.c.d/n` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Missing or extra `/` separator.
    #[error("invalid format")]
    InvalidFormat,
    /// Wrong octet count, or an octet that is non-numeric or above 255.
    #[error("invalid IP address")]
    InvalidIp,
    /// The prefix length is not an integer.
    #[error("invalid CIDR")]
    InvalidCidr,
    /// The prefix length is an integer outside `0..=32`.
    #[error("CIDR out of range")]
    CidrOutOfRange,
}
