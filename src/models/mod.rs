//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4Cidr`] - IPv4 address with CIDR notation support
//! - [`SubnetInfo`] - Every quantity derived from one address/prefix pair
//! - [`FormatError`] - Rejected input

mod error;
mod ipv4;
mod subnet_info;

// Re-export public types
pub use error::FormatError;
pub use ipv4::{get_cidr_mask, pack_octets, unpack_octets, Ipv4Cidr, MAX_LENGTH};
pub use subnet_info::SubnetInfo;
