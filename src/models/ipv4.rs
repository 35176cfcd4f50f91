//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Cidr`] for an address paired with a prefix length, along
//! with the bit-level helpers the subnet engine is built on.

use super::{FormatError, SubnetInfo};
use crate::processing::compute_subnet;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Pack four octets, most significant first, into one `u32`.
///
/// # Examples
/// ```
/// use subnet_calculator::models::pack_octets;
/// assert_eq!(pack_octets([192, 168, 1, 10]), 0xC0A8010A);
/// ```
pub fn pack_octets(octets: [u8; 4]) -> u32 {
    (octets[0] as u32) << 24 | (octets[1] as u32) << 16 | (octets[2] as u32) << 8 | octets[3] as u32
}

/// Split a `u32` back into four big-endian octets.
pub fn unpack_octets(bits: u32) -> [u8; 4] {
    [
        (bits >> 24) as u8,
        (bits >> 16) as u8,
        (bits >> 8) as u8,
        bits as u8,
    ]
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, FormatError> {
    match len {
        // u32 << 32 overflows
        0 => Ok(0),
        1..=MAX_LENGTH => Ok(u32::MAX << (MAX_LENGTH - len)),
        _ => Err(FormatError::CidrOutOfRange),
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    /// The IPv4 address as entered (host bits are kept).
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Ipv4Cidr {
    /// Create a new [`Ipv4Cidr`] from a CIDR string (e.g., "10.0.0.5/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4Cidr, FormatError> {
        let (addr, prefix) = crate::processing::parse(addr_cidr)?;
        Ok(Ipv4Cidr { addr, prefix })
    }

    /// Every derived quantity of this subnet; a prefix above 32 counts as 32.
    pub fn subnet_info(&self) -> SubnetInfo {
        compute_subnet(self.addr, self.prefix)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn network(&self) -> Ipv4Addr {
        self.subnet_info().network_address
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        self.subnet_info().broadcast_address
    }
}

impl FromStr for Ipv4Cidr {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Cidr::new(s)
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Cidr::new(&s).map_err(|e| de::Error::custom(format!("{e}: {s}")))
    }
}
