//! Result of one subnet calculation.

use super::MAX_LENGTH;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Every quantity derived from an address and prefix length.
///
/// Built fresh by [`crate::processing::compute_subnet`] and never mutated.
/// Serialize only; addresses are written as dotted-quad strings.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetInfo {
    /// The address as entered.
    pub address: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix_length: u8,
    /// Subnet mask.
    pub mask: Ipv4Addr,
    /// Address with all host bits cleared.
    pub network_address: Ipv4Addr,
    /// Address with all host bits set.
    pub broadcast_address: Ipv4Addr,
    /// Lowest usable host; equals the network address for /31 and /32.
    pub first_usable: Ipv4Addr,
    /// Highest usable host; equals the broadcast address for /31 and /32.
    pub last_usable: Ipv4Addr,
    /// `2^host_bits`, up to 2^32.
    pub total_hosts: u64,
    /// `total_hosts - 2`, floored at 0.
    pub usable_hosts: u64,
    pub network_bits: u8,
    pub host_bits: u8,
}

impl SubnetInfo {
    /// Wildcard (inverse) mask.
    pub fn wildcard(&self) -> Ipv4Addr {
        !self.mask
    }

    /// True when the subnet has no room for distinct network and broadcast
    /// addresses around a host range (/31 and /32).
    pub fn is_degenerate(&self) -> bool {
        self.host_bits < 2
    }

    /// Share of the 32 address bits used by the network part, in percent.
    pub fn network_percent(&self) -> f64 {
        self.network_bits as f64 / MAX_LENGTH as f64 * 100.0
    }

    /// Share of the 32 address bits used by the host part, in percent.
    pub fn host_percent(&self) -> f64 {
        self.host_bits as f64 / MAX_LENGTH as f64 * 100.0
    }
}
