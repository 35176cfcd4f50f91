//! IPv4 subnet calculator.
//!
//! [`calculate`] parses an `a.b.c.d/n` token and derives network, broadcast,
//! mask, usable range and host counts. Presentation lives in [`output`].

pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;

use models::{FormatError, SubnetInfo};

/// Parse `input` and compute its subnet; nothing is computed for bad input.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// let info = subnet_calculator::calculate("192.168.1.10/24").unwrap();
/// assert_eq!(info.network_address, Ipv4Addr::new(192, 168, 1, 0));
/// assert_eq!(info.usable_hosts, 254);
/// ```
pub fn calculate(input: &str) -> Result<SubnetInfo, FormatError> {
    let (addr, prefix) = processing::parse(input)?;
    Ok(processing::compute_subnet(addr, prefix))
}
