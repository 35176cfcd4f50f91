//! Display model for one calculation.
//!
//! [`SubnetView`] holds every string a renderer shows, so terminal, CSV and
//! any other front end agree on formatting and on the reset state after an
//! error.

use crate::models::SubnetInfo;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Shown in every field when there is no result.
pub const PLACEHOLDER: &str = "-";

/// A bar segment gets a text label only above this width, in percent.
const BAR_LABEL_MIN_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SubnetView {
    pub address: String,
    pub network_address: String,
    pub broadcast_address: String,
    pub first_usable: String,
    pub last_usable: String,
    pub subnet_mask: String,
    pub wildcard_mask: String,
    pub total_hosts: String,
    pub usable_hosts: String,
    pub ip_binary: String,
    pub mask_binary: String,
    pub network_binary: String,
    pub network_bits: u8,
    pub host_bits: u8,
    pub network_percent: f64,
    pub host_percent: f64,
    pub network_bar_label: Option<String>,
    pub host_bar_label: Option<String>,
    pub error: Option<String>,
}

impl SubnetView {
    pub fn new(info: &SubnetInfo, separator: char) -> SubnetView {
        let network_percent = info.network_percent();
        let host_percent = info.host_percent();
        SubnetView {
            address: info.address.to_string(),
            network_address: info.network_address.to_string(),
            broadcast_address: info.broadcast_address.to_string(),
            first_usable: info.first_usable.to_string(),
            last_usable: info.last_usable.to_string(),
            subnet_mask: info.mask.to_string(),
            wildcard_mask: info.wildcard().to_string(),
            total_hosts: group_thousands(info.total_hosts, separator),
            usable_hosts: group_thousands(info.usable_hosts, separator),
            ip_binary: format_binary(info.address),
            mask_binary: format_binary(info.mask),
            network_binary: format_binary(info.network_address),
            network_bits: info.network_bits,
            host_bits: info.host_bits,
            network_percent,
            host_percent,
            network_bar_label: (network_percent > BAR_LABEL_MIN_PERCENT)
                .then(|| format!("Network ({})", info.network_bits)),
            host_bar_label: (host_percent > BAR_LABEL_MIN_PERCENT)
                .then(|| format!("Hosts ({})", info.host_bits)),
            error: None,
        }
    }

    /// The reset view shown after a failed calculation.
    pub fn placeholder(error: &str) -> SubnetView {
        SubnetView {
            address: PLACEHOLDER.to_string(),
            network_address: PLACEHOLDER.to_string(),
            broadcast_address: PLACEHOLDER.to_string(),
            first_usable: PLACEHOLDER.to_string(),
            last_usable: PLACEHOLDER.to_string(),
            subnet_mask: PLACEHOLDER.to_string(),
            wildcard_mask: PLACEHOLDER.to_string(),
            total_hosts: PLACEHOLDER.to_string(),
            usable_hosts: PLACEHOLDER.to_string(),
            ip_binary: PLACEHOLDER.to_string(),
            mask_binary: PLACEHOLDER.to_string(),
            network_binary: PLACEHOLDER.to_string(),
            network_bits: 0,
            host_bits: 0,
            network_percent: 0.0,
            host_percent: 0.0,
            network_bar_label: None,
            host_bar_label: None,
            error: Some(error.to_string()),
        }
    }
}

/// Each octet as 8 zero-padded bits, joined with `" . "`.
pub fn format_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(" . ")
}

/// Decimal digits grouped in threes from the right.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let lead = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
