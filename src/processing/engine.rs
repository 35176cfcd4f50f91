//! Subnet arithmetic.
//!
//! Derives mask, network, broadcast, usable range and host counts from a
//! validated address and prefix length using `u32` bit operations.

use crate::models::{get_cidr_mask, pack_octets, unpack_octets, SubnetInfo, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Compute every [`SubnetInfo`] field for `addr/prefix`.
///
/// `prefix` must already be range checked by [`super::parse`]; a value above
/// 32 is treated as 32.
///
/// When fewer than two host bits remain (/31, /32) there is no range strictly
/// between network and broadcast. In that case `first_usable` is the network
/// address and `last_usable` the broadcast address, instead of stepping past
/// them.
pub fn compute_subnet(addr: Ipv4Addr, prefix: u8) -> SubnetInfo {
    let prefix = prefix.min(MAX_LENGTH);
    let host_bits = MAX_LENGTH - prefix;

    let ip_int = pack_octets(addr.octets());
    // prefix is clamped above, so the mask lookup cannot fail
    let mask_int = get_cidr_mask(prefix).unwrap_or(u32::MAX);
    let network_int = ip_int & mask_int;
    let wildcard_int = !mask_int;
    let broadcast_int = network_int | wildcard_int;

    let (first_usable_int, last_usable_int) = if host_bits < 2 {
        (network_int, broadcast_int)
    } else {
        (network_int + 1, broadcast_int - 1)
    };

    let total_hosts = 1u64 << host_bits;
    let usable_hosts = total_hosts.saturating_sub(2);

    log::debug!(
        "compute_subnet({addr}/{prefix}) network={:#010x} broadcast={:#010x} total={total_hosts}",
        network_int,
        broadcast_int
    );

    SubnetInfo {
        address: addr,
        prefix_length: prefix,
        mask: to_addr(mask_int),
        network_address: to_addr(network_int),
        broadcast_address: to_addr(broadcast_int),
        first_usable: to_addr(first_usable_int),
        last_usable: to_addr(last_usable_int),
        total_hosts,
        usable_hosts,
        network_bits: prefix,
        host_bits,
    }
}

fn to_addr(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(unpack_octets(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse;
    use proptest::prelude::*;

    fn calc(input: &str) -> SubnetInfo {
        let (addr, prefix) = parse(input).unwrap();
        compute_subnet(addr, prefix)
    }

    #[test]
    fn test_slash_24() {
        let info = calc("192.168.1.10/24");
        assert_eq!(info.address, Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(info.mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(info.network_address, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(info.broadcast_address, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(info.first_usable, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(info.last_usable, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(info.total_hosts, 256);
        assert_eq!(info.usable_hosts, 254);
        assert_eq!(info.network_bits, 24);
        assert_eq!(info.host_bits, 8);
        assert_eq!(info.wildcard(), Ipv4Addr::new(0, 0, 0, 255));
    }

    #[test]
    fn test_slash_30() {
        let info = calc("10.0.0.5/30");
        assert_eq!(info.network_address, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(info.broadcast_address, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(info.first_usable, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(info.last_usable, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(info.total_hosts, 4);
        assert_eq!(info.usable_hosts, 2);
        assert!(!info.is_degenerate());
    }

    #[test]
    fn test_slash_0() {
        let info = calc("172.16.5.4/0");
        assert_eq!(info.mask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(info.network_address, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(info.broadcast_address, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(info.first_usable, Ipv4Addr::new(0, 0, 0, 1));
        assert_eq!(info.last_usable, Ipv4Addr::new(255, 255, 255, 254));
        assert_eq!(info.total_hosts, 4294967296);
        assert_eq!(info.usable_hosts, 4294967294);
        assert_eq!(info.host_bits, 32);
    }

    #[test]
    fn test_slash_31_clamps_usable_range() {
        let info = calc("10.0.0.7/31");
        assert_eq!(info.mask, Ipv4Addr::new(255, 255, 255, 254));
        assert_eq!(info.network_address, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(info.broadcast_address, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(info.first_usable, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(info.last_usable, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(info.total_hosts, 2);
        assert_eq!(info.usable_hosts, 0);
        assert!(info.is_degenerate());
    }

    #[test]
    fn test_slash_32_clamps_usable_range() {
        let info = calc("192.168.1.10/32");
        let addr = Ipv4Addr::new(192, 168, 1, 10);
        assert_eq!(info.mask, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(info.network_address, addr);
        assert_eq!(info.broadcast_address, addr);
        assert_eq!(info.first_usable, addr);
        assert_eq!(info.last_usable, addr);
        assert_eq!(info.total_hosts, 1);
        assert_eq!(info.usable_hosts, 0);
        assert_eq!(info.host_bits, 0);
    }

    #[test]
    fn test_slash_32_at_address_space_edges() {
        // no wrap to 0.0.0.0 / 255.255.255.255
        let top = compute_subnet(Ipv4Addr::BROADCAST, 32);
        assert_eq!(top.first_usable, Ipv4Addr::BROADCAST);
        assert_eq!(top.last_usable, Ipv4Addr::BROADCAST);
        let bottom = compute_subnet(Ipv4Addr::UNSPECIFIED, 32);
        assert_eq!(bottom.first_usable, Ipv4Addr::UNSPECIFIED);
        assert_eq!(bottom.last_usable, Ipv4Addr::UNSPECIFIED);
    }

    #[test]
    fn test_prefix_above_32_is_treated_as_32() {
        let addr = Ipv4Addr::new(10, 1, 2, 3);
        assert_eq!(compute_subnet(addr, 40), compute_subnet(addr, 32));
        assert_eq!(compute_subnet(addr, 40).network_address, addr);
    }

    #[test]
    fn test_percentages() {
        let info = calc("10.0.0.0/8");
        assert_eq!(info.network_percent(), 25.0);
        assert_eq!(info.host_percent(), 75.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig{
            failure_persistence: None,
            ..Default::default()
        })]

        #[test]
        fn test_pack_unpack_round_trip(octets in any::<[u8; 4]>()) {
            prop_assert_eq!(unpack_octets(pack_octets(octets)), octets);
        }

        #[test]
        fn test_network_and_broadcast_bits(bits in any::<u32>(), prefix in 0u8..=32) {
            let info = compute_subnet(Ipv4Addr::from(bits), prefix);
            let mask = u32::from(info.mask);
            let network = u32::from(info.network_address);
            let broadcast = u32::from(info.broadcast_address);

            prop_assert_eq!(mask.count_ones(), prefix as u32);
            prop_assert_eq!(mask.leading_ones(), prefix as u32);
            prop_assert_eq!(network & !mask, 0);
            // every host bit set
            prop_assert_eq!(broadcast | !mask, broadcast);
            prop_assert_eq!(broadcast & !mask, !mask);
            prop_assert_eq!(network, bits & mask);
            prop_assert!(network <= u32::from(info.first_usable));
            prop_assert!(u32::from(info.first_usable) <= u32::from(info.last_usable));
            prop_assert!(u32::from(info.last_usable) <= broadcast);
        }

        #[test]
        fn test_host_counts(bits in any::<u32>(), prefix in 0u8..=32) {
            let info = compute_subnet(Ipv4Addr::from(bits), prefix);
            prop_assert_eq!(info.total_hosts, 2u64.pow(32 - prefix as u32));
            prop_assert_eq!(info.usable_hosts, info.total_hosts.saturating_sub(2));
            prop_assert_eq!(info.network_bits + info.host_bits, 32);
            prop_assert_eq!(
                u32::from(info.broadcast_address) as u64 - u32::from(info.network_address) as u64 + 1,
                info.total_hosts
            );
        }

        #[test]
        fn test_parse_then_compute_is_total(octets in any::<[u8; 4]>(), prefix in 0u8..=32) {
            let input = format!("{}.{}.{}.{}/{}", octets[0], octets[1], octets[2], octets[3], prefix);
            let (addr, parsed_prefix) = parse(&input).unwrap();
            prop_assert_eq!(addr.octets(), octets);
            prop_assert_eq!(parsed_prefix, prefix);
            let info = compute_subnet(addr, parsed_prefix);
            prop_assert_eq!(info.address, addr);
        }
    }
}
