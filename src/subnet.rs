//! Usable-host derivations over IPv4 and IPv6 networks.
//!
//! Renderers need "the gateway address", "the DHCP pool bounds" and "the
//! ::1 management address" of a block. Everything here is integer
//! arithmetic on the network bounds; host lists are never materialized,
//! so a /10 costs the same as a /29.

use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

/// First usable host of a network, conventionally the gateway.
///
/// Point-to-point (/31) and host (/32) networks have no separate network
/// address, so every address counts as usable.
///
/// # Examples
/// ```
/// use provgen::subnet::first_host;
/// let net: ipnet::Ipv4Net = "100.64.0.0/24".parse().unwrap();
/// assert_eq!(first_host(&net).to_string(), "100.64.0.1");
/// ```
pub fn first_host(net: &Ipv4Net) -> Ipv4Addr {
    match net.prefix_len() {
        31 | 32 => net.network(),
        _ => Ipv4Addr::from(u32::from(net.network()) + 1),
    }
}

/// Second usable host of a network, the start of a DHCP pool whose first
/// host is already taken by the gateway.
pub fn second_host(net: &Ipv4Net) -> Ipv4Addr {
    match net.prefix_len() {
        32 => net.network(),
        31 => net.broadcast(),
        _ => Ipv4Addr::from(u32::from(net.network()) + 2),
    }
}

/// Last usable host of a network, the end of a DHCP pool.
pub fn last_host(net: &Ipv4Net) -> Ipv4Addr {
    match net.prefix_len() {
        31 | 32 => net.broadcast(),
        _ => Ipv4Addr::from(u32::from(net.broadcast()) - 1),
    }
}

/// The `::1` address inside an IPv6 network, used as the management
/// gateway of a SLAAC block.
///
/// # Examples
/// ```
/// use provgen::subnet::first_host_v6;
/// let net: ipnet::Ipv6Net = "2607:5380:1000:1::/64".parse().unwrap();
/// assert_eq!(first_host_v6(&net).to_string(), "2607:5380:1000:1::1");
/// ```
pub fn first_host_v6(net: &Ipv6Net) -> Ipv6Addr {
    Ipv6Addr::from(u128::from(net.network()) | 1)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy to generate IPv4 networks wide enough for a DHCP pool
    fn poolable_net_strategy() -> impl Strategy<Value = Ipv4Net> {
        (any::<u32>(), 8u8..=30).prop_map(|(ip, prefix)| {
            Ipv4Net::new(Ipv4Addr::from(ip), prefix).unwrap().trunc()
        })
    }

    proptest! {
        /// Hosts are strictly ordered inside the network bounds
        #[test]
        fn prop_hosts_ordered_within_bounds(net in poolable_net_strategy()) {
            let first = first_host(&net);
            let second = second_host(&net);
            let last = last_host(&net);

            prop_assert!(net.network() < first);
            prop_assert!(first < second);
            prop_assert!(second <= last);
            prop_assert!(last < net.broadcast());
        }

        /// Every derived host belongs to the network
        #[test]
        fn prop_hosts_contained(net in poolable_net_strategy()) {
            prop_assert!(net.contains(&first_host(&net)));
            prop_assert!(net.contains(&second_host(&net)));
            prop_assert!(net.contains(&last_host(&net)));
        }

        /// The v6 management address is the network address plus one
        #[test]
        fn prop_v6_management_address(ip in any::<u128>(), prefix in 16u8..=64) {
            let net = Ipv6Net::new(Ipv6Addr::from(ip), prefix).unwrap().trunc();
            let first = first_host_v6(&net);
            prop_assert!(net.contains(&first));
            prop_assert_eq!(u128::from(first), u128::from(net.network()) | 1);
        }
    }
}
