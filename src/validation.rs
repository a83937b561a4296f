//! Centralized validation functions for provgen.
//!
//! One function per questionnaire field. Each takes the raw operator line
//! and the relevant policy tables, and returns either the parsed value in
//! canonical form or a [`ValidationError`] carrying the exact message to
//! show before re-prompting.

use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::ValidationError;
use crate::policy::{FtthPolicy, VoicePolicy, RFC1918};

// Rejection messages, verbatim as shown to the operator.
pub const MSG_INVALID_V4_SUBNET: &str = "Invalid IPv4 subnet. Please input a valid CIDR subnet.";
pub const MSG_NOT_PUBLIC: &str =
    "Public IPv4 subnet requested but RFC1918 or RFC6598 subnet input. Please input a public address.";
pub const MSG_NOT_METRO_V4: &str = "Input a subnet in Metro owned IPv4 space.";
pub const MSG_NOT_RFC6598: &str =
    "RFC6598 subnet asked for but input not within range. Please input a valid RFC6598 subnet.";
pub const MSG_INVALID_V4_ADDRESS: &str = "Input valid IPv4 address.";
pub const MSG_NOT_MIKROTIK_V4: &str = "Please input IPv4 address of MikroTik.";
pub const MSG_INVALID_V6_SUBNET: &str = "Input valid IPv6 subnet.";
pub const MSG_NOT_PD_PREFIX: &str = "Input valid IPv6 /44 network.";
pub const MSG_NOT_METRO_PD: &str = "Input a valid Metro IPv6 /44 network.";
pub const MSG_INVALID_SLAAC: &str = "Input valid IPv6 /64 network.";
pub const MSG_NOT_METRO_SLAAC: &str = "Input a valid Metro IPv6 /64 network.";
pub const MSG_INVALID_V6_ADDRESS: &str = "Input valid IPv6 address.";
pub const MSG_NOT_MIKROTIK_V6: &str = "Input valid MikroTik IPv6 address.";
pub const MSG_NOT_A_NUMBER: &str = "Input a number.";
pub const MSG_VLAN_OUT_OF_RANGE: &str = "Input number between 1 and 4094.";
pub const MSG_INVALID_GATEWAY_VLAN: &str = "Invalid gateway VLAN.";
pub const MSG_INVALID_VOICE_SUBNET: &str = "Input valid IPv4 subnet.";
pub const MSG_SUBNET_TOO_SMALL: &str =
    "Subnet too small to derive a gateway and DHCP pool. Please input a /30 or larger subnet.";

/// Validate a public IPv4 subnet against the Metro supernet list.
///
/// The subnet is returned exactly as entered, host bits included, since
/// routers accept the interface-address form in route statements.
///
/// # Examples
/// ```
/// use provgen::policy::FtthPolicy;
/// use provgen::validation::public_subnet;
///
/// let policy = FtthPolicy::default();
/// assert!(public_subnet("104.219.32.5/29", &policy).is_ok());
/// assert!(public_subnet("192.168.1.0/24", &policy).is_err());
/// ```
pub fn public_subnet(input: &str, policy: &FtthPolicy) -> Result<Ipv4Net, ValidationError> {
    let subnet: Ipv4Net = input
        .parse()
        .map_err(|_| ValidationError::Parse(MSG_INVALID_V4_SUBNET.to_string()))?;

    if policy.rfc6598.contains(&subnet) || RFC1918.iter().any(|block| block.contains(&subnet)) {
        return Err(ValidationError::Policy(MSG_NOT_PUBLIC.to_string()));
    }

    if !policy
        .public_supernets
        .iter()
        .any(|supernet| supernet.contains(&subnet))
    {
        return Err(ValidationError::Policy(MSG_NOT_METRO_V4.to_string()));
    }

    Ok(subnet)
}

/// Validate a CGNAT subnet: must sit inside the RFC6598 range and be wide
/// enough to hold a gateway plus a DHCP pool. Returned in network form.
pub fn cgnat_subnet(input: &str, policy: &FtthPolicy) -> Result<Ipv4Net, ValidationError> {
    let subnet: Ipv4Net = input
        .parse()
        .map_err(|_| ValidationError::Parse(MSG_INVALID_V4_SUBNET.to_string()))?;

    if !policy.rfc6598.contains(&subnet) {
        return Err(ValidationError::Policy(MSG_NOT_RFC6598.to_string()));
    }

    if subnet.prefix_len() > 30 {
        return Err(ValidationError::Policy(MSG_SUBNET_TOO_SMALL.to_string()));
    }

    Ok(subnet.trunc())
}

/// Validate the IPv4 address of the MikroTik gateway.
pub fn gateway_v4(input: &str, policy: &FtthPolicy) -> Result<Ipv4Addr, ValidationError> {
    let address: Ipv4Addr = input
        .parse()
        .map_err(|_| ValidationError::Parse(MSG_INVALID_V4_ADDRESS.to_string()))?;

    if !policy.gateways_v4.contains(&address) {
        return Err(ValidationError::Policy(MSG_NOT_MIKROTIK_V4.to_string()));
    }

    Ok(address)
}

/// Validate the SLAAC /64 used for CPE management. Returned in network form.
pub fn slaac_block(input: &str, policy: &FtthPolicy) -> Result<Ipv6Net, ValidationError> {
    let block: Ipv6Net = input
        .parse()
        .map_err(|_| ValidationError::Parse(MSG_INVALID_SLAAC.to_string()))?;

    if block.prefix_len() != 64 {
        return Err(ValidationError::Policy(MSG_INVALID_SLAAC.to_string()));
    }

    if !policy.management_v6.contains(&block) {
        return Err(ValidationError::Policy(MSG_NOT_METRO_SLAAC.to_string()));
    }

    Ok(block.trunc())
}

/// Validate the prefix-delegation /44. Returned in network form.
///
/// The prefix length is checked before Metro ownership, so a /48 inside
/// Metro space is reported as a wrong-size block, not a foreign one.
pub fn pd_block(input: &str, policy: &FtthPolicy) -> Result<Ipv6Net, ValidationError> {
    let block: Ipv6Net = input
        .parse()
        .map_err(|_| ValidationError::Parse(MSG_INVALID_V6_SUBNET.to_string()))?;

    if block.prefix_len() != 44 {
        return Err(ValidationError::Policy(MSG_NOT_PD_PREFIX.to_string()));
    }

    if !policy.management_v6.contains(&block) {
        return Err(ValidationError::Policy(MSG_NOT_METRO_PD.to_string()));
    }

    Ok(block.trunc())
}

/// Validate the IPv6 address of the MikroTik gateway.
pub fn gateway_v6(input: &str, policy: &FtthPolicy) -> Result<Ipv6Addr, ValidationError> {
    let address: Ipv6Addr = input
        .parse()
        .map_err(|_| ValidationError::Parse(MSG_INVALID_V6_ADDRESS.to_string()))?;

    if !policy.gateways_v6.contains(&address) {
        return Err(ValidationError::Policy(MSG_NOT_MIKROTIK_V6.to_string()));
    }

    Ok(address)
}

/// Validate a VLAN id in the 802.1Q usable range.
///
/// Parses through i64 so negative input is reported as out of range, the
/// way an operator would expect, rather than as a non-number.
///
/// # Examples
/// ```
/// use provgen::validation::vlan_id;
///
/// assert_eq!(vlan_id(" 500 ").unwrap(), 500);
/// assert!(vlan_id("0").is_err());
/// assert!(vlan_id("4095").is_err());
/// assert!(vlan_id("core").is_err());
/// ```
pub fn vlan_id(input: &str) -> Result<u16, ValidationError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::Parse(MSG_NOT_A_NUMBER.to_string()))?;

    if !(1..=4094).contains(&value) {
        return Err(ValidationError::Policy(MSG_VLAN_OUT_OF_RANGE.to_string()));
    }

    Ok(value as u16)
}

/// Validate a gateway VLAN id against the whitelist.
pub fn gateway_vlan(input: &str, policy: &FtthPolicy) -> Result<u16, ValidationError> {
    let value = vlan_id(input)?;

    if !policy.gateway_vlans.contains(&value) {
        return Err(ValidationError::Policy(MSG_INVALID_GATEWAY_VLAN.to_string()));
    }

    Ok(value)
}

/// Validate a voice subnet against the voice supernet list. Returned in
/// network form.
pub fn voice_subnet(input: &str, policy: &VoicePolicy) -> Result<Ipv4Net, ValidationError> {
    let subnet: Ipv4Net = input
        .parse()
        .map_err(|_| ValidationError::Parse(MSG_INVALID_VOICE_SUBNET.to_string()))?;

    if !policy
        .supernets
        .iter()
        .any(|supernet| supernet.contains(&subnet))
    {
        return Err(ValidationError::Policy(voice_supernet_message(
            &policy.supernets,
        )));
    }

    if subnet.prefix_len() > 30 {
        return Err(ValidationError::Policy(MSG_SUBNET_TOO_SMALL.to_string()));
    }

    Ok(subnet.trunc())
}

/// Rejection message listing every allowed voice supernet, one per line.
fn voice_supernet_message(supernets: &[Ipv4Net]) -> String {
    let mut message =
        String::from("Invalid voice subnet. Please input subnet in one of the following supernets:");
    for supernet in supernets {
        message.push_str(&format!("\n{}", supernet));
    }
    message
}
