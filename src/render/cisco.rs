//! Cisco IOS XR configuration stanzas.

use super::{FtthInputs, VoiceInputs};
use crate::subnet;

/// Bundle interface that voice sub-interfaces hang off.
const BUNDLE: &str = "Bundle-Ether100";

// Netflow monitor and sampler applied to voice sub-interfaces.
const NETFLOW_MONITOR: &str = "kentik-monitor";
const NETFLOW_SAMPLER: &str = "netflowsampler";

/// DHCP relay profile pointing at the Kea servers.
const RELAY_PROFILE: &str = "metro-kea-dhcp";

/// Reserved voice bandwidth in kbps.
const BANDWIDTH_KBPS: u32 = 100_000;

/// Static-route stanzas pointing the delegated blocks at the MikroTik
/// gateway, one address family per stanza.
///
/// The public subnet is routed as entered, host bits included; the v6
/// stanza routes the delegation block and the management /64.
pub fn ftth_static_routes(inputs: &FtthInputs) -> String {
    let mut config = String::new();

    config.push_str("\n\nCisco Configuration:\n");
    config.push_str("####################\n");
    config.push_str("router static address-family ipv4 unicast\n");
    config.push_str(&format!(
        "  {} {} description CALIX-{}\n",
        inputs.public, inputs.gateway_v4, inputs.vlan
    ));
    config.push_str("!\n");
    config.push_str("router static address-family ipv6 unicast\n");
    config.push_str(&format!(
        "  {} {} description CALIX-{}_PD\n",
        inputs.pd, inputs.gateway_v6, inputs.vlan
    ));
    config.push_str(&format!(
        "  {} {} description CALIX-{}_CPE\n",
        inputs.slaac, inputs.gateway_v6, inputs.vlan
    ));
    config.push_str("!\n");

    config
}

/// Voice sub-interface and its DHCP relay stanza.
///
/// The interface takes the first usable host of the voice subnet as its
/// address, so the same derivation feeds the Kea `routers` option.
pub fn voice_interface(inputs: &VoiceInputs) -> String {
    let gateway = subnet::first_host(&inputs.subnet);

    let mut config = String::new();

    config.push_str("Cisco configuration:\n\n");
    config.push_str(&format!("interface {}.{}\n", BUNDLE, inputs.vlan));
    config.push_str(&format!(" description Calix Voice - {}\n", inputs.towns));
    config.push_str(&format!(" bandwidth {}\n", BANDWIDTH_KBPS));
    config.push_str(&format!(
        " ipv4 address {}/{}\n",
        gateway,
        inputs.subnet.prefix_len()
    ));
    config.push_str(&format!(
        " flow ipv4 monitor {} sampler {} ingress\n",
        NETFLOW_MONITOR, NETFLOW_SAMPLER
    ));
    config.push_str(&format!(" encapsulation dot1q {}\n", inputs.vlan));
    config.push_str("!\n");
    config.push_str("dhcp ipv4\n");
    config.push_str(&format!(
        " interface {}.{} relay profile {}\n",
        BUNDLE, inputs.vlan, RELAY_PROFILE
    ));
    config.push_str("!");

    config
}
