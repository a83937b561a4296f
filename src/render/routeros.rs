//! MikroTik RouterOS provisioning script.

use super::FtthInputs;
use crate::subnet;

// Bridge and trunk port the town VLAN is tagged on.
const BRIDGE: &str = "bridge-sw";
const TRUNK_PORT: &str = "LAN-LAG-1";

// Resolvers handed out over DHCPv4 and router advertisements.
const DNS_V4: &str = "192.35.202.143,162.255.12.157";
const DNS_V6: &str = "2607:5380:c001:7::3,2607:5380:c001:8::3";

/// DHCP option set carrying the Calix option-43 SPID.
const OPTION_SET: &str = "calix-option43-spid";

// Lease times for the CGNAT pool and the delegation pool.
const LEASE_V4: &str = "3h";
const LEASE_V6: &str = "31d";

/// Prefix length handed to each CPE out of the /44 delegation block.
const DELEGATION_PREFIX_LEN: u8 = 56;

/// Full provisioning script for one FTTH town.
///
/// Pastes into a RouterOS terminal top to bottom: VLAN interface and
/// bridge tagging first (with layer-3 hardware offloading toggled around
/// the change), then IPv4 addressing, CGNAT pool, DHCP and NAT444, then
/// the IPv6 management address, ND, and the prefix-delegation server.
pub fn ftth_provisioning(inputs: &FtthInputs) -> String {
    let vlan_interface = format!("vlan.{}", inputs.vlan);
    let gateway_interface = format!("vlan.{}", inputs.gateway_vlan);
    let pool_name = format!("{}-cgn-hosts", vlan_interface);
    let pd_pool_name = format!("ipv6-pd-pool-{}", vlan_interface);

    let cgn_gateway = subnet::first_host(&inputs.cgnat);
    let pool_start = subnet::second_host(&inputs.cgnat);
    let pool_end = subnet::last_host(&inputs.cgnat);
    let mgmt_address = subnet::first_host_v6(&inputs.slaac);

    let mut script = String::new();

    script.push_str("\nMikroTik Configuration:\n");
    script.push_str("#######################\n");

    // VLAN interface and bridge tagging
    script.push_str("/interface/ethernet/switch set 0 l3-hw-offloading=no\n");
    script.push_str(&format!(
        "/interface/vlan/add comment=\"{} FTTH\" interface={} name={} vlan-id={}\n",
        inputs.towns, BRIDGE, vlan_interface, inputs.vlan
    ));
    script.push_str(&format!(
        "/interface/bridge/vlan/add bridge={} tagged={} vlan-ids={}\n",
        BRIDGE, TRUNK_PORT, inputs.vlan
    ));
    script.push_str("/interface/ethernet/switch set 0 l3-hw-offloading=yes\n");

    // IPv4 addressing, CGNAT pool, DHCP and NAT444
    script.push_str(&format!(
        "/ip/address/add address={}/{} comment=\"{} CGN GW\" interface={}\n",
        cgn_gateway,
        inputs.cgnat.prefix_len(),
        inputs.towns,
        vlan_interface
    ));
    script.push_str(&format!(
        "/ip/address/add address={} comment=\"{} Metro Public IPs\" interface={}\n",
        inputs.public, inputs.towns, gateway_interface
    ));
    script.push_str(&format!(
        "/ip/pool/add comment=\"{} CGN\" name={} ranges={}-{}\n",
        inputs.towns, pool_name, pool_start, pool_end
    ));
    script.push_str(&format!(
        "/ip/dhcp-server/network/add address={} comment=\"{} RFC6598\" dns-server={} gateway={}\n",
        inputs.cgnat, inputs.towns, DNS_V4, cgn_gateway
    ));
    script.push_str(&format!(
        "/ip/dhcp-server/add address-pool={} comment=\"{} CGN DHCP\" dhcp-option-set={} interface={} lease-time={} name={}\n",
        pool_name, inputs.towns, OPTION_SET, vlan_interface, LEASE_V4, pool_name
    ));
    script.push_str(&format!(
        "/ip/firewall/address-list/add address={} comment=\"{} RFC6598 Addressing\" list={}\n",
        inputs.cgnat, inputs.towns, pool_name
    ));
    script.push_str(&format!(
        "/ip/firewall/nat/add action=src-nat chain=srcnat comment=\"NAT444 {}\" out-interface={} src-address-list={} to-addresses={}\n",
        inputs.towns, gateway_interface, pool_name, inputs.public
    ));

    // IPv6 management address, ND and prefix delegation
    script.push_str(&format!(
        "/ipv6/address/add address={}/{} comment=\"MGMT for {} CPE\" interface={}\n",
        mgmt_address,
        inputs.slaac.prefix_len(),
        inputs.towns,
        vlan_interface
    ));
    script.push_str(&format!(
        "/ipv6/nd/add dns={} interface={}\n",
        DNS_V6, vlan_interface
    ));
    script.push_str(&format!(
        "/ipv6/pool/add comment=\"IPv6 prefix delegation pool for {}\" name={} prefix={} prefix-length={}\n",
        inputs.towns, pd_pool_name, inputs.pd, DELEGATION_PREFIX_LEN
    ));
    script.push_str(&format!(
        "/ipv6/dhcp-server/add address-pool={} interface={} lease-time={} name={} comment=\"DHCPv6 for {}\"\n",
        pd_pool_name, vlan_interface, LEASE_V6, pd_pool_name, inputs.towns
    ));

    script
}
