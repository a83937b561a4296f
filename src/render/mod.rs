//! Configuration renderers for the supported dialects.
//!
//! Renderers are pure string builders over already-validated inputs. They
//! never see raw operator text and never fail: every field arriving here
//! has passed its validation rule, and tiny subnets that could not feed a
//! DHCP pool were rejected at input time.

pub mod cisco;
pub mod kea;
pub mod routeros;

use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Validated answers of the FTTH questionnaire.
#[derive(Debug, Clone)]
pub struct FtthInputs {
    /// Public subnet exactly as entered. Doubles as the static-route
    /// destination, the gateway-VLAN interface address and the NAT target.
    pub public: Ipv4Net,

    /// CGNAT subnet in network form.
    pub cgnat: Ipv4Net,

    /// MikroTik gateway, IPv4.
    pub gateway_v4: Ipv4Addr,

    /// SLAAC /64 for CPE management, network form.
    pub slaac: Ipv6Net,

    /// Prefix-delegation /44, network form.
    pub pd: Ipv6Net,

    /// MikroTik gateway, IPv6.
    pub gateway_v6: Ipv6Addr,

    /// Town VLAN carrying subscriber traffic.
    pub vlan: u16,

    /// Free-text town label, used inside comments.
    pub towns: String,

    /// VLAN of the public gateway interface.
    pub gateway_vlan: u16,
}

/// Validated answers of the voice questionnaire.
#[derive(Debug, Clone)]
pub struct VoiceInputs {
    /// Voice VLAN id, also used as the Kea subnet id.
    pub vlan: u16,

    /// Voice subnet in network form.
    pub subnet: Ipv4Net,

    /// Free-text town label, used inside comments.
    pub towns: String,
}
