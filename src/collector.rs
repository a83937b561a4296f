//! Interactive input collection for the questionnaires.
//!
//! Each collector owns one field: it shows the field's prompt, runs the
//! matching validation rule, and keeps re-prompting until a line passes.
//! Rejection messages go through [`Console::report`] so the dialogue stays
//! on the operator's terminal.

use anyhow::Result;
use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

use crate::error::ValidationError;
use crate::policy::{FtthPolicy, VoicePolicy};
use crate::prompt::Console;
use crate::validation;

// Prompt texts, verbatim as shown to the operator.
pub const PROMPT_PUBLIC: &str = "Input public IPv4 subnet in CIDR notation: ";
pub const PROMPT_CGNAT: &str = "Input RFC6598 IPv4 subnet in CIDR notation: ";
pub const PROMPT_GATEWAY_V4: &str = "Input IPv4 address of MikroTik: ";
pub const PROMPT_SLAAC: &str = "Input IPv6 SLAAC /64 network for CPE MGMT: ";
pub const PROMPT_PD: &str = "Input IPv6 prefix-delegation /44 network: ";
pub const PROMPT_GATEWAY_V6: &str = "Input IPv6 address of MikroTik: ";
pub const PROMPT_TOWN_VLAN: &str = "Input town VLAN number: ";
pub const PROMPT_GATEWAY_VLAN: &str = "Input gateway VLAN number: ";
pub const PROMPT_TOWNS: &str = "Input town(s): ";
pub const PROMPT_VOICE_VLAN: &str = "VLAN ID: ";
pub const PROMPT_VOICE_SUBNET: &str = "Subnet: ";
pub const PROMPT_VOICE_TOWNS: &str = "Town list: ";

/// Prompt repeatedly until `validate` accepts a line.
///
/// Only console failures (closed input) end the loop early; validation
/// failures are reported and the prompt is shown again.
fn ask<T>(
    console: &mut dyn Console,
    prompt: &str,
    validate: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<T> {
    loop {
        let line = console.prompt(prompt)?;
        match validate(&line) {
            Ok(value) => return Ok(value),
            Err(err) => console.report(err.message()),
        }
    }
}

/// Collect the public IPv4 subnet, kept exactly as entered.
pub fn public_subnet(console: &mut dyn Console, policy: &FtthPolicy) -> Result<Ipv4Net> {
    let subnet = ask(console, PROMPT_PUBLIC, |line| {
        validation::public_subnet(line, policy)
    })?;
    debug!("Accepted public subnet {}", subnet);
    Ok(subnet)
}

/// Collect the CGNAT subnet in network form.
pub fn cgnat_subnet(console: &mut dyn Console, policy: &FtthPolicy) -> Result<Ipv4Net> {
    let subnet = ask(console, PROMPT_CGNAT, |line| {
        validation::cgnat_subnet(line, policy)
    })?;
    debug!("Accepted CGNAT subnet {}", subnet);
    Ok(subnet)
}

/// Collect the IPv4 address of the MikroTik gateway.
pub fn gateway_v4(console: &mut dyn Console, policy: &FtthPolicy) -> Result<Ipv4Addr> {
    let address = ask(console, PROMPT_GATEWAY_V4, |line| {
        validation::gateway_v4(line, policy)
    })?;
    debug!("Accepted IPv4 gateway {}", address);
    Ok(address)
}

/// Collect the SLAAC /64 block in network form.
pub fn slaac_block(console: &mut dyn Console, policy: &FtthPolicy) -> Result<Ipv6Net> {
    let block = ask(console, PROMPT_SLAAC, |line| {
        validation::slaac_block(line, policy)
    })?;
    debug!("Accepted SLAAC block {}", block);
    Ok(block)
}

/// Collect the prefix-delegation /44 block in network form.
pub fn pd_block(console: &mut dyn Console, policy: &FtthPolicy) -> Result<Ipv6Net> {
    let block = ask(console, PROMPT_PD, |line| validation::pd_block(line, policy))?;
    debug!("Accepted delegation block {}", block);
    Ok(block)
}

/// Collect the IPv6 address of the MikroTik gateway.
pub fn gateway_v6(console: &mut dyn Console, policy: &FtthPolicy) -> Result<Ipv6Addr> {
    let address = ask(console, PROMPT_GATEWAY_V6, |line| {
        validation::gateway_v6(line, policy)
    })?;
    debug!("Accepted IPv6 gateway {}", address);
    Ok(address)
}

/// Collect the town VLAN id.
pub fn town_vlan(console: &mut dyn Console) -> Result<u16> {
    ask(console, PROMPT_TOWN_VLAN, validation::vlan_id)
}

/// Collect the gateway VLAN id against the whitelist.
pub fn gateway_vlan(console: &mut dyn Console, policy: &FtthPolicy) -> Result<u16> {
    ask(console, PROMPT_GATEWAY_VLAN, |line| {
        validation::gateway_vlan(line, policy)
    })
}

/// Collect the town label. Free text, used only inside comments.
pub fn towns(console: &mut dyn Console) -> Result<String> {
    console.prompt(PROMPT_TOWNS)
}

/// Collect the voice VLAN id.
pub fn voice_vlan(console: &mut dyn Console) -> Result<u16> {
    ask(console, PROMPT_VOICE_VLAN, validation::vlan_id)
}

/// Collect the voice subnet in network form.
pub fn voice_subnet(console: &mut dyn Console, policy: &VoicePolicy) -> Result<Ipv4Net> {
    let subnet = ask(console, PROMPT_VOICE_SUBNET, |line| {
        validation::voice_subnet(line, policy)
    })?;
    debug!("Accepted voice subnet {}", subnet);
    Ok(subnet)
}

/// Collect the voice town label. Free text, used only inside comments.
pub fn voice_towns(console: &mut dyn Console) -> Result<String> {
    console.prompt(PROMPT_VOICE_TOWNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;
    use crate::prompt::script::ScriptedConsole;
    use crate::validation::{MSG_INVALID_V4_SUBNET, MSG_NOT_RFC6598, MSG_VLAN_OUT_OF_RANGE};

    fn ftth() -> FtthPolicy {
        Policy::default().ftth
    }

    #[test]
    fn test_valid_answer_accepted_first_try() {
        let mut console = ScriptedConsole::new(&["104.219.32.5/29"]);
        let subnet = public_subnet(&mut console, &ftth()).unwrap();
        assert_eq!(subnet.to_string(), "104.219.32.5/29");
        assert_eq!(console.prompts, vec![PROMPT_PUBLIC]);
        assert!(console.reports.is_empty());
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(&["garbage", "10.0.0.0/8", "100.64.0.0/24"]);
        let subnet = cgnat_subnet(&mut console, &ftth()).unwrap();
        assert_eq!(subnet.to_string(), "100.64.0.0/24");
        assert_eq!(console.prompts, vec![PROMPT_CGNAT, PROMPT_CGNAT, PROMPT_CGNAT]);
        assert_eq!(console.reports, vec![MSG_INVALID_V4_SUBNET, MSG_NOT_RFC6598]);
    }

    #[test]
    fn test_closed_input_stops_the_loop() {
        let mut console = ScriptedConsole::new(&["not-a-subnet"]);
        let result = cgnat_subnet(&mut console, &ftth());
        assert!(result.is_err());
        // The single rejection was still shown
        assert_eq!(console.reports, vec![MSG_INVALID_V4_SUBNET]);
    }

    #[test]
    fn test_towns_accepts_any_text() {
        let mut console = ScriptedConsole::new(&["Springfield, Shelbyville"]);
        assert_eq!(towns(&mut console).unwrap(), "Springfield, Shelbyville");

        let mut console = ScriptedConsole::new(&[""]);
        assert_eq!(towns(&mut console).unwrap(), "");
    }

    #[test]
    fn test_voice_vlan_uses_voice_prompt() {
        let mut console = ScriptedConsole::new(&["4095", "200"]);
        let vlan = voice_vlan(&mut console).unwrap();
        assert_eq!(vlan, 200);
        assert_eq!(console.prompts, vec![PROMPT_VOICE_VLAN, PROMPT_VOICE_VLAN]);
        assert_eq!(console.reports, vec![MSG_VLAN_OUT_OF_RANGE]);
    }

    #[test]
    fn test_gateway_vlan_walks_the_whitelist() {
        let mut console = ScriptedConsole::new(&["500", "110"]);
        let vlan = gateway_vlan(&mut console, &ftth()).unwrap();
        assert_eq!(vlan, 110);
        assert_eq!(console.reports, vec!["Invalid gateway VLAN."]);
    }
}
