//! Voice VLAN provisioning command implementation.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::collector;
use crate::policy::{Policy, VoicePolicy};
use crate::prompt::{Console, StdioConsole};
use crate::render::{cisco, kea, VoiceInputs};

/// Run the voice command
pub fn run(config_path: &Path) -> Result<()> {
    let policy = if config_path.exists() {
        Policy::load(config_path)?
    } else {
        debug!("No policy file at {:?}, using built-in tables", config_path);
        Policy::default()
    };

    let mut console = StdioConsole::new();
    let output = generate(&mut console, &policy)?;
    println!("{}", output);

    Ok(())
}

/// Walk the voice questionnaire and render both dialects, router stanza
/// first so the relay interface exists before Kea starts answering on it.
pub fn generate(console: &mut dyn Console, policy: &Policy) -> Result<String> {
    let inputs = collect(console, &policy.voice)?;

    info!("Rendering voice configuration for VLAN {}", inputs.vlan);

    Ok(format!(
        "{}\n{}",
        cisco::voice_interface(&inputs),
        kea::voice_subnet_pool(&inputs)
    ))
}

/// Collect every voice field in the fixed questionnaire order.
fn collect(console: &mut dyn Console, policy: &VoicePolicy) -> Result<VoiceInputs> {
    let vlan = collector::voice_vlan(console)?;
    let subnet = collector::voice_subnet(console, policy)?;
    let towns = collector::voice_towns(console)?;

    Ok(VoiceInputs { vlan, subnet, towns })
}
