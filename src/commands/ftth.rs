//! FTTH provisioning command implementation.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::collector;
use crate::policy::{FtthPolicy, Policy};
use crate::prompt::{Console, StdioConsole};
use crate::render::{cisco, routeros, FtthInputs};

/// Run the ftth command
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

/// Walk the FTTH questionnaire and render both dialects, router stanzas
/// first so the upstream change lands before the MikroTik script runs.
pub fn generate(console: &mut dyn Console, policy: &Policy) -> Result<String> {
    let inputs = collect(console, &policy.ftth)?;

    info!("Rendering FTTH configuration for VLAN {}", inputs.vlan);

    Ok(format!(
        "{}{}",
        cisco::ftth_static_routes(&inputs),
        routeros::ftth_provisioning(&inputs)
    ))
}

/// Collect every FTTH field in the fixed questionnaire order.
fn collect(console: &mut dyn Console, policy: &FtthPolicy) -> Result<FtthInputs> {
    let public = collector::public_subnet(console, policy)?;
    let cgnat = collector::cgnat_subnet(console, policy)?;
    let gateway_v4 = collector::gateway_v4(console, policy)?;
    let slaac = collector::slaac_block(console, policy)?;
    let pd = collector::pd_block(console, policy)?;
    let gateway_v6 = collector::gateway_v6(console, policy)?;
    let vlan = collector::town_vlan(console)?;
    let towns = collector::towns(console)?;
    let gateway_vlan = collector::gateway_vlan(console, policy)?;

    Ok(FtthInputs {
        public,
        cgnat,
        gateway_v4,
        slaac,
        pd,
        gateway_v6,
        vlan,
        towns,
        gateway_vlan,
    })
}
