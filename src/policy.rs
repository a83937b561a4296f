//! Address policy tables for provgen.
//!
//! The defaults describe Metro's production addressing plan. Operators can
//! override any table from a YAML file, which is how lab environments run
//! the same tool against test address space.

use anyhow::{Context, Result};
use ipnet::{Ipv4Net, Ipv6Net};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::path::Path;

/// RFC1918 private blocks, rejected wherever a public subnet is expected.
pub const RFC1918: [Ipv4Net; 3] = [
    Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(172, 16, 0, 0), 12),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 168, 0, 0), 16),
];

/// RFC6598 shared address space: 100.64.0.0/10
pub const RFC6598: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(100, 64, 0, 0), 10);

/// Metro IPv6 allocation: 2607:5380::/32
pub const METRO_V6: Ipv6Net =
    Ipv6Net::new_assert(Ipv6Addr::new(0x2607, 0x5380, 0, 0, 0, 0, 0, 0), 32);

/// Main policy structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// FTTH flow tables (public space, CGNAT range, gateways, VLANs)
    pub ftth: FtthPolicy,

    /// Voice flow tables (voice supernets)
    pub voice: VoicePolicy,
}

/// Address tables for the FTTH flow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FtthPolicy {
    /// CGNAT range that RFC6598 subnets must come from
    pub rfc6598: Ipv4Net,

    /// IPv6 allocation that SLAAC and prefix-delegation blocks must come from
    pub management_v6: Ipv6Net,

    /// Metro-owned public IPv4 supernets
    pub public_supernets: Vec<Ipv4Net>,

    /// MikroTik gateway addresses, IPv4
    pub gateways_v4: Vec<Ipv4Addr>,

    /// MikroTik gateway addresses, IPv6
    pub gateways_v6: Vec<Ipv6Addr>,

    /// VLANs that carry a public gateway interface
    pub gateway_vlans: Vec<u16>,
}

impl Default for FtthPolicy {
    fn default() -> Self {
        Self {
            rfc6598: RFC6598,
            management_v6: METRO_V6,
            public_supernets: default_public_supernets(),
            gateways_v4: default_gateways_v4(),
            gateways_v6: default_gateways_v6(),
            gateway_vlans: default_gateway_vlans(),
        }
    }
}

/// Address tables for the voice flow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicePolicy {
    /// Supernets that voice subnets must come from
    pub supernets: Vec<Ipv4Net>,
}

impl Default for VoicePolicy {
    fn default() -> Self {
        Self {
            supernets: default_voice_supernets(),
        }
    }
}

impl Policy {
    /// Load policy tables from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read policy file: {:?}", path.as_ref()))?;
        let policy: Policy = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse policy file: {:?}", path.as_ref()))?;

        // Validate policy tables
        policy.validate()?;

        Ok(policy)
    }

    /// Validate policy table values
    pub fn validate(&self) -> Result<()> {
        if self.ftth.public_supernets.is_empty() {
            anyhow::bail!("Policy must list at least one public IPv4 supernet");
        }

        if self.ftth.gateways_v4.is_empty() || self.ftth.gateways_v6.is_empty() {
            anyhow::bail!("Policy must list at least one MikroTik gateway per address family");
        }

        if self.ftth.gateway_vlans.is_empty() {
            anyhow::bail!("Policy must list at least one gateway VLAN");
        }

        for vlan in &self.ftth.gateway_vlans {
            if !(1..=4094).contains(vlan) {
                anyhow::bail!("Invalid gateway VLAN {}: must be between 1 and 4094", vlan);
            }
        }

        // Prefix-delegation blocks are /44, so the allocation must be able
        // to contain one
        if self.ftth.management_v6.prefix_len() > 44 {
            anyhow::bail!(
                "IPv6 allocation /{} is too narrow to hold a /44 delegation block",
                self.ftth.management_v6.prefix_len()
            );
        }

        if self.voice.supernets.is_empty() {
            anyhow::bail!("Policy must list at least one voice supernet");
        }

        Ok(())
    }
}

fn default_public_supernets() -> Vec<Ipv4Net> {
    vec![
        Ipv4Net::new_assert(Ipv4Addr::new(104, 219, 32, 0), 21),
        Ipv4Net::new_assert(Ipv4Addr::new(108, 59, 176, 0), 20),
        Ipv4Net::new_assert(Ipv4Addr::new(162, 255, 8, 0), 21),
        Ipv4Net::new_assert(Ipv4Addr::new(192, 35, 200, 0), 22),
        Ipv4Net::new_assert(Ipv4Addr::new(199, 116, 80, 0), 22),
        Ipv4Net::new_assert(Ipv4Addr::new(216, 107, 160, 0), 20),
    ]
}

fn default_gateways_v4() -> Vec<Ipv4Addr> {
    vec![
        Ipv4Addr::new(108, 59, 178, 219),
        Ipv4Addr::new(108, 59, 177, 106),
        Ipv4Addr::new(104, 219, 32, 226),
        Ipv4Addr::new(104, 219, 32, 62),
        Ipv4Addr::new(108, 59, 176, 150),
        Ipv4Addr::new(108, 59, 176, 62),
        Ipv4Addr::new(108, 59, 178, 38),
    ]
}

fn default_gateways_v6() -> Vec<Ipv6Addr> {
    vec![
        Ipv6Addr::new(0x2607, 0x5380, 0xc001, 0x16, 0, 0, 0, 3),
        Ipv6Addr::new(0x2607, 0x5380, 0xc001, 0x15, 0, 0, 0, 3),
        Ipv6Addr::new(0x2607, 0x5380, 0xc001, 0xe, 0, 0, 0, 3),
        Ipv6Addr::new(0x2607, 0x5380, 0xc001, 0xd, 0, 0, 0, 3),
        Ipv6Addr::new(0x2607, 0x5380, 0xc001, 0x12, 0, 0, 0, 3),
        Ipv6Addr::new(0x2607, 0x5380, 0xc001, 0x11, 0, 0, 0, 3),
        Ipv6Addr::new(0x2607, 0x5380, 0xc001, 0x1e, 0, 0, 0, 3),
    ]
}

fn default_gateway_vlans() -> Vec<u16> {
    vec![110, 111, 592, 593]
}

fn default_voice_supernets() -> Vec<Ipv4Net> {
    vec![Ipv4Net::new_assert(Ipv4Addr::new(10, 80, 0, 0), 16)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = Policy::default();
        assert_eq!(policy.ftth.rfc6598.to_string(), "100.64.0.0/10");
        assert_eq!(policy.ftth.management_v6.to_string(), "2607:5380::/32");
        assert_eq!(policy.ftth.public_supernets.len(), 6);
        assert_eq!(policy.ftth.gateways_v4.len(), 7);
        assert_eq!(policy.ftth.gateways_v6.len(), 7);
        assert_eq!(policy.ftth.gateway_vlans, vec![110, 111, 592, 593]);
        assert_eq!(policy.voice.supernets.len(), 1);
        assert_eq!(policy.voice.supernets[0].to_string(), "10.80.0.0/16");
    }

    #[test]
    fn test_rfc1918_blocks() {
        let private: Ipv4Net = "192.168.10.0/24".parse().unwrap();
        assert!(RFC1918.iter().any(|block| block.contains(&private)));

        let public: Ipv4Net = "104.219.32.0/24".parse().unwrap();
        assert!(!RFC1918.iter().any(|block| block.contains(&public)));
    }

    #[test]
    fn test_serialize_deserialize() {
        let policy = Policy::default();
        let yaml = serde_yaml::to_string(&policy).unwrap();
        let parsed: Policy = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.ftth.rfc6598, policy.ftth.rfc6598);
        assert_eq!(parsed.ftth.public_supernets, policy.ftth.public_supernets);
        assert_eq!(parsed.ftth.gateway_vlans, policy.ftth.gateway_vlans);
        assert_eq!(parsed.voice.supernets, policy.voice.supernets);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
ftth:
  gateway_vlans: [110, 700]
"#;
        let policy: Policy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.ftth.gateway_vlans, vec![110, 700]);
        // Unlisted tables keep their defaults
        assert_eq!(policy.ftth.public_supernets.len(), 6);
        assert_eq!(policy.voice.supernets.len(), 1);
    }

    #[test]
    fn test_validation_valid_default() {
        let policy = Policy::default();
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_supernets() {
        let policy = Policy {
            ftth: FtthPolicy {
                public_supernets: Vec::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = policy.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("public IPv4 supernet"));
    }

    #[test]
    fn test_validation_rejects_out_of_range_vlan() {
        let policy = Policy {
            ftth: FtthPolicy {
                gateway_vlans: vec![110, 4095],
                ..Default::default()
            },
            ..Default::default()
        };
        let result = policy.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("4095"));
    }

    #[test]
    fn test_validation_rejects_narrow_v6_allocation() {
        let policy = Policy {
            ftth: FtthPolicy {
                management_v6: "2607:5380:1000::/48".parse().unwrap(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = policy.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("/44"));
    }

    #[test]
    fn test_validation_rejects_empty_voice_supernets() {
        let policy = Policy {
            voice: VoicePolicy {
                supernets: Vec::new(),
            },
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Policy::load("/nonexistent/provgen/policy.yaml");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read policy file"));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "voice:").unwrap();
        writeln!(file, "  supernets: [\"10.80.0.0/16\", \"10.81.0.0/16\"]").unwrap();

        let policy = Policy::load(file.path()).unwrap();
        assert_eq!(policy.voice.supernets.len(), 2);
        assert_eq!(policy.ftth.gateway_vlans, vec![110, 111, 592, 593]);
    }

    #[test]
    fn test_load_rejects_invalid_tables() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ftth:").unwrap();
        writeln!(file, "  gateway_vlans: []").unwrap();

        let result = Policy::load(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("gateway VLAN"));
    }
}
