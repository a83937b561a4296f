//! Kea DHCPv4 configuration fragment.

use super::VoiceInputs;
use crate::subnet;

/// Resolvers handed out to voice endpoints, in Kea csv-format (", " separated).
const DNS_V4: &str = "192.35.202.143, 162.255.12.157";

/// Subnet declaration for one voice VLAN.
///
/// Indented with the tab-plus-space mix of the production `subnet4` array
/// so the fragment pastes into kea-dhcp4.conf without re-indenting. The
/// VLAN id doubles as the Kea subnet id, and the trailing comma expects
/// more entries after it.
pub fn voice_subnet_pool(inputs: &VoiceInputs) -> String {
    let gateway = subnet::first_host(&inputs.subnet);
    let pool_start = subnet::second_host(&inputs.subnet);
    let pool_end = subnet::last_host(&inputs.subnet);

    let mut config = String::new();

    config.push_str("Kea configuration:\n\n");
    config.push_str("\t\t  {\n");
    config.push_str(&format!("\t\t        \"id\": {},\n", inputs.vlan));
    config.push_str(&format!("\t\t        \"subnet\": \"{}\",\n", inputs.subnet));
    config.push_str(&format!(
        "\t\t        \"pools\": [ {{ \"pool\": \"{} - {}\" }} ],\n",
        pool_start, pool_end
    ));
    config.push_str("\t\t        \"option-data\": [\n");
    config.push_str("\t\t                {\n");
    config.push_str("\t\t\t                \"name\": \"domain-name-servers\",\n");
    config.push_str("\t\t\t                \"space\": \"dhcp4\",\n");
    config.push_str("\t\t\t                \"csv-format\": true,\n");
    config.push_str(&format!("\t\t\t                \"data\": \"{}\"\n", DNS_V4));
    config.push_str("\t\t                },\n");
    config.push_str("\t\t                {\n");
    config.push_str("\t\t\t                \"name\": \"routers\",\n");
    config.push_str("\t\t\t                \"code\": 3,\n");
    config.push_str("\t\t\t                \"space\": \"dhcp4\",\n");
    config.push_str("\t\t\t                \"csv-format\": true,\n");
    config.push_str(&format!("\t\t\t                \"data\": \"{}\"\n", gateway));
    config.push_str("\t\t                }\n");
    config.push_str("\t\t        ]\n");
    config.push_str("\t\t  },\n");

    config
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;

    #[test]
    fn test_voice_subnet_pool() {
        let expected = concat!(
            "Kea configuration:\n",
            "\n",
            "\t\t  {\n",
            "\t\t        \"id\": 200,\n",
            "\t\t        \"subnet\": \"10.80.5.0/28\",\n",
            "\t\t        \"pools\": [ { \"pool\": \"10.80.5.2 - 10.80.5.14\" } ],\n",
            "\t\t        \"option-data\": [\n",
            "\t\t                {\n",
            "\t\t\t                \"name\": \"domain-name-servers\",\n",
            "\t\t\t                \"space\": \"dhcp4\",\n",
            "\t\t\t                \"csv-format\": true,\n",
            "\t\t\t                \"data\": \"192.35.202.143, 162.255.12.157\"\n",
            "\t\t                },\n",
            "\t\t                {\n",
            "\t\t\t                \"name\": \"routers\",\n",
            "\t\t\t                \"code\": 3,\n",
            "\t\t\t                \"space\": \"dhcp4\",\n",
            "\t\t\t                \"csv-format\": true,\n",
            "\t\t\t                \"data\": \"10.80.5.1\"\n",
            "\t\t                }\n",
            "\t\t        ]\n",
            "\t\t  },\n",
        );
        assert_eq!(voice_subnet_pool(&fixtures::lakeview()), expected);
    }

    #[test]
    fn test_pool_and_router_track_subnet() {
        let mut inputs = fixtures::lakeview();
        inputs.vlan = 210;
        inputs.subnet = "10.80.16.0/27".parse().unwrap();
        let config = voice_subnet_pool(&inputs);

        assert!(config.contains("\"id\": 210,\n"));
        assert!(config.contains("\"subnet\": \"10.80.16.0/27\",\n"));
        assert!(config.contains("\"pool\": \"10.80.16.2 - 10.80.16.30\""));
        assert!(config.contains("\"data\": \"10.80.16.1\"\n"));
    }

    #[test]
    fn test_fragment_ends_ready_for_next_entry() {
        let config = voice_subnet_pool(&fixtures::lakeview());
        assert!(config.ends_with("\t\t  },\n"));
    }
}
