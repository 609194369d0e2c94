//! Derived subnet values for one address/prefix pair.

use super::ipv4::{u32_to_address, Ipv4};
use serde::{Serialize, Serializer};

/// Everything printed for a single input, computed up front so nothing is
/// written until the whole summary exists.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSummary {
    pub cidr: Ipv4,
    #[serde(serialize_with = "dotted")]
    pub address: u32,
    #[serde(serialize_with = "dotted")]
    pub netmask: u32,
    #[serde(serialize_with = "dotted")]
    pub network: u32,
    #[serde(serialize_with = "dotted")]
    pub broadcast: u32,
    #[serde(serialize_with = "dotted")]
    pub host_min: u32,
    #[serde(serialize_with = "dotted")]
    pub host_max: u32,
    pub hosts_per_net: u32,
}

fn dotted<S>(addr: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&u32_to_address(*addr))
}

impl From<Ipv4> for SubnetSummary {
    fn from(cidr: Ipv4) -> Self {
        let summary = SubnetSummary {
            cidr,
            address: cidr.addr(),
            netmask: cidr.netmask(),
            network: cidr.network(),
            broadcast: cidr.broadcast(),
            host_min: cidr.host_min(),
            host_max: cidr.host_max(),
            hosts_per_net: cidr.host_count(),
        };
        log::debug!("summary for {cidr}: {summary:?}");
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_class_c() {
        let s = SubnetSummary::from(Ipv4::new("192.168.1.10/24").unwrap());
        assert_eq!(u32_to_address(s.address), "192.168.1.10");
        assert_eq!(u32_to_address(s.netmask), "255.255.255.0");
        assert_eq!(u32_to_address(s.network), "192.168.1.0");
        assert_eq!(u32_to_address(s.broadcast), "192.168.1.255");
        assert_eq!(u32_to_address(s.host_min), "192.168.1.1");
        assert_eq!(u32_to_address(s.host_max), "192.168.1.254");
        assert_eq!(s.hosts_per_net, 254);
    }

    #[test]
    fn test_summary_slash_32_is_degenerate() {
        let s = SubnetSummary::from(Ipv4::new("192.168.1.1/32").unwrap());
        assert_eq!(s.network, s.broadcast);
        assert_eq!(u32_to_address(s.network), "192.168.1.1");
        assert_eq!(u32_to_address(s.host_min), "192.168.1.2");
        assert_eq!(u32_to_address(s.host_max), "192.168.1.0");
        assert!(s.host_max < s.host_min);
        assert_eq!(s.hosts_per_net, 4294967295);
    }

    #[test]
    fn test_summary_slash_31_is_degenerate() {
        let s = SubnetSummary::from(Ipv4::new("10.0.0.0/31").unwrap());
        assert_eq!(u32_to_address(s.host_min), "10.0.0.1");
        assert_eq!(u32_to_address(s.host_max), "10.0.0.0");
        assert_eq!(s.hosts_per_net, 0);
    }

    #[test]
    fn test_summary_serialize() {
        let s = SubnetSummary::from(Ipv4::new("10.0.0.0/8").unwrap());
        let json: serde_json::Value = serde_json::to_value(&s).unwrap();
        assert_eq!(json["cidr"], "10.0.0.0/8");
        assert_eq!(json["netmask"], "255.0.0.0");
        assert_eq!(json["broadcast"], "10.255.255.255");
        assert_eq!(json["host_max"], "10.255.255.254");
        assert_eq!(json["hosts_per_net"], 16777214);
    }
}
