//! JSON output for subnet summaries.

use crate::error::CalcError;
use crate::models::SubnetSummary;

/// Render a summary as pretty-printed JSON with a trailing newline.
pub fn render_json(summary: &SubnetSummary) -> Result<String, CalcError> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4;

    #[test]
    fn test_render_json() {
        let summary = SubnetSummary::from(Ipv4::new("192.168.1.10/24").unwrap());
        let json = render_json(&summary).unwrap();
        assert!(json.ends_with("}\n"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cidr"], "192.168.1.10/24");
        assert_eq!(value["address"], "192.168.1.10");
        assert_eq!(value["network"], "192.168.1.0");
        assert_eq!(value["host_min"], "192.168.1.1");
        assert_eq!(value["hosts_per_net"], 254);
    }
}
