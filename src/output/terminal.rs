//! Terminal output utilities.
//!
//! Plain tab-separated lines, no colour: stdout is meant to be piped.

use crate::models::{u32_to_address, SubnetSummary};

/// Format a label and value as a single `Label:\tvalue` line.
pub fn format_field<T: ToString>(label: &str, value: T) -> String {
    format!("{label}:\t{}\n", value.to_string())
}

/// Render a summary in the fixed order used on stdout.
pub fn render_text(summary: &SubnetSummary) -> String {
    let mut out = String::new();
    out.push_str(&format_field("Address", u32_to_address(summary.address)));
    out.push_str(&format_field("Netmask", u32_to_address(summary.netmask)));
    out.push_str("=>\n");
    out.push_str(&format_field("Network", u32_to_address(summary.network)));
    out.push_str(&format_field("Broadcast", u32_to_address(summary.broadcast)));
    out.push_str(&format_field("HostMin", u32_to_address(summary.host_min)));
    out.push_str(&format_field("HostMax", u32_to_address(summary.host_max)));
    out.push_str(&format_field("Hosts/Net", summary.hosts_per_net));
    out
}
