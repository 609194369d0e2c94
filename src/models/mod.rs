//! Domain models for subnet calculation.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the bitwise helpers
//! - [`SubnetSummary`] - all derived values for one input

mod ipv4;
mod summary;

// Re-export public types
pub use ipv4::{
    address_to_u32, broadcast_addr, get_cidr_mask, host_count, host_max, host_min, network_addr,
    parse_mask, u32_to_address, validate_address, Ipv4, MAX_LENGTH,
};
pub use summary::SubnetSummary;
