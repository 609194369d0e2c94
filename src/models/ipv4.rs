//! IPv4 address and CIDR notation utilities.
//!
//! Addresses and masks are plain `u32` values, most significant octet first.
//! [`Ipv4`] pairs an address with a prefix length and derives the subnet values.

use crate::error::CalcError;
use itertools::Itertools;
use serde::Serialize;
use std::num::{IntErrorKind, ParseIntError};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a prefix length such as `"24"`.
///
/// Accepts an optional sign like any integer parse, so `"+24"` is 24 and
/// `"-1"` is rejected for being out of range rather than for being text.
pub fn parse_mask(text: &str) -> Result<u8, CalcError> {
    let len: i64 = text.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CalcError::mask(text, format!("prefix length is outside 0-{MAX_LENGTH}"))
        }
        _ => CalcError::mask(text, "not a decimal number"),
    })?;
    if !(0..=i64::from(MAX_LENGTH)).contains(&len) {
        log::debug!("rejecting prefix length {len}");
        return Err(CalcError::mask(
            text,
            format!("prefix length {len} is outside 0-{MAX_LENGTH}"),
        ));
    }
    Ok(len as u8)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::mask(
            &len.to_string(),
            format!("prefix length {len} is outside 0-{MAX_LENGTH}"),
        ))
    } else {
        Ok(prefix_mask(len))
    }
}

// Caller guarantees len <= 32. A shift by 32 overflows, so /0 is its own case.
fn prefix_mask(len: u8) -> u32 {
    if len == 0 {
        0
    } else {
        u32::MAX << (MAX_LENGTH - len)
    }
}

/// Check dotted-decimal text and return its four octets.
pub fn validate_address(text: &str) -> Result<[u8; 4], CalcError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(CalcError::address(
            text,
            format!("expected 4 octets, got {}", parts.len()),
        ));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = parse_octet(text, part)?;
    }
    Ok(octets)
}

fn parse_octet(text: &str, part: &str) -> Result<u8, CalcError> {
    // digits only: u8::from_str would also take a leading '+'
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::address(
            text,
            format!("octet {part:?} is not a decimal number"),
        ));
    }
    part.parse::<u8>()
        .map_err(|_| CalcError::address(text, format!("octet {part} is outside 0-255")))
}

/// Convert dotted-decimal text (e.g. `"192.168.0.1"`) to a u32.
pub fn address_to_u32(text: &str) -> Result<u32, CalcError> {
    let octets = validate_address(text)?;
    let addr = u32::from_be_bytes(octets);
    log::trace!("address_to_u32({text}) = {addr:#010x}");
    Ok(addr)
}

/// Render a u32 as dotted-decimal text.
pub fn u32_to_address(addr: u32) -> String {
    addr.to_be_bytes().iter().join(".")
}

/// Network address: all host bits cleared.
pub fn network_addr(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Broadcast address: all host bits set.
pub fn broadcast_addr(addr: u32, mask: u32) -> u32 {
    addr | !mask
}

/// First usable host. Wraps for `255.255.255.255/32`.
pub fn host_min(network: u32) -> u32 {
    network.wrapping_add(1)
}

/// Last usable host. Wraps for `0.0.0.0/32`.
pub fn host_max(broadcast: u32) -> u32 {
    broadcast.wrapping_sub(1)
}

/// Usable hosts, excluding network and broadcast addresses.
///
/// /31 gives 0 and /32 wraps to `u32::MAX`; neither is special-cased.
pub fn host_count(mask: u32) -> u32 {
    (!mask).wrapping_sub(1)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Ipv4 {
    addr: u32,
    mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The address is checked before the mask, so input with both wrong
    /// reports the address. Whitespace is not trimmed anywhere.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CalcError> {
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(CalcError::MalformedInput(format!(
                "expected <address>/<prefix>, got {addr_cidr:?}"
            )));
        }
        let addr = address_to_u32(parts[0])?;
        let mask = parse_mask(parts[1])?;
        log::debug!("parsed {} as {addr:#010x}/{mask}", addr_cidr);
        Ok(Ipv4 { addr, mask })
    }

    pub fn addr(&self) -> u32 {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix_len(&self) -> u8 {
        self.mask
    }

    pub fn netmask(&self) -> u32 {
        prefix_mask(self.mask)
    }

    pub fn network(&self) -> u32 {
        network_addr(self.addr, self.netmask())
    }

    pub fn broadcast(&self) -> u32 {
        broadcast_addr(self.addr, self.netmask())
    }

    pub fn host_min(&self) -> u32 {
        host_min(self.network())
    }

    pub fn host_max(&self) -> u32 {
        host_max(self.broadcast())
    }

    pub fn host_count(&self) -> u32 {
        host_count(self.netmask())
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", u32_to_address(self.addr), self.mask)
    }
}
