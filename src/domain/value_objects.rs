//! Value Objects - Immutable domain primitives
//!
//! Country codes, ports and the address helpers shared by both
//! address sources.

use std::net::IpAddr;

/// Country code attached to every result line.
///
/// Either the ISO 3166-1 alpha-2 code reported by the GeoIP database,
/// or the `XX` sentinel when the address could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Sentinel used when lookup fails or the address is unmapped.
    pub const UNKNOWN: &'static str = "XX";

    /// Build a country code from a database value.
    ///
    /// Empty values collapse to the sentinel.
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            Self::unknown()
        } else {
            Self(trimmed.to_uppercase())
        }
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::unknown()
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// TCP port paired with domain-resolved addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port(u16);

impl Port {
    pub const DEFAULT: Port = Port(443);

    /// Parse a single port token.
    ///
    /// The token must consist of ASCII digits only and name a port
    /// in 1-65535.
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match token.parse::<u16>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(Self(n)),
        }
    }
}

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a comma-separated port list.
///
/// Tokens are trimmed; blank or non-numeric tokens are dropped. Order is
/// preserved. An empty result falls back to the default port.
pub fn parse_ports(raw: &str) -> Vec<Port> {
    let ports: Vec<Port> = raw
        .split(',')
        .map(str::trim)
        .filter_map(Port::parse)
        .collect();

    if ports.is_empty() {
        vec![Port::DEFAULT]
    } else {
        ports
    }
}

/// Check whether a string is a dotted-quad IPv4 address.
///
/// One pair of surrounding brackets is stripped first. Exactly four
/// components are required, each an integer in 0-255 (a sign is allowed,
/// so `-0` counts as 0).
pub fn is_valid_ipv4(address: &str) -> bool {
    let address = strip_brackets(address);
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        return false;
    }
    parts
        .iter()
        .all(|part| matches!(part.parse::<i64>(), Ok(n) if (0..=255).contains(&n)))
}

/// Remove one matched pair of enclosing brackets from an address literal.
///
/// Unbalanced or repeated brackets are left in place.
pub fn strip_brackets(address: &str) -> &str {
    address
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(address)
}

/// Render an address the way it appears in result lines.
///
/// IPv6 literals are wrapped in brackets so the `:port` suffix stays
/// unambiguous.
pub fn bracket_address(ip: IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => v4.to_string(),
        IpAddr::V6(v6) => format!("[{}]", v6),
    }
}
