//! Country Resolver Port
//!
//! Defines the interface for mapping IP addresses to country codes.

use std::net::IpAddr;

/// Resolver for IP address to ISO country code.
///
/// This is an outbound port that abstracts the GeoIP database.
/// Implementations must not fail: an address the database cannot map,
/// or any lookup fault, yields `None`.
pub trait CountryResolver: Send + Sync {
    /// Look up the ISO 3166-1 alpha-2 code for an address.
    fn lookup(&self, ip: IpAddr) -> Option<String>;
}
