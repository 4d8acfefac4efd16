//! ipgeo-enricher Library
//!
//! Resolves addresses from a domain and a remote list, annotates each with
//! a GeoIP country code and writes the combined list to a file.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use application::{ensure_database, EnrichmentService};
pub use config::{load_config, Config};
pub use domain::entities::{LineSource, ResultLine, RunSummary};
pub use domain::errors::EnrichError;
pub use domain::ports::{CountryResolver, HostResolver, HttpFetcher, ResultWriter};
pub use domain::value_objects::{is_valid_ipv4, parse_ports, CountryCode, Port};
