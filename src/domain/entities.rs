//! Domain Entities - Core business objects
//!
//! A run produces result lines from two sources and summarises what it
//! wrote. None of these outlive a single run.

use crate::domain::value_objects::{CountryCode, Port};

/// Where a result line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSource {
    /// Resolved from the configured domain
    Domain,
    /// Read from the remote IP list
    List,
}

impl LineSource {
    /// Tag used in progress logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::List => "list",
        }
    }
}

/// One annotated address in the output file.
///
/// Rendered as `address:port#country` for domain-resolved addresses and
/// `address#country` for list entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    /// Address as written: dotted quad, bracketed IPv6, or a raw list token
    pub address: String,
    /// Present only for domain-resolved lines
    pub port: Option<Port>,
    /// Country code or the `XX` sentinel
    pub country: CountryCode,
}

impl ResultLine {
    pub fn with_port(address: impl Into<String>, port: Port, country: CountryCode) -> Self {
        Self {
            address: address.into(),
            port: Some(port),
            country,
        }
    }

    pub fn without_port(address: impl Into<String>, country: CountryCode) -> Self {
        Self {
            address: address.into(),
            port: None,
            country,
        }
    }
}

impl std::fmt::Display for ResultLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}#{}", self.address, port, self.country),
            None => write!(f, "{}#{}", self.address, self.country),
        }
    }
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines produced from the domain source
    pub domain_lines: usize,
    /// Lines produced from the remote list
    pub list_lines: usize,
    /// Whether the output file was (over)written
    pub written: bool,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.domain_lines + self.list_lines
    }
}
