//! MaxMind Country Resolver
//!
//! Implements CountryResolver using a MaxMind GeoLite2-Country database.

use crate::domain::errors::EnrichError;
use crate::domain::ports::CountryResolver;
use maxminddb::{MaxMindDBError, Reader};
use serde::Deserialize;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// MaxMind country resolver.
///
/// Owns the open database for the duration of a run. The handle is
/// released when the resolver is dropped, on every exit path.
pub struct MaxMindCountryResolver {
    reader: Reader<Vec<u8>>,
    path: PathBuf,
}

impl MaxMindCountryResolver {
    /// Open a GeoIP database from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EnrichError> {
        let path = path.as_ref();
        let reader = Reader::open_readfile(path).map_err(|e| EnrichError::DatabaseOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::info!("GeoIP DB loaded from {}", path.display());
        Ok(Self {
            reader,
            path: path.to_path_buf(),
        })
    }
}

impl CountryResolver for MaxMindCountryResolver {
    fn lookup(&self, ip: IpAddr) -> Option<String> {
        #[derive(Debug, Deserialize)]
        struct Country {
            iso_code: Option<String>,
        }

        #[derive(Debug, Deserialize)]
        struct CountryResp {
            country: Option<Country>,
        }

        match self.reader.lookup::<CountryResp>(ip) {
            Ok(resp) => resp.country?.iso_code,
            Err(MaxMindDBError::AddressNotFoundError(_)) => None,
            Err(e) => {
                tracing::warn!("GeoIP lookup for {} failed: {}", ip, e);
                None
            }
        }
    }
}

impl Drop for MaxMindCountryResolver {
    fn drop(&mut self) {
        tracing::debug!("GeoIP DB closed ({})", self.path.display());
    }
}
