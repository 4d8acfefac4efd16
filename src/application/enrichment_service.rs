//! Enrichment Service - Main application use case
//!
//! Collects addresses from the configured domain and the remote list,
//! annotates each with a country code and persists the combined lines.

use crate::config::Config;
use crate::domain::entities::{LineSource, ResultLine, RunSummary};
use crate::domain::ports::{CountryResolver, HostResolver, HttpFetcher, ResultWriter};
use crate::domain::value_objects::{bracket_address, is_valid_ipv4, strip_brackets, CountryCode, Port};
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::sync::Arc;

/// Enrichment service - the whole pipeline of a run.
///
/// Steps run strictly in sequence:
/// 1. Resolve the target domain (if configured) and expand by port
/// 2. Fetch the remote IP list
/// 3. Overwrite the output with both, domain lines first
///
/// Source failures are logged and yield no lines; they never abort the run.
pub struct EnrichmentService {
    country_resolver: Arc<dyn CountryResolver>,
    host_resolver: Arc<dyn HostResolver>,
    fetcher: Arc<dyn HttpFetcher>,
    writer: Arc<dyn ResultWriter>,
    target_domain: Option<String>,
    target_ports: Vec<Port>,
    ip_list_url: String,
    validate_listed_ips: bool,
}

impl EnrichmentService {
    /// Create a new enrichment service.
    pub fn new(
        country_resolver: Arc<dyn CountryResolver>,
        host_resolver: Arc<dyn HostResolver>,
        fetcher: Arc<dyn HttpFetcher>,
        writer: Arc<dyn ResultWriter>,
        cfg: &Config,
    ) -> Self {
        let target_ports = if cfg.target_ports.is_empty() {
            vec![Port::DEFAULT]
        } else {
            cfg.target_ports.clone()
        };

        Self {
            country_resolver,
            host_resolver,
            fetcher,
            writer,
            target_domain: cfg.target_domain.clone(),
            target_ports,
            ip_list_url: cfg.ip_list_url.clone(),
            validate_listed_ips: cfg.validate_listed_ips,
        }
    }

    /// Look up the country code for an address string.
    ///
    /// Only one matched pair of enclosing brackets is removed; anything
    /// else that does not parse as an address is malformed. Malformed
    /// input, unmapped addresses and lookup faults all yield `XX`; this
    /// never fails.
    pub fn country_code(&self, address: &str) -> CountryCode {
        match strip_brackets(address).parse::<IpAddr>() {
            Ok(ip) => self.country_for(ip),
            Err(_) => {
                tracing::debug!("not an IP address: {:?}", address);
                CountryCode::unknown()
            }
        }
    }

    fn country_for(&self, ip: IpAddr) -> CountryCode {
        self.country_resolver
            .lookup(ip)
            .map(CountryCode::new)
            .unwrap_or_default()
    }

    /// Resolve `domain` and emit one line per address and port.
    ///
    /// Addresses are deduplicated and sorted by their rendered form
    /// (IPv6 bracketed) before port expansion. Resolution failures are
    /// logged and produce an empty result.
    pub async fn resolve_domain(&self, domain: &str, ports: &[Port]) -> Vec<ResultLine> {
        tracing::info!("[{}] resolving {}", LineSource::Domain.tag(), domain);

        let ips = match self.host_resolver.resolve(domain).await {
            Ok(ips) => ips,
            Err(e) => {
                tracing::error!("[{}] {}", LineSource::Domain.tag(), e);
                return Vec::new();
            }
        };

        // Keyed by rendered form, which is also the sort order.
        let addresses: BTreeMap<String, IpAddr> =
            ips.into_iter().map(|ip| (bracket_address(ip), ip)).collect();
        if addresses.is_empty() {
            tracing::warn!("[{}] {} resolved to no addresses", LineSource::Domain.tag(), domain);
        }

        let mut results = Vec::with_capacity(addresses.len() * ports.len());
        for (address, ip) in &addresses {
            let country = self.country_for(*ip);
            for port in ports {
                let line = ResultLine::with_port(address.clone(), *port, country.clone());
                tracing::info!("[{}] {}", LineSource::Domain.tag(), line);
                results.push(line);
            }
        }

        results
    }

    /// Fetch the plaintext list at `url` and annotate every token.
    ///
    /// Tokens are split on whitespace and kept in document order, without
    /// deduplication. They are looked up unvalidated unless the IPv4
    /// pre-filter is enabled. Transport failures yield an empty result.
    pub async fn fetch_listed_ips(&self, url: &str) -> Vec<ResultLine> {
        tracing::info!("[{}] fetching IP list from {}", LineSource::List.tag(), url);

        let body = match self.fetcher.fetch_text(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("[{}] {}", LineSource::List.tag(), e);
                return Vec::new();
            }
        };

        let mut results = Vec::new();
        for token in body.split_whitespace() {
            if self.validate_listed_ips && !is_valid_ipv4(token) {
                tracing::warn!("[{}] skipping invalid address {:?}", LineSource::List.tag(), token);
                continue;
            }

            let line = ResultLine::without_port(token, self.country_code(token));
            tracing::info!("[{}] {}", LineSource::List.tag(), line);
            results.push(line);
        }

        results
    }

    /// Run both sources and persist the combined lines.
    ///
    /// The output is written only when at least one line was produced;
    /// otherwise any existing output is left untouched. A write failure
    /// is logged and reported through `RunSummary::written`.
    pub async fn run(&self) -> RunSummary {
        let mut all_results = Vec::new();
        let mut summary = RunSummary::default();

        match &self.target_domain {
            Some(domain) => {
                let domain_results = self.resolve_domain(domain, &self.target_ports).await;
                summary.domain_lines = domain_results.len();
                all_results.extend(domain_results);
            }
            None => {
                tracing::info!("TARGET_DOMAIN not set, only the remote IP list will be used");
            }
        }

        let list_results = self.fetch_listed_ips(&self.ip_list_url).await;
        summary.list_lines = list_results.len();
        all_results.extend(list_results);

        if all_results.is_empty() {
            tracing::warn!("no results collected, output left untouched");
            return summary;
        }

        match self.writer.write_all(&all_results).await {
            Ok(()) => summary.written = true,
            Err(e) => tracing::error!("{}", e),
        }

        summary
    }
}
