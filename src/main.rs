//! ipgeo-enricher - GeoIP-annotated address list builder
//!
//! This is the composition root that wires together all the components.

use ipgeo_enricher::adapters::outbound::{
    FileResultWriter, MaxMindCountryResolver, ReqwestHttpFetcher, SystemHostResolver,
};
use ipgeo_enricher::{ensure_database, load_config, EnrichmentService};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment (and .env outside CI)
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    tracing::info!(
        "starting ipgeo-enricher domain={} ports={} output={}",
        cfg.target_domain.as_deref().unwrap_or("-"),
        cfg.target_ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(","),
        cfg.output_path.display()
    );

    // ===== COMPOSITION ROOT =====

    let fetcher = Arc::new(ReqwestHttpFetcher::new());

    // 1. GeoIP database: download if absent, then open. Both are fatal.
    if let Err(e) = ensure_database(fetcher.as_ref(), &cfg.geoip_db_path, &cfg.geoip_db_url).await {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    let country_resolver = match MaxMindCountryResolver::from_file(&cfg.geoip_db_path) {
        Ok(r) => Arc::new(r),
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    // 2. Application service; owns the database handle until it is dropped
    let service = EnrichmentService::new(
        country_resolver,
        Arc::new(SystemHostResolver::new()),
        fetcher,
        Arc::new(FileResultWriter::new(cfg.output_path.clone())),
        &cfg,
    );

    // 3. Run both sources, then release the database
    let summary = service.run().await;
    drop(service);

    if summary.written {
        tracing::info!(
            "done: {} lines ({} domain, {} list) saved to {}",
            summary.total(),
            summary.domain_lines,
            summary.list_lines,
            cfg.output_path.display()
        );
    } else {
        tracing::info!("done: nothing written to {}", cfg.output_path.display());
    }

    Ok(())
}
