mod enrichment_service;
mod geo_database;

pub use enrichment_service::EnrichmentService;
pub use geo_database::ensure_database;
