mod country_resolver;
mod host_resolver;
mod http_fetcher;
mod result_writer;

pub use country_resolver::CountryResolver;
pub use host_resolver::HostResolver;
pub use http_fetcher::HttpFetcher;
pub use result_writer::ResultWriter;
