mod file_result_writer;
mod maxmind_country_resolver;
mod reqwest_http_fetcher;
mod system_host_resolver;

pub use file_result_writer::FileResultWriter;
pub use maxmind_country_resolver::MaxMindCountryResolver;
pub use reqwest_http_fetcher::ReqwestHttpFetcher;
pub use system_host_resolver::SystemHostResolver;
