use crate::domain::value_objects::{parse_ports, Port};
use std::path::PathBuf;

pub const DEFAULT_GEOIP_DB_PATH: &str = "data/GeoLite2-Country.mmdb";
pub const DEFAULT_GEOIP_DB_URL: &str =
    "https://raw.githubusercontent.com/Loyalsoldier/geoip/release/GeoLite2-Country.mmdb";
pub const DEFAULT_IP_LIST_URL: &str =
    "https://raw.githubusercontent.com/rdone4425/youxuanyuming/refs/heads/main/ip.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "ip.txt";

#[derive(Debug, Clone)]
pub struct Config {
    // Domain source
    pub target_domain: Option<String>,
    pub target_ports: Vec<Port>,

    // Remote list source
    pub ip_list_url: String,
    pub validate_listed_ips: bool,

    // GeoIP database
    pub geoip_db_path: PathBuf,
    pub geoip_db_url: String,

    pub output_path: PathBuf,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_domain: None,
            target_ports: vec![Port::DEFAULT],
            ip_list_url: DEFAULT_IP_LIST_URL.to_string(),
            validate_listed_ips: false,
            geoip_db_path: PathBuf::from(DEFAULT_GEOIP_DB_PATH),
            geoip_db_url: DEFAULT_GEOIP_DB_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            debug: false,
        }
    }
}

impl Config {
    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let target_domain = lookup("TARGET_DOMAIN")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let target_ports = parse_ports(&lookup("TARGET_PORTS").unwrap_or_else(|| "443".to_string()));

        let ip_list_url = lookup("IP_LIST_URL").unwrap_or_else(|| DEFAULT_IP_LIST_URL.to_string());

        let validate_listed_ips = lookup("VALIDATE_LISTED_IPS")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let geoip_db_path = lookup("GEOIP_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GEOIP_DB_PATH));

        let geoip_db_url =
            lookup("GEOIP_DB_URL").unwrap_or_else(|| DEFAULT_GEOIP_DB_URL.to_string());

        let output_path = lookup("OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let debug = lookup("DEBUG").is_some();

        Self {
            target_domain,
            target_ports,
            ip_list_url,
            validate_listed_ips,
            geoip_db_path,
            geoip_db_url,
            output_path,
            debug,
        }
    }
}

/// Load configuration from the process environment.
///
/// Outside CI (`GITHUB_ACTIONS` unset or empty) a `.env` file in the
/// working directory is loaded first; variables already set take precedence.
pub fn load_config() -> anyhow::Result<Config> {
    if !is_ci(std::env::var("GITHUB_ACTIONS").ok().as_deref()) {
        dotenvy::dotenv().ok();
    }

    Ok(Config::from_lookup(|key| std::env::var(key).ok()))
}

/// Whether a `GITHUB_ACTIONS` value marks a CI run.
fn is_ci(github_actions: Option<&str>) -> bool {
    github_actions.map_or(false, |v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    fn port_strings(cfg: &Config) -> Vec<String> {
        cfg.target_ports.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert!(cfg.target_domain.is_none());
        assert_eq!(cfg.target_ports, vec![Port::DEFAULT]);
        assert_eq!(cfg.geoip_db_path, PathBuf::from("data/GeoLite2-Country.mmdb"));
        assert_eq!(cfg.output_path, PathBuf::from("ip.txt"));
        assert!(!cfg.validate_listed_ips);
        assert!(!cfg.debug);
    }

    #[test]
    fn test_from_lookup_empty_environment() {
        let cfg = config_from(&[]);
        assert!(cfg.target_domain.is_none());
        assert_eq!(port_strings(&cfg), vec!["443"]);
        assert_eq!(cfg.ip_list_url, DEFAULT_IP_LIST_URL);
        assert_eq!(cfg.geoip_db_url, DEFAULT_GEOIP_DB_URL);
    }

    #[test]
    fn test_target_domain_is_trimmed() {
        let cfg = config_from(&[("TARGET_DOMAIN", "  example.com ")]);
        assert_eq!(cfg.target_domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_blank_target_domain_is_absent() {
        let cfg = config_from(&[("TARGET_DOMAIN", "   ")]);
        assert!(cfg.target_domain.is_none());
    }

    #[test]
    fn test_target_ports_filtering() {
        let cfg = config_from(&[("TARGET_PORTS", "443, 8080,, abc")]);
        assert_eq!(port_strings(&cfg), vec!["443", "8080"]);
    }

    #[test]
    fn test_target_ports_empty_uses_default() {
        let cfg = config_from(&[("TARGET_PORTS", "")]);
        assert_eq!(port_strings(&cfg), vec!["443"]);
    }

    #[test]
    fn test_target_ports_all_invalid_uses_default() {
        let cfg = config_from(&[("TARGET_PORTS", "http, https")]);
        assert_eq!(port_strings(&cfg), vec!["443"]);
    }

    #[test]
    fn test_overrides() {
        let cfg = config_from(&[
            ("IP_LIST_URL", "http://127.0.0.1:8000/list.txt"),
            ("GEOIP_DB_PATH", "/tmp/country.mmdb"),
            ("GEOIP_DB_URL", "http://127.0.0.1:8000/country.mmdb"),
            ("OUTPUT_PATH", "/tmp/out.txt"),
        ]);
        assert_eq!(cfg.ip_list_url, "http://127.0.0.1:8000/list.txt");
        assert_eq!(cfg.geoip_db_path, PathBuf::from("/tmp/country.mmdb"));
        assert_eq!(cfg.geoip_db_url, "http://127.0.0.1:8000/country.mmdb");
        assert_eq!(cfg.output_path, PathBuf::from("/tmp/out.txt"));
    }

    #[test]
    fn test_validate_listed_ips_flag() {
        assert!(config_from(&[("VALIDATE_LISTED_IPS", "true")]).validate_listed_ips);
        assert!(config_from(&[("VALIDATE_LISTED_IPS", "1")]).validate_listed_ips);
        assert!(config_from(&[("VALIDATE_LISTED_IPS", "TRUE")]).validate_listed_ips);
        assert!(!config_from(&[("VALIDATE_LISTED_IPS", "no")]).validate_listed_ips);
    }

    #[test]
    fn test_debug_flag() {
        assert!(config_from(&[("DEBUG", "1")]).debug);
        assert!(!config_from(&[]).debug);
    }

    #[test]
    fn test_ci_detection() {
        assert!(is_ci(Some("true")));
        assert!(!is_ci(Some("")));
        assert!(!is_ci(None));
    }

    #[test]
    fn test_config_clone() {
        let cfg = config_from(&[("TARGET_DOMAIN", "example.com")]);
        let cloned = cfg.clone();
        assert_eq!(cfg.target_domain, cloned.target_domain);
        assert_eq!(cfg.target_ports, cloned.target_ports);
    }
}
