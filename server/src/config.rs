use anyhow::Result;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_LOG_FILTER: &str = "userdesk_server=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    /// Overrides the Leptos `site-addr` when set.
    pub site_addr: Option<SocketAddr>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            site_addr: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_vars(env::var("USERDESK_LOG").ok(), env::var("USERDESK_SITE_ADDR").ok())
    }

    pub fn from_vars(log_filter: Option<String>, site_addr: Option<String>) -> Result<Self> {
        Ok(Config {
            log_filter: log_filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            site_addr: site_addr
                .filter(|a| !a.trim().is_empty())
                .map(|a| a.trim().parse())
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_site_addr_override() {
        let config = Config::from_vars(Some("info".to_string()), Some("0.0.0.0:8080".to_string())).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.site_addr, Some("0.0.0.0:8080".parse().unwrap()));
    }

    #[test]
    fn test_bad_site_addr_is_an_error() {
        assert!(Config::from_vars(None, Some("not-an-address".to_string())).is_err());
    }
}
