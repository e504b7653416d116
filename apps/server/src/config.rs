use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use homepage_market_data::DEFAULT_QUOTES_URL;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CACHE_MAX_AGE: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub debug: bool,
    pub log_format: LogFormat,
    pub static_dir: PathBuf,
    pub template_dir: PathBuf,
    /// Asset bundle manifest; recorded for the front-end build, not read by the server.
    pub bundles_file: PathBuf,
    pub quotes_url: String,
    pub cache_max_age: u32,
    /// Optional key-value store URL. Nothing in the request path uses it.
    pub cache_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };
        let debug = lookup("HP_DEBUG")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let log_format = match lookup("HP_LOG_FORMAT") {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let static_dir = lookup("HP_STATIC_DIR").unwrap_or_else(|| "assets".into());
        let template_dir = lookup("HP_TEMPLATE_DIR").unwrap_or_else(|| "templates".into());
        let bundles_file = lookup("HP_BUNDLES_FILE").unwrap_or_else(|| "bundles.yaml".into());
        let quotes_url = lookup("HP_QUOTES_URL").unwrap_or_else(|| DEFAULT_QUOTES_URL.into());
        let cache_max_age = lookup("HP_CACHE_MAX_AGE")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_CACHE_MAX_AGE);
        let cache_url = lookup("REDISTOGO_URL").filter(|v| !v.trim().is_empty());

        Ok(Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            debug,
            log_format,
            static_dir: static_dir.into(),
            template_dir: template_dir.into(),
            bundles_file: bundles_file.into(),
            quotes_url,
            cache_max_age,
            cache_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:5000");
        assert!(!config.debug);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.static_dir, PathBuf::from("assets"));
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.bundles_file, PathBuf::from("bundles.yaml"));
        assert_eq!(config.quotes_url, DEFAULT_QUOTES_URL);
        assert_eq!(config.cache_max_age, 600);
        assert!(config.cache_url.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("HP_DEBUG", "true"),
            ("HP_LOG_FORMAT", "JSON"),
            ("HP_STATIC_DIR", "/srv/static"),
            ("HP_QUOTES_URL", "http://localhost:9000/table.csv"),
            ("HP_CACHE_MAX_AGE", "60"),
            ("REDISTOGO_URL", "redis://localhost:6379/"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert!(config.debug);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.quotes_url, "http://localhost:9000/table.csv");
        assert_eq!(config.cache_max_age, 60);
        assert_eq!(config.cache_url.as_deref(), Some("redis://localhost:6379/"));
    }

    #[test]
    fn invalid_port_fails() {
        assert!(config_from(&[("PORT", "http")]).is_err());
    }

    #[test]
    fn blank_cache_url_is_absent() {
        let config = config_from(&[("REDISTOGO_URL", " ")]).unwrap();
        assert!(config.cache_url.is_none());
    }
}
