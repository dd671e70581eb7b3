use std::env;
use std::net::SocketAddr;

use groupie_upstream::{Resource, DEFAULT_BASE_URL, DEFAULT_GEOCODE_URL};

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    /// Path of the relations resource below `api_url`.
    pub relations_path: String,
    pub geocode_url: String,
    pub geocode_api_key: Option<String>,
    pub upstream_timeout_secs: u64,
    pub bind_addr: SocketAddr,
    /// Base URL clients use to reach this server; used for back links.
    pub public_url: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("UPSTREAM_TIMEOUT_SECS={raw:?} is not a number, using {DEFAULT_TIMEOUT_SECS}");
                DEFAULT_TIMEOUT_SECS
            }),
        };

        let default_bind: SocketAddr = ([0, 0, 0, 0], 8080).into();
        let bind_addr = match get("GROUPIE_BIND") {
            None => default_bind,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("GROUPIE_BIND={raw:?} is not a socket address, using {DEFAULT_BIND}");
                default_bind
            }),
        };

        Self {
            api_url: get("GROUPIE_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            relations_path: get("GROUPIE_RELATIONS_PATH")
                .unwrap_or_else(|| Resource::Relations.path().to_string()),
            geocode_url: get("GEOCODE_URL").unwrap_or_else(|| DEFAULT_GEOCODE_URL.to_string()),
            geocode_api_key: get("GEOCODE_API_KEY"),
            upstream_timeout_secs,
            bind_addr,
            public_url: get("GROUPIE_PUBLIC_URL")
                .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            cors_origins: get("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
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

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.relations_path, "/relations");
        assert_eq!(config.geocode_url, DEFAULT_GEOCODE_URL);
        assert!(config.geocode_api_key.is_none());
        assert_eq!(config.upstream_timeout_secs, 10);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
        assert_eq!(config.public_url, DEFAULT_PUBLIC_URL);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GROUPIE_API_URL", "http://stub:9000/api"),
            ("GROUPIE_RELATIONS_PATH", "/relation"),
            ("GEOCODE_URL", "http://geo:9001/json"),
            ("GEOCODE_API_KEY", "abc"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("GROUPIE_BIND", "127.0.0.1:3000"),
            ("GROUPIE_PUBLIC_URL", "https://tours.example.com/"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]);
        assert_eq!(config.api_url, "http://stub:9000/api");
        assert_eq!(config.relations_path, "/relation");
        assert_eq!(config.geocode_url, "http://geo:9001/json");
        assert_eq!(config.geocode_api_key.as_deref(), Some("abc"));
        assert_eq!(config.upstream_timeout_secs, 3);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.public_url, "https://tours.example.com");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = config_from(&[
            ("UPSTREAM_TIMEOUT_SECS", "soon"),
            ("GROUPIE_BIND", "not-an-addr"),
            ("GEOCODE_API_KEY", "   "),
        ]);
        assert_eq!(config.upstream_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
        assert!(config.geocode_api_key.is_none());
    }
}
