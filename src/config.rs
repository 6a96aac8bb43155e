// Server configuration loaded from the environment (and `.env` when present)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Port the frontend expects the odds mock server on
pub const DEFAULT_PORT: u16 = 3333;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default location of the generated odds fixture
pub const DEFAULT_FIXTURE_PATH: &str = "data/db.json";

// ============================================================================
// SERVER CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    pub host: IpAddr,

    /// Port to bind the HTTP listener to
    pub port: u16,

    /// Fixture served by the mock server; generated if missing
    pub fixture_path: PathBuf,

    /// Seed for the odds generator (random when unset)
    pub seed: Option<u64>,
}

impl ServerConfig {
    /// Read `ODDS_HOST`, `ODDS_PORT`, `ODDS_FIXTURE` and `ODDS_SEED`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("ODDS_HOST") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                var: "ODDS_HOST",
                reason: format!("{}", e),
            })?,
            None => DEFAULT_HOST.parse().map_err(|e| ConfigError::InvalidValue {
                var: "ODDS_HOST",
                reason: format!("{}", e),
            })?,
        };

        let port = match lookup("ODDS_PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                var: "ODDS_PORT",
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        let fixture_path = lookup("ODDS_FIXTURE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_PATH));

        let seed = match lookup("ODDS_SEED") {
            Some(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                    var: "ODDS_SEED",
                    reason: format!("{}", e),
                })?)
            }
            _ => None,
        };

        Ok(Self {
            host,
            port,
            fixture_path,
            seed,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.fixture_path, PathBuf::from(DEFAULT_FIXTURE_PATH));
        assert_eq!(config.seed, None);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3333");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ODDS_HOST", "127.0.0.1"),
            ("ODDS_PORT", "4000"),
            ("ODDS_FIXTURE", "/tmp/odds.json"),
            ("ODDS_SEED", "42"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
        assert_eq!(config.fixture_path, PathBuf::from("/tmp/odds.json"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("ODDS_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(err.to_string().contains("ODDS_PORT"));
    }

    #[test]
    fn test_blank_seed_means_random() {
        let config = ServerConfig::from_lookup(lookup_from(&[("ODDS_SEED", "  ")])).unwrap();
        assert_eq!(config.seed, None);
    }
}
