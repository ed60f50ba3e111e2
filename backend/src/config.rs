//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::path::PathBuf;

/// Default base URL of the lyrics.ovh API
pub const DEFAULT_LYRICS_API_URL: &str = "https://api.lyrics.ovh/v1";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Local song store configuration
    pub storage: StorageConfig,
    /// Remote lyrics API configuration
    pub lyrics_api: LyricsApiConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding one `.txt` file per song
    pub songs_dir: PathBuf,
}

/// Lyrics API configuration
#[derive(Debug, Clone)]
pub struct LyricsApiConfig {
    /// Base URL; artist and title are appended as path segments
    pub base_url: String,
    /// Request timeout (in seconds)
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 5000,
                host: "0.0.0.0".to_string(),
            },
            storage: StorageConfig {
                songs_dir: PathBuf::from("songs"),
            },
            lyrics_api: LyricsApiConfig {
                base_url: DEFAULT_LYRICS_API_URL.to_string(),
                timeout_secs: 10,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                port: lookup("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                host: lookup("HOST").unwrap_or(defaults.server.host),
            },
            storage: StorageConfig {
                songs_dir: lookup("SONGS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.songs_dir),
            },
            lyrics_api: LyricsApiConfig {
                base_url: lookup("LYRICS_API_URL").unwrap_or(defaults.lyrics_api.base_url),
                timeout_secs: lookup("LYRICS_API_TIMEOUT_SECS")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.lyrics_api.timeout_secs),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.server_addr(), "0.0.0.0:5000");
        assert_eq!(config.storage.songs_dir, PathBuf::from("songs"));
        assert_eq!(config.lyrics_api.base_url, DEFAULT_LYRICS_API_URL);
        assert_eq!(config.lyrics_api.timeout_secs, 10);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("SONGS_DIR", "/var/lib/lyrics"),
            ("LYRICS_API_URL", "http://localhost:9000/v1"),
            ("LYRICS_API_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.server_addr(), "127.0.0.1:8081");
        assert_eq!(config.storage.songs_dir, PathBuf::from("/var/lib/lyrics"));
        assert_eq!(config.lyrics_api.base_url, "http://localhost:9000/v1");
        assert_eq!(config.lyrics_api.timeout_secs, 3);
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("LYRICS_API_TIMEOUT_SECS", "-1"),
        ]));
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.lyrics_api.timeout_secs, 10);
    }
}
