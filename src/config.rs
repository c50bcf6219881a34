//! Runtime configuration from environment variables
//!
//! | Variable                       | Default           |
//! |--------------------------------|-------------------|
//! | `GARDEN_CATALOG_PATH`          | `catalog.jsonl`   |
//! | `GARDEN_TRANSPORT`             | `stdio`           |
//! | `GARDEN_HTTP_ADDR`             | `127.0.0.1:3030`  |
//! | `GARDEN_AUTOCORRECT_THRESHOLD` | `0.5`             |
//! | `GARDEN_MAX_SUGGESTIONS`       | `5`               |
//! | `GARDEN_LOG_FORMAT`            | `pretty`          |
//!
//! Relative catalog paths are resolved against the working directory.

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;
use crate::logging::LogFormat;
use crate::search::{DEFAULT_AUTOCORRECT_THRESHOLD, DEFAULT_MAX_SUGGESTIONS};

const DEFAULT_CATALOG_FILE: &str = "catalog.jsonl";
const DEFAULT_HTTP_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3030);

/// Which front doors the binary serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// MCP over stdin/stdout
    #[default]
    Stdio,
    /// REST API only
    Http,
    /// Both at once
    Both,
}

impl Transport {
    pub fn serves_stdio(&self) -> bool {
        matches!(self, Transport::Stdio | Transport::Both)
    }

    pub fn serves_http(&self) -> bool {
        matches!(self, Transport::Http | Transport::Both)
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdio" | "mcp" => Ok(Transport::Stdio),
            "http" | "rest" => Ok(Transport::Http),
            "both" | "all" => Ok(Transport::Both),
            other => Err(format!("expected stdio, http or both, got {}", other)),
        }
    }
}

/// Values searches fall back to when a request omits them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchDefaults {
    pub autocorrect_threshold: f64,
    pub max_suggestions: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            autocorrect_threshold: DEFAULT_AUTOCORRECT_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Reject similarity thresholds outside `[0, 1]`
pub fn check_threshold(threshold: f64) -> Result<f64, String> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("threshold must be between 0 and 1, got {}", threshold))
    }
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub transport: Transport,
    pub http_addr: SocketAddr,
    pub autocorrect_threshold: f64,
    pub max_suggestions: usize,
    pub log_format: LogFormat,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(&current_dir, |key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(base_dir: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = match lookup("GARDEN_CATALOG_PATH") {
            Some(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Some(path) => base_dir.join(path),
            None => base_dir.join(DEFAULT_CATALOG_FILE),
        };

        let transport = parse_var(&lookup, "GARDEN_TRANSPORT", Transport::default())?;

        let http_addr = parse_var(
            &lookup,
            "GARDEN_HTTP_ADDR",
            SocketAddr::from(DEFAULT_HTTP_ADDR),
        )?;

        let autocorrect_threshold = parse_var(
            &lookup,
            "GARDEN_AUTOCORRECT_THRESHOLD",
            DEFAULT_AUTOCORRECT_THRESHOLD,
        )?;
        check_threshold(autocorrect_threshold).map_err(|reason| {
            ConfigError::invalid(
                "GARDEN_AUTOCORRECT_THRESHOLD",
                &autocorrect_threshold.to_string(),
                reason,
            )
        })?;

        let max_suggestions =
            parse_var(&lookup, "GARDEN_MAX_SUGGESTIONS", DEFAULT_MAX_SUGGESTIONS)?;
        let log_format = parse_var(&lookup, "GARDEN_LOG_FORMAT", LogFormat::default())?;

        Ok(Self {
            catalog_path,
            transport,
            http_addr,
            autocorrect_threshold,
            max_suggestions,
            log_format,
        })
    }

    pub fn search_defaults(&self) -> SearchDefaults {
        SearchDefaults {
            autocorrect_threshold: self.autocorrect_threshold,
            max_suggestions: self.max_suggestions,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(var, &raw, e.to_string())),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(Path::new("/srv/garden"), |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/srv/garden/catalog.jsonl"));
        assert_eq!(config.transport, Transport::Stdio);
        assert_eq!(config.http_addr.port(), 3030);
        assert_eq!(config.autocorrect_threshold, 0.5);
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("GARDEN_CATALOG_PATH", "data/items.jsonl"),
            ("GARDEN_TRANSPORT", "both"),
            ("GARDEN_HTTP_ADDR", "0.0.0.0:8080"),
            ("GARDEN_AUTOCORRECT_THRESHOLD", "0.7"),
            ("GARDEN_MAX_SUGGESTIONS", "8"),
            ("GARDEN_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/srv/garden/data/items.jsonl"));
        assert!(config.transport.serves_http());
        assert!(config.transport.serves_stdio());
        assert_eq!(config.http_addr.port(), 8080);
        assert_eq!(config.autocorrect_threshold, 0.7);
        assert_eq!(config.max_suggestions, 8);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_absolute_catalog_path_kept() {
        let config = config_with(&[("GARDEN_CATALOG_PATH", "/data/catalog.jsonl")]).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/data/catalog.jsonl"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config_with(&[("GARDEN_TRANSPORT", "carrier-pigeon")]).is_err());
        assert!(config_with(&[("GARDEN_HTTP_ADDR", "nowhere")]).is_err());
        assert!(config_with(&[("GARDEN_MAX_SUGGESTIONS", "-1")]).is_err());

        let err = config_with(&[("GARDEN_AUTOCORRECT_THRESHOLD", "1.5")]).unwrap_err();
        assert!(err.to_string().contains("GARDEN_AUTOCORRECT_THRESHOLD"));
    }
}
