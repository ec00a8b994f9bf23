//! Server configuration read from the environment (and `.env` if present).

use std::net::SocketAddr;

use perfbook_core::settings::DEFAULT_STALE_CUTOFF_DAY;
use perfbook_core::TrackingSettings;
use thiserror::Error;

pub const ENV_LISTEN_ADDR: &str = "PERFBOOK_LISTEN_ADDR";
pub const ENV_STALE_CUTOFF_DAY: &str = "PERFBOOK_STALE_CUTOFF_DAY";
pub const ENV_LOG_FORMAT: &str = "PERFBOOK_LOG_FORMAT";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8088";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub stale_cutoff_day: u32,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8088)),
            stale_cutoff_day: DEFAULT_STALE_CUTOFF_DAY,
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_raw = lookup(ENV_LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: ENV_LISTEN_ADDR,
                value: listen_raw.clone(),
                reason: e.to_string(),
            })?;

        let stale_cutoff_day = match lookup(ENV_STALE_CUTOFF_DAY) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(day) if (1..=31).contains(&day) => day,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: ENV_STALE_CUTOFF_DAY,
                        value: raw,
                        reason: "expected a day of month between 1 and 31".to_string(),
                    })
                }
            },
            None => DEFAULT_STALE_CUTOFF_DAY,
        };

        let log_format = match lookup(ENV_LOG_FORMAT).as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: ENV_LOG_FORMAT,
                    value: other.to_string(),
                    reason: "expected 'text' or 'json'".to_string(),
                })
            }
        };

        Ok(Self {
            listen_addr,
            stale_cutoff_day,
            log_format,
        })
    }

    pub fn tracking_settings(&self) -> TrackingSettings {
        TrackingSettings::default().with_stale_cutoff_day(self.stale_cutoff_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listen_addr.port(), 8088);
        assert_eq!(config.stale_cutoff_day, 5);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ENV_LISTEN_ADDR, "127.0.0.1:9000"),
            (ENV_STALE_CUTOFF_DAY, "10"),
            (ENV_LOG_FORMAT, "json"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.tracking_settings().stale_cutoff_day, 10);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_out_of_range_cutoff_day() {
        assert!(ServerConfig::from_lookup(lookup(&[(ENV_STALE_CUTOFF_DAY, "0")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(ENV_STALE_CUTOFF_DAY, "32")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).is_err());
    }
}
