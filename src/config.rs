use std::{fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    /// How often a running pick clock publishes timer updates and checks its deadline.
    pub timer_tick: Duration,
    /// Per-draft event buffer; observers further behind than this lose events.
    pub event_buffer: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let tick_ms: u64 = parse_var(&lookup, "TIMER_TICK_MS", 1000)?;
        if tick_ms == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "TIMER_TICK_MS".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://draft.db".to_string()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            timer_tick: Duration::from_millis(tick_ms),
            event_buffer: parse_var(&lookup, "EVENT_BUFFER", 256)?,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.timer_tick, Duration::from_secs(1));
        assert_eq!(config.event_buffer, 256);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("TIMER_TICK_MS", "250"),
            ("DB_MAX_CONNECTIONS", " 2 "),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.timer_tick, Duration::from_millis(250));
        assert_eq!(config.db_max_connections, 2);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[("EVENT_BUFFER", "lots")])).unwrap_err();
        assert!(err.to_string().contains("EVENT_BUFFER"));

        let err = Config::from_lookup(lookup_from(&[("TIMER_TICK_MS", "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
