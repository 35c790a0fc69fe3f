//! Server configuration from the environment.

use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Interval between playback ticks on the audio page.
    pub playback_tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            playback_tick: Duration::from_millis(1000),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `PLAYBACK_TICK_MS`, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid PORT: {value}"))?,
            None => defaults.port,
        };
        let playback_tick = match lookup("PLAYBACK_TICK_MS") {
            Some(value) => {
                let ms: u64 = value
                    .parse()
                    .with_context(|| format!("invalid PLAYBACK_TICK_MS: {value}"))?;
                anyhow::ensure!(ms > 0, "PLAYBACK_TICK_MS must be positive");
                Duration::from_millis(ms)
            }
            None => defaults.playback_tick,
        };

        Ok(Self {
            host,
            port,
            playback_tick,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.playback_tick, Duration::from_secs(1));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("PLAYBACK_TICK_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.playback_tick, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_tick_rejected() {
        let result = Config::from_lookup(lookup_from(&[("PLAYBACK_TICK_MS", "0")]));
        assert!(result.is_err());
    }
}
