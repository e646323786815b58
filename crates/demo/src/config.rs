//! Demo configuration, read from the environment.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};

use lendwise_core::{Clock, FixedClock, SystemClock};
use lendwise_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "LENDWISE_LOG_FORMAT";
pub const FIXED_DATE_VAR: &str = "LENDWISE_FIXED_DATE";
pub const READER_VAR: &str = "LENDWISE_READER";

pub const DEFAULT_READER: &str = "a smart book reader";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_format: LogFormat,
    /// `YYYY-MM-DD`; `None` means wall-clock time.
    pub fixed_date: Option<String>,
    pub reader_name: String,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("invalid {LOG_FORMAT_VAR}"))?,
            None => LogFormat::default(),
        };

        let fixed_date = lookup(FIXED_DATE_VAR).filter(|v| !v.trim().is_empty());
        if let Some(date) = &fixed_date {
            FixedClock::from_date(date).with_context(|| format!("invalid {FIXED_DATE_VAR}"))?;
        }

        let reader_name = lookup(READER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_READER.to_string());

        Ok(Self {
            log_format,
            fixed_date,
            reader_name,
        })
    }

    pub fn clock(&self) -> Result<Arc<dyn Clock>> {
        let clock: Arc<dyn Clock> = match &self.fixed_date {
            Some(date) => Arc::new(FixedClock::from_date(date)?),
            None => Arc::new(SystemClock::new()),
        };
        Ok(clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<DemoConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.fixed_date, None);
        assert_eq!(cfg.reader_name, DEFAULT_READER);
    }

    #[test]
    fn fixed_date_selects_a_frozen_clock() {
        let cfg = config(&[(FIXED_DATE_VAR, "2023-07-15"), (LOG_FORMAT_VAR, "pretty")]).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.clock().unwrap().now_millis(), 1_689_379_200_000);
    }

    #[test]
    fn invalid_values_are_rejected_with_context() {
        let err = config(&[(FIXED_DATE_VAR, "yesterday")]).unwrap_err();
        assert!(format!("{err:#}").contains(FIXED_DATE_VAR));

        let err = config(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
        assert!(format!("{err:#}").contains(LOG_FORMAT_VAR));
    }
}
