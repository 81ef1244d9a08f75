//! Harness configuration via environment variables
//!
//! Command-line flags always win; the environment only supplies defaults.

use crate::reporter::ReportFormat;
use clap::ValueEnum;
use std::env;

/// Default log filter when `MITE_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Disable colored output (MITE_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// Default report format (MITE_FORMAT=human|json)
    pub format: ReportFormat,
    /// Log filter directives (MITE_LOG=debug, MITE_LOG=mite=trace, ...)
    pub log: String,
}

impl EnvConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());

        Self {
            no_color: set("MITE_NO_COLOR") || set("NO_COLOR"),
            format: lookup("MITE_FORMAT")
                .and_then(|v| ReportFormat::from_str(v.trim(), true).ok())
                .unwrap_or_default(),
            log: lookup("MITE_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: ReportFormat::Human,
            log: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(config(&[]), EnvConfig::default());
    }

    #[test]
    fn test_config_no_color() {
        assert!(config(&[("MITE_NO_COLOR", "1")]).no_color);
        assert!(config(&[("NO_COLOR", "yes")]).no_color);
        assert!(!config(&[("NO_COLOR", "")]).no_color);
    }

    #[test]
    fn test_config_format() {
        assert_eq!(config(&[("MITE_FORMAT", "json")]).format, ReportFormat::Json);
        assert_eq!(config(&[("MITE_FORMAT", "JSON")]).format, ReportFormat::Json);
        assert_eq!(
            config(&[("MITE_FORMAT", "xml")]).format,
            ReportFormat::Human
        );
    }

    #[test]
    fn test_config_log_filter() {
        assert_eq!(config(&[("MITE_LOG", "mite=trace")]).log, "mite=trace");
        assert_eq!(config(&[("MITE_LOG", "  ")]).log, DEFAULT_LOG_FILTER);
    }
}
