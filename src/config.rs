//! Configuration and environment variable handling.

use std::env;

use crate::models::suggestion::AnalyzerPolicy;

/// Server and analyzer configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// HTTP bind host
    pub host: String,
    /// HTTP bind port
    pub port: u16,
    /// Analyzer policy, defaults with optional env overrides
    pub policy: AnalyzerPolicy,
}

impl AnalysisConfig {
    /// Create a new configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): HTTP bind host
    /// - `PORT` (optional, default: 8080): HTTP bind port
    /// - `LEAFBOOK_MIN_EVENTS` (optional, default: 5): minimum raw events
    ///   before inference is attempted
    /// - `LEAFBOOK_SIGNIFICANT_DIFFERENCE_DAYS` (optional, default: 2):
    ///   median-vs-schedule gap required to trigger a suggestion
    /// - `LEAFBOOK_MAX_INTERVAL_DAYS` (optional, default: 90): longest gap
    ///   counted as routine watering behavior
    ///
    /// # Errors
    /// Returns an error if a variable is set but does not parse, or if the
    /// resulting values are zero.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        let mut policy = AnalyzerPolicy::default();
        policy.min_events_required =
            parse_env("LEAFBOOK_MIN_EVENTS", policy.min_events_required)?;
        policy.significant_difference_days = parse_env(
            "LEAFBOOK_SIGNIFICANT_DIFFERENCE_DAYS",
            policy.significant_difference_days,
        )?;
        policy.max_interval_days =
            parse_env("LEAFBOOK_MAX_INTERVAL_DAYS", policy.max_interval_days)?;

        if policy.min_events_required == 0 {
            return Err("LEAFBOOK_MIN_EVENTS must be positive".to_string());
        }
        if policy.significant_difference_days == 0 {
            return Err("LEAFBOOK_SIGNIFICANT_DIFFERENCE_DAYS must be positive".to_string());
        }
        if policy.max_interval_days < policy.min_interval_days {
            return Err("LEAFBOOK_MAX_INTERVAL_DAYS must be at least 1".to_string());
        }

        Ok(Self { host, port, policy })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("{} must be a valid number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}
