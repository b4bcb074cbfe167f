//! Service configuration, read once from the environment at start-up.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use fraudscreen_core::rules::RuleSet;
use fraudscreen_core::scoring::DEFAULT_MODEL_THRESHOLD;
use thiserror::Error;

pub const BIND_ADDR: &str = "FRAUDSCREEN_BIND_ADDR";
pub const DATABASE_URL: &str = "FRAUDSCREEN_DATABASE_URL";
pub const MAX_CONNECTIONS: &str = "FRAUDSCREEN_MAX_CONNECTIONS";
pub const HIGH_AMOUNT_THRESHOLD: &str = "FRAUDSCREEN_HIGH_AMOUNT_THRESHOLD";
pub const RISKY_PAYER_PREFIX: &str = "FRAUDSCREEN_RISKY_PAYER_PREFIX";
pub const MODEL_THRESHOLD: &str = "FRAUDSCREEN_MODEL_THRESHOLD";

const DEFAULT_DATABASE_URL: &str = "sqlite://fraud_detection.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub max_connections: u32,
    pub rules: RuleSet,
    pub model_threshold: f64,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Unset variables fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RuleSet::default();

        let bind_addr = parse_or(&lookup, BIND_ADDR, || {
            SocketAddr::from(([127, 0, 0, 1], 8000))
        })?;
        let database_url =
            lookup(DATABASE_URL).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let max_connections = parse_or(&lookup, MAX_CONNECTIONS, || DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(invalid(MAX_CONNECTIONS, "0", "must be at least 1"));
        }

        let high_amount_threshold =
            parse_or(&lookup, HIGH_AMOUNT_THRESHOLD, || defaults.high_amount_threshold)?;
        if !high_amount_threshold.is_finite() || high_amount_threshold < 0.0 {
            return Err(invalid(
                HIGH_AMOUNT_THRESHOLD,
                high_amount_threshold.to_string(),
                "must be a non-negative number",
            ));
        }
        let risky_payer_prefix =
            lookup(RISKY_PAYER_PREFIX).unwrap_or(defaults.risky_payer_prefix);

        let model_threshold = parse_or(&lookup, MODEL_THRESHOLD, || DEFAULT_MODEL_THRESHOLD)?;
        if !(0.0..=1.0).contains(&model_threshold) {
            return Err(invalid(
                MODEL_THRESHOLD,
                model_threshold.to_string(),
                "must be within [0, 1]",
            ));
        }

        Ok(Self {
            bind_addr,
            database_url,
            max_connections,
            rules: RuleSet {
                high_amount_threshold,
                risky_payer_prefix,
            },
            model_threshold,
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, var: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> T,
{
    match lookup(var) {
        None => Ok(default()),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(var, raw.as_str(), e.to_string())),
    }
}

fn invalid(var: &'static str, value: impl Into<String>, reason: impl Into<String>) -> ConfigError {
    ConfigError {
        var,
        value: value.into(),
        reason: reason.into(),
    }
}
