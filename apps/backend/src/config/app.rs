use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
/// Sessions idle for a day are purged.
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 10 * 60;

/// Process configuration, read from the environment with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Idle time after which a session is evicted
    pub session_ttl: time::Duration,
    /// How often the sweeper scans for idle sessions
    pub sweep_interval: std::time::Duration,
    /// Seeds every new session's opponent RNG (reproducible play)
    pub opponent_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_ttl: time::Duration::seconds(DEFAULT_SESSION_TTL_SECS as i64),
            sweep_interval: std::time::Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            opponent_seed: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables:
    ///
    /// - `BACKEND_HOST`, `BACKEND_PORT`
    /// - `SESSION_TTL_SECS`, `SESSION_SWEEP_INTERVAL_SECS`
    /// - `OPPONENT_SEED`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("BACKEND_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = parse_var(&lookup, "BACKEND_PORT")?.unwrap_or(defaults.port);

        let ttl_secs: u64 =
            parse_var(&lookup, "SESSION_TTL_SECS")?.unwrap_or(DEFAULT_SESSION_TTL_SECS);
        let ttl_secs = i64::try_from(ttl_secs)
            .map_err(|_| AppError::config(format!("SESSION_TTL_SECS too large: {ttl_secs}")))?;

        let sweep_secs: u64 = parse_var(&lookup, "SESSION_SWEEP_INTERVAL_SECS")?
            .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS);
        if sweep_secs == 0 {
            return Err(AppError::config(
                "SESSION_SWEEP_INTERVAL_SECS must be greater than zero",
            ));
        }

        let opponent_seed = parse_var(&lookup, "OPPONENT_SEED")?;

        Ok(Self {
            host,
            port,
            session_ttl: time::Duration::seconds(ttl_secs),
            sweep_interval: std::time::Duration::from_secs(sweep_secs),
            opponent_seed,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{key} has an invalid value: '{raw}'"))),
    }
}
