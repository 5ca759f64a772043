use std::path::PathBuf;

use tracing::warn;

use crate::{
    common::{error::AppError, money::Money},
    domain::{auth::DEFAULT_MAX_ATTEMPTS, secret_code},
};

pub const DEFAULT_PIN: &str = "1234";

pub const ENV_PIN: &str = "ATM_PIN";
pub const ENV_INITIAL_BALANCE: &str = "ATM_INITIAL_BALANCE";
pub const ENV_MAX_ATTEMPTS: &str = "ATM_MAX_ATTEMPTS";
pub const ENV_HISTORY_EXPORT: &str = "ATM_HISTORY_EXPORT";

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pin: String,
    pub initial_balance: Money,
    pub max_attempts: u32,
    /// Where to write the ledger as CSV when the session ends.
    pub history_export: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN.to_string(),
            initial_balance: Money::from_major(10_000),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            history_export: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        match lookup(ENV_PIN) {
            Some(pin) => {
                if !secret_code::is_well_formed(&pin) {
                    return Err(AppError::Config(format!(
                        "{ENV_PIN} must be exactly 4 digits"
                    )));
                }
                config.pin = pin;
            }
            None => warn!("{ENV_PIN} not set; using default PIN"),
        }

        if let Some(raw) = lookup(ENV_INITIAL_BALANCE) {
            let balance: Money = raw.parse().map_err(|e| {
                AppError::Config(format!("{ENV_INITIAL_BALANCE} is not an amount: {e}"))
            })?;
            if balance.is_negative() {
                return Err(AppError::Config(format!(
                    "{ENV_INITIAL_BALANCE} must not be negative"
                )));
            }
            config.initial_balance = balance;
        }

        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            config.max_attempts = raw.trim().parse().map_err(|e| {
                AppError::Config(format!("{ENV_MAX_ATTEMPTS} is not a count: {e}"))
            })?;
        }

        config.history_export = lookup(ENV_HISTORY_EXPORT)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pin, "1234");
        assert_eq!(config.initial_balance, Money::from_major(10_000));
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.history_export, None);
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            (ENV_PIN, "0420"),
            (ENV_INITIAL_BALANCE, "250.75"),
            (ENV_MAX_ATTEMPTS, "5"),
            (ENV_HISTORY_EXPORT, "/tmp/history.csv"),
        ])
        .unwrap();

        assert_eq!(config.pin, "0420");
        assert_eq!(config.initial_balance, Money::from_minor_units(25_075));
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.history_export, Some(PathBuf::from("/tmp/history.csv")));
    }

    #[test]
    fn rejects_bad_values() {
        for pairs in [
            [(ENV_PIN, "12")],
            [(ENV_INITIAL_BALANCE, "lots")],
            [(ENV_INITIAL_BALANCE, "-1")],
            [(ENV_MAX_ATTEMPTS, "-3")],
        ] {
            assert!(
                matches!(load(&pairs), Err(AppError::Config(_))),
                "{pairs:?}"
            );
        }
    }

    #[test]
    fn empty_export_path_means_no_export() {
        let config = load(&[(ENV_HISTORY_EXPORT, "")]).unwrap();
        assert_eq!(config.history_export, None);
    }
}
