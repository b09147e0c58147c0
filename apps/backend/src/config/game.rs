use std::env;
use std::path::PathBuf;

use crate::domain::TOTAL_ROUNDS;
use crate::errors::config::ConfigError;
use crate::location::DEFAULT_MAX_ATTEMPTS;

pub const DEFAULT_DATA_FILE: &str = "data/games.json";

/// Runtime settings for a game process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Rounds per session (>= 1).
    pub total_rounds: u8,
    /// JSON history file.
    pub data_file: PathBuf,
    /// Probe lookups allowed per target (>= 1).
    pub location_max_attempts: u32,
    /// Fixed seed for target selection; random when unset.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: TOTAL_ROUNDS,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            location_max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Read settings from the process environment.
    ///
    /// - `GUESSR_TOTAL_ROUNDS` (default 5)
    /// - `GUESSR_DATA_FILE` (default `data/games.json`)
    /// - `GUESSR_LOCATION_MAX_ATTEMPTS` (default 100)
    /// - `GUESSR_RNG_SEED` (default unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`GameConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let total_rounds = match var("GUESSR_TOTAL_ROUNDS") {
            Some(v) => parse_positive::<u8>("GUESSR_TOTAL_ROUNDS", &v, "an integer in 1..=255")?,
            None => defaults.total_rounds,
        };
        let data_file = var("GUESSR_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);
        let location_max_attempts = match var("GUESSR_LOCATION_MAX_ATTEMPTS") {
            Some(v) => parse_positive::<u32>(
                "GUESSR_LOCATION_MAX_ATTEMPTS",
                &v,
                "a positive integer",
            )?,
            None => defaults.location_max_attempts,
        };
        let rng_seed = match var("GUESSR_RNG_SEED") {
            Some(v) => Some(v.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: "GUESSR_RNG_SEED",
                expected: "an unsigned 64-bit integer",
                value: v.clone(),
            })?),
            None => None,
        };

        Ok(Self {
            total_rounds,
            data_file,
            location_max_attempts,
            rng_seed,
        })
    }
}

fn parse_positive<T>(var: &'static str, value: &str, expected: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match value.trim().parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            var,
            expected,
            value: value.to_string(),
        }),
    }
}
