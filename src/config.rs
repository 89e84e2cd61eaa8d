use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_DUMP_DIR: &str = "./scryfall";
const DEFAULT_SCRYFALL_API_URL: &str = "https://api.scryfall.com";
const DEFAULT_PICTURE_CACHE_DIR: &str = "./piccache";
const DEFAULT_FEED_INTERVAL_MINUTES: u64 = 30;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const MAX_FEED_INTERVAL_MINUTES: u64 = u64::MAX / 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be between 1 and {max}: {value}")]
    OutOfRange {
        name: &'static str,
        max: u64,
        value: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bot_token: String,
    pub redis_url: String,
    pub dump_dir: PathBuf,
    pub dump_url: Option<String>,
    pub scryfall_api_url: String,
    pub picture_cache_dir: PathBuf,
    pub feed_interval: Duration,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable lookup, empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));
        let number = |name: &'static str, default: u64| match var(name) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber { name, value }),
        };

        Ok(Self {
            bot_token: required("BOT_TOKEN")?,
            redis_url: required("REDIS_URL")?,
            dump_dir: PathBuf::from(
                var("SCRYFALL_DUMP_DIR").unwrap_or_else(|| DEFAULT_DUMP_DIR.to_string()),
            ),
            dump_url: var("SCRYFALL_DUMP_URL"),
            scryfall_api_url: var("SCRYFALL_API_URL")
                .unwrap_or_else(|| DEFAULT_SCRYFALL_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            picture_cache_dir: PathBuf::from(
                var("PICTURE_CACHE_DIR").unwrap_or_else(|| DEFAULT_PICTURE_CACHE_DIR.to_string()),
            ),
            feed_interval: feed_interval(number(
                "FEED_INTERVAL_MINUTES",
                DEFAULT_FEED_INTERVAL_MINUTES,
            )?)?,
            http_timeout: Duration::from_secs(number(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
        })
    }
}

fn feed_interval(minutes: u64) -> Result<Duration, ConfigError> {
    minutes
        .checked_mul(60)
        .filter(|_| minutes > 0)
        .map(Duration::from_secs)
        .ok_or(ConfigError::OutOfRange {
            name: "FEED_INTERVAL_MINUTES",
            max: MAX_FEED_INTERVAL_MINUTES,
            value: minutes,
        })
}
