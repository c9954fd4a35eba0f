//! Application Configuration
//!
//! Settings are baked in at build time: a browser bundle has no process
//! environment, so overrides come from `option_env!` when Trunk compiles.

use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn, Level};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;
/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "jwtToken";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub log_level: Level,
    pub toast_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: Level::INFO,
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_overrides(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_PAGE_SIZE"),
            option_env!("TODO_LOG_LEVEL"),
            option_env!("TODO_TOAST_TIMEOUT_MS"),
        )
    }

    fn from_overrides(
        api_base_url: Option<&str>,
        page_size: Option<&str>,
        log_level: Option<&str>,
        toast_timeout_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let page_size = try_load("TODO_PAGE_SIZE", page_size, defaults.page_size);
        let page_size = if page_size == 0 {
            warn!("TODO_PAGE_SIZE must be at least 1, using default: {}", defaults.page_size);
            defaults.page_size
        } else {
            page_size
        };

        Self {
            api_base_url: try_load("TODO_API_BASE_URL", api_base_url, defaults.api_base_url),
            page_size,
            log_level: try_load("TODO_LOG_LEVEL", log_level, defaults.log_level),
            toast_timeout_ms: try_load("TODO_TOAST_TIMEOUT_MS", toast_timeout_ms, defaults.toast_timeout_ms),
        }
    }
}

fn try_load<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {value:?}: {e}, using default: {default}");
            default
        }),
    }
}
