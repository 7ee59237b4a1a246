use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::domain::services::navigation_service::Route;

pub const BASE_URL_VAR: &str = "JOIN_API_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "JOIN_REQUEST_TIMEOUT_SECS";
pub const LOGIN_ROUTE_VAR: &str = "JOIN_LOGIN_ROUTE";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not a valid url: {1}")]
    InvalidUrl(&'static str, String),

    #[error("{0} must be a positive number of seconds, got {1:?}")]
    InvalidTimeout(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
    pub login_route: Route,
}

impl ClientConfig {
    /// Read settings from the process environment (and `.env` if it was loaded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&base_url).map_err(|e| ConfigError::InvalidUrl(BASE_URL_VAR, e.to_string()))?;

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(REQUEST_TIMEOUT_VAR, raw)),
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let login_route = lookup(LOGIN_ROUTE_VAR)
            .map(Route::new)
            .unwrap_or_else(Route::login);

        Ok(Self {
            base_url,
            request_timeout,
            login_route,
        })
    }
}
