//! Biometric client configuration.

use std::{ffi::OsString, fmt::Display, str::FromStr, time::Duration};

use aip_face_client as ft;

use crate::ConfidenceThreshold;

/// The environment variable with the application ID.
pub const APP_ID_VAR: &str = "FACE_AUTH_APP_ID";
/// The environment variable with the API key.
pub const API_KEY_VAR: &str = "FACE_AUTH_API_KEY";
/// The environment variable with the secret key.
pub const SECRET_KEY_VAR: &str = "FACE_AUTH_SECRET_KEY";
/// The environment variable with the base URL of the service, optional.
pub const BASE_URL_VAR: &str = "FACE_AUTH_BASE_URL";
/// The environment variable with the default confidence threshold, optional.
pub const THRESHOLD_VAR: &str = "FACE_AUTH_THRESHOLD";
/// The environment variable with the request timeout in seconds, optional.
pub const TIMEOUT_VAR: &str = "FACE_AUTH_TIMEOUT_SECS";

/// The request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The biometric client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The application credentials.
    pub credentials: ft::Credentials,
    /// The base URL of the service.
    pub base_url: String,
    /// The threshold to use when a call does not specify one.
    pub threshold: ConfidenceThreshold,
    /// How long a single request, including the token exchange, may take.
    pub timeout: Duration,
}

/// An error loading the [`Config`].
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} env var is not set")]
    NotSet(&'static str),
    /// A variable is not a valid unicode string.
    #[error("{0} env var is not a valid unicode string")]
    NotUnicode(&'static str),
    /// A variable could not be parsed.
    #[error("{key} env var is not valid: {reason}")]
    Invalid {
        /// The variable.
        key: &'static str,
        /// Why parsing failed.
        reason: String,
    },
}

impl Config {
    /// Create a config with the default base URL and threshold.
    pub fn new(credentials: ft::Credentials) -> Self {
        Self {
            credentials,
            base_url: ft::DEFAULT_BASE_URL.to_owned(),
            threshold: ConfidenceThreshold::DEFAULT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Load the config from the variables provided by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let credentials = ft::Credentials {
            app_id: parse_var(&lookup, APP_ID_VAR)?,
            api_key: parse_var(&lookup, API_KEY_VAR)?,
            secret_key: parse_var(&lookup, SECRET_KEY_VAR)?,
        };

        let mut config = Self::new(credentials);
        if let Some(base_url) = parse_optional_var(&lookup, BASE_URL_VAR)? {
            config.base_url = base_url;
        }
        if let Some(threshold) = parse_optional_var(&lookup, THRESHOLD_VAR)? {
            config.threshold = threshold;
        }
        if let Some(secs) = parse_optional_var::<u64, _>(&lookup, TIMEOUT_VAR)? {
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    key: TIMEOUT_VAR,
                    reason: "must be at least one second".to_owned(),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

/// Get the value of variable `key` and parse it into the type `T`.
///
/// Returns an error if the variable is not set, if the value is an invalid unicode, or if
/// the value could not be parsed.
fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<T, ConfigError>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
    F: Fn(&str) -> Option<OsString>,
{
    parse_optional_var(lookup, key)?.ok_or(ConfigError::NotSet(key))
}

/// Like [`parse_var`], but a variable that is not set is not an error.
fn parse_optional_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
    F: Fn(&str) -> Option<OsString>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let string = raw
        .into_string()
        .map_err(|_| ConfigError::NotUnicode(key))?;
    let value = string.parse().map_err(|err: <T as FromStr>::Err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
    })?;
    Ok(Some(value))
}
