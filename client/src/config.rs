//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled and parsed by
//! [`ClientConfig::from_values`]. Every key is optional.
//!
//! - `PORTAL_API_BASE_URL`: prefix for `/api/...` requests (default: same origin)
//! - `PORTAL_TOKEN_KEY`: storage key for the bearer token (default `token`)
//! - `PORTAL_PROFILE_KEY`: storage key for the cached profile (default `user`)
//! - `PORTAL_REVALIDATION_POLICY`: `clear_on_auth_error` (default) or `clear_on_any_error`
//! - `PORTAL_NOTICE_DISMISS_MS`: notice banner lifetime (default 6000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_PROFILE_KEY: &str = "user";
pub const DEFAULT_NOTICE_DISMISS_MS: u32 = 6_000;

/// Error returned by [`ClientConfig::from_values`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown revalidation policy: {0}")]
    UnknownPolicy(String),
    #[error("invalid notice dismiss delay: {0}")]
    InvalidDismissDelay(String),
    #[error("storage key for {0} must not be empty")]
    EmptyStorageKey(&'static str),
}

/// What the session does when the startup `/api/auth/me` check fails
/// because the backend could not be reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevalidationPolicy {
    /// Only an explicit rejection clears the stored session.
    #[default]
    ClearOnAuthError,
    /// Any failure, including transport errors, clears the stored session.
    ClearOnAnyError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_key: String,
    pub profile_key: String,
    pub revalidation: RevalidationPolicy,
    pub notice_dismiss_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            profile_key: DEFAULT_PROFILE_KEY.to_owned(),
            revalidation: RevalidationPolicy::default(),
            notice_dismiss_ms: DEFAULT_NOTICE_DISMISS_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from the values captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any captured value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(&ConfigValues {
            api_base_url: option_env!("PORTAL_API_BASE_URL"),
            token_key: option_env!("PORTAL_TOKEN_KEY"),
            profile_key: option_env!("PORTAL_PROFILE_KEY"),
            revalidation: option_env!("PORTAL_REVALIDATION_POLICY"),
            notice_dismiss_ms: option_env!("PORTAL_NOTICE_DISMISS_MS"),
        })
    }

    /// Build-time config, or defaults with a logged warning if it is invalid.
    pub fn load() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            leptos::logging::warn!("config: {e}; falling back to defaults");
            Self::default()
        })
    }

    /// Parse raw optional values into a typed config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown policy names, non-numeric dismiss
    /// delays, or storage keys that are blank after trimming.
    pub fn from_values(values: &ConfigValues<'_>) -> Result<Self, ConfigError> {
        let api_base_url = values
            .api_base_url
            .map(str::trim)
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_owned();
        let token_key = storage_key(values.token_key, DEFAULT_TOKEN_KEY, "token")?;
        let profile_key = storage_key(values.profile_key, DEFAULT_PROFILE_KEY, "profile")?;
        let revalidation = parse_policy(values.revalidation)?;
        let notice_dismiss_ms = match values.notice_dismiss_ms.map(str::trim) {
            None | Some("") => DEFAULT_NOTICE_DISMISS_MS,
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidDismissDelay(raw.to_owned()))?,
        };

        Ok(Self { api_base_url, token_key, profile_key, revalidation, notice_dismiss_ms })
    }
}

/// Raw, unparsed configuration inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValues<'a> {
    pub api_base_url: Option<&'a str>,
    pub token_key: Option<&'a str>,
    pub profile_key: Option<&'a str>,
    pub revalidation: Option<&'a str>,
    pub notice_dismiss_ms: Option<&'a str>,
}

fn storage_key(raw: Option<&str>, default: &str, name: &'static str) -> Result<String, ConfigError> {
    match raw {
        None => Ok(default.to_owned()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyStorageKey(name)),
        Some(value) => Ok(value.trim().to_owned()),
    }
}

fn parse_policy(raw: Option<&str>) -> Result<RevalidationPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("clear_on_auth_error") {
        "" | "clear_on_auth_error" => Ok(RevalidationPolicy::ClearOnAuthError),
        "clear_on_any_error" => Ok(RevalidationPolicy::ClearOnAnyError),
        other => Err(ConfigError::UnknownPolicy(other.to_owned())),
    }
}
