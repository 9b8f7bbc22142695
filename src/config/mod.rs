//! Configuration types for the SurveyMonkey API SDK.
//!
//! # Overview
//!
//! - [`SurveyMonkeyConfig`]: The configuration used to build the root resource
//! - [`SurveyMonkeyConfigBuilder`]: A builder for constructing [`SurveyMonkeyConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use surveymonkey_api::{AccessToken, SurveyMonkeyConfig};
//!
//! let config = SurveyMonkeyConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.surveymonkey.com/v3");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the SurveyMonkey API SDK.
///
/// # Thread Safety
///
/// `SurveyMonkeyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct SurveyMonkeyConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
    tries: u32,
    user_agent_prefix: Option<String>,
}

impl SurveyMonkeyConfig {
    /// Creates a new builder for constructing a `SurveyMonkeyConfig`.
    #[must_use]
    pub fn builder() -> SurveyMonkeyConfigBuilder {
        SurveyMonkeyConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the base URL every resource path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the caller-supplied headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the default request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns how many times the default transport attempts a request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SurveyMonkeyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SurveyMonkeyConfig>();
};

/// Builder for constructing [`SurveyMonkeyConfig`] instances.
///
/// `access_token` is required. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.surveymonkey.com/v3`
/// - `headers`: empty
/// - `timeout`: `None`
/// - `tries`: 1 (no retries)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use surveymonkey_api::{AccessToken, BaseUrl, SurveyMonkeyConfig};
///
/// let config = SurveyMonkeyConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080/v3").unwrap())
///     .header("X-Trace", "abc")
///     .timeout(Duration::from_secs(10))
///     .tries(3)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SurveyMonkeyConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
    tries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl SurveyMonkeyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// A caller header with the same name as a default header replaces it.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the default request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets how many times the default transport attempts a request.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SurveyMonkeyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<SurveyMonkeyConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(SurveyMonkeyConfig {
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            headers: self.headers,
            timeout: self.timeout,
            tries: self.tries.unwrap_or(1).max(1),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
