//! HTTP request types for the SurveyMonkey API SDK.
//!
//! Three shapes of request data flow through the SDK:
//!
//! - [`RequestConfig`]: the configuration fragment a resource inherits from
//!   its parent (URL, headers, and any other transport options)
//! - [`RequestOptions`]: per-call overrides passed to a resource's `request`
//! - [`HttpRequest`]: the final, merged configuration handed to a
//!   [`Transport`](crate::clients::Transport)

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods understood by the SurveyMonkey API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP HEAD method.
    Head,
    /// HTTP OPTIONS method.
    Options,
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for modifying resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase verb token (e.g. `"GET"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(InvalidHttpRequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Head => Self::HEAD,
            HttpMethod::Options => Self::OPTIONS,
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Inserts `overrides` into `headers`, replacing existing entries whose name
/// matches case-insensitively.
pub(crate) fn merge_headers(
    headers: &mut HashMap<String, String>,
    overrides: impl IntoIterator<Item = (String, String)>,
) {
    for (name, value) in overrides {
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        headers.insert(name, value);
    }
}

/// The configuration fragment threaded from a resource to its children.
///
/// Keys that have no dedicated field are kept in `extensions` and passed
/// through to the transport untouched, so a fragment never silently drops
/// an option.
///
/// # Example
///
/// ```rust
/// use surveymonkey_api::clients::RequestConfig;
///
/// let root = RequestConfig::new("https://api.surveymonkey.com/v3");
/// let surveys = root.compose("surveys");
///
/// assert_eq!(surveys.url, "https://api.surveymonkey.com/v3/surveys");
/// assert_eq!(root.url, "https://api.surveymonkey.com/v3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// The URL accumulated so far.
    pub url: String,
    /// Headers sent with every request below this point.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Query parameters sent with every request below this point.
    #[serde(default)]
    pub query: HashMap<String, String>,
    /// Per-request timeout, (de)serialized as whole milliseconds.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timeout_millis"
    )]
    pub timeout: Option<Duration>,
    /// Any other transport options.
    #[serde(default, flatten)]
    pub extensions: Map<String, Value>,
}

impl RequestConfig {
    /// Creates a fragment pointing at `url` with no other options.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Returns a new fragment with `segment` appended to the URL.
    ///
    /// All other fields are copied unchanged; `self` is never modified.
    #[must_use]
    pub fn compose(&self, segment: &str) -> Self {
        Self {
            url: format!("{}/{segment}", self.url),
            headers: self.headers.clone(),
            query: self.query.clone(),
            timeout: self.timeout,
            extensions: self.extensions.clone(),
        }
    }
}

/// Per-call overrides for a resource request.
///
/// There is no `url` field: the URL always comes from the
/// resource that issues the request.
///
/// # Example
///
/// ```rust
/// use surveymonkey_api::clients::{HttpMethod, RequestOptions};
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .method(HttpMethod::Post)
///     .body(json!({"title": "New Survey"}))
///     .query_param("include", "response_count");
///
/// assert_eq!(options.method_or_default(), HttpMethod::Post);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    /// The HTTP method; `GET` when unset.
    pub method: Option<HttpMethod>,
    /// Headers merged over the inherited ones.
    pub headers: HashMap<String, String>,
    /// Query parameters merged over the inherited ones.
    pub query: HashMap<String, String>,
    /// JSON request body.
    pub body: Option<Value>,
    /// Timeout replacing the inherited one.
    pub timeout: Option<Duration>,
    /// Transport options merged over the inherited ones.
    pub extensions: Map<String, Value>,
}

impl RequestOptions {
    /// Creates empty options (a plain `GET`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds an arbitrary transport option.
    ///
    /// Extensions reach the [`Transport`](crate::clients::Transport) in
    /// [`HttpRequest::extensions`]. [`HttpClient`](crate::clients::HttpClient)
    /// ignores them; only custom transports act on them.
    #[must_use]
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Returns the method this request will use.
    #[must_use]
    pub fn method_or_default(&self) -> HttpMethod {
        self.method.unwrap_or_default()
    }
}

impl From<HttpMethod> for RequestOptions {
    fn from(method: HttpMethod) -> Self {
        Self::new().method(method)
    }
}

/// The final configuration handed to a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The fully composed URL.
    pub url: String,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// Query parameters to append to the URL.
    pub query: HashMap<String, String>,
    /// JSON request body, if any.
    pub body: Option<Value>,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
    /// Transport options with no dedicated field.
    pub extensions: Map<String, Value>,
}

impl HttpRequest {
    /// Merges a composed fragment with per-call overrides.
    ///
    /// Override keys win in `headers` (names compared case-insensitively),
    /// `query` and `extensions`; the override `timeout` wins when set. The
    /// URL comes from `config` and the method defaults to `GET`.
    #[must_use]
    pub fn merge(config: RequestConfig, options: RequestOptions) -> Self {
        let method = options.method_or_default();
        let RequestConfig {
            url,
            mut headers,
            mut query,
            timeout,
            mut extensions,
        } = config;

        merge_headers(&mut headers, options.headers);
        query.extend(options.query);
        extensions.extend(options.extensions);

        Self {
            method,
            url,
            headers,
            query,
            body: options.body,
            timeout: options.timeout.or(timeout),
            extensions,
        }
    }

    /// Validates the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingUrl`] if the URL is empty.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.is_empty() {
            return Err(InvalidHttpRequestError::MissingUrl);
        }
        Ok(())
    }
}

/// Timeouts as milliseconds, the unit HTTP clients usually take them in.
mod timeout_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        timeout: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match timeout {
            Some(timeout) => {
                serializer.serialize_u64(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
