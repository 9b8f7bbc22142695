//! HTTP client for SurveyMonkey API communication.
//!
//! This module provides [`HttpClient`], the default [`Transport`] backed by
//! `reqwest`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{merge_headers, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::SurveyMonkeyConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The default [`Transport`], sending requests with `reqwest`.
///
/// The client handles:
/// - Default headers (`User-Agent`, `Accept`)
/// - Optional retries for 429 and 500 responses
/// - Conversion of non-2xx responses into [`HttpError::Response`]
///
/// Options in [`HttpRequest::extensions`] have no `reqwest` counterpart and
/// are ignored.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Headers added to every request unless the request overrides them.
    default_headers: HashMap<String, String>,
    /// Number of attempts for retryable responses.
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the SDK configuration.
    ///
    /// Only `user_agent_prefix` and `tries` are read here; URL, auth headers
    /// and timeouts travel with each request.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &SurveyMonkeyConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}SurveyMonkey API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
            tries: config.tries(),
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns how many times a retryable request is attempted.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Sends an HTTP request to the SurveyMonkey API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        merge_headers(&mut headers, request.headers.clone());

        if !request.extensions.is_empty() {
            tracing::trace!(
                keys = ?request.extensions.keys().collect::<Vec<_>>(),
                "Ignoring transport options unsupported by the reqwest client"
            );
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = self.client.request(request.method.into(), &request.url);

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            if let Some(timeout) = request.timeout {
                req_builder = req_builder.timeout(timeout);
            }

            tracing::debug!(method = %request.method, url = %request.url, attempt = tries, "Sending request");
            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);

            let should_retry = code == 429 || code == 500;
            if !should_retry || (tries >= self.tries && self.tries == 1) {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference: response.error_id(),
                }));
            }

            if tries >= self.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: self.tries,
                    message: error_message,
                    error_reference: response.error_id(),
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::debug!(code, ?delay, "Retrying request");
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        // 429 honours Retry-After; 500 always waits the fixed delay
        if status == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            {
                return delay;
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Summarises SurveyMonkey's `{"error": {...}}` body as JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(error) = response.body.get("error") {
            for key in ["name", "message", "docs"] {
                if let Some(value) = error.get(key) {
                    error_body.insert(key.to_string(), value.clone());
                }
            }
            if let Some(id) = response.error_id() {
                error_body.insert(
                    "error_reference".to_string(),
                    serde_json::json!(format!(
                        "If you report this error, please include this id: {id}."
                    )),
                );
            }
        }

        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if error_body.is_empty() {
            error_body.insert(
                "error".to_string(),
                serde_json::json!(format!("HTTP {}", response.code)),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;
    use serde_json::json;

    fn create_test_config() -> SurveyMonkeyConfig {
        SurveyMonkeyConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("SurveyMonkey API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = SurveyMonkeyConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_tries_come_from_config() {
        let config = SurveyMonkeyConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .tries(4)
            .build()
            .unwrap();

        assert_eq!(HttpClient::new(&config).tries(), 4);
    }

    #[test]
    fn test_retry_delay_uses_retry_after_for_429_only() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["0.25".to_string()]);
        let response = HttpResponse::new(429, headers.clone(), json!({}));
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            Duration::from_millis(250)
        );

        let response = HttpResponse::new(500, headers, json!({}));
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 500),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_retry_delay_falls_back_when_retry_after_overflows() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["1e30".to_string()]);
        let response = HttpResponse::new(429, headers, json!({}));

        assert_eq!(response.retry_request_after, Some(1e30));
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_serialize_error_extracts_surveymonkey_error() {
        let response = HttpResponse::new(
            401,
            HashMap::new(),
            json!({"error": {
                "id": "1011",
                "name": "Authorization Error",
                "docs": "https://developer.surveymonkey.com/api/v3/#error-codes",
                "message": "The authorization token provided was invalid.",
                "http_status_code": 401
            }}),
        );

        let message = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed["name"], "Authorization Error");
        assert_eq!(
            parsed["message"],
            "The authorization token provided was invalid."
        );
        assert!(parsed["error_reference"]
            .as_str()
            .unwrap()
            .contains("1011"));
    }

    #[test]
    fn test_serialize_error_falls_back_to_status() {
        let response = HttpResponse::new(418, HashMap::new(), json!({}));
        assert_eq!(HttpClient::serialize_error(&response), r#"{"error":"HTTP 418"}"#);
    }
}
