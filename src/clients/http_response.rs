//! HTTP response types for the SurveyMonkey API SDK.
//!
//! This module provides the [`HttpResponse`] type returned by a
//! [`Transport`](crate::clients::Transport).

use std::collections::HashMap;

/// An HTTP response from the SurveyMonkey API.
///
/// The resource tree hands this back untouched; interpreting the body is up
/// to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body (`{}` when the body was empty).
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the id of a SurveyMonkey error body (`{"error": {"id": ...}}`).
    #[must_use]
    pub fn error_id(&self) -> Option<String> {
        match self.body.get("error")?.get("id")? {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retry_after_ignores_unusable_values() {
        for value in ["-1", "inf", "Wed, 21 Oct 2026 07:28:00 GMT"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![value.to_string()]);
            let response = HttpResponse::new(429, headers, json!({}));
            assert!(response.retry_request_after.is_none(), "{value}");
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "x-ratelimit-app-global-day-remaining".to_string(),
            vec!["499".to_string()],
        );

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(
            response.header("X-Ratelimit-App-Global-Day-Remaining"),
            Some("499")
        );
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_error_id_extraction() {
        let response = HttpResponse::new(
            404,
            HashMap::new(),
            json!({"error": {"id": "1020", "name": "Resource Not Found"}}),
        );
        assert_eq!(response.error_id(), Some("1020".to_string()));

        let response = HttpResponse::new(400, HashMap::new(), json!({"error": {"id": 1002}}));
        assert_eq!(response.error_id(), Some("1002".to_string()));

        let response = HttpResponse::new(200, HashMap::new(), json!({"data": []}));
        assert_eq!(response.error_id(), None);
    }
}
