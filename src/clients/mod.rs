//! HTTP plumbing for SurveyMonkey API communication.
//!
//! This module provides the layer underneath the resource tree: the request
//! and response types, the [`Transport`] seam, and the default
//! `reqwest`-backed [`HttpClient`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RequestConfig`]: A configuration fragment accumulated down the resource tree
//! - [`RequestOptions`]: Per-call overrides (method, body, extra headers)
//! - [`HttpRequest`]: The merged request handed to a transport
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`Transport`]: The trait every transport implements
//! - [`HttpClient`]: The default transport
//!
//! # Example
//!
//! ```rust,ignore
//! use surveymonkey_api::clients::{HttpClient, HttpMethod, HttpRequest, RequestConfig, RequestOptions};
//! use surveymonkey_api::{AccessToken, SurveyMonkeyConfig};
//!
//! let config = SurveyMonkeyConfig::builder()
//!     .access_token(AccessToken::new("token")?)
//!     .build()?;
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::merge(
//!     RequestConfig::new("https://api.surveymonkey.com/v3/users/me"),
//!     RequestOptions::from(HttpMethod::Get),
//! );
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! [`HttpClient`] implements retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`SurveyMonkeyConfigBuilder::tries`](crate::SurveyMonkeyConfigBuilder::tries).

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, RequestConfig, RequestOptions};
pub(crate) use http_request::merge_headers;
pub use http_response::HttpResponse;
pub use transport::Transport;
