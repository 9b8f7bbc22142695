//! # SurveyMonkey API Rust SDK
//!
//! A Rust SDK for the SurveyMonkey v3 REST API. Every endpoint is a node in
//! a tree of resources that builds its URL from its ancestors, knows which
//! HTTP methods it accepts, and sends requests through a pluggable
//! transport.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`SurveyMonkeyConfig`] and [`SurveyMonkeyConfigBuilder`]
//! - Validated newtypes for the access token and base URL
//! - The resource tree rooted at [`SurveyMonkey`], covering surveys,
//!   collectors, contacts, users, workgroups, webhooks and more
//! - Per-endpoint method allow-lists, checked before anything is sent
//! - Async HTTP transport with optional retries for rate limits and server errors
//! - A [`Transport`] trait for plugging in another HTTP stack
//!
//! Response bodies are returned as JSON without interpretation; pagination
//! and rate limiting beyond the transport's retries are left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use surveymonkey_api::{AccessToken, SurveyMonkey, SurveyMonkeyConfig};
//! use surveymonkey_api::rest::RestResource;
//!
//! let config = SurveyMonkeyConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let api = SurveyMonkey::new(&config);
//! let pages = api.survey("123456").pages();
//!
//! assert_eq!(pages.url(), "https://api.surveymonkey.com/v3/surveys/123456/pages");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use surveymonkey_api::{HttpMethod, RequestOptions, ResourceError};
//! use surveymonkey_api::rest::RestResource;
//! use serde_json::json;
//!
//! // GET /users/me
//! let me = api.me().request(RequestOptions::new()).await?;
//! println!("Hello {}", me.body["username"]);
//!
//! // POST /surveys/123456/pages
//! let page = api
//!     .survey("123456")
//!     .pages()
//!     .request(
//!         RequestOptions::new()
//!             .method(HttpMethod::Post)
//!             .body(json!({ "title": "About you" })),
//!     )
//!     .await?;
//!
//! // Rejected locally: survey details only accept GET
//! let err = api
//!     .survey("123456")
//!     .details()
//!     .request(RequestOptions::from(HttpMethod::Delete))
//!     .await
//!     .unwrap_err();
//! assert!(matches!(err, ResourceError::MethodNotAllowed { .. }));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction; disallowed
//!   methods never reach the network
//! - **Immutable nodes**: Accessors return new nodes and never modify their parent
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, SurveyMonkeyConfig, SurveyMonkeyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    InvalidHttpRequestError, MaxHttpRetriesExceededError, RequestConfig, RequestOptions,
    Transport,
};

// Re-export the resource tree entry points
pub use rest::resources::SurveyMonkey;
pub use rest::{ResourceError, RestResource};
