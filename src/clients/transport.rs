//! The transport seam between the resource tree and the network.
//!
//! Resources never perform I/O themselves. Every request is handed, fully
//! composed, to a [`Transport`]. The SDK ships [`HttpClient`](crate::clients::HttpClient)
//! as the default implementation; tests and callers with special needs
//! (proxies, recording, alternative HTTP stacks) can supply their own.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use async_trait::async_trait;
//! use serde_json::json;
//! use surveymonkey_api::clients::{HttpError, HttpRequest, HttpResponse, Transport};
//!
//! #[derive(Debug)]
//! struct Canned;
//!
//! #[async_trait]
//! impl Transport for Canned {
//!     async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
//!         Ok(HttpResponse::new(200, HashMap::new(), json!({ "url": request.url })))
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Performs one HTTP exchange for a fully composed request.
///
/// Implementations own connection handling, TLS, timeouts, and any retry
/// policy. Whatever they return is passed back to the caller unchanged.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    /// Sends the request and returns the response or a transport error.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}
