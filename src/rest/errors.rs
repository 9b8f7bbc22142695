//! Error types for resource requests.
//!
//! A request issued through the resource tree can fail in three ways:
//!
//! - [`ResourceError::RequestNotAllowed`]: the node is a pure container and
//!   issues no requests of its own
//! - [`ResourceError::MethodNotAllowed`]: the method is not in the node's
//!   allow-list
//! - [`ResourceError::Http`]: whatever the transport reported, unchanged
//!
//! The first two are detected before anything is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use surveymonkey_api::rest::{RestResource, ResourceError};
//! use surveymonkey_api::{HttpMethod, RequestOptions};
//!
//! match api.collectors().request(RequestOptions::new()).await {
//!     Err(ResourceError::RequestNotAllowed { resource }) => {
//!         println!("{resource} has no endpoint of its own, pick a collector");
//!     }
//!     Err(ResourceError::MethodNotAllowed { method, allowed, .. }) => {
//!         println!("{method} not in {allowed:?}");
//!     }
//!     Err(ResourceError::Http(e)) => println!("Transport error: {e}"),
//!     Ok(response) => println!("{}", response.body),
//! }
//! ```

use crate::clients::{HttpError, HttpMethod};
use thiserror::Error;

/// Error type for resource requests.
///
/// # Example
///
/// ```rust
/// use surveymonkey_api::rest::ResourceError;
/// use surveymonkey_api::HttpMethod;
///
/// let error = ResourceError::MethodNotAllowed {
///     resource: "Survey details",
///     method: HttpMethod::Delete,
///     allowed: vec![HttpMethod::Get],
/// };
/// assert_eq!(
///     error.to_string(),
///     "Method DELETE is not allowed for Survey details (allowed: GET)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The node permits no methods at all.
    #[error("Request is not allowed: {resource} only exposes child resources")]
    RequestNotAllowed {
        /// The name of the node.
        resource: &'static str,
    },

    /// The requested method is not in the node's allow-list.
    #[error("Method {method} is not allowed for {resource} (allowed: {})", join_methods(.allowed))]
    MethodNotAllowed {
        /// The name of the node.
        resource: &'static str,
        /// The method that was requested.
        method: HttpMethod,
        /// The methods the node accepts.
        allowed: Vec<HttpMethod>,
    },

    /// The transport failed.
    ///
    /// The wrapped [`HttpError`] is exactly what the transport returned.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns `true` if the request was rejected before reaching the transport.
    #[must_use]
    pub const fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            Self::RequestNotAllowed { .. } | Self::MethodNotAllowed { .. }
        )
    }

    /// Returns the HTTP status code when the transport reported one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

fn join_methods(methods: &[HttpMethod]) -> String {
    methods
        .iter()
        .map(HttpMethod::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
