//! The SurveyMonkey resource tree.
//!
//! This module provides the machinery every endpoint is built from:
//!
//! - **[`Endpoint`]**: the data-driven declaration of a node type (name,
//!   path [`Segment`], allowed methods)
//! - **[`RestResource`] trait**: path composition, method validation and
//!   request dispatch
//! - **[`CollectionResource`] / [`CollectionItemResource`]**: list nodes and
//!   the id-addressed entries below them
//! - **[`ListOrItem`]**: the result of addressing a list with an optional id
//! - **[`ResourceError`]**: why a request did not produce a response
//!
//! The concrete endpoints live in [`resources`].
//!
//! # Overview
//!
//! Nodes are cheap values. Each accessor returns a new child that carries a
//! fresh copy of its parent's composed configuration, so building a path
//! never mutates anything and siblings can be built concurrently. Only
//! [`RestResource::request`] performs I/O, through the
//! [`Transport`](crate::clients::Transport) shared by the whole tree.
//!
//! # Example
//!
//! ```rust,ignore
//! use surveymonkey_api::{AccessToken, HttpMethod, RequestOptions, SurveyMonkey, SurveyMonkeyConfig};
//! use surveymonkey_api::rest::RestResource;
//! use serde_json::json;
//!
//! let config = SurveyMonkeyConfig::builder()
//!     .access_token(AccessToken::new("token")?)
//!     .build()?;
//! let api = SurveyMonkey::new(&config);
//!
//! // GET https://api.surveymonkey.com/v3/surveys/42/collectors
//! let collectors = api.survey("42").collectors().request(RequestOptions::new()).await?;
//!
//! // POST a new page
//! let page = api
//!     .survey("42")
//!     .pages()
//!     .request(RequestOptions::new().method(HttpMethod::Post).body(json!({"title": "Intro"})))
//!     .await?;
//! ```

mod endpoint;
mod errors;
mod resource;

pub mod resources;

// Public exports
pub use endpoint::{methods, Endpoint, Segment};
pub use errors::ResourceError;
pub use resource::{
    CollectionItemResource, CollectionResource, ListOrItem, ResourceContext, RestResource,
};

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::clients::{HttpError, HttpRequest, HttpResponse, RequestConfig, Transport};
    use crate::rest::ResourceContext;

    /// Answers every request with `200 {}`.
    #[derive(Debug)]
    pub(crate) struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(HttpResponse::new(200, HashMap::new(), serde_json::json!({})))
        }
    }

    pub(crate) fn context() -> ResourceContext {
        ResourceContext::new(Arc::new(NullTransport), RequestConfig::new("https://api.test/v3"))
    }
}
