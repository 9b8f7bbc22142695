//! The resource traits shared by every node of the tree.
//!
//! A node holds a [`ResourceContext`]: the configuration fragment it
//! inherited plus the transport requests are sent through. From that it can
//! compute its own fragment ([`RestResource::composed_options`]), hand a
//! context to its children ([`RestResource::descend`]), and issue a request
//! ([`RestResource::request`]).
//!
//! Lists and items get two more traits:
//!
//! - [`CollectionResource`]: a list node that can address one of its items
//! - [`CollectionItemResource`]: a node identified by a caller-supplied id
//!
//! [`ListOrItem`] is what [`CollectionResource::list_or_item`] returns when
//! the caller may or may not have an id at hand.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use surveymonkey_api::rest::{methods, Endpoint, ResourceContext, RestResource};
//!
//! #[derive(Clone, Debug)]
//! struct SurveyFolders {
//!     context: ResourceContext,
//! }
//!
//! impl RestResource for SurveyFolders {
//!     const ENDPOINT: Endpoint =
//!         Endpoint::literal("Survey folders", "survey_folders", methods::LIST_CREATE);
//!
//!     fn context(&self) -> &ResourceContext {
//!         &self.context
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse, RequestConfig, RequestOptions, Transport};
use crate::rest::{Endpoint, ResourceError, Segment};

/// What a node inherits from its parent.
///
/// Cloning is cheap apart from the fragment: the transport is shared.
#[derive(Clone, Debug)]
pub struct ResourceContext {
    transport: Arc<dyn Transport>,
    config: RequestConfig,
}

// Verify ResourceContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceContext>();
};

impl ResourceContext {
    /// Creates a context from a transport and a configuration fragment.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, config: RequestConfig) -> Self {
        Self { transport, config }
    }

    /// Returns the inherited configuration fragment.
    #[must_use]
    pub const fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Returns the transport requests are sent through.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Returns a context with the same transport and a different fragment.
    #[must_use]
    pub fn with_config(&self, config: RequestConfig) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config,
        }
    }

    /// Validates `options` against `permitted`, merges, and sends.
    ///
    /// At most one call reaches the transport, and its result is returned as is.
    async fn dispatch(
        &self,
        resource: &'static str,
        permitted: &[HttpMethod],
        composed: RequestConfig,
        options: RequestOptions,
    ) -> Result<HttpResponse, ResourceError> {
        let method = options.method_or_default();

        if permitted.is_empty() {
            tracing::warn!(resource, %method, "Request rejected: resource is a container");
            return Err(ResourceError::RequestNotAllowed { resource });
        }

        if !permitted.contains(&method) {
            tracing::warn!(resource, %method, "Request rejected: method not allowed");
            return Err(ResourceError::MethodNotAllowed {
                resource,
                method,
                allowed: permitted.to_vec(),
            });
        }

        let request = HttpRequest::merge(composed, options);
        tracing::debug!(resource, method = %request.method, url = %request.url, "Dispatching request");

        Ok(self.transport.send(request).await?)
    }
}

/// A node of the resource tree.
///
/// Implementors provide the [`Endpoint`] declaration and access to their
/// [`ResourceContext`]; everything else has a default.
///
/// # Thread Safety
///
/// All resources must be `Send + Sync` so they can be moved into spawned
/// tasks.
#[allow(async_fn_in_trait)]
pub trait RestResource: Clone + std::fmt::Debug + Send + Sync + Sized {
    /// The declaration of this node type.
    const ENDPOINT: Endpoint;

    /// Returns what this node inherited from its parent.
    fn context(&self) -> &ResourceContext;

    /// Returns the identifier rendered by [`Segment::Identifier`] nodes.
    fn identifier(&self) -> Option<&str> {
        None
    }

    /// Returns the configuration fragment this node was created with.
    fn configuration(&self) -> &RequestConfig {
        self.context().config()
    }

    /// Returns the path segment this node appends.
    ///
    /// Identifiers are percent-encoded so they always form a single segment.
    fn own_segment(&self) -> Cow<'_, str> {
        match Self::ENDPOINT.segment {
            Segment::Root => Cow::Borrowed(""),
            Segment::Literal(segment) => Cow::Borrowed(segment),
            Segment::Identifier => urlencoding::encode(self.identifier().unwrap_or_default()),
        }
    }

    /// Returns the methods this node accepts.
    fn permitted_methods(&self) -> &'static [HttpMethod] {
        Self::ENDPOINT.methods
    }

    /// Returns a fresh fragment for this node.
    ///
    /// The URL is the inherited URL plus `/` and [`own_segment`](Self::own_segment);
    /// the root keeps the inherited URL as is. Every other field is copied.
    fn composed_options(&self) -> RequestConfig {
        match Self::ENDPOINT.segment {
            Segment::Root => self.configuration().clone(),
            Segment::Literal(_) | Segment::Identifier => {
                self.configuration().compose(&self.own_segment())
            }
        }
    }

    /// Returns the fully composed URL of this node.
    fn url(&self) -> String {
        self.composed_options().url
    }

    /// Returns the context handed to this node's children.
    fn descend(&self) -> ResourceContext {
        self.context().with_config(self.composed_options())
    }

    /// Issues a request against this node.
    ///
    /// The method defaults to `GET`. Header, query and extension keys in
    /// `options` win over the inherited ones; the URL is always the composed
    /// one.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::RequestNotAllowed`] if the node permits no methods
    /// - [`ResourceError::MethodNotAllowed`] if the method is not permitted
    /// - [`ResourceError::Http`] with the transport's error, unchanged
    async fn request(&self, options: RequestOptions) -> Result<HttpResponse, ResourceError> {
        self.context()
            .dispatch(
                Self::ENDPOINT.name,
                self.permitted_methods(),
                self.composed_options(),
                options,
            )
            .await
    }
}

/// A list node whose entries can be addressed by id.
pub trait CollectionResource: RestResource {
    /// The node type of one entry.
    type Item: CollectionItemResource;

    /// Creates the list node from an inherited context.
    fn from_context(context: ResourceContext) -> Self;

    /// Returns the entry with the given id.
    fn item(&self, id: &str) -> Self::Item {
        Self::Item::with_id(self.descend(), id)
    }

    /// Returns the entry for `id`, or the list itself when there is no id.
    ///
    /// An empty id addresses the list.
    fn list_or_item(context: ResourceContext, id: Option<&str>) -> ListOrItem<Self> {
        let list = Self::from_context(context);
        match id {
            Some(id) if !id.is_empty() => ListOrItem::Item(list.item(id)),
            _ => ListOrItem::List(list),
        }
    }
}

/// A node addressed by a caller-supplied identifier.
///
/// The identifier is never validated; it only feeds the URL.
pub trait CollectionItemResource: RestResource {
    /// Creates the node for `id` under an inherited context.
    fn with_id(context: ResourceContext, id: &str) -> Self;

    /// Returns the identifier.
    fn id(&self) -> &str;
}

/// Either a list node or one of its entries.
#[derive(Clone, Debug)]
pub enum ListOrItem<L: CollectionResource> {
    /// No id was given.
    List(L),
    /// An id was given.
    Item(L::Item),
}

impl<L: CollectionResource> ListOrItem<L> {
    /// Returns `true` if this addresses a single entry.
    #[must_use]
    pub const fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns the list node, if this is one.
    #[must_use]
    pub fn into_list(self) -> Option<L> {
        match self {
            Self::List(list) => Some(list),
            Self::Item(_) => None,
        }
    }

    /// Returns the entry node, if this is one.
    #[must_use]
    pub fn into_item(self) -> Option<L::Item> {
        match self {
            Self::List(_) => None,
            Self::Item(item) => Some(item),
        }
    }

    /// See [`RestResource::configuration`].
    #[must_use]
    pub fn configuration(&self) -> &RequestConfig {
        match self {
            Self::List(list) => list.configuration(),
            Self::Item(item) => item.configuration(),
        }
    }

    /// See [`RestResource::own_segment`].
    #[must_use]
    pub fn own_segment(&self) -> Cow<'_, str> {
        match self {
            Self::List(list) => list.own_segment(),
            Self::Item(item) => item.own_segment(),
        }
    }

    /// See [`RestResource::permitted_methods`].
    #[must_use]
    pub fn permitted_methods(&self) -> &'static [HttpMethod] {
        match self {
            Self::List(list) => list.permitted_methods(),
            Self::Item(item) => item.permitted_methods(),
        }
    }

    /// See [`RestResource::composed_options`].
    #[must_use]
    pub fn composed_options(&self) -> RequestConfig {
        match self {
            Self::List(list) => list.composed_options(),
            Self::Item(item) => item.composed_options(),
        }
    }

    /// See [`RestResource::url`].
    #[must_use]
    pub fn url(&self) -> String {
        self.composed_options().url
    }

    /// See [`RestResource::request`].
    ///
    /// # Errors
    ///
    /// Same as [`RestResource::request`].
    pub async fn request(&self, options: RequestOptions) -> Result<HttpResponse, ResourceError> {
        match self {
            Self::List(list) => list.request(options).await,
            Self::Item(item) => item.request(options).await,
        }
    }
}
