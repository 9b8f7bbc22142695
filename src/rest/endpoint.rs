//! Data-driven endpoint declarations.
//!
//! Every node type in the resource tree is described by one [`Endpoint`]:
//! a name used in errors and logs, the [`Segment`] it appends to the URL it
//! inherits, and the HTTP methods it accepts. The method list is always
//! spelled out on the declaration so the allow-list of an endpoint can be
//! read without following any chain of defaults.
//!
//! # Example
//!
//! ```rust
//! use surveymonkey_api::rest::{methods, Endpoint, Segment};
//! use surveymonkey_api::HttpMethod;
//!
//! const SURVEYS: Endpoint = Endpoint::literal("Surveys", "surveys", methods::LIST_CREATE);
//!
//! assert_eq!(SURVEYS.segment, Segment::Literal("surveys"));
//! assert!(SURVEYS.permits(HttpMethod::Post));
//! assert!(!SURVEYS.permits(HttpMethod::Delete));
//! ```

use crate::clients::HttpMethod;

/// The path segment a node contributes to the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Contributes nothing; the node's URL is the inherited URL.
    Root,
    /// A fixed token such as `surveys`.
    Literal(&'static str),
    /// The percent-encoded identifier held by the node.
    Identifier,
}

/// The declaration of one node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Human-readable node name (e.g., `"Survey"`).
    pub name: &'static str,
    /// The segment this node appends.
    pub segment: Segment,
    /// The methods this node accepts, in declaration order.
    ///
    /// An empty list marks a pure container that only exposes children.
    pub methods: &'static [HttpMethod],
}

impl Endpoint {
    /// Declares the root node, which appends no segment.
    #[must_use]
    pub const fn root(name: &'static str, methods: &'static [HttpMethod]) -> Self {
        Self {
            name,
            segment: Segment::Root,
            methods,
        }
    }

    /// Declares a node with a fixed path segment.
    #[must_use]
    pub const fn literal(
        name: &'static str,
        segment: &'static str,
        methods: &'static [HttpMethod],
    ) -> Self {
        Self {
            name,
            segment: Segment::Literal(segment),
            methods,
        }
    }

    /// Declares a node addressed by an identifier.
    #[must_use]
    pub const fn identifier(name: &'static str, methods: &'static [HttpMethod]) -> Self {
        Self {
            name,
            segment: Segment::Identifier,
            methods,
        }
    }

    /// Returns `true` if the node issues no requests of its own.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.methods.is_empty()
    }

    /// Returns `true` if `method` is in the allow-list.
    #[must_use]
    pub fn permits(&self, method: HttpMethod) -> bool {
        self.methods.contains(&method)
    }
}

/// Named method sets shared by the endpoint catalog.
pub mod methods {
    use crate::clients::HttpMethod;

    /// No methods: the node only groups child resources.
    pub const CONTAINER: &[HttpMethod] = &[];

    /// `HEAD OPTIONS GET`.
    pub const READ: &[HttpMethod] = &[HttpMethod::Head, HttpMethod::Options, HttpMethod::Get];

    /// `HEAD OPTIONS GET POST`: a list that accepts new entries.
    pub const LIST_CREATE: &[HttpMethod] = &[
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Get,
        HttpMethod::Post,
    ];

    /// `HEAD OPTIONS GET PATCH PUT DELETE`: a fully editable item.
    pub const ITEM_WRITE: &[HttpMethod] = &[
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Get,
        HttpMethod::Patch,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    /// `HEAD OPTIONS GET PATCH DELETE`.
    pub const ITEM_PATCH_DELETE: &[HttpMethod] = &[
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Get,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// `HEAD OPTIONS GET PATCH`.
    pub const ITEM_PATCH: &[HttpMethod] = &[
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Get,
        HttpMethod::Patch,
    ];

    /// `HEAD OPTIONS GET DELETE`.
    pub const ITEM_DELETE: &[HttpMethod] = &[
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Get,
        HttpMethod::Delete,
    ];

    /// `HEAD OPTIONS POST`: bulk actions.
    pub const BULK_ACTION: &[HttpMethod] =
        &[HttpMethod::Head, HttpMethod::Options, HttpMethod::Post];

    /// `GET` only.
    pub const GET: &[HttpMethod] = &[HttpMethod::Get];

    /// `GET POST`.
    pub const GET_POST: &[HttpMethod] = &[HttpMethod::Get, HttpMethod::Post];

    /// `POST` only: actions such as send, copy or merge.
    pub const POST: &[HttpMethod] = &[HttpMethod::Post];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_segment_kind() {
        assert_eq!(Endpoint::root("Root", methods::READ).segment, Segment::Root);
        assert_eq!(
            Endpoint::literal("Surveys", "surveys", methods::READ).segment,
            Segment::Literal("surveys")
        );
        assert_eq!(
            Endpoint::identifier("Survey", methods::READ).segment,
            Segment::Identifier
        );
    }

    #[test]
    fn test_container_permits_nothing() {
        let endpoint = Endpoint::literal("Collectors", "collectors", methods::CONTAINER);

        assert!(endpoint.is_container());
        for method in [
            HttpMethod::Head,
            HttpMethod::Options,
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Delete,
        ] {
            assert!(!endpoint.permits(method));
        }
    }

    #[test]
    fn test_read_set_order() {
        assert_eq!(
            methods::READ,
            &[HttpMethod::Head, HttpMethod::Options, HttpMethod::Get]
        );
    }

    #[test]
    fn test_permits_checks_membership() {
        let endpoint = Endpoint::identifier("Contact field", methods::ITEM_PATCH);

        assert!(endpoint.permits(HttpMethod::Patch));
        assert!(!endpoint.permits(HttpMethod::Put));
        assert!(!endpoint.is_container());
    }
}
