//! Endpoints of the SurveyMonkey v3 API.
//!
//! Start from [`SurveyMonkey`] and walk down with its accessors. List
//! accessors are plural (`surveys()`); the singular form (`survey(id)`)
//! goes straight to one entry and is equivalent to `surveys().item(id)`.
//!
//! # Available Resources
//!
//! ## Surveys
//!
//! - [`Surveys`] / [`Survey`] - Surveys owned by or shared with the user
//! - [`SurveyPages`] / [`SurveyPage`] - Pages of a survey
//! - [`PageQuestions`] / [`PageQuestion`] - Questions on a page
//! - [`SurveyResponses`] / [`SurveyResponse`] - Responses to a survey
//! - [`SurveyTranslations`] / [`SurveyTranslation`] - Survey translations
//! - [`Rollups`], [`Trends`], [`Benchmark`] - Analysis endpoints
//! - [`SurveyCategories`], [`SurveyFolders`], [`SurveyLanguages`], [`SurveyTemplates`]
//!
//! ## Collectors
//!
//! - [`Collectors`] / [`Collector`] - Collectors (the list itself is not an endpoint)
//! - [`CollectorMessages`] / [`CollectorMessage`] - Invite messages
//! - [`CollectorRecipients`] / [`CollectorRecipient`] - Recipients
//! - [`CollectorResponses`] - Responses gathered by one collector
//!
//! ## Contacts
//!
//! - [`Contacts`] / [`Contact`], [`ContactLists`] / [`ContactList`],
//!   [`ContactFields`] / [`ContactField`]
//!
//! ## Users and organizations
//!
//! - [`Users`] / [`User`], [`CurrentUser`]
//! - [`Groups`] / [`Group`], [`GroupMembers`] / [`GroupMember`]
//! - [`Workgroups`] / [`Workgroup`] with members and shares, [`Roles`]
//!
//! ## Other
//!
//! - [`QuestionBank`], [`Webhooks`] / [`Webhook`], [`Errors`] / [`ApiError`]

/// Declares a node with a fixed segment and a `new(context)` constructor.
macro_rules! resource {
    ($(#[$meta:meta])* $name:ident => $endpoint:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            context: $crate::rest::ResourceContext,
        }

        impl $name {
            pub(crate) const fn new(context: $crate::rest::ResourceContext) -> Self {
                Self { context }
            }
        }

        impl $crate::rest::RestResource for $name {
            const ENDPOINT: $crate::rest::Endpoint = $endpoint;

            fn context(&self) -> &$crate::rest::ResourceContext {
                &self.context
            }
        }
    };
}

/// Declares a list node whose entries are `$item`.
macro_rules! collection {
    ($(#[$meta:meta])* $name:ident[$item:ty] => $endpoint:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            context: $crate::rest::ResourceContext,
        }

        impl $crate::rest::RestResource for $name {
            const ENDPOINT: $crate::rest::Endpoint = $endpoint;

            fn context(&self) -> &$crate::rest::ResourceContext {
                &self.context
            }
        }

        impl $crate::rest::CollectionResource for $name {
            type Item = $item;

            fn from_context(context: $crate::rest::ResourceContext) -> Self {
                Self { context }
            }
        }
    };
}

/// Declares an entry node addressed by its id.
macro_rules! item {
    ($(#[$meta:meta])* $name:ident => $endpoint:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            context: $crate::rest::ResourceContext,
            id: String,
        }

        impl $crate::rest::RestResource for $name {
            const ENDPOINT: $crate::rest::Endpoint = $endpoint;

            fn context(&self) -> &$crate::rest::ResourceContext {
                &self.context
            }

            fn identifier(&self) -> Option<&str> {
                Some(&self.id)
            }
        }

        impl $crate::rest::CollectionItemResource for $name {
            fn with_id(context: $crate::rest::ResourceContext, id: &str) -> Self {
                Self {
                    context,
                    id: id.to_string(),
                }
            }

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

mod collectors;
mod contacts;
mod errors;
mod groups;
mod question_bank;
mod root;
mod surveys;
mod users;
mod webhooks;
mod workgroups;

pub use collectors::{
    Collector, CollectorMessage, CollectorMessages, CollectorRecipient, CollectorRecipients,
    CollectorResponses, Collectors, MessageRecipients, MessageRecipientsBulk, MessageSend,
    MessageStats,
};
pub use contacts::{
    Contact, ContactField, ContactFields, ContactList, ContactListContacts, ContactListCopy,
    ContactListMerge, ContactLists, Contacts, ContactsBulk,
};
pub use errors::{ApiError, Errors};
pub use groups::{Group, GroupMember, GroupMembers, Groups};
pub use question_bank::{QuestionBank, QuestionBankQuestions};
pub use root::SurveyMonkey;
pub use surveys::{
    Benchmark, PageQuestion, PageQuestions, Rollups, Survey, SurveyCategories, SurveyCollectors,
    SurveyDetails, SurveyFolders, SurveyLanguages, SurveyPage, SurveyPages, SurveyResponse,
    SurveyResponseDetails, SurveyResponses, SurveyResponsesBulk, SurveyTemplates,
    SurveyTranslation, SurveyTranslations, Surveys, Trends,
};
pub use users::{CurrentUser, User, UserShared, UserWorkgroups, Users, CURRENT_USER_ID};
pub use webhooks::{Webhook, Webhooks};
pub use workgroups::{
    Roles, Workgroup, WorkgroupMember, WorkgroupMembers, WorkgroupMembersBulk, WorkgroupShare,
    WorkgroupShares, WorkgroupSharesBulk, Workgroups,
};
