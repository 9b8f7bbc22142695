//! The root of the resource tree.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::{merge_headers, HttpClient, RequestConfig, Transport};
use crate::config::SurveyMonkeyConfig;
use crate::rest::{methods, CollectionResource, Endpoint, ResourceContext, RestResource};

use super::collectors::{Collector, Collectors};
use super::contacts::{ContactField, ContactFields, ContactList, ContactLists, Contact, Contacts};
use super::errors::{ApiError, Errors};
use super::groups::{Group, Groups};
use super::question_bank::QuestionBank;
use super::surveys::{
    Survey, SurveyCategories, SurveyFolders, SurveyLanguages, SurveyTemplates, Surveys,
};
use super::users::{CurrentUser, User, Users};
use super::webhooks::{Webhook, Webhooks};
use super::workgroups::{Roles, Workgroup, Workgroups};

/// Entry point to the SurveyMonkey v3 API.
///
/// The root carries the base URL and the default headers
/// (`Content-Type: application/json`, `Authorization: Bearer <token>`).
/// Headers from [`SurveyMonkeyConfig`] are merged over these defaults, so a
/// caller header with the same name wins. The root contributes no path
/// segment of its own.
///
/// # Example
///
/// ```rust
/// use surveymonkey_api::rest::{CollectionResource, RestResource};
/// use surveymonkey_api::{AccessToken, SurveyMonkey, SurveyMonkeyConfig};
///
/// let config = SurveyMonkeyConfig::builder()
///     .access_token(AccessToken::new("T").unwrap())
///     .build()
///     .unwrap();
/// let api = SurveyMonkey::new(&config);
///
/// assert_eq!(
///     api.surveys().item("42").collectors().url(),
///     "https://api.surveymonkey.com/v3/surveys/42/collectors"
/// );
/// assert_eq!(api.survey("42").url(), api.surveys().item("42").url());
/// ```
#[derive(Clone, Debug)]
pub struct SurveyMonkey {
    context: ResourceContext,
}

// Verify SurveyMonkey is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SurveyMonkey>();
};

impl SurveyMonkey {
    /// Creates the root using [`HttpClient`] as transport.
    #[must_use]
    pub fn new(config: &SurveyMonkeyConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpClient::new(config)))
    }

    /// Creates the root with a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: &SurveyMonkeyConfig, transport: Arc<dyn Transport>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Authorization".to_string(), config.access_token().bearer());
        merge_headers(&mut headers, config.headers().clone());

        let mut root = RequestConfig::new(config.base_url().as_ref());
        root.headers = headers;
        root.timeout = config.timeout();

        tracing::debug!(base_url = %root.url, "Creating SurveyMonkey resource root");
        Self {
            context: ResourceContext::new(transport, root),
        }
    }

    /// The team of the user, if the account belongs to one.
    #[must_use]
    pub fn groups(&self) -> Groups {
        Groups::from_context(self.descend())
    }

    /// The group with the given id.
    #[must_use]
    pub fn group(&self, id: &str) -> Group {
        self.groups().item(id)
    }

    /// Users. Only individual users are endpoints.
    #[must_use]
    pub fn users(&self) -> Users {
        Users::from_context(self.descend())
    }

    /// The user with the given id; `"me"` addresses the current user.
    #[must_use]
    pub fn user(&self, id: &str) -> User {
        self.users().item(id)
    }

    /// The current user's account (`users/me`).
    #[must_use]
    pub fn me(&self) -> CurrentUser {
        self.users().me()
    }

    /// Contacts.
    #[must_use]
    pub fn contacts(&self) -> Contacts {
        Contacts::from_context(self.descend())
    }

    /// The contact with the given id.
    #[must_use]
    pub fn contact(&self, id: &str) -> Contact {
        self.contacts().item(id)
    }

    /// Custom contact fields.
    #[must_use]
    pub fn contact_fields(&self) -> ContactFields {
        ContactFields::from_context(self.descend())
    }

    /// The custom contact field with the given id.
    #[must_use]
    pub fn contact_field(&self, id: &str) -> ContactField {
        self.contact_fields().item(id)
    }

    /// Contact lists.
    #[must_use]
    pub fn contact_lists(&self) -> ContactLists {
        ContactLists::from_context(self.descend())
    }

    /// The contact list with the given id.
    #[must_use]
    pub fn contact_list(&self, id: &str) -> ContactList {
        self.contact_lists().item(id)
    }

    /// Surveys.
    #[must_use]
    pub fn surveys(&self) -> Surveys {
        Surveys::from_context(self.descend())
    }

    /// The survey with the given id.
    #[must_use]
    pub fn survey(&self, id: &str) -> Survey {
        self.surveys().item(id)
    }

    /// Survey categories, used to filter templates.
    #[must_use]
    pub fn survey_categories(&self) -> SurveyCategories {
        SurveyCategories::new(self.descend())
    }

    /// Survey folders.
    #[must_use]
    pub fn survey_folders(&self) -> SurveyFolders {
        SurveyFolders::new(self.descend())
    }

    /// Languages available for translations.
    #[must_use]
    pub fn survey_languages(&self) -> SurveyLanguages {
        SurveyLanguages::new(self.descend())
    }

    /// Survey templates.
    #[must_use]
    pub fn survey_templates(&self) -> SurveyTemplates {
        SurveyTemplates::new(self.descend())
    }

    /// Collectors, addressed by id.
    #[must_use]
    pub fn collectors(&self) -> Collectors {
        Collectors::from_context(self.descend())
    }

    /// The collector with the given id.
    #[must_use]
    pub fn collector(&self, id: &str) -> Collector {
        self.collectors().item(id)
    }

    /// Workgroups of the organization.
    #[must_use]
    pub fn workgroups(&self) -> Workgroups {
        Workgroups::from_context(self.descend())
    }

    /// The workgroup with the given id.
    #[must_use]
    pub fn workgroup(&self, id: &str) -> Workgroup {
        self.workgroups().item(id)
    }

    /// User roles of the organization.
    #[must_use]
    pub fn roles(&self) -> Roles {
        Roles::new(self.descend())
    }

    /// The question bank.
    #[must_use]
    pub fn question_bank(&self) -> QuestionBank {
        QuestionBank::new(self.descend())
    }

    /// Webhooks.
    #[must_use]
    pub fn webhooks(&self) -> Webhooks {
        Webhooks::from_context(self.descend())
    }

    /// The webhook with the given id.
    #[must_use]
    pub fn webhook(&self, id: &str) -> Webhook {
        self.webhooks().item(id)
    }

    /// Known API errors.
    #[must_use]
    pub fn errors(&self) -> Errors {
        Errors::from_context(self.descend())
    }

    /// The known error with the given id.
    #[must_use]
    pub fn error(&self, id: &str) -> ApiError {
        self.errors().item(id)
    }
}

impl RestResource for SurveyMonkey {
    const ENDPOINT: Endpoint = Endpoint::root("SurveyMonkey", methods::READ);

    fn context(&self) -> &ResourceContext {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, BaseUrl};
    use crate::rest::test_support::NullTransport;
    use std::time::Duration;

    fn api(config: &SurveyMonkeyConfig) -> SurveyMonkey {
        SurveyMonkey::with_transport(config, Arc::new(NullTransport))
    }

    fn config() -> SurveyMonkeyConfig {
        SurveyMonkeyConfig::builder()
            .access_token(AccessToken::new("T").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_root_appends_no_segment() {
        let api = api(&config());

        assert_eq!(api.own_segment(), "");
        assert_eq!(api.url(), "https://api.surveymonkey.com/v3");
        assert_eq!(api.composed_options(), *api.configuration());
    }

    #[test]
    fn test_root_sets_default_headers() {
        let api = api(&config());
        let headers = &api.configuration().headers;

        assert_eq!(headers.get("Authorization"), Some(&"Bearer T".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_caller_headers_are_merged_and_win() {
        let config = SurveyMonkeyConfig::builder()
            .access_token(AccessToken::new("T").unwrap())
            .header("X-Trace", "abc")
            .header("content-type", "application/vnd.custom+json")
            .build()
            .unwrap();
        let headers = api(&config).configuration().headers.clone();

        assert_eq!(headers.get("X-Trace"), Some(&"abc".to_string()));
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/vnd.custom+json".to_string())
        );
        assert!(!headers.contains_key("Content-Type"));
        assert_eq!(headers.get("Authorization"), Some(&"Bearer T".to_string()));
    }

    #[test]
    fn test_base_url_and_timeout_come_from_config() {
        let config = SurveyMonkeyConfig::builder()
            .access_token(AccessToken::new("T").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000/v3/").unwrap())
            .timeout(Duration::from_secs(7))
            .build()
            .unwrap();
        let api = api(&config);

        assert_eq!(api.surveys().url(), "http://localhost:9000/v3/surveys");
        assert_eq!(
            api.surveys().composed_options().timeout,
            Some(Duration::from_secs(7))
        );
    }

    #[test]
    fn test_top_level_accessors() {
        let api = api(&config());
        let base = "https://api.surveymonkey.com/v3";

        let cases = [
            (api.groups().url(), "groups"),
            (api.group("g").url(), "groups/g"),
            (api.users().url(), "users"),
            (api.user("u").url(), "users/u"),
            (api.me().url(), "users/me"),
            (api.contacts().url(), "contacts"),
            (api.contact("c").url(), "contacts/c"),
            (api.contact_fields().url(), "contact_fields"),
            (api.contact_field("f").url(), "contact_fields/f"),
            (api.contact_lists().url(), "contact_lists"),
            (api.contact_list("l").url(), "contact_lists/l"),
            (api.surveys().url(), "surveys"),
            (api.survey("s").url(), "surveys/s"),
            (api.survey_categories().url(), "survey_categories"),
            (api.survey_folders().url(), "survey_folders"),
            (api.survey_languages().url(), "survey_languages"),
            (api.survey_templates().url(), "survey_templates"),
            (api.collectors().url(), "collectors"),
            (api.collector("k").url(), "collectors/k"),
            (api.workgroups().url(), "workgroups"),
            (api.workgroup("w").url(), "workgroups/w"),
            (api.roles().url(), "roles"),
            (api.question_bank().url(), "question_bank"),
            (api.webhooks().url(), "webhooks"),
            (api.webhook("h").url(), "webhooks/h"),
            (api.errors().url(), "errors"),
            (api.error("e").url(), "errors/e"),
        ];

        for (url, path) in cases {
            assert_eq!(url, format!("{base}/{path}"));
        }
    }
}
