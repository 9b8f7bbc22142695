//! Users and the current user's account.

use crate::clients::HttpMethod;
use crate::rest::{methods, CollectionItemResource, Endpoint, ResourceContext, RestResource};

/// The id that addresses the authenticated user.
pub const CURRENT_USER_ID: &str = "me";

collection! {
    /// Users; only individual users are endpoints.
    Users[User] => Endpoint::literal("Users", "users", methods::CONTAINER)
}

impl Users {
    /// The authenticated user's account, including their plan.
    #[must_use]
    pub fn me(&self) -> CurrentUser {
        CurrentUser::new(self.descend())
    }
}

resource! {
    /// The authenticated user's account details.
    CurrentUser => Endpoint::literal("Current user", CURRENT_USER_ID, methods::READ)
}

/// One user.
///
/// A user is only a container for [`shared`](Self::shared) and
/// [`workgroups`](Self::workgroups), except for the id `"me"`, which
/// addresses the same URL as [`CurrentUser`] and accepts its methods.
#[derive(Clone, Debug)]
pub struct User {
    context: ResourceContext,
    id: String,
}

impl User {
    /// Returns `true` if this addresses the authenticated user.
    #[must_use]
    pub fn is_current_user(&self) -> bool {
        self.id == CURRENT_USER_ID
    }

    /// Resources shared with this user across all workgroups.
    #[must_use]
    pub fn shared(&self) -> UserShared {
        UserShared::new(self.descend())
    }

    /// Workgroups this user belongs to.
    #[must_use]
    pub fn workgroups(&self) -> UserWorkgroups {
        UserWorkgroups::new(self.descend())
    }
}

impl RestResource for User {
    const ENDPOINT: Endpoint = Endpoint::identifier("User", methods::CONTAINER);

    fn context(&self) -> &ResourceContext {
        &self.context
    }

    fn identifier(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn permitted_methods(&self) -> &'static [HttpMethod] {
        if self.is_current_user() {
            CurrentUser::ENDPOINT.methods
        } else {
            Self::ENDPOINT.methods
        }
    }
}

impl CollectionItemResource for User {
    fn with_id(context: ResourceContext, id: &str) -> Self {
        Self {
            context,
            id: id.to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

resource! {
    /// Resources shared with a user.
    UserShared => Endpoint::literal("User shared", "shared", methods::READ)
}

resource! {
    /// Workgroups a user is in.
    UserWorkgroups => Endpoint::literal("User workgroups", "workgroups", methods::READ)
}
