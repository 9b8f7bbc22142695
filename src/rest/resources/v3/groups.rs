//! Teams the user's account belongs to.

use crate::rest::{methods, CollectionResource, Endpoint, RestResource};

collection! {
    /// The team of the user, if the account belongs to one.
    Groups[Group] => Endpoint::literal("Groups", "groups", methods::READ)
}

item! {
    /// A team's details, including its owner and email address.
    Group => Endpoint::identifier("Group", methods::READ)
}

impl Group {
    /// Members of this group.
    #[must_use]
    pub fn members(&self) -> GroupMembers {
        GroupMembers::from_context(self.descend())
    }

    /// The member with the given id.
    #[must_use]
    pub fn member(&self, id: &str) -> GroupMember {
        self.members().item(id)
    }
}

collection! {
    /// Users added as members of a group.
    GroupMembers[GroupMember] => Endpoint::literal("Group members", "members", methods::READ)
}

item! {
    /// A group member, including their role and status.
    GroupMember => Endpoint::identifier("Group member", methods::READ)
}
