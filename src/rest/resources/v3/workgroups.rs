//! Workgroups and roles of an organization.

use crate::rest::{methods, CollectionResource, Endpoint, RestResource};

collection! {
    /// Workgroups the user can see in their organization.
    Workgroups[Workgroup] => Endpoint::literal("Workgroups", "workgroups", methods::LIST_CREATE)
}

item! {
    /// One workgroup.
    Workgroup => Endpoint::identifier("Workgroup", methods::ITEM_PATCH_DELETE)
}

impl Workgroup {
    /// Members of this workgroup.
    #[must_use]
    pub fn members(&self) -> WorkgroupMembers {
        WorkgroupMembers::from_context(self.descend())
    }

    /// The member with the given id.
    #[must_use]
    pub fn member(&self, id: &str) -> WorkgroupMember {
        self.members().item(id)
    }

    /// Resources shared in this workgroup.
    #[must_use]
    pub fn shares(&self) -> WorkgroupShares {
        WorkgroupShares::from_context(self.descend())
    }

    /// The share with the given id.
    #[must_use]
    pub fn share(&self, id: &str) -> WorkgroupShare {
        self.shares().item(id)
    }
}

collection! {
    /// Members of a workgroup.
    WorkgroupMembers[WorkgroupMember] =>
        Endpoint::literal("Workgroup members", "members", methods::LIST_CREATE)
}

impl WorkgroupMembers {
    /// Adds several members at once.
    #[must_use]
    pub fn bulk(&self) -> WorkgroupMembersBulk {
        WorkgroupMembersBulk::new(self.descend())
    }
}

item! {
    /// One workgroup member.
    WorkgroupMember => Endpoint::identifier("Workgroup member", methods::ITEM_PATCH_DELETE)
}

resource! {
    WorkgroupMembersBulk =>
        Endpoint::literal("Workgroup members bulk", "bulk", methods::BULK_ACTION)
}

collection! {
    /// Resources shared in a workgroup.
    WorkgroupShares[WorkgroupShare] =>
        Endpoint::literal("Workgroup shares", "shares", methods::LIST_CREATE)
}

impl WorkgroupShares {
    /// Shares several resources at once.
    #[must_use]
    pub fn bulk(&self) -> WorkgroupSharesBulk {
        WorkgroupSharesBulk::new(self.descend())
    }
}

item! {
    /// One shared resource.
    WorkgroupShare => Endpoint::identifier("Workgroup share", methods::ITEM_DELETE)
}

resource! {
    WorkgroupSharesBulk =>
        Endpoint::literal("Workgroup shares bulk", "bulk", methods::BULK_ACTION)
}

resource! {
    /// User roles available in an organization.
    Roles => Endpoint::literal("Roles", "roles", methods::READ)
}
