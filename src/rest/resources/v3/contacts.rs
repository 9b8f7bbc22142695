//! Contacts, contact lists and custom contact fields.

use crate::rest::{methods, Endpoint, RestResource};

collection! {
    /// All contacts of the user.
    Contacts[Contact] => Endpoint::literal("Contacts", "contacts", methods::LIST_CREATE)
}

impl Contacts {
    /// Contacts with every field, or bulk creation.
    #[must_use]
    pub fn bulk(&self) -> ContactsBulk {
        ContactsBulk::new(self.descend())
    }
}

resource! {
    /// Contacts with all available fields.
    ContactsBulk => Endpoint::literal("Contacts bulk", "bulk", methods::GET_POST)
}

item! {
    /// One contact.
    Contact => Endpoint::identifier("Contact", methods::ITEM_WRITE)
}

collection! {
    /// Contact lists used to send invite messages.
    ContactLists[ContactList] =>
        Endpoint::literal("Contact lists", "contact_lists", methods::LIST_CREATE)
}

item! {
    /// One contact list.
    ContactList => Endpoint::identifier("Contact list", methods::ITEM_WRITE)
}

impl ContactList {
    /// Contacts in this list.
    #[must_use]
    pub fn contacts(&self) -> ContactListContacts {
        ContactListContacts::new(self.descend())
    }

    /// Copies this list.
    #[must_use]
    pub fn copy(&self) -> ContactListCopy {
        ContactListCopy::new(self.descend())
    }

    /// Merges this list into another.
    #[must_use]
    pub fn merge(&self) -> ContactListMerge {
        ContactListMerge::new(self.descend())
    }
}

resource! {
    /// Contacts in one contact list.
    ContactListContacts =>
        Endpoint::literal("Contact list contacts", "contacts", methods::LIST_CREATE)
}

impl ContactListContacts {
    /// Contacts of the list with every field, or bulk creation.
    #[must_use]
    pub fn bulk(&self) -> ContactsBulk {
        ContactsBulk::new(self.descend())
    }
}

resource! {
    ContactListCopy => Endpoint::literal("Contact list copy", "copy", methods::POST)
}

resource! {
    ContactListMerge => Endpoint::literal("Contact list merge", "merge", methods::POST)
}

collection! {
    /// Custom contact fields.
    ContactFields[ContactField] =>
        Endpoint::literal("Contact fields", "contact_fields", methods::READ)
}

item! {
    /// One custom contact field; only its label can change.
    ContactField => Endpoint::identifier("Contact field", methods::ITEM_PATCH)
}
