//! Collectors and invite messages.
//!
//! `collectors` itself is not an endpoint: collectors are listed and created
//! under a survey, and addressed here by id.
//!
//! ```text
//! collectors
//!   {collector_id}
//!     messages/{message_id}
//!       recipients
//!         bulk
//!       send
//!       stats
//!     recipients/{recipient_id}
//!     responses/{response_id}
//!     stats
//! ```

use super::surveys::{SurveyResponse, SurveyResponsesBulk};
use crate::rest::{methods, CollectionResource, Endpoint, RestResource};

collection! {
    /// All collectors, addressed by id.
    Collectors[Collector] => Endpoint::literal("Collectors", "collectors", methods::CONTAINER)
}

item! {
    /// One collector.
    Collector => Endpoint::identifier("Collector", methods::ITEM_WRITE)
}

impl Collector {
    /// Invite messages of this collector.
    #[must_use]
    pub fn messages(&self) -> CollectorMessages {
        CollectorMessages::from_context(self.descend())
    }

    /// The message with the given id.
    #[must_use]
    pub fn message(&self, id: &str) -> CollectorMessage {
        self.messages().item(id)
    }

    /// Recipients of this collector.
    #[must_use]
    pub fn recipients(&self) -> CollectorRecipients {
        CollectorRecipients::from_context(self.descend())
    }

    /// The recipient with the given id.
    #[must_use]
    pub fn recipient(&self, id: &str) -> CollectorRecipient {
        self.recipients().item(id)
    }

    /// Responses gathered by this collector.
    #[must_use]
    pub fn responses(&self) -> CollectorResponses {
        CollectorResponses::from_context(self.descend())
    }

    /// The response with the given id.
    #[must_use]
    pub fn response(&self, id: &str) -> SurveyResponse {
        self.responses().item(id)
    }

    /// Message statistics for this collector.
    #[must_use]
    pub fn stats(&self) -> MessageStats {
        MessageStats::new(self.descend())
    }
}

collection! {
    /// Invite messages of a collector.
    CollectorMessages[CollectorMessage] =>
        Endpoint::literal("Collector messages", "messages", methods::LIST_CREATE)
}

item! {
    /// One invite message.
    CollectorMessage => Endpoint::identifier("Collector message", methods::ITEM_WRITE)
}

impl CollectorMessage {
    /// Recipients of this message.
    #[must_use]
    pub fn recipients(&self) -> MessageRecipients {
        MessageRecipients::new(self.descend())
    }

    /// Sends, or schedules, the message to all of its recipients.
    #[must_use]
    pub fn send(&self) -> MessageSend {
        MessageSend::new(self.descend())
    }

    /// Delivery statistics for this message.
    #[must_use]
    pub fn stats(&self) -> MessageStats {
        MessageStats::new(self.descend())
    }
}

collection! {
    /// Recipients of a collector.
    CollectorRecipients[CollectorRecipient] =>
        Endpoint::literal("Collector recipients", "recipients", methods::READ)
}

item! {
    /// One recipient of a collector.
    CollectorRecipient => Endpoint::identifier("Collector recipient", methods::ITEM_DELETE)
}

collection! {
    /// Responses gathered by one collector.
    ///
    /// Unlike survey responses, new responses can be posted here.
    CollectorResponses[SurveyResponse] =>
        Endpoint::literal("Collector responses", "responses", methods::LIST_CREATE)
}

impl CollectorResponses {
    /// Responses expanded with every answer.
    #[must_use]
    pub fn bulk(&self) -> SurveyResponsesBulk {
        SurveyResponsesBulk::new(self.descend())
    }
}

resource! {
    /// Recipients of a message (`POST` adds one).
    MessageRecipients =>
        Endpoint::literal("Message recipients", "recipients", methods::LIST_CREATE)
}

impl MessageRecipients {
    /// Adds several recipients at once.
    #[must_use]
    pub fn bulk(&self) -> MessageRecipientsBulk {
        MessageRecipientsBulk::new(self.descend())
    }
}

resource! {
    /// Bulk addition of message recipients.
    MessageRecipientsBulk =>
        Endpoint::literal("Message recipients bulk", "bulk", methods::POST)
}

resource! {
    /// Sends a message.
    MessageSend => Endpoint::literal("Message send", "send", methods::POST)
}

resource! {
    /// Delivery statistics.
    MessageStats => Endpoint::literal("Message stats", "stats", methods::READ)
}
