//! Webhooks subscribing to SurveyMonkey events.

use crate::rest::{methods, Endpoint};

collection! {
    /// Webhooks of the user.
    Webhooks[Webhook] => Endpoint::literal("Webhooks", "webhooks", methods::READ)
}

item! {
    /// One webhook.
    Webhook => Endpoint::identifier("Webhook", methods::ITEM_WRITE)
}
