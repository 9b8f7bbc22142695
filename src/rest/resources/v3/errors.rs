//! The catalog of known API errors.

use crate::rest::{methods, Endpoint};

collection! {
    /// Known API errors.
    Errors[ApiError] => Endpoint::literal("Errors", "errors", methods::READ)
}

item! {
    /// The details of one known error.
    ApiError => Endpoint::identifier("Error", methods::READ)
}
