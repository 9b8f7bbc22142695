//! Version-specific endpoint catalogs.
//!
//! Endpoints are grouped by API version so a future version can change
//! paths or allowed methods without breaking existing code:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports the current version)
//!   v3/
//!     mod.rs         <- Root entry point and endpoint modules
//! ```
//!
//! # Using Resources
//!
//! The current version is re-exported at this module level:
//!
//! ```rust,ignore
//! use surveymonkey_api::rest::resources::SurveyMonkey;
//!
//! // Or explicitly specify a version:
//! use surveymonkey_api::rest::resources::v3::SurveyMonkey;
//! ```
//!
//! # Version Support
//!
//! Currently supported API versions:
//! - `v3` - `https://api.surveymonkey.com/v3`

pub mod v3;

// Re-export types from the current version for convenience
pub use v3::*;
