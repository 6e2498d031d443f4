//! Core runtime for Scaffold: entity models, values, predicates, the deep
//! query-string filter, list-endpoint helpers, and the ergonomics exported
//! via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod access;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod resource;
pub mod response;
pub mod traits;
pub mod value;
pub mod view;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Separator between relation hops and the trailing lookup in a field path.
pub const LOOKUP_SEP: &str = "__";

/// Query parameter prefix that marks a compound boolean filter expression.
pub const COMPLEX_QUERY_PREFIX: &str = "_complex_query";

/// Query parameter that requests de-duplication of a filtered result.
pub const DISTINCT_PARAM: &str = "~DISTINCT";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, filters, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        access::{Action, Caller, Method, RequestContext},
        model::{entity::EntityModel, field::EntityFieldModel, field::FieldKind},
        traits::{EntityKind, EntityValue},
        value::{RecordValue, Value},
    };
}
