//! Module: db::filter
//! Responsibility: request-driven filters over record collections.
//! Does not own: predicate semantics or storage.
//! Boundary: views run deep filter, search, then ordering.

mod deep;
mod literal;
mod ordering;
mod policy;
mod search;


pub use deep::{
    ClauseParser, DeepFilter, DeepFilterPlan, DeepFiltered, DeepSettings, split_lookup,
};
pub use literal::normalize_literal;
pub use ordering::{DefaultOrdering, OrderingFilter};
pub use policy::{ClauseError, DegradedClause, MalformedQueryPolicy};
pub use search::{SearchField, SearchFilter};
