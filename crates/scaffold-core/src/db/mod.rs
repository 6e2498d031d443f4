//! Query-side runtime: predicates, filters, record collections, and paging.

pub mod collection;
pub mod direction;
pub mod filter;
pub mod pagination;
pub mod predicate;
pub mod query;
