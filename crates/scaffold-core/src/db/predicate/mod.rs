mod model;
mod normalize;
mod runtime;
mod semantics;
mod validate;


pub use model::{CompareOp, ComparePredicate, Predicate};
pub use normalize::normalize;
pub use runtime::PredicateProgram;

pub(in crate::db) use runtime::read_path_values;
pub use validate::{ValidateError, validate_compare};
