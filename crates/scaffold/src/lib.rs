//! ## Crate layout
//! - `core`: entity models, values, predicates, the deep filter, and list helpers.
//! - `error`: public error taxonomy mapped from the core runtime errors.
//!
//! The `prelude` module mirrors the surface used by list endpoints.

pub use scaffold_core as core;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{
    COMPLEX_QUERY_PREFIX, DISTINCT_PARAM, LOOKUP_SEP, config::ScaffoldConfig, db, view::ListView,
};
pub use error::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        access::{
            Action, ActionBasedPermission, AllowAny, Caller, HasPermissions, IsAdminOrIsSelf,
            IsAdminOrReadOnly, IsAdminUser, IsAuthenticated, Method, Owned, Permission,
            RequestContext,
        },
        config::ScaffoldConfig,
        db::{
            collection::{RecordCollection as _, RecordSet},
            filter::{DeepFilter, MalformedQueryPolicy, OrderingFilter, SearchFilter},
            pagination::PageNumberPagination,
            query::QueryParams,
        },
        model::{entity::EntityModel, field::EntityFieldModel, field::FieldKind},
        resource::{Registry, ResourceSpec},
        response::{AppError, Envelope},
        traits::{EntityKind as _, EntityValue as _},
        value::Value,
        view::{ListResponse, ListView},
    };
    pub use serde::{Deserialize, Serialize};
}
