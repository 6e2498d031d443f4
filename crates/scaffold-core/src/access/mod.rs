//! Module: access
//! Responsibility: caller identity, the per-request context, and permission checks.
//! Does not own: authentication or session handling.
//! Boundary: views consult permissions before touching any record.

mod caller;
mod context;
mod permission;


pub use caller::Caller;
pub use context::{Action, Method, RequestContext};
pub use permission::{
    ActionBasedPermission, ActionRule, AllowAny, HasPermissions, IsAdminOrIsSelf,
    IsAdminOrReadOnly, IsAdminUser, IsAuthenticated, Owned, Permission,
};
