use crate::{access::Caller, db::query::QueryParams};
use derive_more::Display;

///
/// Method
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("HEAD")]
    Head,
    #[display("OPTIONS")]
    Options,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("PATCH")]
    Patch,
    #[display("DELETE")]
    Delete,
}

impl Method {
    /// Methods that never modify state.
    #[must_use]
    pub const fn is_safe(self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options)
    }
}

///
/// Action
///
/// The resource operation a request is routed to.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum Action {
    #[display("list")]
    List,
    #[display("retrieve")]
    Retrieve,
    #[display("create")]
    Create,
    #[display("update")]
    Update,
    #[display("partial_update")]
    PartialUpdate,
    #[display("destroy")]
    Destroy,
    #[display("{_0}")]
    Custom(String),
}

///
/// RequestContext
///
/// Everything a list pipeline needs to know about the current request,
/// passed explicitly down the call chain.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestContext {
    pub method: Method,
    pub action: Action,
    pub caller: Caller,
    pub params: QueryParams,
}

impl RequestContext {
    #[must_use]
    pub const fn new(method: Method, action: Action, caller: Caller, params: QueryParams) -> Self {
        Self {
            method,
            action,
            caller,
            params,
        }
    }

    /// A `GET` list request.
    #[must_use]
    pub const fn list(caller: Caller, params: QueryParams) -> Self {
        Self::new(Method::Get, Action::List, caller, params)
    }
}
