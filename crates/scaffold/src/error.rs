use derive_more::Display;
use scaffold_core::{
    config::ConfigError,
    db::predicate::ValidateError,
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
    response::AppError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable class + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    /// HTTP status a transport layer should answer with.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match &self.kind {
            ErrorKind::Query(QueryErrorKind::Invalid | QueryErrorKind::Unsupported)
            | ErrorKind::Config => 400,
            ErrorKind::Query(QueryErrorKind::NotFound) => 404,
            ErrorKind::Resource(ResourceErrorKind::Conflict) => 409,
            ErrorKind::App { status } => *status,
            ErrorKind::Resource(ResourceErrorKind::Invalid) | ErrorKind::Internal => 500,
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match (err.class, err.origin) {
            (ErrorClass::NotFound, _) => ErrorKind::Query(QueryErrorKind::NotFound),
            (ErrorClass::Unsupported, CoreErrorOrigin::Query) => {
                ErrorKind::Query(QueryErrorKind::Unsupported)
            }
            (ErrorClass::Conflict, CoreErrorOrigin::Resource) => {
                ErrorKind::Resource(ResourceErrorKind::Conflict)
            }
            (ErrorClass::InvariantViolation, CoreErrorOrigin::Resource) => {
                ErrorKind::Resource(ResourceErrorKind::Invalid)
            }
            (_, CoreErrorOrigin::Config) => ErrorKind::Config,
            _ => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<ValidateError> for Error {
    fn from(err: ValidateError) -> Self {
        Self::new(
            ErrorKind::Query(QueryErrorKind::Invalid),
            ErrorOrigin::Query,
            err.to_string(),
        )
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

impl From<AppError> for Error {
    fn from(err: AppError) -> Self {
        Self::new(
            ErrorKind::App {
                status: err.http_status,
            },
            ErrorOrigin::Response,
            err.message,
        )
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and transport adapters.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Query(QueryErrorKind),
    Resource(ResourceErrorKind),

    /// Configuration failed to load or validate.
    Config,

    /// Application error raised by a view, carrying its HTTP status.
    App { status: u16 },

    /// The caller cannot remediate this.
    Internal,
}

///
/// QueryErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QueryErrorKind {
    /// Query shape is invalid (unknown fields, bad literals).
    Invalid,

    /// The query is valid but requests an unsupported feature.
    Unsupported,

    /// Requested page or record does not exist.
    NotFound,
}

///
/// ResourceErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ResourceErrorKind {
    /// Route name already registered.
    Conflict,

    /// Resource declaration disagrees with its model.
    Invalid,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers and transport adapters.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Query,
    Resource,
    Response,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Config => Self::Config,
            CoreErrorOrigin::Query => Self::Query,
            CoreErrorOrigin::Resource => Self::Resource,
            CoreErrorOrigin::Response => Self::Response,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_resource_conflict() {
        let err: Error = InternalError::new(
            ErrorClass::Conflict,
            CoreErrorOrigin::Resource,
            "route 'book' already registered",
        )
        .into();

        assert_eq!(err.kind, ErrorKind::Resource(ResourceErrorKind::Conflict));
        assert_eq!(err.origin, ErrorOrigin::Resource);
        assert_eq!(err.http_status(), 409);
        assert_eq!(err.to_string(), "route 'book' already registered");
    }

    #[test]
    fn unsupported_query_maps_to_query_kind() {
        let err: Error =
            InternalError::new(ErrorClass::Unsupported, CoreErrorOrigin::Query, "bad").into();

        assert_eq!(err.kind, ErrorKind::Query(QueryErrorKind::Unsupported));
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn invariant_in_query_is_internal() {
        let err: Error = InternalError::new(
            ErrorClass::InvariantViolation,
            CoreErrorOrigin::Query,
            "broken",
        )
        .into();

        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn validate_error_is_invalid_query() {
        let err: Error = ValidateError::InvalidPath {
            path: "title__".to_string(),
        }
        .into();

        assert_eq!(err.kind, ErrorKind::Query(QueryErrorKind::Invalid));
        assert_eq!(err.message, "invalid field path 'title__'");
    }

    #[test]
    fn app_error_keeps_status() {
        let err: Error = AppError::not_found("Invalid page.").into();

        assert_eq!(err.kind, ErrorKind::App { status: 404 });
        assert_eq!(err.origin, ErrorOrigin::Response);
        assert_eq!(err.message, "Invalid page.");
    }

    #[test]
    fn config_error_is_config_kind() {
        let err: Error = ConfigError::Validation("page_size must be positive".into()).into();

        assert_eq!(err.kind, ErrorKind::Config);
        assert_eq!(err.origin.to_string(), "Config");
    }

    #[test]
    fn error_serializes_kind_and_origin() {
        let err = Error::new(
            ErrorKind::App { status: 403 },
            ErrorOrigin::Response,
            "denied",
        );
        let json = serde_json::to_value(&err).expect("serialize error");

        assert_eq!(json["kind"]["App"]["status"], 403);
        assert_eq!(json["origin"], "Response");
        assert_eq!(json["message"], "denied");
    }
}
