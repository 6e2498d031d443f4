use crate::response::{Envelope, envelope::STATUS_BAD_REQUEST};
use serde_json::Value as JsonValue;
use thiserror::Error as ThisError;

///
/// AppError
///
/// An application error that maps directly onto a failure envelope.
/// Setters chain; the status defaults to 400.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("{message}")]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub data: JsonValue,
    pub http_status: u16,
    pub silent: bool,
    pub debug: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: JsonValue::Null,
            http_status: STATUS_BAD_REQUEST,
            silent: false,
            debug: false,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message).set_status_code(404)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new("permission_denied", message).set_status_code(403)
    }

    #[must_use]
    pub fn set_data(mut self, data: JsonValue) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub const fn set_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    #[must_use]
    pub fn set_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub const fn set_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub const fn set_status_code(mut self, status: u16) -> Self {
        self.http_status = status;
        self
    }

    /// Translate into a failure envelope; debug errors are logged first.
    #[must_use]
    pub fn into_envelope(self, api_debug: bool) -> Envelope {
        if self.debug || api_debug {
            tracing::error!(
                code = %self.code,
                status = self.http_status,
                message = %self.message,
                "application error"
            );
        }

        Envelope::fail(self.message, self.code, self.http_status, self.data).silent(self.silent)
    }
}

///
/// TESTS
///
