//! Module: response
//! Responsibility: success/failure envelopes and application-error translation.
//! Does not own: HTTP transport; the status code is carried for the host to use.

mod app_error;
mod envelope;

pub use app_error::AppError;
pub use envelope::{Envelope, envelope_for_error};
