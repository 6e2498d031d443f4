use serde::Serialize;
use serde_json::Value as JsonValue;
use std::error::Error;

pub(crate) const STATUS_OK: u16 = 200;
pub(crate) const STATUS_BAD_REQUEST: u16 = 400;

///
/// Envelope
///
/// `{ok, msg, errcode, data, silent}` response body plus its HTTP status.
/// Empty fields are omitted from the body.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Envelope {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errcode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,

    #[serde(skip_serializing_if = "is_false")]
    pub silent: bool,

    #[serde(skip)]
    pub status: u16,
}

impl Envelope {
    #[must_use]
    pub fn success(msg: impl Into<String>, data: JsonValue) -> Self {
        Self {
            ok: true,
            msg: non_empty(msg.into()),
            errcode: None,
            data: truthy(data),
            silent: false,
            status: STATUS_OK,
        }
    }

    #[must_use]
    pub fn fail(
        msg: impl Into<String>,
        errcode: impl Into<String>,
        status: u16,
        data: JsonValue,
    ) -> Self {
        Self {
            ok: false,
            msg: non_empty(msg.into()),
            errcode: non_empty(errcode.into()),
            data: truthy(data),
            silent: false,
            status,
        }
    }

    #[must_use]
    pub const fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// The response body.
    #[must_use]
    pub fn body(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Failure envelope for an error that is not an application error.
#[must_use]
pub fn envelope_for_error(err: &dyn Error) -> Envelope {
    Envelope::fail(err.to_string(), "", STATUS_BAD_REQUEST, JsonValue::Null)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

// Empty containers, zero, false, and null are dropped from the body.
fn truthy(data: JsonValue) -> Option<JsonValue> {
    let keep = match &data {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(map) => !map.is_empty(),
    };

    keep.then_some(data)
}

///
/// TESTS
///
