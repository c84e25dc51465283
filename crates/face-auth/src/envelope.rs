//! Envelope validation and field extraction.
//!
//! Every reply goes through [`check`] before anything is read from it, and
//! every field is read through the `field*` helpers, so a partial reply turns
//! into a [`MalformedResponse`] naming the field that was not there.

use serde_json::Value;
use tracing::warn;

use crate::{catalog, Error, MalformedResponse};

/// The status code of the envelope.
pub const ERROR_CODE: &str = "error_code";
/// The service-provided message accompanying the status code.
pub const ERROR_MSG: &str = "error_msg";
/// The call-specific payload.
pub const RESULT: &str = "result";
/// The candidates of a search.
pub const USER_LIST: &str = "user_list";
/// The user a candidate belongs to.
pub const USER_ID: &str = "user_id";
/// The group a candidate belongs to.
pub const GROUP_ID: &str = "group_id";
/// The token the service assigned to a face.
pub const FACE_TOKEN: &str = "face_token";
/// The similarity score.
pub const SCORE: &str = "score";

/// Validate the envelope, returning it unchanged if the call succeeded.
pub fn check<T>(envelope: &Value) -> Result<&Value, Error<T>>
where
    T: std::error::Error + 'static,
{
    if envelope.is_null() {
        return Err(MalformedResponse::EmptyEnvelope.into());
    }

    let code = field_i64(envelope, ERROR_CODE)?;
    if code == catalog::SUCCESS {
        return Ok(envelope);
    }

    let message = envelope
        .get(ERROR_MSG)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);
    let explanation = catalog::explain_or_unknown(code);
    warn!(
        message = "remote face service reported an error",
        code,
        explanation,
        error_msg = ?message,
    );

    Err(Error::RemoteService {
        code,
        explanation,
        message,
    })
}

/// Get a field, treating `null` as absent.
///
/// Asking a non-object for a field also yields [`MalformedResponse::MissingField`].
pub fn field<'a>(object: &'a Value, name: &'static str) -> Result<&'a Value, MalformedResponse> {
    match object.get(name) {
        None | Some(Value::Null) => Err(MalformedResponse::MissingField(name)),
        Some(value) => Ok(value),
    }
}

/// Get a field that must be a JSON object.
pub fn field_object<'a>(
    object: &'a Value,
    name: &'static str,
) -> Result<&'a Value, MalformedResponse> {
    let value = field(object, name)?;
    if !value.is_object() {
        return Err(MalformedResponse::InvalidField {
            field: name,
            expected: "an object",
        });
    }
    Ok(value)
}

/// Get a field that must be a JSON array.
pub fn field_array<'a>(
    object: &'a Value,
    name: &'static str,
) -> Result<&'a [Value], MalformedResponse> {
    field(object, name)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(MalformedResponse::InvalidField {
            field: name,
            expected: "an array",
        })
}

/// Get a field that must be a string.
pub fn field_str<'a>(object: &'a Value, name: &'static str) -> Result<&'a str, MalformedResponse> {
    field(object, name)?
        .as_str()
        .ok_or(MalformedResponse::InvalidField {
            field: name,
            expected: "a string",
        })
}

/// Get a field that must be a finite number.
///
/// The service is not consistent about numbers, so numeric strings are accepted too.
pub fn field_f64(object: &Value, name: &'static str) -> Result<f64, MalformedResponse> {
    let invalid = MalformedResponse::InvalidField {
        field: name,
        expected: "a number",
    };
    let number = match field(object, name)? {
        Value::Number(number) => number.as_f64(),
        Value::String(string) => string.trim().parse().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite()).ok_or(invalid)
}

/// Get a field that must be an integer.
///
/// Integer strings are accepted too.
pub fn field_i64(object: &Value, name: &'static str) -> Result<i64, MalformedResponse> {
    let number = match field(object, name)? {
        Value::Number(number) => number.as_i64(),
        Value::String(string) => string.trim().parse().ok(),
        _ => None,
    };
    number.ok_or(MalformedResponse::InvalidField {
        field: name,
        expected: "an integer",
    })
}
