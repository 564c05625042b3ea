//
//  unsplash-client
//  api/outcome.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Outcomes
//!
//! Every request produces exactly one [`Outcome`]. Failures are values, not
//! panics or early returns: a transport error, an unexpected status code and a
//! body that does not match the target type are all reported to the caller.
//!
//! ## Decode classification
//!
//! | Kind | Cause |
//! |------|-------|
//! | [`DecodeErrorKind::MissingField`] | A required field is absent |
//! | [`DecodeErrorKind::TypeMismatch`] | A field has the wrong JSON type or value |
//! | [`DecodeErrorKind::MissingValue`] | A non-optional field is `null` |
//! | [`DecodeErrorKind::Malformed`] | The body is not valid JSON at all |
//!
//! The accompanying path uses `.` between object keys and `[i]` for array
//! indices, e.g. `[0].user.links`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::error::Category;

use super::common::ApiError;

/// Sub-kind of a [`Outcome::DecodeFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    MissingField,
    TypeMismatch,
    MissingValue,
    Malformed,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingField => "missing required field",
            Self::TypeMismatch => "type mismatch",
            Self::MissingValue => "missing value for non-optional field",
            Self::Malformed => "malformed payload",
        };
        f.write_str(text)
    }
}

/// The single result of one request.
///
/// # Example
///
/// ```rust
/// use unsplash_client::api::{DecodeErrorKind, Outcome};
///
/// fn describe(outcome: &Outcome<String>) -> String {
///     match outcome {
///         Outcome::Decoded { value, status } => format!("{status}: {value}"),
///         Outcome::StatusMismatch { status } => format!("unexpected status {status}"),
///         Outcome::TransportFailure { description } => description.clone(),
///         Outcome::DecodeFailure { kind, path } => {
///             format!("{kind} at {}", path.as_deref().unwrap_or("<root>"))
///         }
///         Outcome::MissingBearerToken => "log in first".to_string(),
///     }
/// }
///
/// let outcome = Outcome::DecodeFailure {
///     kind: DecodeErrorKind::MissingField,
///     path: Some("urls".to_string()),
/// };
/// assert_eq!(describe(&outcome), "missing required field at urls");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The status matched and the body decoded into `T`.
    ///
    /// For raw requests `T` is the undecoded
    /// [`RawResponse`](super::transport::RawResponse).
    Decoded { value: T, status: u16 },

    /// The server answered with a status other than the expected one.
    /// The body was not decoded.
    StatusMismatch { status: u16 },

    /// The request never completed (DNS, connection, timeout).
    TransportFailure { description: String },

    /// The body did not match the target type.
    DecodeFailure {
        kind: DecodeErrorKind,
        path: Option<String>,
    },

    /// The endpoint requires a user bearer token and the client has none.
    /// No request was sent.
    MissingBearerToken,
}

impl<T> Outcome<T> {
    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded { .. })
    }

    /// The HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Decoded { status, .. } | Self::StatusMismatch { status } => Some(*status),
            _ => None,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Decoded { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Decoded { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Maps the decoded value, leaving failures untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Decoded { value, status } => Outcome::Decoded {
                value: f(value),
                status,
            },
            Self::StatusMismatch { status } => Outcome::StatusMismatch { status },
            Self::TransportFailure { description } => Outcome::TransportFailure { description },
            Self::DecodeFailure { kind, path } => Outcome::DecodeFailure { kind, path },
            Self::MissingBearerToken => Outcome::MissingBearerToken,
        }
    }

    /// Converts into a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Decoded { value, .. } => Ok(value),
            Self::StatusMismatch { status } => Err(ApiError::from_status(status)),
            Self::TransportFailure { description } => Err(ApiError::Transport(description)),
            Self::DecodeFailure { kind, path } => Err(ApiError::Decode { kind, path }),
            Self::MissingBearerToken => Err(ApiError::AuthRequired),
        }
    }
}

/// Decodes a JSON body into `T`, classifying any failure.
///
/// Trailing non-whitespace after the JSON value counts as
/// [`DecodeErrorKind::Malformed`].
pub fn decode_body<T: DeserializeOwned>(
    body: &[u8],
) -> Result<T, (DecodeErrorKind, Option<String>)> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value: T = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        classify(err.inner(), &path)
    })?;
    deserializer
        .end()
        .map_err(|_| (DecodeErrorKind::Malformed, None))?;
    Ok(value)
}

fn classify(err: &serde_json::Error, path: &str) -> (DecodeErrorKind, Option<String>) {
    // serde_path_to_error renders the root as "."
    let known = (path != ".").then(|| path.to_string());

    match err.classify() {
        Category::Io | Category::Syntax | Category::Eof => (DecodeErrorKind::Malformed, known),
        Category::Data => {
            let message = err.to_string();
            if let Some(field) = missing_field_name(&message) {
                let full = match known {
                    Some(parent) => format!("{parent}.{field}"),
                    None => field.to_string(),
                };
                (DecodeErrorKind::MissingField, Some(full))
            } else if message.starts_with("invalid type: null") {
                (DecodeErrorKind::MissingValue, known)
            } else {
                (DecodeErrorKind::TypeMismatch, known)
            }
        }
    }
}

fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Inner {
        name: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
        count: u32,
        inner: Inner,
        #[serde(default)]
        tags: Vec<Inner>,
    }

    fn fail(body: &str) -> (DecodeErrorKind, Option<String>) {
        decode_body::<Record>(body.as_bytes()).unwrap_err()
    }

    #[test]
    fn test_decodes_valid_body() {
        let record: Record =
            decode_body(br#"{"id":"a","count":2,"inner":{"name":"x"}}"#).unwrap();
        assert_eq!(record.id, "a");
        assert_eq!(record.inner.name, "x");
    }

    #[test]
    fn test_missing_top_level_field() {
        assert_eq!(
            fail(r#"{"id":"a","inner":{"name":"x"}}"#),
            (DecodeErrorKind::MissingField, Some("count".to_string()))
        );
    }

    #[test]
    fn test_missing_nested_field() {
        assert_eq!(
            fail(r#"{"id":"a","count":1,"inner":{}}"#),
            (DecodeErrorKind::MissingField, Some("inner.name".to_string()))
        );
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            fail(r#"{"id":"a","count":"two","inner":{"name":"x"}}"#),
            (DecodeErrorKind::TypeMismatch, Some("count".to_string()))
        );
    }

    #[test]
    fn test_null_for_required_value() {
        assert_eq!(
            fail(r#"{"id":null,"count":1,"inner":{"name":"x"}}"#),
            (DecodeErrorKind::MissingValue, Some("id".to_string()))
        );
    }

    #[test]
    fn test_array_index_in_path() {
        assert_eq!(
            fail(r#"{"id":"a","count":1,"inner":{"name":"x"},"tags":[{"name":"ok"},{"name":5}]}"#),
            (DecodeErrorKind::TypeMismatch, Some("tags[1].name".to_string()))
        );
    }

    #[test]
    fn test_malformed_payloads() {
        assert_eq!(fail("<html>oops</html>").0, DecodeErrorKind::Malformed);
        assert_eq!(fail(r#"{"id":"a","#).0, DecodeErrorKind::Malformed);
        assert_eq!(fail("").0, DecodeErrorKind::Malformed);
        assert_eq!(
            fail(r#"{"id":"a","count":1,"inner":{"name":"x"}} trailing"#),
            (DecodeErrorKind::Malformed, None)
        );
    }

    #[test]
    fn test_into_result_maps_every_variant() {
        let ok: Outcome<u8> = Outcome::Decoded { value: 1, status: 200 };
        assert_eq!(ok.into_result().unwrap(), 1);

        let not_found: Outcome<u8> = Outcome::StatusMismatch { status: 404 };
        assert!(matches!(not_found.into_result(), Err(ApiError::NotFound)));

        let transport: Outcome<u8> = Outcome::TransportFailure {
            description: "connection refused".into(),
        };
        assert!(matches!(transport.into_result(), Err(ApiError::Transport(_))));

        let missing: Outcome<u8> = Outcome::MissingBearerToken;
        assert!(matches!(missing.into_result(), Err(ApiError::AuthRequired)));
    }

    #[test]
    fn test_map_and_accessors() {
        let outcome: Outcome<u8> = Outcome::Decoded { value: 2, status: 201 };
        let mapped = outcome.map(|v| v * 10);
        assert_eq!(mapped.status(), Some(201));
        assert_eq!(mapped.as_value(), Some(&20));

        let failure: Outcome<u8> = Outcome::TransportFailure {
            description: "dns".into(),
        };
        assert_eq!(failure.status(), None);
        assert!(!failure.is_decoded());
        assert_eq!(failure.value(), None);
    }
}
