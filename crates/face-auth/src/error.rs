//! The errors of the biometric client.

use thiserror::Error;

/// The error of a biometric client call.
///
/// `T` is the error type of the transport the client runs over.
#[derive(Error, Debug)]
pub enum Error<T: std::error::Error + 'static> {
    /// The remote service reported a non-zero error code.
    #[error("remote face service error {code}: {explanation}")]
    RemoteService {
        /// The error code reported by the service.
        code: i64,
        /// The human-readable explanation of the code from the catalog.
        explanation: &'static str,
        /// The `error_msg` that came along with the code, if any.
        message: Option<String>,
    },
    /// The reply did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] MalformedResponse),
    /// The search succeeded but nobody in the group matched.
    /// The user has most likely not been enrolled yet.
    #[error("no match found, the face is likely not enrolled")]
    NoMatchFound,
    /// The transport failed to deliver the call.
    #[error("transport error: {0}")]
    Transport(#[source] T),
}

/// The kind of an [`Error`], for the callers that only want to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::RemoteService`].
    RemoteService,
    /// See [`Error::MalformedResponse`].
    MalformedResponse,
    /// See [`Error::NoMatchFound`].
    NoMatchFound,
    /// See [`Error::Transport`].
    Transport,
}

impl<T: std::error::Error + 'static> Error<T> {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RemoteService { .. } => ErrorKind::RemoteService,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::NoMatchFound => ErrorKind::NoMatchFound,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }
}

/// The ways a reply can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    /// The transport produced no envelope at all.
    #[error("the response envelope is empty")]
    EmptyEnvelope,
    /// A required field is absent or `null`.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A field is present but has the wrong shape.
    #[error("field `{field}` is not {expected}")]
    InvalidField {
        /// The name of the field.
        field: &'static str,
        /// What the field was expected to be.
        expected: &'static str,
    },
}

impl MalformedResponse {
    /// The name of the offending field, if the error is about a field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptyEnvelope => None,
            Self::MissingField(field) | Self::InvalidField { field, .. } => Some(*field),
        }
    }
}
