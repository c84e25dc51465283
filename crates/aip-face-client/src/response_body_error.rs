//! Failures to turn a reply body into an envelope, and a hook to observe them.

use thiserror::Error;

/// The reply body could not be read or is not JSON.
#[derive(Error, Debug)]
pub enum ResponseBodyError {
    /// The connection failed while the body was being read.
    #[error("failed to read the reply body: {0}")]
    Read(#[source] reqwest::Error),
    /// The body is not valid JSON. Gateways in front of the service reply with HTML pages.
    #[error("the reply body is not JSON: {source}")]
    NotJson {
        /// The parser error.
        #[source]
        source: serde_json::Error,
        /// The body as received.
        body: bytes::Bytes,
    },
}

impl ResponseBodyError {
    /// The body as received, if it was read completely.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Read(_) => None,
            Self::NotJson { body, .. } => Some(body),
        }
    }
}

/// Observes the reply bodies of every call, keyed by the route of the call.
#[async_trait::async_trait]
pub trait Inspector {
    /// Called with every body that was read, before it is parsed.
    async fn on_body(&self, path: &str, body: &[u8]);

    /// Called when a body could not be read or parsed.
    async fn on_error(&self, path: &str, error: &ResponseBodyError);
}

/// Observes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInspector;

#[async_trait::async_trait]
impl Inspector for NoopInspector {
    async fn on_body(&self, _path: &str, _body: &[u8]) {}

    async fn on_error(&self, _path: &str, _error: &ResponseBodyError) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_of_not_json() {
        let source = serde_json::from_slice::<serde_json::Value>(b"<html>").unwrap_err();
        let err = ResponseBodyError::NotJson {
            source,
            body: "<html>".into(),
        };

        assert_eq!(err.body(), Some(&b"<html>"[..]));
        assert!(err.to_string().starts_with("the reply body is not JSON"));
    }
}
