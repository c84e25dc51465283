//! Logging of the reply bodies the face API client could not use.

use aip_face_client as ft;
use tracing::{error, trace};

/// Logs every reply body at `trace` and every unusable one at `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInspector;

#[async_trait::async_trait]
impl ft::response_body_error::Inspector for LoggingInspector {
    async fn on_body(&self, path: &str, body: &[u8]) {
        trace!(message = "face API reply", path, len = body.len());
    }

    async fn on_error(&self, path: &str, err: &ft::ResponseBodyError) {
        match err.body() {
            Some(body) => error!(
                message = "face API reply is unusable",
                path,
                error = %err,
                body = %String::from_utf8_lossy(body),
            ),
            None => error!(message = "face API reply is unusable", path, error = %err),
        }
    }
}
