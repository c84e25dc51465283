//! Common types.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// A type that represents opaque image data.
///
/// Opaque in a sense that our code does not try to validate or decode it.
/// Depending on the [`ImageType`] it is a Base64 string, a URL or a face token,
/// and we just pass it through.
pub type OpaqueImageDataRef<'a> = &'a str;

/// The raw reply of the service: `error_code`, `error_msg`, `log_id` and
/// the call-specific `result`.
pub type Envelope = serde_json::Value;

/// Service-specific tuning parameters, passed as-is into the request body.
pub type Options = BTreeMap<String, String>;

/// The way the image data is encoded in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    /// Base64-encoded image bytes.
    Base64,
    /// A URL the service downloads the image from.
    Url,
    /// A face token issued by the service earlier.
    FaceToken,
}

/// The application credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The application ID.
    pub app_id: String,
    /// The API key, used as the OAuth client ID.
    pub api_key: String,
    /// The secret key, used as the OAuth client secret.
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_type_serialization() {
        assert_eq!(
            serde_json::to_value([ImageType::Base64, ImageType::Url, ImageType::FaceToken])
                .unwrap(),
            serde_json::json!(["BASE64", "URL", "FACE_TOKEN"])
        );
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let credentials = Credentials {
            app_id: "my app id".into(),
            api_key: "my api key".into(),
            secret_key: "my secret key".into(),
        };

        let debug = format!("{:?}", credentials);
        assert!(debug.contains("my api key"));
        assert!(!debug.contains("my secret key"));
    }
}
