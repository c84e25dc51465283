//! Face samples.

use aip_face_client::ImageType;
use base64::Engine;

/// An image of a face, in the form the service accepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSample {
    /// The image data, its meaning depends on the `image_type`.
    image: String,
    /// The way the image is encoded.
    image_type: ImageType,
}

impl FaceSample {
    /// A sample from the raw image bytes. They are Base64-encoded for the wire.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            image: base64::engine::general_purpose::STANDARD.encode(bytes),
            image_type: ImageType::Base64,
        }
    }

    /// A sample from already Base64-encoded image bytes.
    pub fn base64(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            image_type: ImageType::Base64,
        }
    }

    /// A sample the service downloads from the URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            image: url.into(),
            image_type: ImageType::Url,
        }
    }

    /// A sample referring to a face the service issued a token for.
    pub fn face_token(face_token: impl Into<String>) -> Self {
        Self {
            image: face_token.into(),
            image_type: ImageType::FaceToken,
        }
    }

    /// The image data.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// The image encoding.
    pub fn image_type(&self) -> ImageType {
        self.image_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_encodes() {
        let sample = FaceSample::from_bytes(b"hello");
        assert_eq!(sample.image(), "aGVsbG8=");
        assert_eq!(sample.image_type(), ImageType::Base64);
        assert_eq!(sample, FaceSample::base64("aGVsbG8="));
    }

    #[test]
    fn tags() {
        assert_eq!(
            FaceSample::url("http://example.com/a.jpg").image_type(),
            ImageType::Url
        );
        assert_eq!(
            FaceSample::face_token("027d8308a2ec665acb1bdf63e513bcb9").image_type(),
            ImageType::FaceToken
        );
    }
}
