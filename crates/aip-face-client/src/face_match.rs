//! POST `/rest/2.0/face/v3/match`

use serde::Serialize;

use super::Client;
use crate::{Envelope, ImageType, OpaqueImageDataRef};

impl<RBEI> Client<RBEI>
where
    RBEI: crate::response_body_error::Inspector,
{
    /// Perform the `/rest/2.0/face/v3/match` call to the server.
    ///
    /// The service compares exactly two images, so exactly two are taken.
    pub async fn face_match(&self, req: [MatchRequestItem<'_>; 2]) -> Result<Envelope, crate::Error> {
        self.call("/rest/2.0/face/v3/match", &req).await
    }
}

/// One of the two images of the `/rest/2.0/face/v3/match` request.
#[derive(Debug, Serialize, PartialEq)]
pub struct MatchRequestItem<'a> {
    /// The image to compare.
    pub image: OpaqueImageDataRef<'a>,
    /// The encoding of the image.
    pub image_type: ImageType,
}
