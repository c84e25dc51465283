//! POST `/rest/2.0/face/v3/search`

use serde::Serialize;

use super::{reject_reserved_options, Client};
use crate::{Envelope, ImageType, OpaqueImageDataRef, Options};

/// The parameters the options must not override.
const RESERVED_OPTIONS: &[&str] = &["image", "image_type", "group_id_list"];

impl<RBEI> Client<RBEI>
where
    RBEI: crate::response_body_error::Inspector,
{
    /// Perform the `/rest/2.0/face/v3/search` call to the server.
    pub async fn search(&self, req: SearchRequest<'_>) -> Result<Envelope, crate::Error> {
        reject_reserved_options(req.options, RESERVED_OPTIONS)?;
        self.call("/rest/2.0/face/v3/search", &req).await
    }
}

/// Input data for the `/rest/2.0/face/v3/search` request.
#[derive(Debug, Serialize, PartialEq)]
pub struct SearchRequest<'a> {
    /// The image to search with.
    pub image: OpaqueImageDataRef<'a>,
    /// The encoding of the image.
    pub image_type: ImageType,
    /// Comma-separated names of the groups to search at.
    pub group_id_list: &'a str,
    /// Extra parameters, like `max_user_num` or `quality_control`.
    #[serde(flatten)]
    pub options: &'a Options,
}
