//! The boundary to the remote face service.

use aip_face_client as ft;
use serde_json::Value;

use crate::{FaceSample, Options};

/// The three remote calls the biometric client relies on.
///
/// Implementations return the raw reply envelope; validating it is up to the client.
#[async_trait::async_trait]
pub trait Transport {
    /// The error of a failed delivery.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search the groups for the face in the sample.
    async fn search(
        &self,
        sample: &FaceSample,
        group_id: &str,
        options: &Options,
    ) -> Result<Value, Self::Error>;

    /// Compare two samples with each other.
    async fn match_pair(&self, samples: [&FaceSample; 2]) -> Result<Value, Self::Error>;

    /// Register the sample under the user in the group.
    async fn add_user(
        &self,
        sample: &FaceSample,
        group_id: &str,
        user_id: &str,
        options: &Options,
    ) -> Result<Value, Self::Error>;
}

#[async_trait::async_trait]
impl<RBEI> Transport for ft::Client<RBEI>
where
    RBEI: ft::response_body_error::Inspector + Send + Sync,
{
    type Error = ft::Error;

    async fn search(
        &self,
        sample: &FaceSample,
        group_id: &str,
        options: &Options,
    ) -> Result<Value, Self::Error> {
        let req = ft::SearchRequest {
            image: sample.image(),
            image_type: sample.image_type(),
            group_id_list: group_id,
            options,
        };
        ft::Client::search(self, req).await
    }

    async fn match_pair(&self, samples: [&FaceSample; 2]) -> Result<Value, Self::Error> {
        let req = samples.map(|sample| ft::MatchRequestItem {
            image: sample.image(),
            image_type: sample.image_type(),
        });
        self.face_match(req).await
    }

    async fn add_user(
        &self,
        sample: &FaceSample,
        group_id: &str,
        user_id: &str,
        options: &Options,
    ) -> Result<Value, Self::Error> {
        let req = ft::UserAddRequest {
            image: sample.image(),
            image_type: sample.image_type(),
            group_id,
            user_id,
            options,
        };
        self.faceset_user_add(req).await
    }
}
