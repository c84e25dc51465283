//! POST `/rest/2.0/face/v3/faceset/user/add`

use serde::Serialize;

use super::{reject_reserved_options, Client};
use crate::{Envelope, ImageType, OpaqueImageDataRef, Options};

/// The parameters the options must not override.
const RESERVED_OPTIONS: &[&str] = &["image", "image_type", "group_id", "user_id"];

impl<RBEI> Client<RBEI>
where
    RBEI: crate::response_body_error::Inspector,
{
    /// Perform the `/rest/2.0/face/v3/faceset/user/add` call to the server.
    pub async fn faceset_user_add(&self, req: UserAddRequest<'_>) -> Result<Envelope, crate::Error> {
        reject_reserved_options(req.options, RESERVED_OPTIONS)?;
        self.call("/rest/2.0/face/v3/faceset/user/add", &req).await
    }
}

/// Input data for the `/rest/2.0/face/v3/faceset/user/add` request.
#[derive(Debug, Serialize, PartialEq)]
pub struct UserAddRequest<'a> {
    /// The image to register.
    pub image: OpaqueImageDataRef<'a>,
    /// The encoding of the image.
    pub image_type: ImageType,
    /// The group to register the face at.
    pub group_id: &'a str,
    /// The user to register the face under.
    pub user_id: &'a str,
    /// Extra parameters, like `user_info` or `action_type`.
    #[serde(flatten)]
    pub options: &'a Options,
}

#[cfg(test)]
mod tests {
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::tests::{mount_access_token, test_client, TEST_ACCESS_TOKEN};

    #[test]
    fn request_serialization() {
        let expected_request = serde_json::json!({
            "image": "aGVsbG8=",
            "image_type": "BASE64",
            "group_id": "group_a",
            "user_id": "42",
            "action_type": "REPLACE",
        });

        let options = Options::from([("action_type".to_owned(), "REPLACE".to_owned())]);
        let actual_request = serde_json::to_value(&UserAddRequest {
            image: "aGVsbG8=",
            image_type: ImageType::Base64,
            group_id: "group_a",
            user_id: "42",
            options: &options,
        })
        .unwrap();

        assert_eq!(expected_request, actual_request);
    }

    #[tokio::test]
    async fn mock_success() {
        let mock_server = MockServer::start().await;
        mount_access_token(&mock_server, 1).await;

        let options = Options::new();
        let sample_request = UserAddRequest {
            image: "aGVsbG8=",
            image_type: ImageType::Base64,
            group_id: "group_a",
            user_id: "42",
            options: &options,
        };
        let sample_response = serde_json::json!({
            "error_code": 0,
            "error_msg": "SUCCESS",
            "log_id": 1234567890123_u64,
            "timestamp": 1580000000,
            "cached": 0,
            "result": {
                "face_token": "2fa64a88a9d5118916f9a303782a97d3",
                "location": {
                    "left": 117,
                    "top": 131,
                    "width": 172,
                    "height": 170,
                    "rotation": 4
                }
            }
        });

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/rest/2.0/face/v3/faceset/user/add"))
            .and(matchers::query_param("access_token", TEST_ACCESS_TOKEN))
            .and(matchers::body_json(&sample_request))
            .respond_with(ResponseTemplate::new(200).set_body_json(&sample_response))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());

        let actual_response = client.faceset_user_add(sample_request).await.unwrap();
        assert_eq!(actual_response, sample_response);
    }

    #[tokio::test]
    async fn options_must_not_override_the_request() {
        let mock_server = MockServer::start().await;
        mount_access_token(&mock_server, 0).await;

        let client = test_client(mock_server.uri());

        let options = Options::from([("user_id".to_owned(), "other".to_owned())]);
        let actual_error = client
            .faceset_user_add(UserAddRequest {
                image: "aGVsbG8=",
                image_type: ImageType::Base64,
                group_id: "group_a",
                user_id: "42",
                options: &options,
            })
            .await
            .unwrap_err();
        assert_matches!(
            actual_error,
            crate::Error::ReservedOption(key) if key == "user_id"
        );
    }
}
