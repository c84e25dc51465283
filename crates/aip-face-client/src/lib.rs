//! Client API for the Baidu AI Platform Face V3 API.
//!
//! The client only moves requests and raw JSON envelopes over the wire.
//! It does not interpret the `error_code` of the envelopes it returns; that is
//! up to the caller.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

mod access_token;
mod face_match;
mod faceset_user_add;
pub mod response_body_error;
mod search;
mod types;

pub use access_token::*;
pub use face_match::*;
pub use faceset_user_add::*;
pub use response_body_error::ResponseBodyError;
pub use search::*;
pub use types::*;

/// The base URL of the public Baidu AI Platform endpoint.
pub const DEFAULT_BASE_URL: &str = "https://aip.baidubce.com";

/// Error codes the service uses to report an unusable access token.
/// The cached token is dropped when any of these comes back.
const ACCESS_TOKEN_ERROR_CODES: &[i64] = &[110, 111];

/// The generic error type for the client calls.
#[derive(Error, Debug)]
pub enum Error {
    /// An error coming from the underlying reqwest layer.
    /// The request URL is stripped from it, since it carries the credentials.
    #[error("reqwest error: {0}")]
    Reqwest(reqwest::Error),
    /// The server replied with a non-success HTTP status.
    #[error("bad status code: {0}")]
    BadStatus(StatusCode),
    /// An error while obtaining or parsing the response body.
    #[error("response body error: {0}")]
    ResponseBody(#[from] ResponseBodyError),
    /// The access token exchange was rejected.
    #[error("access token error: {0}")]
    AccessToken(AccessTokenError),
    /// The request options set a parameter the request already sets itself.
    #[error("option `{0}` is set by the request itself")]
    ReservedOption(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err.without_url())
    }
}

/// Fail if the options set any of the `reserved` parameters.
fn reject_reserved_options(options: &Options, reserved: &[&str]) -> Result<(), Error> {
    match reserved.iter().find(|key| options.contains_key(**key)) {
        Some(key) => Err(Error::ReservedOption((*key).to_owned())),
        None => Ok(()),
    }
}

/// The face API client.
#[derive(Debug)]
pub struct Client<RBEI = response_body_error::NoopInspector> {
    /// Underlying HTTP client used to execute network calls.
    pub reqwest: reqwest::Client,
    /// The base URL to use for the routes.
    pub base_url: String,
    /// The application credentials used for the access token exchange.
    pub credentials: Credentials,
    /// The inspector for the response body errors.
    pub response_body_error_inspector: RBEI,
    /// The access token obtained by the last exchange.
    /// The lock is held for the whole exchange, so concurrent first calls
    /// result in a single exchange.
    access_token: Mutex<Option<AccessToken>>,
}

impl<RBEI> Client<RBEI>
where
    RBEI: response_body_error::Inspector,
{
    /// Create a new [`Client`].
    ///
    /// No network calls are made here, the access token is obtained on first use.
    pub fn new(
        reqwest: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Credentials,
        response_body_error_inspector: RBEI,
    ) -> Self {
        Self {
            reqwest,
            base_url: base_url.into(),
            credentials,
            response_body_error_inspector,
            access_token: Mutex::new(None),
        }
    }

    /// Prepare the URL.
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// An internal utility to prepare an authorized POST HTTP request.
    fn build_post<T>(&self, path: &str, access_token: &str, body: &T) -> RequestBuilder
    where
        T: serde::Serialize + ?Sized,
    {
        let url = self.build_url(path);
        self.reqwest
            .post(url)
            .query(&[("access_token", access_token)])
            .json(body)
    }

    /// Perform an authorized call and return the raw envelope.
    async fn call<T>(&self, path: &str, body: &T) -> Result<Envelope, Error>
    where
        T: serde::Serialize + ?Sized,
    {
        let access_token = self.access_token().await?;
        let res = self.build_post(path, &access_token, body).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::BadStatus(status));
        }

        let envelope: Envelope = self.parse_json(path, res).await?;

        let error_code = envelope.get("error_code").and_then(Envelope::as_i64);
        if let Some(error_code) = error_code.filter(|code| ACCESS_TOKEN_ERROR_CODES.contains(code))
        {
            if self.drop_access_token(&access_token).await {
                warn!(
                    message = "access token was rejected, dropping it",
                    error_code,
                    path
                );
            }
        }

        Ok(envelope)
    }

    /// Read the response body and parse it as JSON.
    async fn parse_json<T: DeserializeOwned>(
        &self,
        path: &str,
        res: reqwest::Response,
    ) -> Result<T, ResponseBodyError> {
        let body = match res.bytes().await {
            Ok(body) => body,
            Err(err) => {
                let err = ResponseBodyError::Read(err.without_url());
                self.response_body_error_inspector.on_error(path, &err).await;
                return Err(err);
            }
        };

        self.response_body_error_inspector.on_body(path, &body).await;

        match serde_json::from_slice(&body) {
            Ok(val) => Ok(val),
            Err(source) => {
                let err = ResponseBodyError::NotJson { source, body };
                self.response_body_error_inspector.on_error(path, &err).await;
                Err(err)
            }
        }
    }
}
