//! POST `/oauth/2.0/token`

use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::{debug, trace};

use super::Client;

/// The route of the token exchange.
const PATH: &str = "/oauth/2.0/token";

/// Tokens are considered expired this long before the reported expiry,
/// so that a token does not run out while a call is in flight.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// The longest lifetime a token is trusted for, whatever the service reports.
const MAX_LIFETIME: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// An access token together with the moment it stops being usable.
#[derive(Debug, Clone)]
pub(crate) struct AccessToken {
    /// The token value.
    value: String,
    /// When the token expires.
    expires_at: Instant,
}

impl AccessToken {
    /// A token granted at `requested_at` for `expires_in` seconds.
    fn granted(value: String, requested_at: Instant, expires_in: u64) -> Self {
        let lifetime = Duration::from_secs(expires_in).min(MAX_LIFETIME);
        Self {
            value,
            expires_at: requested_at.checked_add(lifetime).unwrap_or(requested_at),
        }
    }

    /// Whether the token can still be used at the given moment.
    fn is_fresh(&self, now: Instant) -> bool {
        now.checked_add(EXPIRY_MARGIN)
            .map_or(false, |deadline| deadline < self.expires_at)
    }
}

impl<RBEI> Client<RBEI>
where
    RBEI: crate::response_body_error::Inspector,
{
    /// Obtain an access token, performing the `/oauth/2.0/token` exchange if there is no
    /// fresh token cached yet.
    pub async fn access_token(&self) -> Result<String, crate::Error> {
        let mut cached = self.access_token.lock().await;

        if let Some(token) = cached.as_ref().filter(|token| token.is_fresh(Instant::now())) {
            trace!(message = "using cached access token");
            return Ok(token.value.clone());
        }

        debug!(
            message = "exchanging credentials for an access token",
            app_id = %self.credentials.app_id,
        );
        let token = self.exchange_access_token().await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    /// Drop the cached access token, so that the next call performs a new exchange.
    pub async fn reset_access_token(&self) {
        *self.access_token.lock().await = None;
    }

    /// Drop the cached access token if it is still the `rejected` one.
    ///
    /// Returns whether the token was dropped. A token exchanged by another call in the
    /// meantime is kept.
    pub async fn drop_access_token(&self, rejected: &str) -> bool {
        let mut cached = self.access_token.lock().await;
        if cached.as_ref().map_or(false, |token| token.value == rejected) {
            *cached = None;
            return true;
        }
        false
    }

    /// Perform the `/oauth/2.0/token` call to the server.
    async fn exchange_access_token(&self) -> Result<AccessToken, crate::Error> {
        let requested_at = Instant::now();
        let res = self
            .reqwest
            .post(self.build_url(PATH))
            .query(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.api_key.as_str()),
                ("client_secret", self.credentials.secret_key.as_str()),
            ])
            .send()
            .await?;

        // Rejections come with a 4xx status and a JSON body describing the reason,
        // so the body is parsed regardless of the status.
        match self.parse_json(PATH, res).await? {
            TokenReply::Granted(AccessTokenResponse {
                access_token,
                expires_in,
            }) => Ok(AccessToken::granted(access_token, requested_at, expires_in)),
            TokenReply::Denied(err) => Err(crate::Error::AccessToken(err)),
        }
    }
}

/// The successful response from `/oauth/2.0/token`.
#[derive(Debug, Deserialize, PartialEq)]
pub struct AccessTokenResponse {
    /// The access token to pass along with the API calls.
    pub access_token: String,
    /// The token lifetime, in seconds.
    pub expires_in: u64,
}

/// The `/oauth/2.0/token`-specific error.
#[derive(thiserror::Error, Debug, Deserialize, PartialEq)]
#[error("{error}: {error_description}")]
pub struct AccessTokenError {
    /// A machine-readable error code, like `invalid_client`.
    pub error: String,
    /// A human-readable description.
    pub error_description: String,
}

/// Either of the `/oauth/2.0/token` replies.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenReply {
    /// The credentials were accepted.
    Granted(AccessTokenResponse),
    /// The credentials were rejected.
    Denied(AccessTokenError),
}
