//! The biometric client.

use aip_face_client as ft;
use serde_json::Value;
use tracing::debug;

use crate::{
    catalog,
    envelope::{self, check, field_array, field_object, field_str, FACE_TOKEN, RESULT, USER_LIST},
    Config, ConfidenceThreshold, Error, FaceSample, LoggingInspector, MatchCandidate,
    Options, Transport,
};

/// The token the service assigns to an enrolled face.
/// Opaque to us, it is up to the caller to keep it.
pub type FaceToken = String;

/// Searches, compares and enrolls faces at the remote face service.
///
/// Each operation makes exactly one remote call and validates the reply before
/// reading anything from it. The operations take `&self`, so a client can be shared
/// between tasks; replacing the transport takes `&mut self`.
#[derive(Debug)]
pub struct BiometricClient<T> {
    /// The connection to the remote service.
    transport: T,
    /// The threshold to use when a call does not specify one.
    threshold: ConfidenceThreshold,
}

impl BiometricClient<ft::Client<LoggingInspector>> {
    /// Create a client talking to the service described by the config.
    ///
    /// No network calls are made here. Fails only if the HTTP client cannot be set up.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let reqwest = reqwest::Client::builder().timeout(config.timeout).build()?;
        let transport = ft::Client::new(
            reqwest,
            config.base_url.clone(),
            config.credentials.clone(),
            LoggingInspector,
        );
        Ok(Self::with_threshold(transport, config.threshold))
    }
}

impl<T: Transport> BiometricClient<T> {
    /// Create a client with the default threshold.
    pub fn new(transport: T) -> Self {
        Self::with_threshold(transport, ConfidenceThreshold::DEFAULT)
    }

    /// Create a client with the given default threshold.
    pub fn with_threshold(transport: T, threshold: ConfidenceThreshold) -> Self {
        Self {
            transport,
            threshold,
        }
    }

    /// Replace the connection to the remote service, returning the previous one.
    pub fn reconfigure(&mut self, transport: T) -> T {
        std::mem::replace(&mut self.transport, transport)
    }

    /// The connection to the remote service.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The threshold used when a call does not specify one.
    pub fn threshold(&self) -> ConfidenceThreshold {
        self.threshold
    }

    /// Search the group for the face in the sample and return the best candidate.
    ///
    /// An empty candidate list is an error, never an empty result.
    pub async fn search(
        &self,
        sample: &FaceSample,
        group_id: &str,
        options: &Options,
    ) -> Result<MatchCandidate, Error<T::Error>> {
        debug!(message = "searching the gallery", group_id);
        let reply = self
            .transport
            .search(sample, group_id, options)
            .await
            .map_err(Error::Transport)?;

        let reply = match check::<T::Error>(&reply) {
            Err(Error::RemoteService {
                code: catalog::MATCH_USER_NOT_FOUND,
                ..
            }) => return Err(Error::NoMatchFound),
            checked => checked?,
        };

        let result = field_object(reply, RESULT)?;
        let Some(best) = field_array(result, USER_LIST)?.first() else {
            debug!(message = "search returned no candidates", group_id);
            return Err(Error::NoMatchFound);
        };

        let candidate = MatchCandidate::from_search_result(result, best)?;
        debug!(
            message = "search found a candidate",
            group_id,
            user_id = %candidate.user_id,
            score = candidate.score,
        );
        Ok(candidate)
    }

    /// Compare two samples and decide whether they are the same face.
    ///
    /// Uses the client threshold unless one is given.
    pub async fn match_faces(
        &self,
        sample_a: &FaceSample,
        sample_b: &FaceSample,
        threshold: Option<ConfidenceThreshold>,
    ) -> Result<bool, Error<T::Error>> {
        let reply = self
            .transport
            .match_pair([sample_a, sample_b])
            .await
            .map_err(Error::Transport)?;

        let result = field_object(check::<T::Error>(&reply)?, RESULT)?;
        self.verify(result, threshold)
    }

    /// Decide whether the score in a successful reply reaches the threshold.
    ///
    /// Accepts either a whole envelope, which is checked first and has its `result`
    /// read, or a payload with the `score` at the top level. Anything carrying an
    /// `error_code` or a `result` is an envelope, so an envelope without its status
    /// is reported as such.
    /// Uses the client threshold unless one is given.
    pub fn verify(
        &self,
        reply: &Value,
        threshold: Option<ConfidenceThreshold>,
    ) -> Result<bool, Error<T::Error>> {
        let is_envelope =
            reply.get(envelope::ERROR_CODE).is_some() || reply.get(RESULT).is_some();
        let payload = if is_envelope {
            field_object(check::<T::Error>(reply)?, RESULT)?
        } else {
            reply
        };

        let threshold = threshold.unwrap_or(self.threshold);
        let accepted = crate::verify(payload, threshold)?;
        debug!(
            message = "verified the match score",
            %threshold,
            accepted,
        );
        Ok(accepted)
    }

    /// Register the sample under the identity in the group.
    ///
    /// Returns the token the service assigned to the face.
    pub async fn enroll(
        &self,
        id: u64,
        sample: &FaceSample,
        group_id: &str,
        options: &Options,
    ) -> Result<FaceToken, Error<T::Error>> {
        debug!(message = "enrolling a face", group_id, id);
        let reply = self
            .transport
            .add_user(sample, group_id, &id.to_string(), options)
            .await
            .map_err(Error::Transport)?;

        let result = field_object(check::<T::Error>(&reply)?, RESULT)?;
        Ok(field_str(result, FACE_TOKEN)?.to_owned())
    }
}
