//! Search candidates.

use serde_json::Value;

use crate::{
    envelope::{field_f64, field_str, FACE_TOKEN, GROUP_ID, SCORE, USER_ID},
    ConfidenceThreshold, MalformedResponse,
};

/// A gallery entry the service matched a sample against.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    /// The identity the entry is registered under.
    pub user_id: String,
    /// The token of the matched face.
    pub face_token: String,
    /// The similarity score, `0` to `100`.
    pub score: f64,
    /// The group the entry belongs to, when the service reports it.
    pub group_id: Option<String>,
}

impl MatchCandidate {
    /// Read a candidate from an entry of the `user_list` of a search `result`.
    ///
    /// The face token is taken from the entry, or from the `result` itself when the
    /// entry does not carry one.
    pub(crate) fn from_search_result(
        result: &Value,
        entry: &Value,
    ) -> Result<Self, MalformedResponse> {
        let face_token = match field_str(entry, FACE_TOKEN) {
            Ok(face_token) => face_token,
            Err(MalformedResponse::MissingField(_)) => field_str(result, FACE_TOKEN)?,
            Err(err) => return Err(err),
        };

        Ok(Self {
            user_id: field_str(entry, USER_ID)?.to_owned(),
            face_token: face_token.to_owned(),
            score: field_f64(entry, SCORE)?,
            group_id: entry
                .get(GROUP_ID)
                .and_then(Value::as_str)
                .map(ToOwned::to_owned),
        })
    }

    /// Whether the candidate's score reaches the threshold.
    pub fn meets(&self, threshold: ConfidenceThreshold) -> bool {
        threshold.accepts(self.score)
    }
}
