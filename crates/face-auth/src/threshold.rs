//! Confidence threshold and the match decision.

use std::{fmt, str::FromStr};

use serde_json::Value;

use crate::{
    envelope::{field_f64, SCORE},
    MalformedResponse,
};

/// The minimum similarity score accepted as a positive identity match.
///
/// Uses the scale of the scores the service reports, `0` to `100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceThreshold(f64);

impl ConfidenceThreshold {
    /// The threshold used when none is configured.
    pub const DEFAULT: Self = Self(92.0);

    /// Create a threshold from a raw score, which must be a finite number.
    pub fn new(score: f64) -> Result<Self, InvalidThreshold> {
        if !score.is_finite() {
            return Err(InvalidThreshold(score.to_string()));
        }
        Ok(Self(score))
    }

    /// The raw score.
    pub const fn score(self) -> f64 {
        self.0
    }

    /// Whether the given score reaches the threshold. Reaching it exactly counts.
    pub fn accepts(self, score: f64) -> bool {
        score - self.0 >= 0.0
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for ConfidenceThreshold {
    type Error = InvalidThreshold;

    fn try_from(score: f64) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl fmt::Display for ConfidenceThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An error parsing a [`ConfidenceThreshold`].
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("threshold must be a finite number, got {0:?}")]
pub struct InvalidThreshold(String);

impl FromStr for ConfidenceThreshold {
    type Err = InvalidThreshold;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(|score| Self::new(score).ok())
            .ok_or_else(|| InvalidThreshold(s.to_owned()))
    }
}

/// Read the `score` of a successful reply payload and compare it with the threshold.
pub fn verify(payload: &Value, threshold: ConfidenceThreshold) -> Result<bool, MalformedResponse> {
    let score = field_f64(payload, SCORE)?;
    Ok(threshold.accepts(score))
}
