//! Face search, comparison and enrollment on top of the remote face service.
//!
//! The [`BiometricClient`] validates every reply envelope the service returns,
//! turns error codes into typed errors with a human-readable explanation and
//! decides matches against a [`ConfidenceThreshold`].

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod candidate;
pub mod catalog;
mod client;
mod config;
pub mod envelope;
mod error;
mod logging_inspector;
mod sample;
mod threshold;
pub mod transport;

pub use aip_face_client::{ImageType, Options};
pub use candidate::MatchCandidate;
pub use client::{BiometricClient, FaceToken};
pub use config::{Config, ConfigError};
pub use error::{Error, ErrorKind, MalformedResponse};
pub use logging_inspector::LoggingInspector;
pub use sample::FaceSample;
pub use threshold::{verify, ConfidenceThreshold, InvalidThreshold};
pub use transport::Transport;
