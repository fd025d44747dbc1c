//! Error types for the crate

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown state {state}")]
    UnknownState { state: String },

    #[error("no transitions for state {state}, action {action}")]
    UnknownStateAction { state: String, action: String },

    #[error("value function has no entry for successor state {state}")]
    MissingStateValue { state: String },

    #[error("probability {probability} out of [0, 1] for state {state}, action {action}")]
    InvalidProbability {
        state: String,
        action: String,
        probability: f64,
    },

    #[error("probabilities for state {state}, action {action} sum to {total}, expected 1")]
    ProbabilityMass {
        state: String,
        action: String,
        total: f64,
    },

    #[error("malformed model: {message}")]
    MalformedModel { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedModel {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
