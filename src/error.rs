use std::path::PathBuf;

use thiserror::Error;

use crate::wheel::SessionPhase;

/// Problems with the wheel configuration. All of these are fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("the reward catalog is empty")]
    Empty,

    #[error("labels and weights must have the same length (got {labels} labels and {weights} weights)")]
    LengthMismatch { labels: usize, weights: usize },

    #[error("weight {weight} for reward {index} ({label:?}) must be a finite number greater than zero")]
    InvalidWeight {
        index: usize,
        label: String,
        weight: f64,
    },

    #[error("the weights add up to more than can be represented")]
    TotalWeightOverflow,

    #[error("max_spins must be at least 1")]
    ZeroMaxSpins,

    #[error("failed to read wheel config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse wheel config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {operation} while the session is {phase:?}")]
    InvalidTransition {
        operation: &'static str,
        phase: SessionPhase,
    },
}
