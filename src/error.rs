use thiserror::Error;

use crate::format::SlotKind;

/// Raw cell input that does not describe a score for the targeted slot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseScoreError {
    #[error("empty input")]
    Empty,
    #[error("'{0}' is neither a number nor a walkover marker")]
    NotAScore(String),
    #[error("{value} is out of range for a {kind} slot (max {max})")]
    OutOfRange { value: u32, kind: SlotKind, max: u16 },
}

/// Unknown competition format name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown competition format '{0}'")]
pub struct FormatError(pub String);

/// Errors raised while decoding the backend's score arrays.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("expected {expected} scores per side, received {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("invalid score at set {set_index}: {source}")]
    InvalidScore {
        set_index: usize,
        #[source]
        source: ParseScoreError,
    },
    #[error("malformed score payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building a scorer from a CLI spec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScorerError {
    #[error("unrecognized scorer spec: {0}")]
    UnknownSpec(String),
    #[error("invalid seed in scorer spec: {0}")]
    InvalidSeed(String),
}
