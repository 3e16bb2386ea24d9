use thiserror::Error;

use crate::key::CanonicalKey;

/// Defects found while building a normalization table.
///
/// Any of these is a configuration fault: the table is rejected as a whole
/// and no resolution happens against it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("label {label:?} is not in normalized form (expected {expected:?})")]
    NotNormalized { label: String, expected: String },

    #[error("label {label:?} maps to both {existing} and {conflicting}")]
    Collision {
        label: String,
        existing: CanonicalKey,
        conflicting: CanonicalKey,
    },

    #[error("label {label:?} cannot target {key}: {reason}")]
    RoleMismatch {
        label: String,
        key: CanonicalKey,
        reason: &'static str,
    },

    #[error("unknown canonical key {key:?} for label {label:?}")]
    UnknownKey { label: String, key: String },
}

#[derive(Error, Debug)]
pub enum WhoisKeyError {
    #[error("Normalization table rejected: {0}")]
    Table(#[from] TableError),

    #[error("Unknown contact role: {0}")]
    UnknownRole(String),

    #[error("Unknown canonical key: {0}")]
    UnknownKey(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WhoisKeyError>;
