// crates/iso3166-core/src/error.rs
use crate::index::CodeKind;
use thiserror::Error;

/// Errors produced while loading, checking or persisting a country dataset.
///
/// Lookups and filters never return this type: a missing code is `None`
/// and an unmatched region is an empty `Vec`.
#[derive(Debug, Error)]
pub enum IsoError {
    #[error("Data not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Raised only when the index is built with [`DuplicatePolicy::Reject`].
    ///
    /// [`DuplicatePolicy::Reject`]: crate::index::DuplicatePolicy::Reject
    #[error("duplicate {kind} code {code:?} in records #{first} and #{second}")]
    DuplicateCode {
        kind: CodeKind,
        code: String,
        first: usize,
        second: usize,
    },
}

pub type Result<T> = std::result::Result<T, IsoError>;
