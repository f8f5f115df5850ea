//! Error types for the board-engine crate.
//!
//! Classification and aggregation are total and never fail; errors exist
//! only on the configuration edge, when boards or vocabularies are loaded.

use thiserror::Error;

/// Errors that can occur while loading or validating engine configuration.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Invalid board definition.
    #[error("invalid board: {reason}")]
    InvalidBoard {
        /// The reason the board is invalid.
        reason: String,
    },

    /// Invalid vocabulary table.
    #[error("invalid vocabulary: {0}")]
    Vocabulary(#[from] board_vocab::VocabError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, BoardError>;
