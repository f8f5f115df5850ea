//! The composed classification → aggregation pipeline.

use tracing::debug;

use board_vocab::Vocabulary;

use crate::classify::Classifier;
use crate::matrix::{AlertMatrix, Board};
use crate::types::RawAlert;

/// The per-batch entry point: classifies raw alerts and buckets the results
/// into a board's grid.
///
/// One engine is built over the process-wide vocabularies at startup and
/// reused for every arriving batch. Rendering performs no I/O, never blocks,
/// and never mutates the engine, so a shared reference can serve concurrent
/// callers.
#[derive(Debug, Clone, Default)]
pub struct BoardEngine {
    classifier: Classifier,
}

impl BoardEngine {
    /// Creates an engine over the given vocabularies.
    #[must_use]
    pub const fn new(env_vocab: Vocabulary, metric_vocab: Vocabulary) -> Self {
        Self {
            classifier: Classifier::new(env_vocab, metric_vocab),
        }
    }

    /// Returns the underlying classifier.
    #[must_use]
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classifies `alerts` and aggregates them into `board`'s matrix.
    #[must_use]
    pub fn render(&self, board: &Board, alerts: &[RawAlert]) -> AlertMatrix {
        let classified = self.classifier.classify_batch(alerts);
        let matrix = AlertMatrix::build(board, &classified);
        debug!(
            board = %board.name,
            received = alerts.len(),
            placed = matrix.alert_count(),
            "rendered board"
        );
        matrix
    }
}
