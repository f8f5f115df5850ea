//! Board definitions and the environment × metric alert matrix.
//!
//! A [`Board`] is externally-owned configuration: the ordered environment
//! and metric labels that span the grid. [`AlertMatrix::build`] buckets a
//! batch of classified alerts into that grid; the matrix is rebuilt fresh on
//! every aggregation and never mutated in place across batches.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{BoardError, Result};
use crate::severity::{worst_severity, PriorityLabel, Severity};
use crate::types::ClassifiedAlert;

/// A board definition: the ordered environment and metric labels that span
/// the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Display name of the board.
    pub name: String,
    /// Whether this board is the default selection.
    #[serde(default)]
    pub is_default: bool,
    /// Ordered environment labels (matrix rows).
    pub environments: Vec<String>,
    /// Ordered metric labels (matrix columns).
    pub metrics: Vec<String>,
}

impl Board {
    /// Creates a validated board definition, not marked default.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidBoard` if the name is empty.
    pub fn new(
        name: impl Into<String>,
        environments: impl IntoIterator<Item = impl Into<String>>,
        metrics: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let board = Self {
            name: name.into(),
            is_default: false,
            environments: environments.into_iter().map(Into::into).collect(),
            metrics: metrics.into_iter().map(Into::into).collect(),
        };
        board.validate()?;
        Ok(board)
    }

    /// Marks this board as the default selection.
    #[must_use]
    pub fn mark_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Validates the definition.
    ///
    /// Labels are expected to be unique within each dimension; duplicates
    /// are tolerated (an alert then lands in every matching cell) but
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidBoard` if the name is empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BoardError::InvalidBoard {
                reason: "board name cannot be empty".to_string(),
            });
        }

        for (dimension, labels) in [
            ("environments", &self.environments),
            ("metrics", &self.metrics),
        ] {
            let unique: HashSet<&str> = labels.iter().map(String::as_str).collect();
            if unique.len() != labels.len() {
                warn!(board = %self.name, dimension, "board labels are not unique");
            }
        }

        Ok(())
    }

    /// Picks the board a fresh session should display: the first marked
    /// default, else the first in the list.
    #[must_use]
    pub fn default_board(boards: &[Self]) -> Option<&Self> {
        boards.iter().find(|board| board.is_default).or_else(|| boards.first())
    }
}

/// Parses a board list from a JSON document, validating each board.
///
/// # Errors
///
/// Returns `BoardError::Serialization` if the document is malformed, or
/// `BoardError::InvalidBoard` if a board fails validation.
pub fn boards_from_json(json: &str) -> Result<Vec<Board>> {
    let boards: Vec<Board> = serde_json::from_str(json)?;
    for board in &boards {
        board.validate()?;
    }
    info!(count = boards.len(), "loaded board definitions");
    Ok(boards)
}

/// One alert's contribution to a matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAlert {
    /// Identifier of the contributing alert.
    pub id: String,
    /// The alert's priority label, if it carried one.
    pub priority: Option<PriorityLabel>,
}

/// The environment × metric alert grid for one board.
///
/// Rows follow the board's environment order, columns its metric order, and
/// the shape is always `environments.len() × metrics.len()` regardless of
/// how many alerts were aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertMatrix {
    environments: Vec<String>,
    metrics: Vec<String>,
    cells: Vec<Vec<Vec<CellAlert>>>,
}

impl AlertMatrix {
    /// Buckets classified alerts into the board's grid.
    ///
    /// An alert lands in every cell whose environment and metric labels
    /// exactly equal its codes (case-sensitive, unlike the fuzzy alias
    /// matching that produced the codes). An alert with an absent or
    /// unmatched code contributes to no cell and raises no error. Within a
    /// cell, input order is preserved.
    #[must_use]
    pub fn build(board: &Board, alerts: &[ClassifiedAlert]) -> Self {
        let mut cells: Vec<Vec<Vec<CellAlert>>> =
            vec![vec![Vec::new(); board.metrics.len()]; board.environments.len()];
        let mut placed = 0usize;
        let mut excluded = 0usize;

        for alert in alerts {
            let (Some(env), Some(metric)) = (&alert.env, &alert.metric) else {
                excluded += 1;
                continue;
            };

            let mut matched = false;
            for (i, env_label) in board.environments.iter().enumerate() {
                if env_label != env {
                    continue;
                }
                for (j, metric_label) in board.metrics.iter().enumerate() {
                    if metric_label != metric {
                        continue;
                    }
                    cells[i][j].push(CellAlert {
                        id: alert.id.clone(),
                        priority: alert.priority.clone(),
                    });
                    matched = true;
                    placed += 1;
                }
            }
            if !matched {
                excluded += 1;
            }
        }

        debug!(
            board = %board.name,
            rows = board.environments.len(),
            columns = board.metrics.len(),
            placed,
            excluded,
            "built alert matrix"
        );

        Self {
            environments: board.environments.clone(),
            metrics: board.metrics.clone(),
            cells,
        }
    }

    /// Row labels, in board order.
    #[must_use]
    pub fn environments(&self) -> &[String] {
        &self.environments
    }

    /// Column labels, in board order.
    #[must_use]
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// The alerts bucketed into cell `(env_ix, metric_ix)`, in input order,
    /// or `None` when the indices are out of bounds.
    #[must_use]
    pub fn cell(&self, env_ix: usize, metric_ix: usize) -> Option<&[CellAlert]> {
        self.cells
            .get(env_ix)
            .and_then(|row| row.get(metric_ix))
            .map(Vec::as_slice)
    }

    /// The worst severity present in cell `(env_ix, metric_ix)`.
    ///
    /// Returns [`Severity::P4`] for an empty cell, a cell holding only
    /// unranked priorities, or out-of-bounds indices.
    #[must_use]
    pub fn worst_severity(&self, env_ix: usize, metric_ix: usize) -> Severity {
        self.cell(env_ix, metric_ix)
            .map(Self::reduce_cell)
            .unwrap_or_default()
    }

    /// Collapses every cell to its worst severity: the scalar grid the
    /// presentation layer picks cell colors from.
    #[must_use]
    pub fn severity_grid(&self) -> Vec<Vec<Severity>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| Self::reduce_cell(cell)).collect())
            .collect()
    }

    /// Total number of alert placements across all cells.
    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .map(Vec::len)
            .sum()
    }

    /// Returns `true` when no alert landed in any cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alert_count() == 0
    }

    fn reduce_cell(cell: &[CellAlert]) -> Severity {
        worst_severity(cell.iter().filter_map(|alert| alert.priority.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new("lottery-ops", ["E1", "E2"], ["M1", "M2"]).expect("valid board")
    }

    fn classified(
        id: &str,
        env: Option<&str>,
        metric: Option<&str>,
        priority: Option<&str>,
    ) -> ClassifiedAlert {
        ClassifiedAlert {
            id: id.to_string(),
            env: env.map(ToString::to_string),
            metric: metric.map(ToString::to_string),
            priority: priority.map(PriorityLabel::new),
        }
    }

    #[test]
    fn shape_is_fixed_regardless_of_alert_count() {
        let matrix = AlertMatrix::build(&board(), &[]);
        assert_eq!(matrix.environments(), ["E1", "E2"]);
        assert_eq!(matrix.metrics(), ["M1", "M2"]);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(matrix.cell(i, j), Some(&[][..]));
            }
        }
        assert!(matrix.is_empty());
    }

    #[test]
    fn alerts_land_in_their_cell_in_input_order() {
        let alerts = vec![
            classified("a", Some("E1"), Some("M2"), Some("p3")),
            classified("b", Some("E2"), Some("M1"), None),
            classified("c", Some("E1"), Some("M2"), Some("p1")),
        ];
        let matrix = AlertMatrix::build(&board(), &alerts);

        let cell = matrix.cell(0, 1).expect("in bounds");
        assert_eq!(cell.len(), 2);
        assert_eq!(cell[0].id, "a");
        assert_eq!(cell[1].id, "c");

        let cell = matrix.cell(1, 0).expect("in bounds");
        assert_eq!(cell.len(), 1);
        assert_eq!(cell[0].id, "b");
        assert_eq!(matrix.alert_count(), 3);
    }

    #[test]
    fn unclassified_alerts_are_silently_excluded() {
        let alerts = vec![
            classified("no-env", None, Some("M1"), Some("p1")),
            classified("no-metric", Some("E1"), None, Some("p1")),
            classified("unknown-env", Some("ELSEWHERE"), Some("M1"), Some("p1")),
        ];
        let matrix = AlertMatrix::build(&board(), &alerts);
        assert!(matrix.is_empty());
    }

    #[test]
    fn label_comparison_is_case_sensitive() {
        let alerts = vec![classified("a", Some("e1"), Some("M1"), Some("p1"))];
        let matrix = AlertMatrix::build(&board(), &alerts);
        assert!(matrix.is_empty());
    }

    #[test]
    fn duplicate_labels_receive_the_same_alert() {
        let board = Board::new("dup", ["E1", "E1"], ["M1"]).expect("valid board");
        let alerts = vec![classified("a", Some("E1"), Some("M1"), Some("p2"))];
        let matrix = AlertMatrix::build(&board, &alerts);
        assert_eq!(matrix.cell(0, 0).map(<[CellAlert]>::len), Some(1));
        assert_eq!(matrix.cell(1, 0).map(<[CellAlert]>::len), Some(1));
        assert_eq!(matrix.alert_count(), 2);
    }

    #[test]
    fn worst_severity_per_cell() {
        let alerts = vec![
            classified("a", Some("E1"), Some("M1"), Some("p3")),
            classified("b", Some("E1"), Some("M1"), Some("p1")),
            classified("c", Some("E1"), Some("M1"), Some("p2")),
            classified("d", Some("E2"), Some("M2"), Some("p9")),
        ];
        let matrix = AlertMatrix::build(&board(), &alerts);
        assert_eq!(matrix.worst_severity(0, 0), Severity::P1);
        // only an unranked priority present
        assert_eq!(matrix.worst_severity(1, 1), Severity::P4);
        // empty cell
        assert_eq!(matrix.worst_severity(0, 1), Severity::P4);
        // out of bounds
        assert_eq!(matrix.worst_severity(9, 9), Severity::P4);
        assert_eq!(matrix.cell(9, 9), None);
    }

    #[test]
    fn severity_grid_covers_every_cell() {
        let alerts = vec![
            classified("a", Some("E1"), Some("M1"), Some("p2")),
            classified("b", Some("E2"), Some("M2"), None),
        ];
        let matrix = AlertMatrix::build(&board(), &alerts);
        assert_eq!(
            matrix.severity_grid(),
            vec![
                vec![Severity::P2, Severity::P4],
                vec![Severity::P4, Severity::P4],
            ]
        );
    }

    #[test]
    fn board_name_cannot_be_empty() {
        let err = Board::new("  ", ["E1"], ["M1"]).expect_err("empty name");
        assert!(matches!(err, BoardError::InvalidBoard { .. }));
    }

    #[test]
    fn default_board_prefers_the_marked_one() {
        let boards = vec![
            Board::new("first", ["E1"], ["M1"]).expect("valid board"),
            Board::new("second", ["E1"], ["M1"])
                .expect("valid board")
                .mark_default(),
        ];
        let picked = Board::default_board(&boards).expect("non-empty list");
        assert_eq!(picked.name, "second");
    }

    #[test]
    fn default_board_falls_back_to_first() {
        let boards = vec![
            Board::new("first", ["E1"], ["M1"]).expect("valid board"),
            Board::new("second", ["E1"], ["M1"]).expect("valid board"),
        ];
        let picked = Board::default_board(&boards).expect("non-empty list");
        assert_eq!(picked.name, "first");
        assert_eq!(Board::default_board(&[]), None);
    }

    #[test]
    fn boards_load_from_json() {
        let json = r#"[
            {
                "name": "lottery-ops",
                "isDefault": true,
                "environments": ["SAZKA", "VAL"],
                "metrics": ["Bets", "Logins"]
            },
            {
                "name": "spare",
                "environments": ["AGLC"],
                "metrics": ["Performance"]
            }
        ]"#;
        let boards = boards_from_json(json).expect("valid document");
        assert_eq!(boards.len(), 2);
        assert!(boards[0].is_default);
        assert!(!boards[1].is_default);
        let picked = Board::default_board(&boards).expect("non-empty list");
        assert_eq!(picked.name, "lottery-ops");
    }

    #[test]
    fn malformed_board_json_is_a_serialization_error() {
        let err = boards_from_json("not json").expect_err("malformed");
        assert!(matches!(err, BoardError::Serialization(_)));
    }

    #[test]
    fn invalid_board_in_json_fails_validation() {
        let json = r#"[{"name": "", "environments": [], "metrics": []}]"#;
        let err = boards_from_json(json).expect_err("invalid board");
        assert!(matches!(err, BoardError::InvalidBoard { .. }));
    }
}
