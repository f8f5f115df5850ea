//! Alert classification and matrix aggregation for opsboard.
//!
//! `board-engine` turns a batch of free-form alerts from a monitoring feed
//! into an environment × metric grid showing the worst unresolved severity
//! per cell:
//!
//! - [`Classifier`]: resolves each alert's tags against the environment and
//!   metric vocabularies and extracts its priority
//! - [`AlertMatrix`]: buckets classified alerts into a [`Board`]'s grid by
//!   exact label equality
//! - [`worst_severity`]: collapses a cell to the single worst severity for
//!   display
//! - [`BoardEngine`]: the composed per-batch pipeline
//!
//! The whole path is a pure, synchronous transformation: no input shape is
//! rejected, unresolvable fields degrade to absent, and unclassifiable
//! alerts are silently left out of the grid.
//!
//! # Example
//!
//! ```rust
//! use board_engine::{Board, BoardEngine, RawAlert, Severity};
//!
//! let board = Board::new(
//!     "lottery-ops",
//!     ["SAZKA", "VAL"],
//!     ["Bets", "Logins"],
//! ).unwrap();
//!
//! // Built-in vocabularies; load custom ones with `BoardEngine::new`.
//! let engine = BoardEngine::default();
//!
//! let alerts = vec![
//!     RawAlert::new("os-1").with_tags(["sazka", "bets", "priority:p2"]),
//!     RawAlert::new("os-2").with_tags(["va", "login"]),
//! ];
//!
//! let matrix = engine.render(&board, &alerts);
//! assert_eq!(matrix.worst_severity(0, 0), Severity::P2);
//! assert_eq!(matrix.worst_severity(1, 1), Severity::P4);
//! ```
//!
//! Vocabularies and boards are externally-owned configuration, loaded once
//! at startup and immutable afterwards; see [`board_vocab`] for the
//! vocabulary tables and [`boards_from_json`] for board definitions.

#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/board-engine/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod severity;
pub mod types;

// Re-export main types at crate root
pub use classify::{extract_priority, Classifier};
pub use engine::BoardEngine;
pub use error::{BoardError, Result};
pub use matrix::{boards_from_json, AlertMatrix, Board, CellAlert};
pub use severity::{worst_severity, PriorityLabel, Severity};
pub use types::{ClassifiedAlert, RawAlert};
