//! Tag normalization and controlled-vocabulary matching for opsboard.
//!
//! Monitoring feeds attach free-form tag strings to alerts. `board-vocab`
//! turns that uncontrolled text into a small controlled vocabulary:
//!
//! - [`normalize`]: canonicalizes a raw tag into a comparable token
//! - [`Vocabulary`]: an ordered, immutable alias table that resolves a
//!   sequence of tags to a canonical code
//! - [`defaults`]: the built-in environment and metric tables
//!
//! # Example
//!
//! ```rust
//! use board_vocab::Vocabulary;
//!
//! let vocab = Vocabulary::builder()
//!     .entry("SAZKA", ["sazka", "cz"])
//!     .entry("VAL", ["val", "va", "virginia"])
//!     .build()
//!     .unwrap();
//!
//! let tags = vec!["DataCenterName: CZ".to_string()];
//! let matched = vocab.match_tags(&tags).unwrap();
//! assert_eq!(matched.code, "SAZKA");
//! assert_eq!(matched.tag, "DataCenterName: CZ");
//! ```
//!
//! Matching order is fully deterministic: tags are scanned in their given
//! order, entries in declared order, aliases within an entry in declared
//! order. The first alias whose normalized form is a substring of the
//! normalized tag wins.

#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/board-vocab/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod defaults;
pub mod error;
pub mod normalize;
pub mod vocab;

// Re-export main types at crate root
pub use error::{Result, VocabError};
pub use normalize::normalize;
pub use vocab::{VocabEntry, VocabMatch, Vocabulary, VocabularyBuilder};
