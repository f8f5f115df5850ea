//! Controlled vocabulary tables and alias matching.
//!
//! A [`Vocabulary`] is an ordered, immutable list of canonical codes, each
//! carrying the alias strings that should resolve to it. Order is load
//! bearing: when a tag could textually satisfy more than one code, the
//! declared entry and alias order is the deterministic tie-break.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VocabError};
use crate::normalize::normalize;

/// One canonical code and the alias strings that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// The canonical code this entry resolves to.
    pub code: String,
    /// Alias strings, in matching priority order.
    pub aliases: Vec<String>,
}

impl VocabEntry {
    /// Creates an entry from a code and its aliases.
    pub fn new(
        code: impl Into<String>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            code: code.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

/// A successful vocabulary resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabMatch {
    /// The canonical code that matched.
    pub code: String,
    /// The raw tag the match originated from.
    pub tag: String,
}

/// An ordered, immutable alias table mapping raw tag text to canonical codes.
///
/// Construction validates the table once; matching never fails afterwards.
/// Deserialization goes through the same validation, so a vocabulary loaded
/// from configuration carries the same guarantees as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VocabEntry>", into = "Vec<VocabEntry>")]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl Vocabulary {
    /// Creates a vocabulary from ordered entries.
    ///
    /// # Errors
    ///
    /// Returns `VocabError` if an entry has an empty code, no aliases, an
    /// alias that normalizes to the empty string, or repeats a code already
    /// declared.
    pub fn new(entries: Vec<VocabEntry>) -> Result<Self> {
        for (ix, entry) in entries.iter().enumerate() {
            if entry.code.is_empty() {
                return Err(VocabError::EmptyCode);
            }
            if entry.aliases.is_empty() {
                return Err(VocabError::NoAliases {
                    code: entry.code.clone(),
                });
            }
            for alias in &entry.aliases {
                if normalize(alias).is_empty() {
                    return Err(VocabError::EmptyAlias {
                        code: entry.code.clone(),
                        alias: alias.clone(),
                    });
                }
            }
            if entries[..ix].iter().any(|earlier| earlier.code == entry.code) {
                return Err(VocabError::DuplicateCode {
                    code: entry.code.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Creates a new vocabulary builder.
    #[must_use]
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// Returns the entries in declared order.
    #[must_use]
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Returns the number of canonical codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vocabulary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `code` is one of this vocabulary's canonical codes.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    /// Resolves an ordered sequence of raw tags against this vocabulary.
    ///
    /// Tags are scanned in their given order; for each tag, entries are
    /// scanned in declared order and aliases within an entry in declared
    /// order. The first alias whose normalized form is a substring of the
    /// normalized tag yields the match. Returns `None` when no tag/alias
    /// pair matches.
    #[must_use]
    pub fn match_tags(&self, tags: &[String]) -> Option<VocabMatch> {
        for tag in tags {
            let token = normalize(tag);
            for entry in &self.entries {
                for alias in &entry.aliases {
                    if token.contains(normalize(alias).as_str()) {
                        debug!(code = %entry.code, tag = %tag, "vocabulary match");
                        return Some(VocabMatch {
                            code: entry.code.clone(),
                            tag: tag.clone(),
                        });
                    }
                }
            }
        }
        None
    }
}

impl TryFrom<Vec<VocabEntry>> for Vocabulary {
    type Error = VocabError;

    fn try_from(entries: Vec<VocabEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<Vocabulary> for Vec<VocabEntry> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.entries
    }
}

/// Builder for [`Vocabulary`] tables.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    entries: Vec<VocabEntry>,
}

impl VocabularyBuilder {
    /// Appends an entry; entries match in the order they are added.
    #[must_use]
    pub fn entry(
        mut self,
        code: impl Into<String>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.entries.push(VocabEntry::new(code, aliases));
        self
    }

    /// Builds the validated [`Vocabulary`].
    ///
    /// # Errors
    ///
    /// Returns `VocabError` under the same conditions as [`Vocabulary::new`].
    pub fn build(self) -> Result<Vocabulary> {
        Vocabulary::new(self.entries)
    }
}
