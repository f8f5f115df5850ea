//! Severity levels and the worst-severity reduction.
//!
//! This module provides the closed severity scale (`P1` most severe) and the
//! order-independent reduction a board cell's color is chosen from. Priority
//! labels arrive from an uncontrolled feed, so the scale is deliberately
//! split in two: [`PriorityLabel`] preserves whatever the feed said,
//! [`Severity`] is the closed set the display ranks by.

use serde::{Deserialize, Serialize};

/// The severity level of an alert, `P1` most severe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// Most severe; immediate operator attention.
    P1,
    /// High severity.
    P2,
    /// Medium severity.
    P3,
    /// Lowest severity; also the neutral display value for cells holding no
    /// ranked alerts.
    #[default]
    P4,
}

impl Severity {
    /// Returns the severity as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }

    /// Returns the numeric rank of this severity (1 is most severe).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::P1 => 1,
            Self::P2 => 2,
            Self::P3 => 3,
            Self::P4 => 4,
        }
    }

    /// Parses a priority label, accepting any casing. Returns `None` for
    /// anything outside `P1..P4`, including padded or otherwise
    /// un-normalized text — labels are preserved verbatim upstream, so the
    /// lookup is exact.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "P1" => Some(Self::P1),
            "P2" => Some(Self::P2),
            "P3" => Some(Self::P3),
            "P4" => Some(Self::P4),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A priority label as reported by the feed, upper-cased verbatim.
///
/// Labels are not validated: an out-of-vocabulary value such as `"P9"` is
/// preserved on the classified alert but never ranks in severity
/// comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityLabel(String);

impl PriorityLabel {
    /// Creates a label from feed text, upper-casing it.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().to_uppercase())
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Maps the label onto the severity scale, if it names a known level.
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        Severity::parse(&self.0)
    }
}

impl AsRef<str> for PriorityLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collapses a cell's priority labels into the single worst severity.
///
/// The reduction is order-independent. Labels outside `P1..P4` never win;
/// an empty or all-unranked input reduces to [`Severity::P4`], the neutral
/// display value.
pub fn worst_severity<I>(labels: I) -> Severity
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    labels
        .into_iter()
        .filter_map(|label| Severity::parse(label.as_ref()))
        .min()
        .unwrap_or_default()
}
