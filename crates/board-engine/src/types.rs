//! Alert records exchanged with the monitoring feed.
//!
//! [`RawAlert`] is the feed-side record. The feed is uncontrolled, so its
//! deserialization is deliberately lenient: every JSON object is accepted,
//! and malformed fields degrade to their neutral value instead of failing
//! the batch. [`ClassifiedAlert`] is the engine-side record derived from it.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::severity::PriorityLabel;

/// An alert as delivered by the external monitoring feed.
///
/// Feed payloads carry many more fields; everything beyond the three the
/// classifier reads is ignored on deserialization. A missing or non-string
/// `id` becomes empty, a missing or non-array `tags` becomes empty, and a
/// non-string `priority` becomes absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAlert {
    /// Opaque feed-assigned identifier, carried through unchanged.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    /// Free-form tag strings, in feed order.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    /// Explicit priority field, if the feed supplied one.
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<String>,
}

impl RawAlert {
    /// Creates an alert with the given id and no tags or priority.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
            priority: None,
        }
    }

    /// Replaces the alert's tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the explicit priority field.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// The classification derived from one [`RawAlert`].
///
/// `env` and `metric`, when present, are canonical codes drawn from the
/// vocabularies the alert was classified against, never raw tag text.
/// Exactly one classified alert exists per input alert; no input is ever
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAlert {
    /// Identifier of the originating alert.
    pub id: String,
    /// Canonical environment code, if any tag resolved one.
    pub env: Option<String>,
    /// Canonical metric code, if any tag resolved one.
    pub metric: Option<String>,
    /// Priority label from the explicit field or a `priority:p*` tag.
    pub priority: Option<PriorityLabel>,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Other(IgnoredAny),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Unsigned(n) => n.to_string(),
        Id::Signed(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
        Id::Other(_) => String::new(),
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        Many(Vec<String>),
        Other(IgnoredAny),
    }

    Ok(match Tags::deserialize(deserializer)? {
        Tags::Many(tags) => tags,
        Tags::Other(_) => Vec::new(),
    })
}

fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Priority {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Priority::deserialize(deserializer)? {
        Priority::Text(priority) => Some(priority),
        Priority::Other(_) => None,
    })
}
