//! Alert classification: vocabulary resolution plus priority extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use board_vocab::{defaults, normalize, Vocabulary};

use crate::severity::PriorityLabel;
use crate::types::{ClassifiedAlert, RawAlert};

/// Pattern for priority-bearing tags, matched against normalized tag text.
static PRIORITY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"priority:(p[1-4])").unwrap_or_else(|_| unreachable!()));

/// Derives a priority label from an alert's explicit field or its tags.
///
/// An explicit `priority` field wins and passes through verbatim,
/// upper-cased and unvalidated. Otherwise the tags are scanned in order and
/// the first `priority:p1`..`priority:p4` tag supplies the level. Returns
/// `None` when neither source yields a value.
#[must_use]
pub fn extract_priority(alert: &RawAlert) -> Option<PriorityLabel> {
    if let Some(explicit) = &alert.priority {
        return Some(PriorityLabel::new(explicit));
    }

    for tag in &alert.tags {
        let token = normalize(tag);
        if let Some(level) = PRIORITY_TAG.captures(&token).and_then(|c| c.get(1)) {
            return Some(PriorityLabel::new(level.as_str()));
        }
    }

    None
}

/// Classifies raw alerts against an environment and a metric vocabulary.
///
/// Classification is a pure function of the alert and the two tables: one
/// classifier is built over the process-wide vocabularies at startup and
/// shared by every batch. It holds no other state and never mutates the
/// tables.
#[derive(Debug, Clone)]
pub struct Classifier {
    env_vocab: Vocabulary,
    metric_vocab: Vocabulary,
}

impl Classifier {
    /// Creates a classifier over the given vocabularies.
    #[must_use]
    pub const fn new(env_vocab: Vocabulary, metric_vocab: Vocabulary) -> Self {
        Self {
            env_vocab,
            metric_vocab,
        }
    }

    /// Returns the environment vocabulary.
    #[must_use]
    pub const fn environment_vocabulary(&self) -> &Vocabulary {
        &self.env_vocab
    }

    /// Returns the metric vocabulary.
    #[must_use]
    pub const fn metric_vocabulary(&self) -> &Vocabulary {
        &self.metric_vocab
    }

    /// Classifies one alert.
    ///
    /// Never rejects an input: an unresolved environment, metric, or
    /// priority comes back as `None` on the classified record.
    #[must_use]
    pub fn classify(&self, alert: &RawAlert) -> ClassifiedAlert {
        let env = self.env_vocab.match_tags(&alert.tags).map(|m| m.code);
        let metric = self.metric_vocab.match_tags(&alert.tags).map(|m| m.code);
        let priority = extract_priority(alert);

        debug!(
            alert_id = %alert.id,
            env = ?env,
            metric = ?metric,
            priority = ?priority,
            "classified alert"
        );

        ClassifiedAlert {
            id: alert.id.clone(),
            env,
            metric,
            priority,
        }
    }

    /// Classifies a batch into a same-length, same-order sequence.
    ///
    /// Elements are classified independently; the batch is processed
    /// sequentially so log output follows input order.
    #[must_use]
    pub fn classify_batch(&self, alerts: &[RawAlert]) -> Vec<ClassifiedAlert> {
        alerts.iter().map(|alert| self.classify(alert)).collect()
    }
}

impl Default for Classifier {
    /// A classifier over the built-in vocabularies.
    fn default() -> Self {
        Self::new(
            defaults::environment_vocabulary().clone(),
            defaults::metric_vocabulary().clone(),
        )
    }
}
