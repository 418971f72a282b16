//! Conference-talk statistics shown on the administration dashboard.
//!
//! [`Statistics`] is an immutable value object: it is built once from the
//! per-talk figures and handed to templates as context via
//! [`Statistics::to_context`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use twig_extra::ValueKind;

use crate::{AdminError, AdminResult};

/// Figures collected for a single talk.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkStatistics {
    /// Identifier of the talk resource.
    pub talk_id: u64,
    /// Talk title.
    pub title: String,
    /// Number of people who attended.
    #[serde(default)]
    pub attendees: u64,
}

/// Totals across every talk in a [`Statistics`] snapshot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessActivitySummary {
    /// Number of talks.
    pub total_talks: u64,
    /// Sum of attendees across talks.
    pub total_attendees: u64,
}

impl BusinessActivitySummary {
    /// Compute totals over `talks`.
    #[must_use]
    pub fn from_talks(talks: &[TalkStatistics]) -> Self {
        talks.iter().fold(Self::default(), |summary, talk| Self {
            total_talks: summary.total_talks.saturating_add(1),
            total_attendees: summary.total_attendees.saturating_add(talk.attendees),
        })
    }
}

/// Snapshot of talk statistics and their business summary.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    talks: Vec<TalkStatistics>,
    business_activity_summary: BusinessActivitySummary,
}

impl Statistics {
    /// Build a snapshot from explicit parts.
    #[must_use]
    pub const fn new(
        talks: Vec<TalkStatistics>,
        business_activity_summary: BusinessActivitySummary,
    ) -> Self {
        Self {
            talks,
            business_activity_summary,
        }
    }

    /// Build a snapshot whose summary is derived from `talks`.
    #[must_use]
    pub fn from_talks(talks: Vec<TalkStatistics>) -> Self {
        let summary = BusinessActivitySummary::from_talks(&talks);
        Self::new(talks, summary)
    }

    /// Per-talk figures.
    #[must_use]
    pub fn talks(&self) -> &[TalkStatistics] {
        &self.talks
    }

    /// Totals across all talks.
    #[must_use]
    pub const fn business_activity_summary(&self) -> BusinessActivitySummary {
        self.business_activity_summary
    }

    /// Render the snapshot as a template context mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Serialisation`] if the value cannot be encoded
    /// and [`AdminError::NotAMapping`] if it does not encode as a mapping.
    pub fn to_context(&self) -> AdminResult<Map<String, Value>> {
        let encoded = serde_json::to_value(self)?;
        let Value::Object(map) = encoded else {
            return Err(AdminError::NotAMapping {
                what: "statistics context",
                found: ValueKind::of(&encoded),
            });
        };
        Ok(map)
    }
}
