//! Work data model mapped from the OpenAlex works schema.

use serde::{Deserialize, Serialize};

/// A publication entry from OpenAlex.
///
/// Serializes back to the OpenAlex wire shape, so records round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WorkRecord", into = "WorkRecord")]
pub struct Work {
    /// OpenAlex work ID (e.g. `https://openalex.org/W2100837269`).
    pub id: String,

    /// Work title.
    pub display_name: Option<String>,

    /// Publication year (`None` when unknown).
    pub publication_year: Option<i32>,

    /// DOI URL.
    pub doi: Option<String>,

    /// Number of citations this work has received (0 when unreported).
    pub cited_by_count: u64,

    /// Journal, conference, or repository hosting the work.
    pub host_venue: Option<String>,
}

impl Work {
    /// Get the title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Untitled")
    }

    /// Check if this work has been cited at all.
    #[must_use]
    pub const fn has_citations(&self) -> bool {
        self.cited_by_count > 0
    }
}

/// Work object as it appears on the wire.
#[derive(Debug, Serialize, Deserialize)]
struct WorkRecord {
    id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    publication_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    doi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cited_by_count: Option<u64>,

    /// Legacy venue field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host_venue: Option<Named>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    primary_location: Option<Location>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Named {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Location {
    #[serde(default)]
    source: Option<Named>,
}

impl From<WorkRecord> for Work {
    fn from(record: WorkRecord) -> Self {
        let host_venue = record
            .host_venue
            .and_then(|v| v.display_name)
            .or_else(|| record.primary_location.and_then(|l| l.source).and_then(|s| s.display_name));

        Self {
            id: record.id,
            display_name: record.display_name.or(record.title),
            publication_year: record.publication_year,
            doi: record.doi.filter(|d| !d.is_empty()),
            cited_by_count: record.cited_by_count.unwrap_or(0),
            host_venue,
        }
    }
}

impl From<Work> for WorkRecord {
    fn from(work: Work) -> Self {
        Self {
            id: work.id,
            display_name: work.display_name,
            title: None,
            publication_year: work.publication_year,
            doi: work.doi,
            cited_by_count: Some(work.cited_by_count),
            host_venue: work.host_venue.map(|name| Named { display_name: Some(name) }),
            primary_location: None,
        }
    }
}
