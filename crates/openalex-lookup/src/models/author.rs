//! Author data model mapped from the OpenAlex authors schema.

use serde::{Deserialize, Serialize};

/// A researcher entry from OpenAlex.
///
/// Serializes back to the OpenAlex wire shape, so records round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AuthorRecord", into = "AuthorRecord")]
pub struct Author {
    /// OpenAlex author ID (e.g. `https://openalex.org/A5053780153`).
    pub id: String,

    /// Author name.
    pub display_name: Option<String>,

    /// ORCID URL.
    pub orcid: Option<String>,

    /// Number of works attributed to this author (0 when unreported).
    pub works_count: u64,

    /// Total citation count across all works (0 when unreported).
    pub cited_by_count: u64,

    /// h-index metric (`None` when unknown).
    pub h_index: Option<u32>,

    /// Last known institution.
    pub affiliation: Option<String>,
}

impl Author {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Unknown")
    }

    /// Short form of the id (`A5053780153`).
    #[must_use]
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }

    /// Get the h-index or 0 if not available.
    #[must_use]
    pub fn h_index_value(&self) -> u32 {
        self.h_index.unwrap_or(0)
    }
}

/// Strip the `https://openalex.org/` prefix (or any URL path) from an entity id.
#[must_use]
pub fn short_id(id: &str) -> &str {
    id.trim_end_matches('/').rsplit('/').next().unwrap_or(id)
}

/// Author object as it appears on the wire.
#[derive(Debug, Serialize, Deserialize)]
struct AuthorRecord {
    id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    orcid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    works_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cited_by_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary_stats: Option<SummaryStats>,

    /// Older single-institution field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_known_institution: Option<Institution>,

    /// Current multi-institution field; entries may be null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_known_institutions: Option<Vec<Option<Institution>>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SummaryStats {
    #[serde(default)]
    h_index: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Institution {
    #[serde(default)]
    display_name: Option<String>,
}

impl From<AuthorRecord> for Author {
    fn from(record: AuthorRecord) -> Self {
        let affiliation = record
            .last_known_institution
            .and_then(|i| i.display_name)
            .or_else(|| {
                record
                    .last_known_institutions
                    .unwrap_or_default()
                    .into_iter()
                    .flatten()
                    .find_map(|i| i.display_name)
            });

        Self {
            id: record.id,
            display_name: record.display_name,
            orcid: record.orcid.filter(|o| !o.is_empty()),
            works_count: record.works_count.unwrap_or(0),
            cited_by_count: record.cited_by_count.unwrap_or(0),
            h_index: record.summary_stats.and_then(|s| s.h_index),
            affiliation,
        }
    }
}

impl From<Author> for AuthorRecord {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            display_name: author.display_name,
            orcid: author.orcid,
            works_count: Some(author.works_count),
            cited_by_count: Some(author.cited_by_count),
            summary_stats: author.h_index.map(|h| SummaryStats { h_index: Some(h) }),
            last_known_institution: author
                .affiliation
                .map(|name| Institution { display_name: Some(name) }),
            last_known_institutions: None,
        }
    }
}
