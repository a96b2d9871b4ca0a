//! Enumeration types for request and output parameters.

use serde::{Deserialize, Serialize};

/// Output format for rendered records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

impl ResponseFormat {
    /// Check if this is JSON format.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Sort order for an author's works. All orders are descending.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkSort {
    /// Most cited first.
    #[default]
    CitedByCount,
    /// Newest publication year first.
    PublicationYear,
    /// Newest publication date first.
    PublicationDate,
    /// Best search match first.
    RelevanceScore,
}

impl WorkSort {
    /// Value for the `sort` query parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::CitedByCount => "cited_by_count:desc",
            Self::PublicationYear => "publication_year:desc",
            Self::PublicationDate => "publication_date:desc",
            Self::RelevanceScore => "relevance_score:desc",
        }
    }
}
