//! Compact JSON output formatting.

use serde_json::{Value, json};

use crate::models::{Author, Work};

/// Create a compact work representation for JSON output.
///
/// Optional fields are only emitted when present.
#[must_use]
pub fn compact_work(work: &Work) -> Value {
    let mut obj = json!({
        "id": work.id,
        "title": work.title_or_default(),
        "year": work.publication_year,
        "citations": work.cited_by_count,
    });

    if let Some(doi) = &work.doi {
        obj["doi"] = json!(doi);
    }

    if let Some(venue) = &work.host_venue {
        obj["venue"] = json!(venue);
    }

    obj
}

/// Create a compact author representation for JSON output.
#[must_use]
pub fn compact_author(author: &Author) -> Value {
    let mut obj = json!({
        "id": author.id,
        "name": author.name_or_default(),
        "hIndex": author.h_index,
        "citations": author.cited_by_count,
        "works": author.works_count,
    });

    if let Some(affiliation) = &author.affiliation {
        obj["affiliation"] = json!(affiliation);
    }

    if let Some(orcid) = &author.orcid {
        obj["orcid"] = json!(orcid);
    }

    obj
}
