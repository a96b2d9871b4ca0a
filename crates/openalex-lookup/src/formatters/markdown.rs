//! Markdown output formatting.

use crate::models::{Author, Work};

/// Format a list of works as Markdown.
#[must_use]
pub fn format_works_markdown(works: &[Work]) -> String {
    if works.is_empty() {
        return "No works found.".to_string();
    }

    let mut output = format!("# Works ({} results)\n\n", works.len());

    for (i, work) in works.iter().enumerate() {
        output.push_str(&format_work_markdown(work, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single work as Markdown.
#[must_use]
pub fn format_work_markdown(work: &Work, index: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {}. {}\n\n", index, work.title_or_default()));

    // Year, citations, venue
    let mut meta = Vec::new();
    match work.publication_year {
        Some(year) => meta.push(format!("**Year**: {year}")),
        None => meta.push("**Year**: unknown".to_string()),
    }
    meta.push(format!("**Citations**: {}", work.cited_by_count));

    if let Some(venue) = &work.host_venue {
        meta.push(format!("**Venue**: {venue}"));
    }

    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    let mut links = Vec::new();
    if let Some(doi) = &work.doi {
        links.push(format!("[DOI]({doi})"));
    }
    links.push(format!("[OpenAlex]({})", work.id));
    output.push_str(&format!("**Links**: {}\n", links.join(" | ")));

    output
}

/// Format a list of authors as Markdown.
#[must_use]
pub fn format_authors_markdown(authors: &[Author]) -> String {
    if authors.is_empty() {
        return "No authors found.".to_string();
    }

    let mut output = format!("# Authors ({} results)\n\n", authors.len());

    for (i, author) in authors.iter().enumerate() {
        output.push_str(&format_author_markdown_indexed(author, Some(i + 1)));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single author as Markdown.
#[must_use]
pub fn format_author_markdown(author: &Author) -> String {
    format_author_markdown_indexed(author, None)
}

fn format_author_markdown_indexed(author: &Author, index: Option<usize>) -> String {
    let mut output = String::new();

    match index {
        Some(index) => output.push_str(&format!("## {}. {}\n\n", index, author.name_or_default())),
        None => output.push_str(&format!("## {}\n\n", author.name_or_default())),
    }

    if let Some(affiliation) = &author.affiliation {
        output.push_str(&format!("**Affiliation**: {affiliation}\n\n"));
    }

    // Metrics
    let h_index = author.h_index.map_or_else(|| "unknown".to_string(), |h| h.to_string());
    let metrics = [
        format!("**h-index**: {h_index}"),
        format!("**Citations**: {}", author.cited_by_count),
        format!("**Works**: {}", author.works_count),
    ];
    output.push_str(&format!("{}\n\n", metrics.join(" | ")));

    if let Some(orcid) = &author.orcid {
        output.push_str(&format!("**ORCID**: [{orcid}]({orcid})\n\n"));
    }

    output.push_str(&format!("**OpenAlex**: `{}`\n", author.id));

    output
}
