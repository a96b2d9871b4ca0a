//! Formatter tests for markdown and JSON output.

use openalex_lookup::formatters;
use openalex_lookup::models::{Author, Work};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_work(id: &str, title: &str, year: Option<i32>, citations: u64) -> Work {
    Work {
        id: format!("https://openalex.org/{id}"),
        display_name: Some(title.to_string()),
        publication_year: year,
        cited_by_count: citations,
        ..Default::default()
    }
}

fn make_author(id: &str, name: &str, h_index: Option<u32>) -> Author {
    Author {
        id: format!("https://openalex.org/{id}"),
        display_name: Some(name.to_string()),
        orcid: None,
        works_count: 50,
        cited_by_count: 1200,
        h_index,
        affiliation: None,
    }
}

// =============================================================================
// Markdown Work Formatting
// =============================================================================

#[test]
fn test_format_work_markdown_basic() {
    let work = make_work("W1", "Deep learning", Some(2015), 71230);
    let output = formatters::format_work_markdown(&work, 1);

    assert!(output.contains("## 1. Deep learning"));
    assert!(output.contains("**Year**: 2015"));
    assert!(output.contains("**Citations**: 71230"));
    assert!(output.contains("[OpenAlex](https://openalex.org/W1)"));
}

#[test]
fn test_format_work_markdown_unknown_year_and_venue() {
    let mut work = make_work("W2", "Preprint", None, 0);
    work.host_venue = Some("arXiv".to_string());
    work.doi = Some("https://doi.org/10.48550/arXiv.1234".to_string());

    let output = formatters::format_work_markdown(&work, 3);
    assert!(output.contains("**Year**: unknown"));
    assert!(output.contains("**Venue**: arXiv"));
    assert!(output.contains("[DOI](https://doi.org/10.48550/arXiv.1234)"));
}

#[test]
fn test_format_works_markdown_list() {
    let works = vec![make_work("W1", "First", Some(2020), 1), make_work("W2", "Second", Some(2021), 2)];
    let output = formatters::format_works_markdown(&works);

    assert!(output.starts_with("# Works (2 results)"));
    assert!(output.find("1. First").unwrap() < output.find("2. Second").unwrap());
}

#[test]
fn test_format_works_markdown_empty() {
    assert_eq!(formatters::format_works_markdown(&[]), "No works found.");
}

// =============================================================================
// Markdown Author Formatting
// =============================================================================

#[test]
fn test_format_author_markdown() {
    let mut author = make_author("A1", "Yann LeCun", Some(141));
    author.affiliation = Some("New York University".to_string());
    author.orcid = Some("https://orcid.org/0000-0002-1926-1143".to_string());

    let output = formatters::format_author_markdown(&author);
    assert!(output.starts_with("## Yann LeCun"));
    assert!(output.contains("**Affiliation**: New York University"));
    assert!(output.contains("**h-index**: 141"));
    assert!(output.contains("**Works**: 50"));
    assert!(output.contains("**ORCID**"));
    assert!(output.contains("`https://openalex.org/A1`"));
}

#[test]
fn test_format_author_markdown_unknown_h_index() {
    let author = make_author("A2", "Nobody", None);
    let output = formatters::format_author_markdown(&author);
    assert!(output.contains("**h-index**: unknown"));
}

#[test]
fn test_format_authors_markdown_numbered() {
    let authors = vec![make_author("A1", "One", Some(1)), make_author("A2", "Two", Some(2))];
    let output = formatters::format_authors_markdown(&authors);

    assert!(output.starts_with("# Authors (2 results)"));
    assert!(output.contains("## 1. One"));
    assert!(output.contains("## 2. Two"));
}

#[test]
fn test_format_author_markdown_heading_unnumbered() {
    let author = make_author("A3", "Solo", Some(3));
    let single = formatters::format_author_markdown(&author);
    let listed = formatters::format_authors_markdown(std::slice::from_ref(&author));

    assert!(single.starts_with("## Solo\n"));
    assert!(listed.contains("## 1. Solo\n"));
    assert!(!single.contains("## 1."));
}

#[test]
fn test_format_authors_markdown_empty() {
    assert_eq!(formatters::format_authors_markdown(&[]), "No authors found.");
}

// =============================================================================
// JSON Formatting
// =============================================================================

#[test]
fn test_compact_author() {
    let mut author = make_author("A1", "Ada", Some(7));
    author.affiliation = Some("Analytical Engines Ltd".to_string());

    let compact = formatters::compact_author(&author);
    assert_eq!(compact["id"], "https://openalex.org/A1");
    assert_eq!(compact["name"], "Ada");
    assert_eq!(compact["hIndex"], 7);
    assert_eq!(compact["citations"], 1200);
    assert_eq!(compact["works"], 50);
    assert_eq!(compact["affiliation"], "Analytical Engines Ltd");
    assert!(compact.get("orcid").is_none());
}

#[test]
fn test_compact_author_unknown_h_index_is_null() {
    let compact = formatters::compact_author(&make_author("A1", "Ada", None));
    assert_eq!(compact["hIndex"], json!(null));
}

#[test]
fn test_compact_work_with_optional_fields() {
    let mut work = make_work("W1", "Deep learning", Some(2015), 10);
    work.doi = Some("https://doi.org/10.1038/nature14539".to_string());
    work.host_venue = Some("Nature".to_string());

    let compact = formatters::compact_work(&work);
    assert_eq!(compact["doi"], "https://doi.org/10.1038/nature14539");
    assert_eq!(compact["venue"], "Nature");
    assert_eq!(compact["year"], 2015);
}

#[test]
fn test_compact_work_unknown_year_is_null() {
    let compact = formatters::compact_work(&make_work("W1", "Undated", None, 0));
    assert_eq!(compact["year"], json!(null));
}
