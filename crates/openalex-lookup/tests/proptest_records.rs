//! Property-based tests for response parsing.

use proptest::prelude::*;
use serde_json::json;

use openalex_lookup::models::{parse_authors, parse_works};

/// Generate an arbitrary author object as OpenAlex would return it.
fn arb_author_json() -> impl Strategy<Value = serde_json::Value> {
    (
        "A[0-9]{6,10}",                                // short id
        proptest::option::of("[A-Za-z .'-]{1,40}"),    // display_name
        proptest::option::of(0u32..500),               // h_index
        proptest::option::of(0u64..1_000_000),         // cited_by_count
        proptest::option::of("[A-Za-z ]{1,40}"),       // institution
    )
        .prop_map(|(id, name, h_index, cited_by, institution)| {
            let mut obj = json!({
                "id": format!("https://openalex.org/{id}"),
                "display_name": name,
                "cited_by_count": cited_by,
            });
            if let Some(h) = h_index {
                obj["summary_stats"] = json!({"h_index": h});
            }
            if let Some(inst) = institution {
                obj["last_known_institutions"] = json!([{"display_name": inst}]);
            }
            obj
        })
}

/// Generate an arbitrary work object.
fn arb_work_json() -> impl Strategy<Value = serde_json::Value> {
    (
        "W[0-9]{6,10}",
        proptest::option::of("[A-Za-z0-9 ]{1,80}"),
        proptest::option::of(1900i32..2030),
        proptest::option::of(0u64..1_000_000),
    )
        .prop_map(|(id, title, year, cited_by)| {
            json!({
                "id": format!("https://openalex.org/{id}"),
                "display_name": title,
                "publication_year": year,
                "cited_by_count": cited_by,
            })
        })
}

proptest! {
    /// N results in, N authors out, same order, same ids.
    #[test]
    fn authors_count_and_order_preserved(items in proptest::collection::vec(arb_author_json(), 0..30)) {
        let body = json!({"results": items}).to_string();
        let authors = parse_authors(&body).expect("well-formed page parses");

        prop_assert_eq!(authors.len(), items.len());
        for (author, item) in authors.iter().zip(&items) {
            prop_assert_eq!(Some(author.id.as_str()), item["id"].as_str());
            prop_assert_eq!(author.h_index.map(u64::from), item["summary_stats"]["h_index"].as_u64());
        }
    }

    /// N results in, N works out, same order.
    #[test]
    fn works_count_and_order_preserved(items in proptest::collection::vec(arb_work_json(), 0..30)) {
        let body = json!({"results": items}).to_string();
        let works = parse_works(&body).expect("well-formed page parses");

        prop_assert_eq!(works.len(), items.len());
        for (work, item) in works.iter().zip(&items) {
            prop_assert_eq!(Some(work.id.as_str()), item["id"].as_str());
            prop_assert_eq!(work.publication_year.map(i64::from), item["publication_year"].as_i64());
        }
    }

    /// Parsing the same body twice yields identical records.
    #[test]
    fn parsing_is_deterministic(items in proptest::collection::vec(arb_author_json(), 0..10)) {
        let body = json!({"results": items}).to_string();
        prop_assert_eq!(parse_authors(&body).unwrap(), parse_authors(&body).unwrap());
    }

    /// Arbitrary text never panics the parser.
    #[test]
    fn arbitrary_body_never_panics(body in ".*") {
        let _ = parse_authors(&body);
        let _ = parse_works(&body);
    }
}
