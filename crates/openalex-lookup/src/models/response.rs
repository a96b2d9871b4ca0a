//! List response envelope and body parsing.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{Author, Work};
use crate::error::LookupResult;

/// A page of results from a list endpoint (`/authors`, `/works`).
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Paging metadata.
    #[serde(default)]
    pub meta: Option<Meta>,

    /// Records in server order.
    pub results: Vec<T>,
}

/// Paging metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// Total number of matching records.
    #[serde(default)]
    pub count: Option<u64>,

    /// Current page number.
    #[serde(default)]
    pub page: Option<u32>,

    /// Page size.
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl<T> Page<T> {
    /// Total number of matches reported by the server, if any.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.meta.as_ref()?.count
    }
}

/// Parse a list response body. A missing `results` field is a parse error.
pub fn parse_page<T: DeserializeOwned>(body: &str) -> LookupResult<Page<T>> {
    Ok(serde_json::from_str(body)?)
}

/// Parse an `/authors` search response body.
pub fn parse_authors(body: &str) -> LookupResult<Vec<Author>> {
    Ok(parse_page::<Author>(body)?.results)
}

/// Parse a `/works` listing response body.
pub fn parse_works(body: &str) -> LookupResult<Vec<Work>> {
    Ok(parse_page::<Work>(body)?.results)
}

/// Parse a single-author response body. A body without `id` yields `None`.
pub fn parse_author(body: &str) -> LookupResult<Option<Author>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.get("id").is_none_or(serde_json::Value::is_null) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}
