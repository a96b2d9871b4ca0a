//! OpenAlex Lookup
//!
//! A small typed client for the public OpenAlex API. Finds authors by name and
//! lists an author's works, mapping JSON responses into plain `Author` and
//! `Work` records.
//!
//! # Features
//!
//! - **Two lookups**: author search and works-by-author, plus single-author fetch
//! - **One request per call**: no retries, caching, or hidden state
//! - **Tagged errors**: transport, HTTP status, and parse failures are distinct
//!
//! # Example
//!
//! ```no_run
//! use openalex_lookup::{client::OpenAlexClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OpenAlexClient::new(Config::from_env()?)?;
//!
//!     let authors = client.search_authors("Yann LeCun", 3).await?;
//!     if let Some(author) = authors.first() {
//!         let works = client.get_author_works(&author.id, 5).await?;
//!         println!("{} has {} works on this page", author.name_or_default(), works.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;

pub use client::OpenAlexClient;
pub use config::Config;
pub use error::{LookupError, LookupResult};
pub use models::{Author, Work};
