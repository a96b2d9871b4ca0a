//! Fuzzing library for openalex-lookup.
//!
//! This crate provides fuzzing targets for the OpenAlex response parsers.
//!
//! # Usage
//!
//! ```bash
//! cd crates/openalex-fuzz
//! cargo +nightly fuzz run fuzz_results_page -- -max_total_time=60
//! ```

pub use openalex_lookup::models;
