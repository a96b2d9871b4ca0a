#![no_main]

use libfuzzer_sys::fuzz_target;
use openalex_lookup::models::{parse_author, parse_authors, parse_works};

fuzz_target!(|data: &[u8]| {
    // Response bodies are text; non-UTF-8 input never reaches the parsers.
    if let Ok(body) = std::str::from_utf8(data) {
        let _ = parse_authors(body);
        let _ = parse_works(body);
        let _ = parse_author(body);
    }
});
