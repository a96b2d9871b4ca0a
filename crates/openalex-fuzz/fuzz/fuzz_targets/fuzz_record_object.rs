#![no_main]

use libfuzzer_sys::fuzz_target;
use openalex_lookup::models::{Author, Work};

fuzz_target!(|data: &[u8]| {
    // Only well-formed JSON objects exercise the record mapping.
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = serde_json::from_value::<Author>(json.clone());
        let _ = serde_json::from_value::<Work>(json);
    }
});
