#![no_main]

//! Fuzz target for import auto-detection.
//!
//! Arbitrary text must either match one importer or come back unrecognized, never panic.

use libfuzzer_sys::fuzz_target;
use rulecat_import::{DetectOutcome, detect_and_parse};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let DetectOutcome::Matched { rules, .. } = detect_and_parse(s) {
        // Whatever was accepted must serialize back to a rule map.
        let value = serde_json::to_value(&rules).expect("rules serialize");
        assert!(value.is_object());
    }
});
