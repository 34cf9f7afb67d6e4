#![no_main]

//! Fuzz target for reading data files back.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let _ = serde_json::from_str::<rulecat_types::DataIndex>(s);
    let _ = serde_json::from_str::<rulecat_types::RuleConfiguration>(s);

    if let Ok(catalog) = serde_json::from_str::<rulecat_types::CatalogData>(s) {
        let _ = serde_json::to_string(&catalog).expect("catalog serializes");
    }
});
