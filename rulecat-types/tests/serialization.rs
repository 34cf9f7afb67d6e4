use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rulecat_types::{
    CatalogData, CodeSampleDescriptor, DataIndex, FixerDescriptor, LibraryInfo, OptionDescriptor,
    RuleSetting, SampleFailure, SampleOperation, SampleResult,
};
use serde_json::json;

fn sample_catalog() -> CatalogData {
    let mut catalog = CatalogData::default();
    catalog.fixers.insert(
        "array_syntax".to_string(),
        FixerDescriptor {
            risky: false,
            configuration: Some(vec![OptionDescriptor {
                name: "syntax".to_string(),
                description: Some("Whether to use the `long` or `short` array syntax.".to_string()),
                default_value: Some(json!("short")),
                allowed_types: None,
                allowed_values: Some(vec![json!("long"), json!("short")]),
            }]),
            summary: Some("PHP arrays should be declared using the configured syntax.".to_string()),
            description: None,
            risky_description: None,
            code_samples: vec![CodeSampleDescriptor {
                from: "<?php\n$a = array(1);\n".to_string(),
                to: SampleResult::Fixed("<?php\n$a = [1];\n".to_string()),
                configuration: None,
            }],
        },
    );
    catalog.fixers.insert(
        "strict_comparison".to_string(),
        FixerDescriptor {
            risky: true,
            risky_description: Some("Changes code behavior.".to_string()),
            code_samples: vec![CodeSampleDescriptor {
                from: "<?php\n$a = \"\n".to_string(),
                to: SampleResult::Failed(SampleFailure {
                    operation: SampleOperation::Tokenize,
                    kind: "ParseError".to_string(),
                    message: "unterminated string on line 2".to_string(),
                }),
                configuration: None,
            }],
            ..FixerDescriptor::default()
        },
    );
    let mut psr2 = rulecat_types::RuleConfiguration::new();
    psr2.insert("elseif".to_string(), RuleSetting::Enabled);
    catalog.sets.insert("@PSR2".to_string(), psr2);
    catalog
}

#[test]
fn catalog_serializes_with_camel_case_wire_names() {
    let value = serde_json::to_value(sample_catalog()).expect("serialize");

    assert_eq!(
        value,
        json!({
            "fixers": {
                "array_syntax": {
                    "configuration": [{
                        "name": "syntax",
                        "description": "Whether to use the `long` or `short` array syntax.",
                        "defaultValue": "short",
                        "allowedValues": ["long", "short"]
                    }],
                    "summary": "PHP arrays should be declared using the configured syntax.",
                    "codeSamples": [{
                        "from": "<?php\n$a = array(1);\n",
                        "to": "<?php\n$a = [1];\n"
                    }]
                },
                "strict_comparison": {
                    "risky": true,
                    "riskyDescription": "Changes code behavior.",
                    "codeSamples": [{
                        "from": "<?php\n$a = \"\n",
                        "to": "*** tokenize failed with ParseError: unterminated string on line 2 ***"
                    }]
                }
            },
            "sets": { "@PSR2": { "elseif": null } }
        })
    );
}

#[test]
fn catalog_reads_back_identically() {
    let catalog = sample_catalog();
    let json = serde_json::to_string_pretty(&catalog).expect("serialize");
    let back: CatalogData = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, catalog);
}

#[test]
fn fixer_order_is_preserved_on_the_wire() {
    let mut catalog = CatalogData::default();
    for name in ["Zeta", "alpha", "Beta"] {
        catalog
            .fixers
            .insert(name.to_string(), FixerDescriptor::default());
    }
    let json = serde_json::to_string(&catalog).expect("serialize");
    let z = json.find("Zeta").expect("Zeta");
    let a = json.find("alpha").expect("alpha");
    let b = json.find("Beta").expect("Beta");
    assert!(z < a && a < b);
}

#[test]
fn data_index_defaults_to_current_schema() {
    let index = DataIndex::default();
    assert_eq!(index.schema, rulecat_types::schema::RULECAT_INDEX_V1);
    assert!(index.versions.is_empty());
}

#[test]
fn library_info_uses_camel_case() {
    let info = LibraryInfo {
        version: "3.0.0".to_string(),
        indent: "    ".to_string(),
        line_ending: "\n".to_string(),
    };
    let v = serde_json::to_value(info).expect("serialize");
    assert_eq!(v, json!({ "version": "3.0.0", "indent": "    ", "lineEnding": "\n" }));
}

fn arb_versions() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex(r"[0-9]\.[0-9]{1,2}\.[0-9]").unwrap(),
        0..12,
    )
}

proptest! {
    /// Upserting any sequence of versions leaves one sorted entry per version.
    #[test]
    fn index_upsert_keeps_unique_sorted_versions(versions in arb_versions()) {
        let mut index = DataIndex::default();
        for v in &versions {
            index.upsert(LibraryInfo {
                version: v.clone(),
                indent: "    ".to_string(),
                line_ending: "\n".to_string(),
            });
        }

        let got: Vec<_> = index.versions.iter().map(|i| i.version.clone()).collect();
        let mut expected = versions.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(got, expected);
    }
}
