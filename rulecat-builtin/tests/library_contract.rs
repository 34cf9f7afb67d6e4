//! Contract checks for the built-in library as a whole.

use proptest::prelude::*;
use rulecat_builtin::{BuiltinLibrary, tokenize};
use rulecat_fixer_api::{FileContext, FixerLibrary, RuleSetting};

#[test]
fn every_sample_runs_under_its_own_configuration() {
    let lib = BuiltinLibrary::new();
    for mut fixer in lib.fixers() {
        let Some(definition) = fixer.definition() else {
            continue;
        };
        for sample in &definition.code_samples {
            let mut tokens = lib.tokenize(&sample.code).expect("sample tokenizes");
            if fixer.configuration_schema().is_some() {
                fixer
                    .configure(sample.configuration.as_ref())
                    .expect("sample configuration is valid");
            }
            fixer
                .fix(&sample.file_context(), &mut tokens)
                .expect("sample fixes");
        }
    }
}

#[test]
fn fixers_without_a_schema_reject_options() {
    let lib = BuiltinLibrary::new();
    let options = serde_json::json!({ "x": 1 });
    for mut fixer in lib.fixers() {
        if fixer.configuration_schema().is_some() {
            continue;
        }
        let err = fixer.configure(options.as_object()).unwrap_err();
        assert_eq!(err.kind(), "NotConfigurable", "{}", fixer.name());
    }
}

#[test]
fn resolved_sets_only_name_known_fixers() {
    let lib = BuiltinLibrary::new();
    let names: Vec<_> = lib.fixers().iter().map(|f| f.name().to_string()).collect();
    for set in lib.set_names() {
        let rules = lib.resolve_set(&set).expect("resolve");
        for (rule, setting) in &rules {
            assert!(names.contains(rule), "{set} names unknown rule {rule}");
            assert_ne!(*setting, RuleSetting::Disabled);
        }
    }
}

#[test]
fn risky_fixers_describe_their_risk() {
    let lib = BuiltinLibrary::new();
    for fixer in lib.fixers().iter().filter(|f| f.is_risky()) {
        let definition = fixer.definition().expect("risky fixers are documented");
        assert!(!definition.risky_description.is_empty(), "{}", fixer.name());
    }
}

#[test]
fn fix_on_stdin_context_is_stable_for_plain_code() {
    let lib = BuiltinLibrary::new();
    let code = "<?php\n\n$a = [1, 2];\n";
    for fixer in lib.fixers() {
        let mut tokens = tokenize(code).expect("tokenize");
        fixer.fix(&FileContext::Stdin, &mut tokens).expect("fix");
        assert_eq!(tokens.generate_code(), code, "{} changed clean code", fixer.name());
    }
}

proptest! {
    #[test]
    fn tokenizing_is_lossless(body in "[a-zA-Z0-9_ $=;(),.\\[\\]{}\n\t+*/<>!-]{0,80}") {
        let code = format!("<?php {body}");
        if let Ok(tokens) = tokenize(&code) {
            prop_assert_eq!(tokens.generate_code(), code);
        }
    }

    #[test]
    fn inline_html_without_tags_is_one_token(text in "[a-zA-Z0-9 <>/\n]{1,60}") {
        prop_assume!(!text.to_ascii_lowercase().contains("<?php"));
        let tokens = tokenize(&text).expect("inline html always tokenizes");
        prop_assert_eq!(tokens.len(), 1);
    }
}
