//! End-to-end tests of the `rulecat` binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

fn rulecat() -> Command {
    Command::cargo_bin("rulecat").expect("rulecat binary")
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_extract_writes_data_file_and_index() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("public");

    rulecat()
        .current_dir(temp.path())
        .args(["extract", "--out-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(".json"));

    let index: Value =
        serde_json::from_str(&fs::read_to_string(out.join("versions.json")).unwrap()).unwrap();
    assert_eq!(index["schema"], "rulecat.index.v1");
    let version = index["versions"][0]["version"].as_str().expect("version");
    assert_eq!(index["versions"][0]["indent"], "    ");
    assert_eq!(index["versions"][0]["lineEnding"], "\n");

    let data: Value =
        serde_json::from_str(&fs::read_to_string(out.join(format!("{version}.json"))).unwrap())
            .unwrap();
    assert!(data["fixers"]["array_syntax"].is_object());
    assert_eq!(data["sets"]["@Symfony:risky"]["strict_comparison"], Value::Null);
}

#[test]
fn test_extract_uses_config_file_out_dir() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(
        temp.path().join("rulecat.toml"),
        "[extract]\nout_dir = \"site/data\"\npretty = false\n",
    )
    .unwrap();

    rulecat()
        .current_dir(temp.path())
        .arg("extract")
        .assert()
        .success();

    let index = fs::read_to_string(temp.path().join("site/data/versions.json")).unwrap();
    assert_eq!(index.lines().count(), 1, "compact output expected: {index}");
}

#[test]
fn test_extract_never_leaks_library_root() {
    let temp = TempDir::new().expect("temp dir");
    rulecat()
        .current_dir(temp.path())
        .args(["extract", "--out-dir", "out"])
        .assert()
        .success();

    let data_file = fs::read_dir(temp.path().join("out"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.file_name().is_some_and(|n| n != "versions.json"))
        .expect("data file");
    let data = fs::read_to_string(data_file).unwrap();
    assert!(data.contains("/path/to/src"));
    assert!(!data.contains("rulecat-builtin"));
}

#[test]
fn test_list_fixers_text() {
    rulecat()
        .arg("list-fixers")
        .assert()
        .success()
        .stdout(predicate::str::contains("array_syntax"))
        .stdout(predicate::str::contains("strict_comparison"))
        .stdout(predicate::str::contains("risky"));
}

#[test]
fn test_list_fixers_json() {
    let output = rulecat()
        .args(["list-fixers", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows = stdout_json(&output);
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 10);
    let risky: Vec<_> = rows
        .iter()
        .filter(|r| r["risky"] == true)
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(risky, ["psr_autoloading", "strict_comparison"]);
}

#[test]
fn test_list_fixers_markdown() {
    rulecat()
        .args(["list-fixers", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# rulecat catalog\n"))
        .stdout(predicate::str::contains("- Fixers: 10 (risky 2)"))
        .stdout(predicate::str::contains("| `array_syntax` |"))
        .stdout(predicate::str::contains("## Sets"));
}

#[test]
fn test_explain_renders_markdown() {
    rulecat()
        .args(["explain", "Array-Syntax"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# `array_syntax`"))
        .stdout(predicate::str::contains("## Options"))
        .stdout(predicate::str::contains("```diff"));
}

#[test]
fn test_explain_unknown_fixer_fails() {
    rulecat()
        .args(["explain", "syntax_of_doom"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown fixer"));
}

#[test]
fn test_explain_suggests_close_names() {
    rulecat()
        .args(["explain", "quote"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("single_quote"));
}

#[test]
fn test_import_php_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join(".php-cs-fixer.php");
    fs::write(
        &path,
        r#"<?php

$finder = PhpCsFixer\Finder::create()->in(__DIR__);

return (new PhpCsFixer\Config())
    ->setRules([
        '@PSR2' => true,
        'array_syntax' => ['syntax' => 'short'],
        'elseif' => false,
    ])
    ->setFinder($finder);
"#,
    )
    .unwrap();

    let output = rulecat().arg("import").arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "@PSR2": null,
            "array_syntax": { "syntax": "short" },
            "elseif": false,
        })
    );
}

#[test]
fn test_import_stdin_yaml() {
    let output = rulecat()
        .arg("import")
        .write_stdin("rules:\n  '@Symfony': true\n  single_quote: ~\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({ "@Symfony": null, "single_quote": null })
    );
}

#[test]
fn test_import_dash_reads_stdin() {
    rulecat()
        .args(["import", "-"])
        .write_stdin(r#"{"elseif": true, "single_quote": false}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"elseif\": null"))
        .stdout(predicate::str::contains("\"single_quote\": false"));
}

#[test]
fn test_import_unrecognized_exits_with_code_2() {
    rulecat()
        .arg("import")
        .write_stdin("this is not a configuration")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unrecognized"));
}

#[test]
fn test_import_forced_format_mismatch_exits_with_code_2() {
    rulecat()
        .args(["import", "--format", "json"])
        .write_stdin("elseif: true\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON"));
}

#[test]
fn test_import_unknown_format_is_usage_error() {
    rulecat()
        .args(["import", "--format", "toml"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown import format"));
}

#[test]
fn test_import_missing_file_is_runtime_error() {
    let temp = TempDir::new().expect("temp dir");
    rulecat()
        .current_dir(temp.path())
        .args(["import", "missing.php"])
        .assert()
        .code(1);
}
