//! Rendering helpers (markdown) for human-readable catalog references.

use diffy::PatchFormatter;
use rulecat_types::{
    CatalogData, CodeSampleDescriptor, FixerDescriptor, LibraryInfo, OptionDescriptor,
    RuleSetting, SampleResult,
};
use serde_json::Value;

pub fn render_catalog_md(catalog: &CatalogData, info: Option<&LibraryInfo>) -> String {
    let mut out = String::new();
    out.push_str("# rulecat catalog\n\n");
    if let Some(info) = info {
        out.push_str(&format!("- Version: `{}`\n", info.version));
        out.push_str(&format!("- Indent: `{}`\n", escape_ws(&info.indent)));
        out.push_str(&format!("- Line ending: `{}`\n", escape_ws(&info.line_ending)));
    }
    let risky = catalog.fixers.values().filter(|f| f.risky).count();
    out.push_str(&format!(
        "- Fixers: {} (risky {})\n- Sets: {}\n\n",
        catalog.fixers.len(),
        risky,
        catalog.sets.len()
    ));

    out.push_str("## Fixers\n\n");
    if catalog.fixers.is_empty() {
        out.push_str("_No fixers._\n\n");
    } else {
        out.push_str("| Fixer | Risky | Configurable | Summary |\n");
        out.push_str("|---|---|---|---|\n");
        for (name, fixer) in &catalog.fixers {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} |\n",
                name,
                yes_no(fixer.risky),
                yes_no(fixer.is_configurable()),
                table_cell(fixer.summary.as_deref().unwrap_or("-"))
            ));
        }
        out.push('\n');
    }

    out.push_str("## Sets\n\n");
    if catalog.sets.is_empty() {
        out.push_str("_No sets._\n");
        return out;
    }
    for (name, rules) in &catalog.sets {
        out.push_str(&format!("### {}\n\n", name));
        for (rule, setting) in rules {
            match setting {
                RuleSetting::Configured(options) => out.push_str(&format!(
                    "- `{}`: `{}`\n",
                    rule,
                    Value::Object(options.clone())
                )),
                RuleSetting::Disabled => out.push_str(&format!("- ~~`{}`~~\n", rule)),
                RuleSetting::Enabled => out.push_str(&format!("- `{}`\n", rule)),
            }
        }
        out.push('\n');
    }

    out
}

pub fn render_fixer_md(name: &str, fixer: &FixerDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!("# `{}`\n\n", name));
    if let Some(summary) = &fixer.summary {
        out.push_str(&format!("{}\n\n", summary));
    }
    if let Some(description) = &fixer.description {
        out.push_str(&format!("{}\n\n", description));
    }
    if fixer.risky {
        out.push_str("**Risky.**");
        if let Some(why) = &fixer.risky_description {
            out.push_str(&format!(" {}", why));
        }
        out.push_str("\n\n");
    }

    if let Some(options) = &fixer.configuration {
        out.push_str("## Options\n\n");
        if options.is_empty() {
            out.push_str("_No options._\n\n");
        }
        for option in options {
            render_option(&mut out, option);
        }
    }

    if !fixer.code_samples.is_empty() {
        out.push_str("## Examples\n\n");
        for (i, sample) in fixer.code_samples.iter().enumerate() {
            render_sample(&mut out, i + 1, sample);
        }
    }

    out
}

fn render_option(out: &mut String, option: &OptionDescriptor) {
    out.push_str(&format!("### `{}`\n\n", option.name));
    if let Some(description) = &option.description {
        out.push_str(&format!("{}\n\n", description));
    }
    if let Some(types) = &option.allowed_types {
        out.push_str(&format!("- Allowed types: `{}`\n", types.join("`, `")));
    }
    if let Some(values) = &option.allowed_values {
        let values: Vec<_> = values.iter().map(Value::to_string).collect();
        out.push_str(&format!("- Allowed values: `{}`\n", values.join("`, `")));
    }
    match &option.default_value {
        Some(default) => out.push_str(&format!("- Default: `{}`\n", default)),
        None => out.push_str("- Required\n"),
    }
    out.push('\n');
}

fn render_sample(out: &mut String, index: usize, sample: &CodeSampleDescriptor) {
    out.push_str(&format!("### Example #{}\n\n", index));
    if let Some(configuration) = &sample.configuration {
        out.push_str(&format!(
            "With configuration: `{}`\n\n",
            Value::Object(configuration.clone())
        ));
    }
    match &sample.to {
        SampleResult::Failed(failure) => {
            out.push_str(&format!("> {}\n\n", failure));
        }
        SampleResult::Fixed(to) if *to == sample.from => {
            out.push_str("_Unchanged._\n\n");
        }
        SampleResult::Fixed(to) => {
            out.push_str("```diff\n");
            out.push_str(&sample_diff(&sample.from, to));
            out.push_str("```\n\n");
        }
    }
}

/// Unified diff between a sample's source and its rewrite, always newline-terminated.
pub fn sample_diff(from: &str, to: &str) -> String {
    let patch = diffy::create_patch(from, to);
    let mut diff = PatchFormatter::new().fmt_patch(&patch).to_string();
    if !diff.ends_with('\n') {
        diff.push('\n');
    }
    diff
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

fn table_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

fn escape_ws(s: &str) -> String {
    s.replace('\t', "\\t").replace('\r', "\\r").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_marks_changed_lines() {
        let diff = sample_diff("<?php\n$a = array();\n", "<?php\n$a = [];\n");
        assert!(diff.contains("-$a = array();\n"));
        assert!(diff.contains("+$a = [];\n"));
        assert!(diff.ends_with('\n'));
    }

    #[test]
    fn whitespace_is_made_visible() {
        assert_eq!(escape_ws("\t\r\n"), "\\t\\r\\n");
        assert_eq!(escape_ws("    "), "    ");
    }

    #[test]
    fn pipes_do_not_break_tables() {
        assert_eq!(table_cell("a | b\nc"), "a \\| b c");
    }
}
