use crate::anonymize::PathAnonymizer;
use anyhow::Context;
use indexmap::IndexMap;
use rulecat_fixer_api::{
    AllowedValue, CodeSample, ConfigurationSchema, Fixer, FixerDefinition, FixerError,
    FixerLibrary, FixerOption,
};
use rulecat_types::{
    CatalogData, CodeSampleDescriptor, FixerDescriptor, LibraryInfo, OptionDescriptor,
    RuleSetDescriptor, SampleFailure, SampleOperation, SampleResult,
};
use std::cmp::Ordering;
use tracing::{debug, debug_span, warn};

/// Reads a [`FixerLibrary`] and produces rulecat's catalog data.
///
/// Every call walks the library again with fresh fixer instances.
pub struct CatalogExtractor<'a> {
    library: &'a dyn FixerLibrary,
    anonymizer: PathAnonymizer,
}

impl<'a> CatalogExtractor<'a> {
    pub fn new(library: &'a dyn FixerLibrary) -> Self {
        Self {
            library,
            anonymizer: PathAnonymizer::new(library.root()),
        }
    }

    pub fn version(&self) -> String {
        self.library.version()
    }

    pub fn default_indent(&self) -> String {
        self.library.default_format().indent
    }

    pub fn default_line_ending(&self) -> String {
        self.library.default_format().line_ending
    }

    pub fn library_info(&self) -> LibraryInfo {
        let format = self.library.default_format();
        LibraryInfo {
            version: self.library.version(),
            indent: format.indent,
            line_ending: format.line_ending,
        }
    }

    pub fn extract(&self) -> anyhow::Result<CatalogData> {
        Ok(CatalogData {
            fixers: self.extract_fixers()?,
            sets: self.extract_rule_sets()?,
        })
    }

    /// Fixer name -> descriptor, sorted by name case-insensitively.
    pub fn extract_fixers(&self) -> anyhow::Result<IndexMap<String, FixerDescriptor>> {
        let mut out = IndexMap::new();
        for mut fixer in self.library.fixers() {
            let name = fixer.name().to_string();
            let _span = debug_span!("fixer", %name).entered();
            let descriptor = self
                .describe(fixer.as_mut())
                .with_context(|| format!("extract fixer {name}"))?;
            out.insert(name, descriptor);
        }
        out.sort_by(|a, _, b, _| caseless(a, b));
        debug!(fixers = out.len(), "extracted fixers");
        Ok(out)
    }

    /// Each set resolved on its own; nothing is merged across sets.
    pub fn extract_rule_sets(&self) -> anyhow::Result<RuleSetDescriptor> {
        let mut out = RuleSetDescriptor::new();
        for name in self.library.set_names() {
            let rules = self
                .library
                .resolve_set(&name)
                .with_context(|| format!("resolve rule set {name}"))?;
            debug!(set = %name, rules = rules.len(), "resolved rule set");
            out.insert(name, rules);
        }
        Ok(out)
    }

    fn describe(&self, fixer: &mut dyn Fixer) -> anyhow::Result<FixerDescriptor> {
        let mut descriptor = FixerDescriptor {
            risky: fixer.is_risky(),
            configuration: fixer.configuration_schema().map(describe_options),
            ..FixerDescriptor::default()
        };

        let Some(definition) = fixer.definition() else {
            return Ok(descriptor);
        };
        let FixerDefinition {
            summary,
            description,
            risky_description,
            code_samples,
        } = definition;
        descriptor.summary = non_empty(summary);
        descriptor.description = non_empty(description);
        descriptor.risky_description = non_empty(risky_description);

        let configurable = fixer.configuration_schema().is_some();
        for (index, sample) in code_samples.iter().enumerate() {
            let to = self
                .run_sample(fixer, configurable, sample)
                .with_context(|| format!("code sample #{index}"))?;
            if let SampleResult::Failed(failure) = &to {
                warn!(fixer = %fixer.name(), sample = index, %failure, "code sample failed");
            }
            descriptor.code_samples.push(CodeSampleDescriptor {
                from: sample.code.clone(),
                to,
                configuration: sample
                    .configuration
                    .as_ref()
                    .map(|c| self.anonymizer.anonymize_map(c)),
            });
        }
        Ok(descriptor)
    }

    /// Tokenize and configure failures are recorded; a failing `fix` aborts.
    fn run_sample(
        &self,
        fixer: &mut dyn Fixer,
        configurable: bool,
        sample: &CodeSample,
    ) -> anyhow::Result<SampleResult> {
        let mut tokens = match self.library.tokenize(&sample.code) {
            Ok(tokens) => tokens,
            Err(err) => return Ok(self.failed(SampleOperation::Tokenize, &err)),
        };
        if configurable && let Err(err) = fixer.configure(sample.configuration.as_ref()) {
            return Ok(self.failed(SampleOperation::Configure, &err));
        }
        fixer
            .fix(&sample.file_context(), &mut tokens)
            .context("fixer.fix")?;
        Ok(SampleResult::Fixed(tokens.generate_code()))
    }

    /// Error messages may quote the rejected option value, so they are anonymized too.
    fn failed(&self, operation: SampleOperation, err: &FixerError) -> SampleResult {
        SampleResult::Failed(SampleFailure {
            operation,
            kind: err.kind().to_string(),
            message: self.anonymizer.anonymize_text(&err.to_string()),
        })
    }
}

fn describe_options(schema: &ConfigurationSchema) -> Vec<OptionDescriptor> {
    let mut options: Vec<_> = schema.options().iter().map(describe_option).collect();
    options.sort_by(|a, b| caseless(&a.name, &b.name));
    options
}

fn describe_option(option: &FixerOption) -> OptionDescriptor {
    let allowed_values = option.allowed_values.as_ref().and_then(|values| {
        values
            .iter()
            .map(|v| match v {
                AllowedValue::Scalar(s) if v.is_scalar() => Some(s.clone()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
    });
    OptionDescriptor {
        name: option.name.clone(),
        description: non_empty(option.description.clone()),
        default_value: option.default.clone(),
        allowed_types: option.allowed_types.clone(),
        allowed_values,
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn caseless(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caseless_order_breaks_ties_by_bytes() {
        let mut names = vec!["b", "A", "a", "C"];
        names.sort_by(|a, b| caseless(a, b));
        assert_eq!(names, ["A", "a", "b", "C"]);
    }

    #[test]
    fn empty_strings_are_dropped() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("x".to_string()), Some("x".to_string()));
    }
}
