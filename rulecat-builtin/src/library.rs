use crate::{fixers, sets, tokenizer};
use camino::{Utf8Path, Utf8PathBuf};
use rulecat_fixer_api::{
    Fixer, FixerError, FixerLibrary, FormatDefaults, RuleConfiguration, Tokens,
};

const DEFAULT_INDENT: &str = "    ";
const DEFAULT_LINE_ENDING: &str = "\n";

#[derive(Debug, Clone)]
pub struct BuiltinLibrary {
    root: Utf8PathBuf,
}

impl Default for BuiltinLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinLibrary {
    /// Library rooted at this crate's source directory.
    pub fn new() -> Self {
        Self::with_root(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn with_root(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FixerLibrary for BuiltinLibrary {
    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn default_format(&self) -> FormatDefaults {
        FormatDefaults {
            indent: DEFAULT_INDENT.to_string(),
            line_ending: DEFAULT_LINE_ENDING.to_string(),
        }
    }

    fn tokenize(&self, code: &str) -> Result<Tokens, FixerError> {
        tokenizer::tokenize(code)
    }

    fn fixers(&self) -> Vec<Box<dyn Fixer>> {
        fixers::builtin_fixers(&self.root, &self.default_format())
    }

    fn set_names(&self) -> Vec<String> {
        sets::builtin_sets()
            .iter()
            .map(|s| s.name.to_string())
            .collect()
    }

    fn resolve_set(&self, name: &str) -> Result<RuleConfiguration, FixerError> {
        sets::resolve(&sets::builtin_sets(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixer_names_are_unique() {
        let lib = BuiltinLibrary::new();
        let mut names: Vec<_> = lib.fixers().iter().map(|f| f.name().to_string()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn root_is_overridable() {
        let lib = BuiltinLibrary::with_root("/opt/lib");
        assert_eq!(lib.root(), Utf8Path::new("/opt/lib"));
    }

    #[test]
    fn every_set_name_resolves() {
        let lib = BuiltinLibrary::new();
        for name in lib.set_names() {
            lib.resolve_set(&name).expect("resolve");
        }
    }

    #[test]
    fn defaults_are_four_spaces_and_lf() {
        let format = BuiltinLibrary::new().default_format();
        assert_eq!(format.indent, "    ");
        assert_eq!(format.line_ending, "\n");
    }
}
