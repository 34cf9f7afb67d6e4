use camino::{Utf8Path, Utf8PathBuf};
use rulecat_fixer_api::{
    CodeSample, ConfigurationSchema, FileContext, Fixer, FixerDefinition, FixerError,
    FixerOption, OptionMap, TokenKind, Tokens,
};
use serde_json::{Value, json};

const CLASS_LIKE: &[&str] = &["class", "interface", "trait", "enum"];

/// Renames the first declared class-like to match its file name.
pub struct PsrAutoloadingFixer {
    root: Utf8PathBuf,
    schema: ConfigurationSchema,
    dir: Option<Utf8PathBuf>,
}

impl PsrAutoloadingFixer {
    const NAME: &'static str = "psr_autoloading";

    pub fn new(root: &Utf8Path) -> Self {
        Self {
            root: root.to_path_buf(),
            schema: ConfigurationSchema::new(vec![
                FixerOption::new(
                    "dir",
                    "If provided, only files inside this directory are checked.",
                )
                .with_default(Value::Null)
                .with_allowed_types(&["null", "string"]),
            ]),
            dir: None,
        }
    }
}

fn is_class_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Fixer for PsrAutoloadingFixer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_risky(&self) -> bool {
        true
    }

    fn configuration_schema(&self) -> Option<&ConfigurationSchema> {
        Some(&self.schema)
    }

    fn definition(&self) -> Option<FixerDefinition> {
        let code = "<?php\nnamespace PhpCsFixer\\FIXER\\Basic;\nclass InvalidName {}\n";
        let file = self.root.join("src/Basic/ValidName.php");
        Some(
            FixerDefinition::new(
                "Classes must be in a path that matches their namespace, be at least one namespace deep and the class name should match the file name.",
                vec![
                    CodeSample::new(code).for_file(file.clone()),
                    CodeSample::new(code)
                        .for_file(file)
                        .with_configuration(json!({ "dir": self.root.join("src").as_str() })),
                ],
            )
            .with_risky_description(
                "This fixer may change your class name, which will break the code that depends on the old name.",
            ),
        )
    }

    fn configure(&mut self, options: Option<&OptionMap>) -> Result<(), FixerError> {
        let resolved = self.schema.resolve(options)?;
        self.dir = resolved
            .get("dir")
            .and_then(|v| v.as_str())
            .map(Utf8PathBuf::from);
        Ok(())
    }

    fn fix(&self, file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        let Some(path) = file.path() else {
            return Ok(());
        };
        if path.extension() != Some("php") {
            return Ok(());
        }
        if let Some(dir) = &self.dir
            && !path.starts_with(dir)
        {
            return Ok(());
        }
        let Some(stem) = path.file_stem().filter(|s| is_class_name(s)) else {
            return Ok(());
        };

        for i in 0..tokens.len() {
            let t = &tokens.as_slice()[i];
            if !CLASS_LIKE.iter().any(|k| t.is_keyword(k)) {
                continue;
            }
            let is_reference = tokens.prev_meaningful(i).is_some_and(|p| {
                let prev = &tokens.as_slice()[p];
                prev.text == "::" || prev.is_keyword("new")
            });
            if is_reference {
                continue;
            }
            let Some(name) = tokens.next_meaningful(i) else {
                break;
            };
            let current = &tokens.as_slice()[name];
            if current.kind == TokenKind::Identifier && current.text != stem {
                tracing::trace!(from = %current.text, to = %stem, "renaming class to match file");
                tokens.set_text(name, stem);
            }
            break;
        }
        Ok(())
    }
}
