use rulecat_fixer_api::{
    AllowedValue, CodeSample, ConfigurationSchema, FileContext, Fixer, FixerDefinition,
    FixerError, FixerOption, OptionMap, TokenKind, Tokens,
};
use serde_json::json;

const STATEMENTS: &[&str] = &[
    "break", "case", "continue", "declare", "default", "do", "exit", "for", "foreach", "goto",
    "if", "include", "include_once", "require", "require_once", "return", "switch", "throw",
    "try", "while", "yield",
];

const DEFAULT_STATEMENTS: &[&str] = &["break", "continue", "declare", "return", "throw", "try"];

pub struct BlankLineBeforeStatementFixer {
    schema: ConfigurationSchema,
    statements: Vec<String>,
}

impl Default for BlankLineBeforeStatementFixer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlankLineBeforeStatementFixer {
    const NAME: &'static str = "blank_line_before_statement";

    pub fn new() -> Self {
        Self {
            schema: ConfigurationSchema::new(vec![
                FixerOption::new(
                    "statements",
                    "List of statements which must be preceded by an empty line.",
                )
                .with_default(json!(DEFAULT_STATEMENTS))
                .with_allowed_types(&["array"])
                .with_allowed_values(vec![AllowedValue::Subset(
                    STATEMENTS.iter().map(|s| (*s).to_string()).collect(),
                )]),
            ]),
            statements: DEFAULT_STATEMENTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Fixer for BlankLineBeforeStatementFixer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn configuration_schema(&self) -> Option<&ConfigurationSchema> {
        Some(&self.schema)
    }

    fn definition(&self) -> Option<FixerDefinition> {
        Some(FixerDefinition::new(
            "An empty line feed must precede any configured statement.",
            vec![
                CodeSample::new(
                    "<?php\nfunction A() {\n    echo 1;\n    return 1;\n}\n",
                ),
                CodeSample::new(
                    "<?php\nforeach ($foo as $bar) {\n    if ($bar) {\n        continue;\n    }\n    $bar->run();\n    throw new \\Exception();\n}\n",
                )
                .with_configuration(json!({ "statements": ["throw"] })),
            ],
        ))
    }

    fn configure(&mut self, options: Option<&OptionMap>) -> Result<(), FixerError> {
        let resolved = self.schema.resolve(options)?;
        self.statements = resolved
            .get("statements")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        Ok(())
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        for i in 0..tokens.len() {
            let token = &tokens.as_slice()[i];
            if !self.statements.iter().any(|s| token.is_keyword(s)) {
                continue;
            }
            // Only statements that follow another statement on an earlier line.
            let follows_statement = tokens
                .prev_meaningful(i)
                .is_some_and(|p| matches!(tokens.as_slice()[p].text.as_str(), ";" | "}"));
            if !follows_statement || i == 0 {
                continue;
            }
            let ws = &tokens.as_slice()[i - 1];
            if ws.kind != TokenKind::Whitespace || ws.text.matches('\n').count() != 1 {
                continue;
            }
            let padded = format!("\n{}", ws.text);
            tokens.set_text(i - 1, padded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn run(fixer: &BlankLineBeforeStatementFixer, code: &str) -> String {
        let mut tokens = tokenize(code).expect("tokenize");
        fixer.fix(&FileContext::Stdin, &mut tokens).expect("fix");
        tokens.generate_code()
    }

    #[test]
    fn pads_return_after_statement() {
        let fixer = BlankLineBeforeStatementFixer::new();
        assert_eq!(
            run(&fixer, "<?php\nfunction a() {\n    echo 1;\n    return 1;\n}\n"),
            "<?php\nfunction a() {\n    echo 1;\n\n    return 1;\n}\n"
        );
    }

    #[test]
    fn first_statement_in_block_is_not_padded() {
        let fixer = BlankLineBeforeStatementFixer::new();
        let code = "<?php\nfunction a() {\n    return 1;\n}\n";
        assert_eq!(run(&fixer, code), code);
    }

    #[test]
    fn already_padded_statement_is_left_alone() {
        let fixer = BlankLineBeforeStatementFixer::new();
        let code = "<?php\necho 1;\n\nreturn 1;\n";
        assert_eq!(run(&fixer, code), code);
    }

    #[test]
    fn only_configured_statements_are_padded() {
        let mut fixer = BlankLineBeforeStatementFixer::new();
        let opts = json!({ "statements": ["throw"] });
        fixer.configure(opts.as_object()).expect("configure");
        assert_eq!(
            run(&fixer, "<?php\necho 1;\nreturn 1;\necho 2;\nthrow $e;\n"),
            "<?php\necho 1;\nreturn 1;\necho 2;\n\nthrow $e;\n"
        );
    }

    #[test]
    fn statements_outside_the_allowed_set_are_rejected() {
        let mut fixer = BlankLineBeforeStatementFixer::new();
        let opts = json!({ "statements": ["echo"] });
        let err = fixer.configure(opts.as_object()).unwrap_err();
        assert_eq!(err.kind(), "InvalidOptionValue");
    }
}
