use super::resolved_bool;
use rulecat_fixer_api::{
    CodeSample, ConfigurationSchema, FileContext, Fixer, FixerDefinition, FixerError,
    FixerOption, OptionMap, TokenKind, Tokens,
};
use serde_json::json;

pub struct SingleQuoteFixer {
    schema: ConfigurationSchema,
    allow_single_quote_chars: bool,
}

impl Default for SingleQuoteFixer {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleQuoteFixer {
    const NAME: &'static str = "single_quote";
    const OPTION: &'static str = "strings_containing_single_quote_chars";

    pub fn new() -> Self {
        Self {
            schema: ConfigurationSchema::new(vec![
                FixerOption::new(
                    Self::OPTION,
                    "Whether to fix double-quoted strings that contains single-quotes.",
                )
                .with_default(false)
                .with_allowed_types(&["bool"]),
            ]),
            allow_single_quote_chars: false,
        }
    }

    /// Single-quoted equivalent of a double-quoted literal, if one exists.
    fn requote(&self, literal: &str) -> Option<String> {
        let content = literal.strip_prefix('"')?.strip_suffix('"')?;
        if content.contains('$') {
            return None;
        }
        let mut out = String::with_capacity(literal.len());
        out.push('\'');
        let mut chars = content.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next()? {
                    '"' => out.push('"'),
                    '\\' => out.push_str("\\\\"),
                    _ => return None,
                },
                '\'' if self.allow_single_quote_chars => out.push_str("\\'"),
                '\'' => return None,
                _ => out.push(c),
            }
        }
        out.push('\'');
        Some(out)
    }
}

impl Fixer for SingleQuoteFixer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn configuration_schema(&self) -> Option<&ConfigurationSchema> {
        Some(&self.schema)
    }

    fn definition(&self) -> Option<FixerDefinition> {
        let code = "<?php\n$a = \"sample\";\n$b = \"sample with 'single-quotes'\";\n";
        Some(FixerDefinition::new(
            "Convert double quotes to single quotes for simple strings.",
            vec![
                CodeSample::new(code),
                CodeSample::new(code)
                    .with_configuration(json!({ "strings_containing_single_quote_chars": true })),
            ],
        ))
    }

    fn configure(&mut self, options: Option<&OptionMap>) -> Result<(), FixerError> {
        let resolved = self.schema.resolve(options)?;
        self.allow_single_quote_chars = resolved_bool(&resolved, Self::OPTION);
        Ok(())
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        for i in 0..tokens.len() {
            let token = &tokens.as_slice()[i];
            if token.kind != TokenKind::String {
                continue;
            }
            if let Some(requoted) = self.requote(&token.text) {
                tokens.set_text(i, requoted);
            }
        }
        Ok(())
    }
}
