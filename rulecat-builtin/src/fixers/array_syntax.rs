use rulecat_fixer_api::{
    AllowedValue, CodeSample, ConfigurationSchema, FileContext, Fixer, FixerDefinition,
    FixerError, FixerOption, OptionMap, Token, TokenKind, Tokens,
};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Long,
    Short,
}

pub struct ArraySyntaxFixer {
    schema: ConfigurationSchema,
    syntax: Syntax,
}

impl Default for ArraySyntaxFixer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArraySyntaxFixer {
    const NAME: &'static str = "array_syntax";

    pub fn new() -> Self {
        Self {
            schema: ConfigurationSchema::new(vec![
                FixerOption::new("syntax", "Whether to use the `long` or `short` array syntax.")
                    .with_default("short")
                    .with_allowed_values(vec![
                        AllowedValue::scalar("long"),
                        AllowedValue::scalar("short"),
                    ]),
            ]),
            syntax: Syntax::Short,
        }
    }

    fn to_short(tokens: &mut Tokens) {
        for i in (0..tokens.len()).rev() {
            if !tokens.as_slice()[i].is_keyword("array") {
                continue;
            }
            let Some(open) = tokens.next_meaningful(i) else {
                continue;
            };
            if !tokens.as_slice()[open].is_punct("(") {
                continue;
            }
            if let Some(prev) = tokens.prev_meaningful(i)
                && is_member_or_declaration(&tokens.as_slice()[prev])
            {
                continue;
            }
            let Some(close) = tokens.matching_close(open) else {
                continue;
            };
            tokens.set_text(close, "]");
            tokens.set_text(open, "[");
            for j in (i..open).rev() {
                tokens.remove(j);
            }
        }
    }

    fn to_long(tokens: &mut Tokens) {
        for i in (0..tokens.len()).rev() {
            if !tokens.as_slice()[i].is_punct("[") || !starts_array_literal(tokens, i) {
                continue;
            }
            let Some(close) = tokens.matching_close(i) else {
                continue;
            };
            tokens.set_text(close, ")");
            tokens.set_text(i, "(");
            tokens.insert(i, Token::new(TokenKind::Identifier, "array"));
        }
    }
}

fn is_member_or_declaration(token: &Token) -> bool {
    matches!(token.text.as_str(), "->" | "?->" | "::") || token.is_keyword("function")
}

/// A `[` opens an array literal unless it indexes the expression before it.
fn starts_array_literal(tokens: &Tokens, open: usize) -> bool {
    let Some(prev) = tokens.prev_meaningful(open) else {
        return true;
    };
    let prev = &tokens.as_slice()[prev];
    match prev.kind {
        TokenKind::Operator | TokenKind::OpenTag => true,
        TokenKind::Punct => matches!(prev.text.as_str(), "(" | "," | "[" | "{" | ";"),
        TokenKind::Identifier => ["return", "yield", "echo", "print", "case", "else", "in"]
            .iter()
            .any(|k| prev.is_keyword(k)),
        _ => false,
    }
}

impl Fixer for ArraySyntaxFixer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn configuration_schema(&self) -> Option<&ConfigurationSchema> {
        Some(&self.schema)
    }

    fn definition(&self) -> Option<FixerDefinition> {
        Some(FixerDefinition::new(
            "PHP arrays should be declared using the configured syntax.",
            vec![
                CodeSample::new("<?php\n$sample = array(1, 2, 3);\n"),
                CodeSample::new("<?php\n$sample = [1, [2 => 'b']];\n")
                    .with_configuration(json!({ "syntax": "long" })),
                CodeSample::new("<?php\n$sample = array('a' => array(1), 'b' => 2);\n")
                    .with_configuration(json!({ "syntax": "short" })),
            ],
        ))
    }

    fn configure(&mut self, options: Option<&OptionMap>) -> Result<(), FixerError> {
        let resolved = self.schema.resolve(options)?;
        self.syntax = match resolved.get("syntax").and_then(|v| v.as_str()) {
            Some("long") => Syntax::Long,
            _ => Syntax::Short,
        };
        Ok(())
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        match self.syntax {
            Syntax::Short => Self::to_short(tokens),
            Syntax::Long => Self::to_long(tokens),
        }
        Ok(())
    }
}
