use rulecat_fixer_api::{
    CodeSample, FileContext, Fixer, FixerDefinition, FixerError, TokenKind, Tokens,
};

pub struct StrictComparisonFixer;

impl Fixer for StrictComparisonFixer {
    fn name(&self) -> &str {
        "strict_comparison"
    }

    fn is_risky(&self) -> bool {
        true
    }

    fn definition(&self) -> Option<FixerDefinition> {
        Some(
            FixerDefinition::new(
                "Comparisons should be strict.",
                vec![CodeSample::new("<?php\n$a = 1== $b;\n$c = $d != 2;\n")],
            )
            .with_risky_description(
                "Changing comparisons to strict might change code behavior.",
            ),
        )
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        for i in 0..tokens.len() {
            let token = &tokens.as_slice()[i];
            if token.kind != TokenKind::Operator {
                continue;
            }
            let strict = match token.text.as_str() {
                "==" => "===",
                "!=" | "<>" => "!==",
                _ => continue,
            };
            tokens.set_text(i, strict);
        }
        Ok(())
    }
}
