use rulecat_fixer_api::{
    CodeSample, FileContext, Fixer, FixerDefinition, FixerError, TokenKind, Tokens,
};

pub struct ElseifFixer;

impl Fixer for ElseifFixer {
    fn name(&self) -> &str {
        "elseif"
    }

    fn definition(&self) -> Option<FixerDefinition> {
        Some(FixerDefinition::new(
            "The keyword `elseif` should be used instead of `else if` so that all control keywords look like single words.",
            vec![CodeSample::new(
                "<?php\nif ($a) {\n    $a = 1;\n} else if ($b) {\n    $a = 2;\n}\n",
            )],
        ))
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        let mut i = 0;
        while i + 2 < tokens.len() {
            let t = tokens.as_slice();
            if t[i].is_keyword("else")
                && t[i + 1].kind == TokenKind::Whitespace
                && t[i + 2].is_keyword("if")
            {
                tokens.set_text(i, "elseif");
                tokens.remove(i + 2);
                tokens.remove(i + 1);
            }
            i += 1;
        }
        Ok(())
    }
}
