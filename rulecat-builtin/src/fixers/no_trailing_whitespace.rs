use rulecat_fixer_api::{
    CodeSample, FileContext, Fixer, FixerDefinition, FixerError, TokenKind, Tokens,
};

pub struct NoTrailingWhitespaceFixer;

fn trim_line_ends(text: &str, trim_last: bool) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    lines
        .iter()
        .enumerate()
        .map(|(n, line)| {
            if n < last || trim_last {
                line.trim_end_matches([' ', '\t'])
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Fixer for NoTrailingWhitespaceFixer {
    fn name(&self) -> &str {
        "no_trailing_whitespace"
    }

    fn definition(&self) -> Option<FixerDefinition> {
        Some(FixerDefinition::new(
            "Remove trailing whitespace at the end of non-blank lines.",
            vec![CodeSample::new("<?php\n$a = 1;     \n")],
        ))
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        let last = tokens.len().saturating_sub(1);
        for i in (0..tokens.len()).rev() {
            let token = &tokens.as_slice()[i];
            let text = match token.kind {
                TokenKind::Whitespace => trim_line_ends(&token.text, i == last),
                TokenKind::Comment if !token.text.starts_with("/*") => {
                    token.text.trim_end_matches([' ', '\t']).to_string()
                }
                TokenKind::Comment | TokenKind::DocComment => trim_line_ends(&token.text, false),
                _ => continue,
            };
            if text == token.text {
                continue;
            }
            if text.is_empty() {
                tokens.remove(i);
            } else {
                tokens.set_text(i, text);
            }
        }
        Ok(())
    }
}
