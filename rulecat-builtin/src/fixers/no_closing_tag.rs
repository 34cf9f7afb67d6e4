use rulecat_fixer_api::{
    CodeSample, FileContext, Fixer, FixerDefinition, FixerError, Token, TokenKind, Tokens,
};

pub struct NoClosingTagFixer;

impl Fixer for NoClosingTagFixer {
    fn name(&self) -> &str {
        "no_closing_tag"
    }

    fn definition(&self) -> Option<FixerDefinition> {
        Some(FixerDefinition::new(
            "The closing `?>` tag MUST be omitted from files containing only PHP.",
            vec![CodeSample::new(
                "<?php\nclass Sample\n{\n}\n?>\n",
            )],
        ))
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        let open_tags = tokens.iter().filter(|t| t.kind == TokenKind::OpenTag).count();
        if open_tags != 1 || tokens.get(0).map(|t| t.kind) != Some(TokenKind::OpenTag) {
            return Ok(());
        }
        let Some(close) = tokens.iter().rposition(|t| t.kind == TokenKind::CloseTag) else {
            return Ok(());
        };
        let only_blank_after = tokens.as_slice()[close + 1..]
            .iter()
            .all(|t| t.kind == TokenKind::InlineHtml && t.text.trim().is_empty());
        if !only_blank_after {
            return Ok(());
        }

        while tokens.len() > close {
            tokens.remove(tokens.len() - 1);
        }
        while tokens
            .as_slice()
            .last()
            .is_some_and(|t| t.kind == TokenKind::Whitespace)
        {
            tokens.remove(tokens.len() - 1);
        }
        let needs_semicolon = tokens.as_slice().last().is_some_and(|t| {
            !t.is_punct(";")
                && !t.is_punct("}")
                && !t.kind.is_trivia()
                && t.kind != TokenKind::OpenTag
        });
        if needs_semicolon {
            tokens.insert(tokens.len(), Token::new(TokenKind::Punct, ";"));
        }
        tokens.insert(tokens.len(), Token::new(TokenKind::Whitespace, "\n"));
        Ok(())
    }
}
