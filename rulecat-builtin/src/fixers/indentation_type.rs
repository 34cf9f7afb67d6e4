use rulecat_fixer_api::{
    CodeSample, FileContext, Fixer, FixerDefinition, FixerError, TokenKind, Tokens,
};

/// Replaces tab indentation with the library's indent unit.
pub struct IndentationTypeFixer {
    indent: String,
}

impl IndentationTypeFixer {
    pub fn new(indent: String) -> Self {
        Self { indent }
    }

    fn reindent(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for (n, line) in text.split('\n').enumerate() {
            if n > 0 {
                out.push('\n');
                let body = line.trim_start_matches('\t');
                for _ in 0..line.len() - body.len() {
                    out.push_str(&self.indent);
                }
                out.push_str(body);
            } else {
                out.push_str(line);
            }
        }
        out
    }
}

impl Fixer for IndentationTypeFixer {
    fn name(&self) -> &str {
        "indentation_type"
    }

    fn definition(&self) -> Option<FixerDefinition> {
        Some(FixerDefinition::new(
            "Code MUST use configured indentation type.",
            vec![CodeSample::new(
                "<?php\n\nif (true) {\n\techo 'Hello!';\n}\n",
            )],
        ))
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        for i in 0..tokens.len() {
            let token = &tokens.as_slice()[i];
            let at_line_start = token.kind == TokenKind::Whitespace && token.text.contains('\n');
            let in_doc = token.kind == TokenKind::DocComment;
            if (at_line_start || in_doc) && token.text.contains('\t') {
                let text = self.reindent(&token.text);
                tokens.set_text(i, text);
            }
        }
        Ok(())
    }
}
