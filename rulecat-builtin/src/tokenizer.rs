//! PHP-style lexer producing a lossless token stream.
//!
//! Concatenating the text of every token reproduces the input exactly.

use rulecat_fixer_api::{FixerError, Token, TokenKind, Tokens};

const OPEN_TAG: &str = "<?php";
const CLOSE_TAG: &str = "?>";

// Longest first.
const OPERATORS: &[&str] = &[
    "<<=", ">>=", "**=", "...", "<=>", "===", "!==", "??=", "?->", "==", "!=", "<>", "<=", ">=",
    "&&", "||", "??", "->", "=>", "::", "++", "--", "+=", "-=", "*=", "/=", ".=", "%=", "&=",
    "|=", "^=", "<<", ">>", "**",
];

pub fn tokenize(code: &str) -> Result<Tokens, FixerError> {
    Lexer {
        src: code,
        pos: 0,
        items: Vec::new(),
    }
    .run()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    items: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn run(mut self) -> Result<Tokens, FixerError> {
        while self.pos < self.src.len() {
            self.inline_html();
            self.code()?;
        }
        Ok(Tokens::new(self.items))
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn line(&self) -> usize {
        self.src[..self.pos].matches('\n').count() + 1
    }

    fn push(&mut self, kind: TokenKind, len: usize) {
        let text = &self.src[self.pos..self.pos + len];
        self.items.push(Token::new(kind, text));
        self.pos += len;
    }

    fn error(&self, message: &str) -> FixerError {
        FixerError::Parse {
            line: self.line(),
            message: message.to_string(),
        }
    }

    fn inline_html(&mut self) {
        let rest = self.rest();
        let len = rest
            .to_ascii_lowercase()
            .find(OPEN_TAG)
            .unwrap_or(rest.len());
        if len > 0 {
            self.push(TokenKind::InlineHtml, len);
        }
        if self.pos < self.src.len() {
            self.push(TokenKind::OpenTag, OPEN_TAG.len());
        }
    }

    fn code(&mut self) -> Result<(), FixerError> {
        loop {
            let rest = self.rest();
            let Some(c) = rest.chars().next() else {
                return Ok(());
            };

            if rest.starts_with(CLOSE_TAG) {
                self.push(TokenKind::CloseTag, CLOSE_TAG.len());
                return Ok(());
            }

            if c.is_whitespace() {
                let len = rest
                    .find(|ch: char| !ch.is_whitespace())
                    .unwrap_or(rest.len());
                self.push(TokenKind::Whitespace, len);
            } else if rest.starts_with("//") || (c == '#' && !rest.starts_with("#[")) {
                let mut len = rest.find('\n').unwrap_or(rest.len());
                if let Some(tag) = rest[..len].find(CLOSE_TAG) {
                    len = tag;
                }
                self.push(TokenKind::Comment, len);
            } else if rest.starts_with("/*") {
                let doc = rest.starts_with("/**") && rest[3..].starts_with(char::is_whitespace);
                let Some(end) = rest[2..].find("*/") else {
                    return Err(self.error("unterminated comment"));
                };
                let kind = if doc {
                    TokenKind::DocComment
                } else {
                    TokenKind::Comment
                };
                self.push(kind, end + 4);
            } else if c == '$' && rest[1..].starts_with(is_ident_start) {
                self.push(TokenKind::Variable, 1 + ident_len(&rest[1..]));
            } else if is_ident_start(c) || (c == '\\' && rest[1..].starts_with(is_ident_start)) {
                self.push(TokenKind::Identifier, ident_len(rest));
            } else if c.is_ascii_digit() {
                let len = rest
                    .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '.'))
                    .unwrap_or(rest.len());
                self.push(TokenKind::Number, len);
            } else if c == '\'' || c == '"' {
                let Some(len) = quoted_len(rest, c) else {
                    return Err(self.error("unterminated string"));
                };
                self.push(TokenKind::String, len);
            } else if "()[]{},;".contains(c) {
                self.push(TokenKind::Punct, 1);
            } else {
                let len = OPERATORS
                    .iter()
                    .find(|op| rest.starts_with(*op))
                    .map_or(c.len_utf8(), |op| op.len());
                self.push(TokenKind::Operator, len);
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\\' || !c.is_ascii()
}

fn ident_len(s: &str) -> usize {
    s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len())
}

fn quoted_len(s: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, ch) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return Some(i + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(code: &str) -> Vec<(TokenKind, String)> {
        tokenize(code)
            .expect("tokenize")
            .iter()
            .map(|t| (t.kind, t.text.clone()))
            .collect()
    }

    #[test]
    fn splits_a_simple_statement() {
        use TokenKind::*;
        assert_eq!(
            kinds("<?php $a = 'x';"),
            vec![
                (OpenTag, "<?php".to_string()),
                (Whitespace, " ".to_string()),
                (Variable, "$a".to_string()),
                (Whitespace, " ".to_string()),
                (Operator, "=".to_string()),
                (Whitespace, " ".to_string()),
                (String, "'x'".to_string()),
                (Punct, ";".to_string()),
            ]
        );
    }

    #[test]
    fn inline_html_and_close_tag_round_trip() {
        let code = "<p>hi</p>\n<?php echo 1; ?>\n<b>bye</b>";
        let tokens = tokenize(code).expect("tokenize");
        assert_eq!(tokens.generate_code(), code);
        assert_eq!(tokens.get(0).map(|t| t.kind), Some(TokenKind::InlineHtml));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::CloseTag));
        assert_eq!(tokens.iter().last().map(|t| t.kind), Some(TokenKind::InlineHtml));
    }

    #[test]
    fn longest_operator_wins() {
        let ops: Vec<_> = kinds("<?php $a !== $b <=> $c;")
            .into_iter()
            .filter(|(k, _)| *k == TokenKind::Operator)
            .map(|(_, t)| t)
            .collect();
        assert_eq!(ops, vec!["!==", "<=>"]);
    }

    #[test]
    fn escaped_quotes_stay_inside_strings() {
        let toks = kinds(r#"<?php "a \" b";"#);
        assert!(toks.contains(&(TokenKind::String, r#""a \" b""#.to_string())));
    }

    #[test]
    fn doc_comments_are_distinguished() {
        let toks = kinds("<?php /** doc */ /* c */ /**/ // line\n# hash");
        let comments: Vec<_> = toks
            .iter()
            .filter(|(k, _)| k.is_trivia() && *k != TokenKind::Whitespace)
            .collect();
        assert_eq!(comments.len(), 5);
        assert_eq!(comments[0].0, TokenKind::DocComment);
        assert!(comments[1..].iter().all(|(k, _)| *k == TokenKind::Comment));
    }

    #[test]
    fn unterminated_string_reports_line() {
        let err = tokenize("<?php\n\n$a = 'oops;\n").unwrap_err();
        assert_eq!(
            err,
            FixerError::Parse {
                line: 3,
                message: "unterminated string".to_string()
            }
        );
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        let err = tokenize("<?php /* never closed").unwrap_err();
        assert_eq!(err.kind(), "ParseError");
    }

    #[test]
    fn namespaced_names_are_single_identifiers() {
        let toks = kinds("<?php new \\Foo\\Bar();");
        assert!(toks.contains(&(TokenKind::Identifier, "\\Foo\\Bar".to_string())));
    }
}
