#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Text outside the code tags.
    InlineHtml,
    OpenTag,
    CloseTag,
    Whitespace,
    Comment,
    DocComment,
    Variable,
    /// Names and keywords.
    Identifier,
    Number,
    String,
    Operator,
    /// `( ) [ ] { } , ;`
    Punct,
}

impl TokenKind {
    /// Whitespace and comments carry no syntax.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_punct(&self, text: &str) -> bool {
        self.is(TokenKind::Punct, text)
    }

    /// Case-insensitive identifier comparison, as PHP keywords are.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text.eq_ignore_ascii_case(keyword)
    }
}

/// Mutable token stream a fixer rewrites in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    items: Vec<Token>,
}

impl From<Vec<Token>> for Tokens {
    fn from(items: Vec<Token>) -> Self {
        Self { items }
    }
}

impl Tokens {
    pub fn new(items: Vec<Token>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.items.iter()
    }

    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        self.items[index].text = text.into();
    }

    pub fn insert(&mut self, index: usize, token: Token) {
        self.items.insert(index, token);
    }

    pub fn remove(&mut self, index: usize) -> Token {
        self.items.remove(index)
    }

    /// Index of the first non-trivia token after `index`.
    pub fn next_meaningful(&self, index: usize) -> Option<usize> {
        (index + 1..self.items.len()).find(|&i| !self.items[i].kind.is_trivia())
    }

    /// Index of the last non-trivia token before `index`.
    pub fn prev_meaningful(&self, index: usize) -> Option<usize> {
        (0..index.min(self.items.len()))
            .rev()
            .find(|&i| !self.items[i].kind.is_trivia())
    }

    /// Index of the bracket closing the one opened at `open`.
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        let close = match self.items.get(open)?.text.as_str() {
            "(" => ")",
            "[" => "]",
            "{" => "}",
            _ => return None,
        };
        let open_text = self.items[open].text.as_str();
        let mut depth = 0usize;
        for (i, token) in self.items.iter().enumerate().skip(open) {
            if token.kind != TokenKind::Punct {
                continue;
            }
            if token.text == open_text {
                depth += 1;
            } else if token.text == close {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }

    pub fn generate_code(&self) -> String {
        self.items.iter().map(|t| t.text.as_str()).collect()
    }
}
