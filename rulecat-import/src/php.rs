//! PHP config snippets: `<?php return (new Config())->setRules([...]);` and friends.
//!
//! Only the rules array literal is evaluated. Everything around it is scanned just far enough to
//! find it, so the surrounding code may contain arbitrary statements.

use crate::detect::Importer;
use crate::error::ImportError;
use crate::format::ImportFormat;
use crate::rules::rules_from_document;
use rulecat_types::RuleConfiguration;
use serde_json::{Map, Number, Value};

const SET_RULES: &str = "->setrules";
const MAX_DEPTH: usize = 64;

// A `[` after one of these opens a literal rather than indexing.
const LITERAL_KEYWORDS: &[&str] = &[
    "return", "yield", "echo", "print", "case", "else", "and", "or",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PhpImporter;

impl Importer for PhpImporter {
    fn format(&self) -> ImportFormat {
        ImportFormat::Php
    }

    fn try_parse(&self, text: &str) -> Result<RuleConfiguration, ImportError> {
        if text.trim().is_empty() {
            return Err(ImportError::Empty);
        }
        let start = locate_rules_array(text)?;
        let mut cursor = Cursor::at(text, start);
        let document = match cursor.value()? {
            Value::Array(items) if items.is_empty() => Value::Object(Map::new()),
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(rule, v)| (rule, empty_list_as_map(v)))
                    .collect(),
            ),
            _ => {
                return Err(ImportError::NotARuleMap {
                    format: ImportFormat::Php,
                });
            }
        };
        rules_from_document(ImportFormat::Php, document)
    }
}

/// `'rule' => []` configures a rule with its defaults.
fn empty_list_as_map(value: Value) -> Value {
    match value {
        Value::Array(items) if items.is_empty() => Value::Object(Map::new()),
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Last {
    Start,
    Word(String),
    Char(char),
}

impl Last {
    /// Whether a following `[` indexes this token instead of opening a literal.
    fn is_operand(&self) -> bool {
        match self {
            Last::Start => false,
            Last::Word(w) => !LITERAL_KEYWORDS.iter().any(|k| w.eq_ignore_ascii_case(k)),
            // `:` counts as an operand so `key: [..]` YAML is never read as PHP. A literal in
            // the else branch of a ternary is therefore not detected.
            Last::Char(c) => matches!(c, ')' | ']' | '\'' | '"' | '}' | ':'),
        }
    }
}

/// Start of the `->setRules(...)` argument when it is a literal, else of the first top-level
/// array literal.
fn locate_rules_array(text: &str) -> Result<usize, ImportError> {
    let mut cursor = Cursor::at(text, 0);
    let mut first_literal = None;
    let mut depth = 0usize;
    let mut last = Last::Start;

    loop {
        cursor.skip_trivia()?;
        let Some(c) = cursor.peek() else {
            break;
        };
        let at = cursor.pos;

        if cursor.starts_with_ignore_case(SET_RULES) {
            cursor.pos += SET_RULES.len();
            cursor.skip_trivia()?;
            if cursor.eat('(') {
                cursor.skip_trivia()?;
                if cursor.at_array_literal() {
                    return Ok(cursor.pos);
                }
            }
            last = Last::Char('(');
            continue;
        }

        if c == '\'' || c == '"' {
            cursor.skip_string()?;
            last = Last::Char(c);
        } else if c == '$' || is_word_start(c) {
            let word = cursor.word();
            if first_literal.is_none() && depth == 0 && word.eq_ignore_ascii_case("array") {
                let mut ahead = cursor.clone();
                ahead.skip_trivia()?;
                if ahead.peek() == Some('(') && !last.is_operand() {
                    first_literal = Some(at);
                }
            }
            last = Last::Word(word.to_string());
        } else {
            if c == '[' && first_literal.is_none() && depth == 0 && !last.is_operand() {
                first_literal = Some(at);
            }
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
            cursor.pos += c.len_utf8();
            last = Last::Char(c);
        }
    }

    first_literal.ok_or(ImportError::NoRulesArray)
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '\\' || !c.is_ascii()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\\' || !c.is_ascii()
}

#[derive(Debug, Clone)]
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    fn at(src: &'a str, pos: usize) -> Self {
        Self { src, pos, depth: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.rest()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> ImportError {
        let line = self.src[..self.pos].matches('\n').count() + 1;
        ImportError::Syntax {
            format: ImportFormat::Php,
            message: format!("line {line}: {}", message.into()),
        }
    }

    /// Whitespace, comments and the open/close tags.
    fn skip_trivia(&mut self) -> Result<(), ImportError> {
        loop {
            let rest = self.rest();
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            let rest = self.rest();

            if rest.starts_with("//") || (rest.starts_with('#') && !rest.starts_with("#[")) {
                self.pos += rest.find('\n').unwrap_or(rest.len());
            } else if rest.starts_with("/*") {
                let Some(end) = rest[2..].find("*/") else {
                    return Err(self.error("unterminated comment"));
                };
                self.pos += end + 4;
            } else if self.starts_with_ignore_case("<?php") {
                self.pos += 5;
            } else if rest.starts_with("?>") {
                self.pos += 2;
            } else {
                return Ok(());
            }
        }
    }

    fn word(&mut self) -> &'a str {
        let rest = self.rest();
        let skip = usize::from(rest.starts_with('$'));
        let len = rest[skip..]
            .find(|c: char| !is_word_char(c))
            .map_or(rest.len(), |n| n + skip);
        self.pos += len;
        &rest[..len]
    }

    fn at_array_literal(&self) -> bool {
        if self.peek() == Some('[') {
            return true;
        }
        let mut ahead = self.clone();
        if !ahead.word().eq_ignore_ascii_case("array") {
            return false;
        }
        ahead.skip_trivia().is_ok() && ahead.peek() == Some('(')
    }

    fn value(&mut self) -> Result<Value, ImportError> {
        self.skip_trivia()?;
        let Some(c) = self.peek() else {
            return Err(self.error("unexpected end of input"));
        };
        match c {
            '[' => {
                self.pos += 1;
                self.array(']')
            }
            '\'' | '"' => self.string().map(Value::String),
            '-' | '+' | '.' | '0'..='9' => self.number(),
            c if is_word_start(c) => {
                let start = self.pos;
                let word = self.word();
                match word.to_ascii_lowercase().as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    "array" => {
                        self.skip_trivia()?;
                        if !self.eat('(') {
                            return Err(self.error("expected '(' after array"));
                        }
                        self.array(')')
                    }
                    _ => {
                        self.pos = start;
                        Err(self.error(format!("unsupported expression `{word}`")))
                    }
                }
            }
            other => Err(self.error(format!("unexpected character '{other}'"))),
        }
    }

    fn array(&mut self, close: char) -> Result<Value, ImportError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("arrays nested too deeply"));
        }
        self.depth += 1;
        let value = self.array_body(close);
        self.depth -= 1;
        value
    }

    fn array_body(&mut self, close: char) -> Result<Value, ImportError> {
        let mut entries: Vec<(String, Value)> = Vec::new();
        let mut keyed = false;
        let mut next_index: i64 = 0;
        loop {
            self.skip_trivia()?;
            if self.eat(close) {
                break;
            }
            let first = self.value()?;
            self.skip_trivia()?;
            if self.rest().starts_with("=>") {
                self.pos += 2;
                let key = match &first {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => {
                        if let Some(i) = n.as_i64() {
                            next_index = next_index.max(i.saturating_add(1));
                        }
                        n.to_string()
                    }
                    _ => return Err(self.error("array keys must be strings or integers")),
                };
                keyed = true;
                let value = self.value()?;
                entries.push((key, value));
            } else {
                entries.push((next_index.to_string(), first));
                next_index = next_index.saturating_add(1);
            }
            self.skip_trivia()?;
            if self.eat(',') {
                continue;
            }
            if self.eat(close) {
                break;
            }
            return Err(self.error(format!("expected ',' or '{close}'")));
        }

        if keyed {
            Ok(Value::Object(entries.into_iter().collect()))
        } else {
            Ok(Value::Array(entries.into_iter().map(|(_, v)| v).collect()))
        }
    }

    /// Step over a quoted string without decoding it.
    fn skip_string(&mut self) -> Result<(), ImportError> {
        let Some(quote) = self.peek() else {
            return Ok(());
        };
        let mut escaped = false;
        for (i, c) in self.rest().char_indices().skip(1) {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                self.pos += i + 1;
                return Ok(());
            }
        }
        Err(self.error("unterminated string"))
    }

    fn string(&mut self) -> Result<String, ImportError> {
        let start = self.pos;
        let Some(quote) = self.peek() else {
            return Err(self.error("expected a string"));
        };
        self.pos += 1;
        let mut out = String::new();
        let mut chars = self.rest().char_indices();
        while let Some((i, c)) = chars.next() {
            if c == quote {
                self.pos += i + 1;
                return Ok(out);
            }
            let interpolates = c == '$'
                && quote == '"'
                && chars
                    .clone()
                    .next()
                    .is_some_and(|(_, n)| is_word_start(n) || n == '{');
            if interpolates {
                self.pos = start;
                return Err(self.error("interpolated strings are not supported"));
            }
            if c != '\\' {
                out.push(c);
                continue;
            }
            let Some((_, escaped)) = chars.next() else {
                break;
            };
            match (quote, escaped) {
                ('\'', '\'' | '\\') => out.push(escaped),
                ('\'', _) => {
                    out.push('\\');
                    out.push(escaped);
                }
                (_, 'n') => out.push('\n'),
                (_, 't') => out.push('\t'),
                (_, 'r') => out.push('\r'),
                (_, 'v') => out.push('\u{0b}'),
                (_, 'f') => out.push('\u{0c}'),
                (_, 'e') => out.push('\u{1b}'),
                (_, '0') => out.push('\0'),
                (_, '\\' | '"' | '$') => out.push(escaped),
                _ => {
                    out.push('\\');
                    out.push(escaped);
                }
            }
        }
        self.pos = start;
        Err(self.error("unterminated string"))
    }

    fn number(&mut self) -> Result<Value, ImportError> {
        let rest = self.rest();
        let mut len = 0;
        let mut prev = None;
        for c in rest.chars() {
            let sign_ok = len == 0 || matches!(prev, Some('e' | 'E'));
            let hex = rest[..len].starts_with("0x") || rest[..len].starts_with("0X");
            let accepted = c.is_ascii_digit()
                || matches!(c, '.' | '_')
                || (matches!(c, '-' | '+') && sign_ok)
                || (hex && c.is_ascii_hexdigit())
                || (len == 1 && matches!(c, 'x' | 'X') && rest.starts_with('0'))
                || (!hex && matches!(c, 'e' | 'E'));
            if !accepted {
                break;
            }
            len += c.len_utf8();
            prev = Some(c);
        }
        let literal: String = rest[..len].chars().filter(|c| *c != '_').collect();
        self.pos += len;

        let (negative, digits) = match literal.strip_prefix('-') {
            Some(d) => (true, d),
            None => (false, literal.strip_prefix('+').unwrap_or(&literal)),
        };
        let parsed = if let Some(hex) = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            i64::from_str_radix(hex, 16).ok().map(Number::from)
        } else if let Ok(i) = digits.parse::<i64>() {
            Some(Number::from(i))
        } else {
            digits.parse::<f64>().ok().and_then(Number::from_f64)
        };
        let Some(number) = parsed else {
            return Err(self.error(format!("invalid number `{literal}`")));
        };
        if !negative {
            return Ok(Value::Number(number));
        }
        let negated = match number.as_i64() {
            Some(i) => Some(Number::from(-i)),
            None => number.as_f64().and_then(|f| Number::from_f64(-f)),
        };
        negated
            .map(Value::Number)
            .ok_or_else(|| self.error(format!("invalid number `{literal}`")))
    }
}
