//! Index script parsing.
//!
//! Hand-rolled cursor over the source text. The grammar is small: one
//! `var <name> = [...]` declaration whose array holds three-slot entry
//! tuples. Whitespace is free-form, `//` and `/* */` comments are
//! skipped, the last entry may carry a trailing comma, and the closing
//! semicolon is optional.

use doxnav_tree::{Children, NavNode};

use crate::ScriptError;
use crate::script::NavScript;

/// Parse an index script.
///
/// Returns the declared variable name and root entries. Content problems
/// (empty labels, unresolvable references) are NOT errors here: anything
/// shaped like an index loads, and structural checks run separately.
///
/// # Errors
///
/// Returns [`ScriptError`] with a 1-based source position when the text
/// is not a single well-formed index declaration.
pub fn parse(source: &str) -> Result<NavScript, ScriptError> {
    let mut cursor = Cursor::new(source);

    cursor.skip_trivia()?;
    if !cursor.eat_keyword("var") {
        return Err(cursor.error("expected 'var'"));
    }
    cursor.skip_trivia()?;
    let name = cursor.parse_ident()?;
    cursor.skip_trivia()?;
    cursor.expect('=')?;
    cursor.skip_trivia()?;
    let roots = parse_entries(&mut cursor)?;
    cursor.skip_trivia()?;
    cursor.eat(';');
    cursor.skip_trivia()?;
    if let Some(found) = cursor.peek() {
        return Err(cursor.error(format!("unexpected '{found}' after index declaration")));
    }

    Ok(NavScript { name, roots })
}

/// Parse a bracketed entry list. Accepts an empty list and a trailing
/// comma after the last entry.
fn parse_entries(cursor: &mut Cursor<'_>) -> Result<Vec<NavNode>, ScriptError> {
    cursor.expect('[')?;
    let mut entries = Vec::new();
    loop {
        cursor.skip_trivia()?;
        if cursor.eat(']') {
            return Ok(entries);
        }
        entries.push(parse_entry(cursor)?);
        cursor.skip_trivia()?;
        if !cursor.eat(',') {
            cursor.expect(']')?;
            return Ok(entries);
        }
    }
}

/// Parse one `[ label, target, children ]` tuple.
fn parse_entry(cursor: &mut Cursor<'_>) -> Result<NavNode, ScriptError> {
    cursor.expect('[')?;
    cursor.skip_trivia()?;
    let label = cursor.parse_string()?;
    cursor.skip_trivia()?;
    cursor.expect(',')?;
    cursor.skip_trivia()?;
    let target = parse_target(cursor)?;
    cursor.skip_trivia()?;
    cursor.expect(',')?;
    cursor.skip_trivia()?;
    let children = parse_children(cursor)?;
    cursor.skip_trivia()?;
    cursor.expect(']')?;

    Ok(NavNode {
        label,
        target,
        children,
    })
}

/// Parse the target slot. The generator spells "no link" both as `null`
/// and as `""`; both load as `None`.
fn parse_target(cursor: &mut Cursor<'_>) -> Result<Option<String>, ScriptError> {
    if cursor.eat_keyword("null") {
        return Ok(None);
    }
    if cursor.peek() == Some('"') {
        let target = cursor.parse_string()?;
        return Ok((!target.is_empty()).then_some(target));
    }
    Err(cursor.error("expected target string or null"))
}

/// Parse the child slot: `null`, an external reference string, or a
/// nested entry list.
fn parse_children(cursor: &mut Cursor<'_>) -> Result<Children, ScriptError> {
    if cursor.eat_keyword("null") {
        return Ok(Children::Leaf);
    }
    match cursor.peek() {
        Some('"') => Ok(Children::External(cursor.parse_string()?)),
        Some('[') => Ok(Children::Inline(parse_entries(cursor)?)),
        _ => Err(cursor.error("expected child entries, external reference or null")),
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Source cursor tracking a 1-based line/column position.
struct Cursor<'a> {
    rest: &'a str,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            rest: source,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.rest = &self.rest[ch.len_utf8()..];
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ScriptError> {
        if self.eat(expected) {
            return Ok(());
        }
        Err(match self.peek() {
            Some(found) => self.error(format!("expected '{expected}', found '{found}'")),
            None => self.error(format!("expected '{expected}', found end of input")),
        })
    }

    fn error(&self, message: impl Into<String>) -> ScriptError {
        ScriptError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), ScriptError> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.rest.starts_with("//") => {
                    while let Some(ch) = self.bump() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                Some('/') if self.rest.starts_with("/*") => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        if self.rest.starts_with("*/") {
                            self.bump();
                            self.bump();
                            break;
                        }
                        if self.bump().is_none() {
                            return Err(ScriptError {
                                message: "unterminated block comment".to_owned(),
                                line,
                                column,
                            });
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Consume `keyword` if present and not part of a longer identifier.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.rest.starts_with(keyword) {
            let after = self.rest[keyword.len()..].chars().next();
            if !after.is_some_and(is_ident_char) {
                for _ in 0..keyword.len() {
                    self.bump();
                }
                return true;
            }
        }
        false
    }

    fn parse_ident(&mut self) -> Result<String, ScriptError> {
        let mut ident = String::new();
        match self.peek() {
            Some(ch) if is_ident_start(ch) => {
                ident.push(ch);
                self.bump();
            }
            _ => return Err(self.error("expected identifier")),
        }
        while let Some(ch) = self.peek() {
            if !is_ident_char(ch) {
                break;
            }
            ident.push(ch);
            self.bump();
        }
        Ok(ident)
    }

    /// Parse a double-quoted string with JSON-style escapes.
    fn parse_string(&mut self) -> Result<String, ScriptError> {
        self.expect('"')?;
        let mut value = String::new();
        loop {
            let Some(ch) = self.bump() else {
                return Err(self.error("unterminated string"));
            };
            match ch {
                '"' => return Ok(value),
                '\\' => value.push(self.parse_escape()?),
                '\n' => return Err(self.error("unterminated string")),
                _ => value.push(ch),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, ScriptError> {
        let Some(ch) = self.bump() else {
            return Err(self.error("unterminated escape sequence"));
        };
        Ok(match ch {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{0008}',
            'f' => '\u{000c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => self.parse_unicode_escape()?,
            other => return Err(self.error(format!("unknown escape '\\{other}'"))),
        })
    }

    fn parse_unicode_escape(&mut self) -> Result<char, ScriptError> {
        let high = self.parse_hex4()?;
        if (0xD800..=0xDBFF).contains(&high) {
            // Surrogate pair: the low half must follow immediately.
            if !(self.eat('\\') && self.eat('u')) {
                return Err(self.error("unpaired surrogate in \\u escape"));
            }
            let low = self.parse_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(self.error("unpaired surrogate in \\u escape"));
            }
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(code).ok_or_else(|| self.error("invalid \\u escape"));
        }
        char::from_u32(high).ok_or_else(|| self.error("invalid \\u escape"))
    }

    fn parse_hex4(&mut self) -> Result<u32, ScriptError> {
        let mut code = 0;
        for _ in 0..4 {
            let Some(digit) = self.bump().and_then(|ch| ch.to_digit(16)) else {
                return Err(self.error("expected four hex digits in \\u escape"));
            };
            code = code * 16 + digit;
        }
        Ok(code)
    }
}
