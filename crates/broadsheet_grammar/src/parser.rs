//! Parser for the canonical template grammar.
//!
//! Walks template text in a single pass, splitting it into literal text and
//! `{{name attr="value"}}` tags. The grammar is small enough that a
//! hand-written scanner beats a template engine: every construct is
//! recognized by one or two characters of lookahead.

use crate::error::ParseError;
use crate::node::{TagAttrs, TagNode, TemplateNode};
use crate::span::Span;

/// Parses template text into nodes.
///
/// # Errors
/// Returns a [`ParseError`] if any tag is malformed.
pub fn parse_template(source: &str) -> Result<Vec<TemplateNode>, ParseError> {
    Parser::new(source).parse_all()
}

/// Single-pass parser for template text.
pub struct Parser<'src> {
    /// Full template text (for slicing node content).
    source: &'src str,
    /// Remaining unparsed text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given template text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Parses the whole template.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if any tag is malformed.
    pub fn parse_all(mut self) -> Result<Vec<TemplateNode>, ParseError> {
        let mut nodes = Vec::new();
        while !self.rest.is_empty() {
            if self.rest.starts_with("{{") {
                nodes.push(TemplateNode::Tag(self.parse_tag()?));
            } else {
                nodes.push(self.parse_text());
            }
        }
        Ok(nodes)
    }

    /// Consumes literal text up to the next `{{` or end of input.
    fn parse_text(&mut self) -> TemplateNode {
        let start = self.position;
        let line = self.line;
        let column = self.column;
        while !self.rest.is_empty() && !self.rest.starts_with("{{") {
            self.advance();
        }
        let span = Span::new(start, self.position, line, column);
        TemplateNode::Text(span.text(self.source).to_string(), span)
    }

    /// Parses one `{{name attr="value" ...}}` tag.
    fn parse_tag(&mut self) -> Result<TagNode, ParseError> {
        let start = self.position;
        let line = self.line;
        let column = self.column;
        self.advance(); // first '{'
        self.advance(); // second '{'
        self.skip_spaces();

        let name = self.scan_ident("expected tag name")?;
        let mut attrs = TagAttrs::new();

        loop {
            let before = self.position;
            self.skip_spaces();
            match self.peek_char() {
                Some('}') => {
                    self.advance();
                    if self.peek_char() == Some('}') {
                        self.advance();
                        break;
                    }
                    return Err(self.error_here("expected '}}' to close tag"));
                }
                Some('\n' | '\r') => {
                    return Err(self.error_here("unexpected newline in tag"));
                }
                Some(c) if is_ident_start(c) => {
                    // Attributes are space-separated; a name glued to the
                    // previous value is a syntax error.
                    if self.position == before && !attrs.is_empty() {
                        return Err(self.error_here("expected space before attribute"));
                    }
                    let (attr_name, attr_value) = self.parse_attr()?;
                    if attrs.contains(&attr_name) {
                        return Err(self.error_here(&format!(
                            "duplicate attribute \"{attr_name}\""
                        )));
                    }
                    attrs.push(attr_name, attr_value);
                }
                Some(c) => {
                    return Err(self.error_here(&format!("unexpected character in tag: {c}")));
                }
                None => {
                    return Err(ParseError::new("unterminated tag", line, column));
                }
            }
        }

        Ok(TagNode {
            name,
            attrs,
            span: Span::new(start, self.position, line, column),
        })
    }

    /// Parses one `name="value"` attribute, unescaping the value.
    fn parse_attr(&mut self) -> Result<(String, String), ParseError> {
        let name = self.scan_ident("expected attribute name")?;
        if self.peek_char() != Some('=') {
            return Err(self.error_here(&format!("expected '=' after attribute \"{name}\"")));
        }
        self.advance();
        if self.peek_char() != Some('"') {
            return Err(self.error_here(&format!(
                "expected '\"' to open the value of attribute \"{name}\""
            )));
        }
        self.advance();

        let mut value = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek_char() {
                        Some(c @ ('"' | '\\')) => {
                            value.push(c);
                            self.advance();
                        }
                        Some(c) => {
                            return Err(
                                self.error_here(&format!("invalid escape sequence: \\{c}"))
                            );
                        }
                        None => {
                            return Err(self.error_here("unterminated attribute value"));
                        }
                    }
                }
                Some('\n' | '\r') => {
                    return Err(self.error_here("unexpected newline in attribute value"));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    return Err(self.error_here("unterminated attribute value"));
                }
            }
        }
        Ok((name, value))
    }

    /// Scans an identifier: an ASCII letter followed by letters, digits,
    /// hyphens, or underscores.
    fn scan_ident(&mut self, expected: &str) -> Result<String, ParseError> {
        match self.peek_char() {
            Some(c) if is_ident_start(c) => {
                let start = self.position;
                while let Some(c) = self.peek_char() {
                    if is_ident_char(c) {
                        self.advance();
                    } else {
                        break;
                    }
                }
                Ok(self.source[start..self.position].to_string())
            }
            _ => Err(self.error_here(expected)),
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips spaces and tabs. Newlines are left for the caller to reject.
    fn skip_spaces(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\t')) {
            self.advance();
        }
    }

    /// Builds a parse error at the current position.
    fn error_here(&self, message: &str) -> ParseError {
        ParseError::new(message, self.line, self.column)
    }
}

/// Returns true if `c` can start an identifier.
const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true if `c` can continue an identifier.
const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
