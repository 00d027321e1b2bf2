//! Recursive-descent parser.
//!
//! Operates directly on a byte cursor; the grammar dispatches on single
//! lead bytes so no separate token stream is needed. Accepts JSON
//! (RFC 8259) extended with `//` line comments and `/* */` block comments,
//! a tolerated extension some existing documents rely on. Comments and
//! whitespace are skipped wherever the grammar expects the next
//! significant character.
//!
//! A failure at any depth aborts the whole parse; no partial tree is
//! returned. Parsing consumes exactly one value and ignores anything after
//! it.

use indexmap::IndexMap;
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::escape;
use crate::value::Value;

/// Parse one JSON value from text.
///
/// Input after the first complete value is ignored.
///
/// # Example
///
/// ```
/// use jsontree::parse;
///
/// let doc = parse("{ \"size\": 3, /* tolerated */ \"fast\": true }").unwrap();
/// assert_eq!(doc["size"].as_f64(), Some(3.0));
/// assert_eq!(doc["fast"].as_bool(), Some(true));
/// ```
pub fn parse(text: &str) -> ParseResult<Value> {
    parse_bytes(text.as_bytes())
}

/// Parse one JSON value from a raw buffer.
///
/// The buffer does not have to be valid UTF-8: string content is recovered
/// with a lossy conversion rather than rejected.
pub fn parse_bytes(input: &[u8]) -> ParseResult<Value> {
    let mut cursor = Cursor { input, pos: 0 };
    parse_value(&mut cursor)
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        parse(s)
    }
}

struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Skip whitespace and comments up to the next significant byte.
    ///
    /// A lone `/` not starting a comment is left in place for the caller
    /// to reject. An unterminated block comment fails here.
    fn skip_trivia(&mut self) -> ParseResult<()> {
        loop {
            while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
                self.pos += 1;
            }
            if self.peek() != Some(b'/') {
                return Ok(());
            }
            let start = self.pos;
            match self.input.get(self.pos + 1).copied() {
                Some(b'/') => {
                    self.pos += 2;
                    while let Some(b) = self.advance() {
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                Some(b'*') => {
                    self.pos += 2;
                    loop {
                        match self.advance() {
                            None => return Err(ParseError::UnterminatedComment(start)),
                            Some(b'*') if self.peek() == Some(b'/') => {
                                self.pos += 1;
                                break;
                            }
                            Some(_) => {}
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Consume an exact byte sequence, used for the keyword literals.
    fn expect_bytes(&mut self, expected: &[u8]) -> ParseResult<()> {
        for &b in expected {
            if self.advance() != Some(b) {
                return Err(ParseError::UnexpectedCharacter(self.pos.saturating_sub(1)));
            }
        }
        Ok(())
    }
}

fn parse_value(cur: &mut Cursor) -> ParseResult<Value> {
    cur.skip_trivia()?;
    match cur.peek() {
        None => Err(ParseError::UnexpectedEnd(cur.pos)),
        Some(b'n') => {
            cur.expect_bytes(b"null")?;
            Ok(Value::Null)
        }
        Some(b't') => {
            cur.expect_bytes(b"true")?;
            Ok(Value::Bool(true))
        }
        Some(b'f') => {
            cur.expect_bytes(b"false")?;
            Ok(Value::Bool(false))
        }
        Some(b'"') => {
            cur.pos += 1;
            Ok(Value::String(escape::unescape(cur.input, &mut cur.pos)?))
        }
        Some(b'-' | b'0'..=b'9') => parse_number(cur),
        Some(b'[') => parse_array(cur),
        Some(b'{') => parse_object(cur),
        // Covers stray `}` and `]` as well.
        Some(_) => Err(ParseError::UnexpectedCharacter(cur.pos)),
    }
}

/// Scan the longest numeric extent the way strtod would, then convert
/// locale-independently. The cursor stops where the scan stopped.
fn parse_number(cur: &mut Cursor) -> ParseResult<Value> {
    let start = cur.pos;
    if cur.peek() == Some(b'-') {
        cur.pos += 1;
    }
    let mut digits = 0usize;
    while let Some(b'0'..=b'9') = cur.peek() {
        cur.pos += 1;
        digits += 1;
    }
    if digits == 0 {
        return Err(ParseError::InvalidNumber(start));
    }
    if cur.peek() == Some(b'.') {
        cur.pos += 1;
        while let Some(b'0'..=b'9') = cur.peek() {
            cur.pos += 1;
        }
    }
    if let Some(b'e' | b'E') = cur.peek() {
        // Only consume a well-formed exponent; otherwise the conversion
        // stops before the `e`, as strtod does.
        let mut probe = cur.pos + 1;
        if let Some(b'+' | b'-') = cur.input.get(probe).copied() {
            probe += 1;
        }
        if let Some(b'0'..=b'9') = cur.input.get(probe).copied() {
            cur.pos = probe;
            while let Some(b'0'..=b'9') = cur.peek() {
                cur.pos += 1;
            }
        }
    }
    let text = std::str::from_utf8(&cur.input[start..cur.pos])
        .map_err(|_| ParseError::InvalidNumber(start))?;
    let n: f64 = text.parse().map_err(|_| ParseError::InvalidNumber(start))?;
    Ok(Value::Number(n))
}

fn parse_array(cur: &mut Cursor) -> ParseResult<Value> {
    cur.pos += 1; // opening bracket
    let mut items = Vec::new();
    cur.skip_trivia()?;
    if cur.peek() == Some(b']') {
        cur.pos += 1;
        return Ok(Value::Array(items));
    }
    loop {
        items.push(parse_value(cur)?);
        cur.skip_trivia()?;
        match cur.advance() {
            Some(b']') => break,
            Some(b',') => {}
            Some(_) => return Err(ParseError::UnexpectedCharacter(cur.pos - 1)),
            None => return Err(ParseError::UnexpectedEnd(cur.pos)),
        }
    }
    Ok(Value::Array(items))
}

fn parse_object(cur: &mut Cursor) -> ParseResult<Value> {
    cur.pos += 1; // opening brace
    let mut map = IndexMap::new();
    cur.skip_trivia()?;
    if cur.peek() == Some(b'}') {
        cur.pos += 1;
        return Ok(Value::Object(map));
    }
    loop {
        cur.skip_trivia()?;
        match cur.advance() {
            Some(b'"') => {}
            Some(_) => return Err(ParseError::UnexpectedCharacter(cur.pos - 1)),
            None => return Err(ParseError::UnexpectedEnd(cur.pos)),
        }
        let key = escape::unescape(cur.input, &mut cur.pos)?;
        cur.skip_trivia()?;
        match cur.advance() {
            Some(b':') => {}
            Some(_) => return Err(ParseError::UnexpectedCharacter(cur.pos - 1)),
            None => return Err(ParseError::UnexpectedEnd(cur.pos)),
        }
        let value = parse_value(cur)?;
        // Re-inserting a key replaces its value without moving the key.
        map.insert(key, value);
        cur.skip_trivia()?;
        match cur.advance() {
            Some(b'}') => break,
            Some(b',') => {}
            Some(_) => return Err(ParseError::UnexpectedCharacter(cur.pos - 1)),
            None => return Err(ParseError::UnexpectedEnd(cur.pos)),
        }
    }
    Ok(Value::Object(map))
}
