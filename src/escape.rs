//! String escape codec shared by the parser and the writer.
//!
//! The read side is deliberately permissive: an unknown character after a
//! backslash is consumed and appends nothing. This matches the documents
//! this format has historically accepted and is kept on purpose; note that
//! `\/` falls into that bucket. `\u` escapes decode a single code point
//! with no surrogate-pair combination, so a supplementary-plane character
//! written as two escapes comes out wrong (each half becomes U+FFFD).

use crate::error::{ParseError, ParseResult};

/// Append `text` to `dest` as a quoted JSON string literal.
///
/// `"` and `\` and characters below 0x20 are escaped, using the short
/// forms where one exists and `\u00XX` otherwise. Everything else passes
/// through unescaped.
pub fn escape_into(dest: &mut String, text: &str) {
    dest.push('"');
    for ch in text.chars() {
        match ch {
            '"' => dest.push_str("\\\""),
            '\\' => dest.push_str("\\\\"),
            '\u{0008}' => dest.push_str("\\b"),
            '\u{000C}' => dest.push_str("\\f"),
            '\n' => dest.push_str("\\n"),
            '\r' => dest.push_str("\\r"),
            '\t' => dest.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                dest.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => dest.push(c),
        }
    }
    dest.push('"');
}

/// Read a string literal body from `input` starting at `*pos`, with the
/// opening quote already consumed. Advances `*pos` past the closing quote.
///
/// Bytes are copied verbatim until the closing quote; escape sequences are
/// decoded per the module rules. The collected bytes become a `String`
/// with a lossy conversion, so malformed UTF-8 degrades instead of
/// failing.
pub fn unescape(input: &[u8], pos: &mut usize) -> ParseResult<String> {
    let start = *pos;
    let mut buf = Vec::new();
    loop {
        let Some(&b) = input.get(*pos) else {
            return Err(ParseError::UnterminatedString(start));
        };
        *pos += 1;
        if b == b'"' {
            break;
        }
        if b != b'\\' {
            buf.push(b);
            continue;
        }
        let Some(&esc) = input.get(*pos) else {
            return Err(ParseError::UnterminatedString(start));
        };
        *pos += 1;
        match esc {
            b'\\' => buf.push(b'\\'),
            b'"' => buf.push(b'"'),
            b'b' => buf.push(0x08),
            b'f' => buf.push(0x0C),
            b'n' => buf.push(b'\n'),
            b'r' => buf.push(b'\r'),
            b't' => buf.push(b'\t'),
            b'u' => {
                let code = read_hex4(input, pos)?;
                // Surrogate halves are not valid chars; degrade to U+FFFD.
                let ch = char::from_u32(code).unwrap_or('\u{FFFD}');
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
            }
            // Unknown escape: consumed, nothing appended.
            _ => {}
        }
    }
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Read exactly four hex digits, returning the code point value.
fn read_hex4(input: &[u8], pos: &mut usize) -> ParseResult<u32> {
    let start = *pos;
    let mut value: u32 = 0;
    for _ in 0..4 {
        let Some(&b) = input.get(*pos) else {
            return Err(ParseError::InvalidEscape(start));
        };
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => return Err(ParseError::InvalidEscape(start)),
        };
        *pos += 1;
        value = (value << 4) | u32::from(digit);
    }
    Ok(value)
}
