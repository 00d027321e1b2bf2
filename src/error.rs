//! Parse error type.
//!
//! Parsing has a single failure mode: the input is not an acceptable
//! document. The variants and byte offsets exist for diagnostics only;
//! callers that only care about success can treat every variant alike.
//! Tree mutation and access never fail and have no error type.

use thiserror::Error;

/// Why a parse stopped, with the byte offset where the problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended where a value, separator, or closer was required.
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),
    /// A character that cannot start or continue the expected construct,
    /// including a stray `}` or `]`.
    #[error("unexpected character at byte {0}")]
    UnexpectedCharacter(usize),
    /// A string literal with no closing quote.
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),
    /// A `/*` comment with no closing `*/`.
    #[error("unterminated block comment starting at byte {0}")]
    UnterminatedComment(usize),
    /// A `\u` escape with fewer than four hex digits.
    #[error("malformed \\u escape at byte {0}")]
    InvalidEscape(usize),
    /// A number literal that no digits could be read from.
    #[error("malformed number at byte {0}")]
    InvalidNumber(usize),
}

/// Result alias used throughout the parsing path.
pub type ParseResult<T> = Result<T, ParseError>;
