//! Mutable JSON document tree with comment-tolerant parsing.
//!
//! The crate is built around a single dynamically-typed value type that
//! owns its children and changes kind freely over its lifetime, plus a
//! parser and a pretty-printer over it:
//!
//! - [`value`] - The [`Value`] tree: kinds, accessors, mutation
//! - [`parser`] - Recursive-descent parsing of JSON with `//` and `/* */`
//!   comments
//! - [`writer`] - Pretty-printing serialization with configurable indent
//! - [`escape`] - String escape codec shared by parser and writer
//! - [`error`] - The single parse failure type
//!
//! Everything is synchronous and in-memory: a document is parsed into a
//! tree, the tree is read and mutated through [`Value`], and the tree is
//! written back out. A tree may be read from many threads at once but has
//! no internal locking; mutation needs outside synchronization.
//!
//! # Example
//!
//! ```
//! use jsontree::{parse, Value};
//!
//! let mut doc = parse(r#"{ "name": "box", "tags": ["a"] }"#).unwrap();
//! doc["tags"].push("b");
//! doc["visible"] = Value::Bool(true);
//! assert_eq!(
//!     doc.serialize(0),
//!     r#"{"name": "box","tags": ["a","b"],"visible": true}"#
//! );
//! ```

// Library code must return errors, never panic. Tests are exercised
// separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod escape;
pub mod parser;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod value;
pub mod writer;

// Re-export the working surface
pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_bytes};
pub use value::{Value, ValueKind, NULL};
pub use writer::{serialize, write_value};
