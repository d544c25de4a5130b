//! Navigation index script format.
//!
//! A documentation generator publishes its sidebar as a small JavaScript
//! data file declaring one tree literal:
//!
//! ```text
//! var index =
//! [
//!   [ "Getting Started", "start.html", null ],
//!   [ "Reference", "reference.html", [
//!     [ "Types", "reference.html#types", null ]
//!   ] ],
//!   [ "Files", "files.html", "files" ]
//! ];
//! ```
//!
//! Every entry is a three-slot tuple: label, target, children. The child
//! slot is `null`, a nested entry list, or a string naming a sibling
//! script that holds the subtree.
//!
//! [`parse`] reads generator output (free-form whitespace, `//` and
//! `/* */` comments, trailing commas) into a [`NavScript`]; [`emit`]
//! writes the one canonical form. `parse(emit(s))` reproduces `s`
//! exactly, so rewriting an index is lossless.

mod emit;
mod parse;
mod script;

pub use emit::emit;
pub use parse::parse;
pub use script::NavScript;

/// Script syntax error with 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {message}")]
pub struct ScriptError {
    /// What went wrong.
    pub message: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}
