//! Navigation index loading, checking and rewriting.
//!
//! An index on disk is one main script (conventionally `index.js`) plus
//! any sibling scripts it pulls in through string-reference children.
//! [`IndexLoader`] reads that set into a [`NavIndex`]; [`lint`] runs the
//! structural checks; [`write`] puts every script back in canonical form.
//!
//! # Example
//!
//! ```ignore
//! use doxnav_index::{CheckOptions, IndexLoader, lint};
//!
//! let index = IndexLoader::new("docs/html".into()).load()?;
//! for diagnostic in lint(&index, &CheckOptions::default()) {
//!     eprintln!("{diagnostic}");
//! }
//! ```

mod error;
mod index;
mod lint;
mod loader;
mod writer;

pub use error::IndexError;
pub use index::NavIndex;
pub use lint::{CheckOptions, Diagnostic, Severity, lint};
pub use loader::IndexLoader;
pub use writer::{unformatted, write};
