//! Index-level error type.

use std::path::PathBuf;

use doxnav_script::ScriptError;

/// Error loading or writing a navigation index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// I/O failure on an index script file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Script file is not a well-formed index declaration.
    #[error("{}: {source}", .path.display())]
    Script {
        /// File that failed to parse.
        path: PathBuf,
        #[source]
        source: ScriptError,
    },

    /// A string-reference child names a script that does not exist.
    #[error("sub-index '{name}' referenced from '{referrer}' not found: {}", .path.display())]
    MissingExternal {
        /// Referenced sub-index name.
        name: String,
        /// Declared name of the referencing script.
        referrer: String,
        /// File that was expected to hold the sub-index.
        path: PathBuf,
    },

    /// A sub-index script declares a different variable than its filename.
    #[error("sub-index '{expected}' declares 'var {found}'")]
    NameMismatch {
        /// Name the reference (and filename) promise.
        expected: String,
        /// Name the script actually declares.
        found: String,
    },

    /// String references form a cycle.
    #[error("circular sub-index reference through '{0}'")]
    CircularExternal(String),
}
