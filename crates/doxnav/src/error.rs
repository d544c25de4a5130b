//! CLI error types.

use doxnav_config::ConfigError;
use doxnav_index::IndexError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Check(String),
}
