//! Configuration management for doxnav.
//!
//! Parses `doxnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "doxnav.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the documentation directory holding the index scripts.
    pub docs_dir: Option<PathBuf>,
    /// Override the main index script filename.
    pub filename: Option<String>,
    /// Override external sub-index resolution.
    pub resolve_external: Option<bool>,
    /// Override strict checking (warnings become failures).
    pub strict: Option<bool>,
    /// Override the nesting depth limit.
    pub max_depth: Option<u32>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Docs location (a relative string from TOML).
    docs: DocsConfigRaw,
    /// Index script configuration.
    pub index: IndexConfig,
    /// Check pass configuration.
    pub check: CheckConfig,

    /// Resolved docs directory (set after loading).
    #[serde(skip)]
    pub docs_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs location as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    dir: Option<String>,
}

/// Index script configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Main index script filename inside the docs directory.
    pub filename: String,
    /// Whether string-reference children are chased to sibling scripts.
    pub resolve_external: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            filename: "index.js".to_owned(),
            resolve_external: true,
        }
    }
}

/// Check pass configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Treat warnings as failures.
    pub strict: bool,
    /// Maximum allowed nesting depth; 0 disables the check.
    pub max_depth: u32,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 32,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `doxnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(docs_dir) = &settings.docs_dir {
            self.docs_dir.clone_from(docs_dir);
        }
        if let Some(filename) = &settings.filename {
            self.index.filename.clone_from(filename);
        }
        if let Some(resolve_external) = settings.resolve_external {
            self.index.resolve_external = resolve_external;
        }
        if let Some(strict) = settings.strict {
            self.check.strict = strict;
        }
        if let Some(max_depth) = settings.max_depth {
            self.check.max_depth = max_depth;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            index: IndexConfig::default(),
            check: CheckConfig::default(),
            docs_dir: base.join("docs"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve the docs directory against the config file location.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_dir = config_dir.join(self.docs.dir.as_deref().unwrap_or("docs"));
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index.filename.is_empty() {
            return Err(ConfigError::Validation(
                "index.filename cannot be empty".to_owned(),
            ));
        }
        if self.index.filename.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "index.filename must be a bare filename, not a path".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(config.docs_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.index.filename, "index.js");
        assert!(config.index.resolve_external);
        assert!(!config.check.strict);
        assert_eq!(config.check.max_depth, 32);
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.index.filename, "index.js");
        assert_eq!(config.check.max_depth, 32);
    }

    #[test]
    fn test_parse_index_section() {
        let toml = r#"
[index]
filename = "navtreedata.js"
resolve_external = false
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.index.filename, "navtreedata.js");
        assert!(!config.index.resolve_external);
    }

    #[test]
    fn test_parse_check_section() {
        let toml = r#"
[check]
strict = true
max_depth = 4
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert!(config.check.strict);
        assert_eq!(config.check.max_depth, 4);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
dir = "build/html"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.docs_dir, PathBuf::from("/project/build/html"));
    }

    #[test]
    fn test_resolve_paths_default_dir() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.docs_dir, PathBuf::from("/project/docs"));
    }

    #[test]
    fn test_apply_cli_settings_docs_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            docs_dir: Some(PathBuf::from("/custom/html")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.docs_dir, PathBuf::from("/custom/html"));
        assert_eq!(config.index.filename, "index.js"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            filename: Some("navtreedata.js".to_owned()),
            strict: Some(true),
            max_depth: Some(8),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.index.filename, "navtreedata.js");
        assert!(config.check.strict);
        assert_eq!(config.check.max_depth, 8);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.index.filename, "index.js");
        assert_eq!(config.docs_dir, PathBuf::from("/test/docs"));
    }

    #[test]
    fn test_validate_empty_filename() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.index.filename = String::new();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("index.filename"));
    }

    #[test]
    fn test_validate_filename_with_path_separator() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.index.filename = "html/index.js".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("bare filename"));
    }

    #[test]
    fn test_validate_default_passes() {
        let config = Config::default_with_base(Path::new("/test"));

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/doxnav.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
