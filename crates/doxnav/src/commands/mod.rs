//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod fmt;
pub(crate) mod show;

use std::path::PathBuf;

use clap::Args;
use doxnav_config::{CliSettings, Config};
use doxnav_index::{IndexLoader, NavIndex};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use fmt::FmtArgs;
pub(crate) use show::ShowArgs;

/// Arguments shared by every command that loads an index.
#[derive(Args)]
pub(crate) struct TargetArgs {
    /// Index script file or docs directory (default: configured docs dir).
    pub(crate) path: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover doxnav.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Main index script filename (overrides config).
    #[arg(long)]
    pub(crate) filename: Option<String>,

    /// Do not follow external sub-index references.
    #[arg(long)]
    pub(crate) no_external: bool,
}

impl TargetArgs {
    /// Load configuration and the targeted index.
    ///
    /// `settings` carries command-specific overrides; the shared flags
    /// are merged in here.
    pub(crate) fn load_index(
        &self,
        mut settings: CliSettings,
    ) -> Result<(Config, NavIndex), CliError> {
        settings.filename = self.filename.clone();
        if self.no_external {
            settings.resolve_external = Some(false);
        }

        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let target = self
            .path
            .clone()
            .unwrap_or_else(|| config.docs_dir.clone());
        let loader = IndexLoader::for_path(&target, &config.index.filename)
            .with_resolve_external(config.index.resolve_external);
        let index = loader.load()?;

        Ok((config, index))
    }
}
