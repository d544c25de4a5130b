//! `doxnav export` command implementation.

use clap::Args;
use doxnav_config::CliSettings;

use super::TargetArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be loaded or serialized.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (_, index) = self.target.load_index(CliSettings::default())?;

        let tree = index.expanded();
        let json = if self.pretty {
            serde_json::to_string_pretty(&tree)?
        } else {
            serde_json::to_string(&tree)?
        };
        output.data(&json);
        Ok(())
    }
}
