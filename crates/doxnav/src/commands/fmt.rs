//! `doxnav fmt` command implementation.

use clap::Args;
use doxnav_config::CliSettings;
use doxnav_index::{unformatted, write};

use super::TargetArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the fmt command.
#[derive(Args)]
pub(crate) struct FmtArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Verify formatting without writing; fail if any file differs.
    #[arg(long)]
    check: bool,
}

impl FmtArgs {
    /// Execute the fmt command.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be loaded or rewritten, or
    /// if `--check` finds non-canonical files.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (_, index) = self.target.load_index(CliSettings::default())?;

        if self.check {
            let stale = unformatted(&index)?;
            if !stale.is_empty() {
                for path in &stale {
                    output.info(&format!("would rewrite {}", path.display()));
                }
                return Err(CliError::Check(format!(
                    "{} scripts are not in canonical form",
                    stale.len()
                )));
            }
            output.success("all index scripts are in canonical form");
            return Ok(());
        }

        write(&index)?;
        output.success(&format!("rewrote {} scripts", index.scripts().count()));
        Ok(())
    }
}
