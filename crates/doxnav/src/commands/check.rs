//! `doxnav check` command implementation.

use clap::Args;
use doxnav_config::CliSettings;
use doxnav_index::{CheckOptions, Severity, lint};

use super::TargetArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Treat warnings as errors (overrides config).
    #[arg(long)]
    strict: bool,

    /// Maximum allowed nesting depth, 0 to disable (overrides config).
    #[arg(long)]
    max_depth: Option<u32>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be loaded or the check
    /// finds problems.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            strict: self.strict.then_some(true),
            max_depth: self.max_depth,
            ..Default::default()
        };
        let (config, index) = self.target.load_index(settings)?;

        let options = CheckOptions {
            max_depth: config.check.max_depth,
        };
        let diagnostics = lint(&index, &options);

        let mut errors = 0;
        let mut warnings = 0;
        for diagnostic in &diagnostics {
            match diagnostic.severity {
                Severity::Error => {
                    errors += 1;
                    output.error(&diagnostic.to_string());
                }
                Severity::Warning => {
                    warnings += 1;
                    output.warning(&diagnostic.to_string());
                }
            }
        }

        if diagnostics.is_empty() {
            output.success(&format!(
                "{} entries across {} scripts, no problems found",
                index.node_count(),
                index.scripts().count()
            ));
        }

        if errors > 0 || (config.check.strict && warnings > 0) {
            return Err(CliError::Check(format!(
                "check failed: {errors} errors, {warnings} warnings"
            )));
        }
        Ok(())
    }
}
