//! `doxnav show` command implementation.

use clap::Args;
use doxnav_config::CliSettings;
use doxnav_tree::NavNode;

use super::TargetArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    target: TargetArgs,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be loaded.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (_, index) = self.target.load_index(CliSettings::default())?;

        let tree = index.expanded();
        for (node, depth) in doxnav_tree::walk(&tree) {
            output.data(&outline_line(node, depth));
        }
        Ok(())
    }
}

/// One outline line: indent, label, then the target or an unresolved
/// sub-index reference.
fn outline_line(node: &NavNode, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    if let Some(name) = node.children.external() {
        return format!("{indent}{} -> {name}.js", node.label);
    }
    match &node.target {
        Some(target) => format!("{indent}{} ({target})", node.label),
        None => format!("{indent}{}", node.label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_line_with_target() {
        let node = NavNode::new("Guide").with_target("guide.html");

        assert_eq!(outline_line(&node, 1), "  Guide (guide.html)");
    }

    #[test]
    fn test_outline_line_grouping_without_target() {
        let node = NavNode::new("Sections").with_children(vec![NavNode::new("A")]);

        assert_eq!(outline_line(&node, 0), "Sections");
    }

    #[test]
    fn test_outline_line_unresolved_reference() {
        let node = NavNode::new("Files").with_children_ref("files");

        assert_eq!(outline_line(&node, 0), "Files -> files.js");
    }
}
