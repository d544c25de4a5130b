//! Structural checks over a loaded index.
//!
//! The parser accepts anything shaped like an index; this pass reports
//! content problems. Structural impossibilities (an empty label, a
//! reference to a sub-index that is not part of the set) are errors,
//! authoring smells are warnings.

use std::collections::HashSet;
use std::fmt;

use doxnav_script::NavScript;
use doxnav_tree::{Children, NavNode};

use crate::index::NavIndex;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Authoring smell; the index still renders.
    Warning,
    /// Structural problem; the index is wrong for any viewer.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One finding against one entry of one script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Finding severity.
    pub severity: Severity,
    /// Declared name of the script holding the entry.
    pub script: String,
    /// Label path from the script root, `" > "`-joined.
    pub path: String,
    /// What is wrong.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: [{}] {}", self.severity, self.script, self.message)
        } else {
            write!(
                f,
                "{}: [{}] {}: {}",
                self.severity, self.script, self.path, self.message
            )
        }
    }
}

/// Knobs for the check pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckOptions {
    /// Maximum allowed nesting depth per script; 0 disables the check.
    pub max_depth: u32,
}

/// Run all structural checks over every script of the index.
///
/// Findings come back in display order, main script first.
#[must_use]
pub fn lint(index: &NavIndex, options: &CheckOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (_, script) in index.scripts() {
        lint_script(script, index, options, &mut diagnostics);
    }
    diagnostics
}

fn lint_script(
    script: &NavScript,
    index: &NavIndex,
    options: &CheckOptions,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut trail = Vec::new();
    lint_siblings(script, &script.roots, &mut trail, 1, index, options, diagnostics);
}

#[allow(clippy::too_many_arguments)]
fn lint_siblings(
    script: &NavScript,
    siblings: &[NavNode],
    trail: &mut Vec<String>,
    depth: u32,
    index: &NavIndex,
    options: &CheckOptions,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut seen = HashSet::new();
    for node in siblings {
        if !node.label.is_empty() && !seen.insert(node.label.as_str()) {
            diagnostics.push(diagnostic_at(
                Severity::Warning,
                script,
                trail,
                Some(node),
                format!("duplicate sibling label '{}'", node.label),
            ));
        }
        lint_node(script, node, trail, depth, index, options, diagnostics);
    }
}

#[allow(clippy::too_many_arguments)]
fn lint_node(
    script: &NavScript,
    node: &NavNode,
    trail: &mut Vec<String>,
    depth: u32,
    index: &NavIndex,
    options: &CheckOptions,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if node.label.trim().is_empty() {
        diagnostics.push(diagnostic_at(
            Severity::Error,
            script,
            trail,
            Some(node),
            "entry has an empty label".to_owned(),
        ));
    }
    if node.target.is_none() && node.children.is_leaf() {
        diagnostics.push(diagnostic_at(
            Severity::Warning,
            script,
            trail,
            Some(node),
            "entry has neither a target nor children".to_owned(),
        ));
    }
    if options.max_depth > 0 && depth == options.max_depth + 1 {
        diagnostics.push(diagnostic_at(
            Severity::Warning,
            script,
            trail,
            Some(node),
            format!("nesting exceeds configured depth {}", options.max_depth),
        ));
    }

    match &node.children {
        Children::Leaf => {}
        Children::External(name) => {
            if index.external(name).is_none() {
                diagnostics.push(diagnostic_at(
                    Severity::Error,
                    script,
                    trail,
                    Some(node),
                    format!("references sub-index '{name}' which is not part of the index"),
                ));
            }
        }
        Children::Inline(children) => {
            if children.is_empty() {
                diagnostics.push(diagnostic_at(
                    Severity::Warning,
                    script,
                    trail,
                    Some(node),
                    "grouping entry has no children".to_owned(),
                ));
            } else {
                trail.push(display_label(node));
                lint_siblings(script, children, trail, depth + 1, index, options, diagnostics);
                trail.pop();
            }
        }
    }
}

fn diagnostic_at(
    severity: Severity,
    script: &NavScript,
    trail: &[String],
    node: Option<&NavNode>,
    message: String,
) -> Diagnostic {
    let mut parts = trail.to_vec();
    if let Some(node) = node {
        parts.push(display_label(node));
    }
    Diagnostic {
        severity,
        script: script.name.clone(),
        path: parts.join(" > "),
        message,
    }
}

fn display_label(node: &NavNode) -> String {
    if node.label.trim().is_empty() {
        "<unlabeled>".to_owned()
    } else {
        node.label.clone()
    }
}
