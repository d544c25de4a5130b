//! Parsed script representation.

use doxnav_tree::NavNode;

/// One navigation index script: a named variable holding root entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavScript {
    /// Declared variable name (`var <name> = ...`).
    pub name: String,
    /// Root entries in display order.
    pub roots: Vec<NavNode>,
}

impl NavScript {
    /// Create a script.
    #[must_use]
    pub fn new(name: impl Into<String>, roots: Vec<NavNode>) -> Self {
        Self {
            name: name.into(),
            roots,
        }
    }

    /// Number of entries across all root subtrees.
    ///
    /// External references count as their referencing entry only.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(NavNode::node_count).sum()
    }

    /// Names of external sub-indexes referenced anywhere in this script.
    #[must_use]
    pub fn external_refs(&self) -> Vec<&str> {
        doxnav_tree::walk(&self.roots)
            .filter_map(|(node, _)| node.children.external())
            .collect()
    }
}
