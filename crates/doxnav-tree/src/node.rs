//! Navigation entry type.

use serde::Serialize;

use crate::iter::DepthFirst;

/// The child slot of a navigation entry.
///
/// Serializes untagged: an inline list becomes a JSON array, an external
/// reference becomes a string, and a leaf slot is omitted entirely by
/// [`NavNode`]'s serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Children {
    /// No sub-navigation.
    #[default]
    Leaf,
    /// Children live in a sibling script declaring `var <name>`.
    External(String),
    /// Ordered inline child entries.
    Inline(Vec<NavNode>),
}

impl Children {
    /// Whether the slot is empty.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Inline child entries, or an empty slice for leaf and external slots.
    #[must_use]
    pub fn nodes(&self) -> &[NavNode] {
        match self {
            Self::Inline(nodes) => nodes,
            Self::Leaf | Self::External(_) => &[],
        }
    }

    /// External sub-index name, if this slot is a reference.
    #[must_use]
    pub fn external(&self) -> Option<&str> {
        match self {
            Self::External(name) => Some(name),
            Self::Leaf | Self::Inline(_) => None,
        }
    }
}

/// One entry of a navigation tree.
///
/// `target` is `None` for pure grouping headers. Entry order within a
/// sibling list is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavNode {
    /// Display label.
    pub label: String,
    /// Link target (page URL, possibly with an anchor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Sub-navigation.
    #[serde(skip_serializing_if = "Children::is_leaf")]
    pub children: Children,
}

impl NavNode {
    /// Create a leaf entry without a target.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
            children: Children::Leaf,
        }
    }

    /// Set the link target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set inline children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NavNode>) -> Self {
        self.children = Children::Inline(children);
        self
    }

    /// Set an external sub-index reference.
    #[must_use]
    pub fn with_children_ref(mut self, name: impl Into<String>) -> Self {
        self.children = Children::External(name.into());
        self
    }

    /// Whether this entry has no sub-navigation.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_leaf()
    }

    /// Whether this entry expands into sub-navigation, inline or external.
    #[must_use]
    pub fn is_grouping(&self) -> bool {
        !self.children.is_leaf()
    }

    /// Number of entries in this subtree, counting this one.
    ///
    /// An external reference counts as the single referencing entry;
    /// the referenced script's entries belong to its own tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .nodes()
            .iter()
            .map(NavNode::node_count)
            .sum::<usize>()
    }

    /// Depth-first traversal of this subtree in display order.
    ///
    /// Yields `(entry, depth)` with this entry at depth 0.
    #[must_use]
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst::new(std::slice::from_ref(self))
    }

    /// Descend through inline children by exact labels.
    ///
    /// An empty path returns this entry.
    #[must_use]
    pub fn find(&self, path: &[&str]) -> Option<&NavNode> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };
        self.children
            .nodes()
            .iter()
            .find(|child| child.label == *first)
            .and_then(|child| child.find(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_leaf_without_target() {
        let node = NavNode::new("Guide");

        assert_eq!(node.label, "Guide");
        assert_eq!(node.target, None);
        assert!(node.is_leaf());
        assert!(!node.is_grouping());
    }

    #[test]
    fn test_with_target_sets_target() {
        let node = NavNode::new("Guide").with_target("guide.html");

        assert_eq!(node.target.as_deref(), Some("guide.html"));
    }

    #[test]
    fn test_with_children_makes_grouping() {
        let node = NavNode::new("Parent").with_children(vec![NavNode::new("Child")]);

        assert!(node.is_grouping());
        assert_eq!(node.children.nodes().len(), 1);
        assert_eq!(node.children.nodes()[0].label, "Child");
    }

    #[test]
    fn test_with_children_ref_makes_grouping() {
        let node = NavNode::new("Files").with_children_ref("files");

        assert!(node.is_grouping());
        assert!(node.children.nodes().is_empty());
        assert_eq!(node.children.external(), Some("files"));
    }

    #[test]
    fn test_node_count_counts_subtree() {
        let node = NavNode::new("A").with_children(vec![
            NavNode::new("B").with_children(vec![NavNode::new("C"), NavNode::new("D")]),
            NavNode::new("E"),
        ]);

        assert_eq!(node.node_count(), 5);
    }

    #[test]
    fn test_node_count_external_ref_counts_once() {
        let node = NavNode::new("Files").with_children_ref("files");

        assert_eq!(node.node_count(), 1);
    }

    #[test]
    fn test_find_by_label_path() {
        let node = NavNode::new("A")
            .with_children(vec![NavNode::new("B").with_children(vec![NavNode::new("C")])]);

        assert_eq!(node.find(&[]).unwrap().label, "A");
        assert_eq!(node.find(&["B"]).unwrap().label, "B");
        assert_eq!(node.find(&["B", "C"]).unwrap().label, "C");
        assert!(node.find(&["C"]).is_none());
        assert!(node.find(&["B", "C", "D"]).is_none());
    }

    #[test]
    fn test_serialization_leaf_omits_empty_slots() {
        let node = NavNode::new("Guide").with_target("guide.html");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["label"], "Guide");
        assert_eq!(json["target"], "guide.html");
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_serialization_grouping_without_target() {
        let node = NavNode::new("Parent").with_children(vec![NavNode::new("Child")]);

        let json = serde_json::to_value(&node).unwrap();

        assert!(json.get("target").is_none());
        assert!(json["children"].is_array());
        assert_eq!(json["children"][0]["label"], "Child");
    }

    #[test]
    fn test_serialization_external_ref_as_string() {
        let node = NavNode::new("Files")
            .with_target("files.html")
            .with_children_ref("files");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["children"], "files");
    }
}
