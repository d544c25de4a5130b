//! Depth-first tree traversal.

use crate::node::{Children, NavNode};

/// Depth-first iterator over a navigation forest.
///
/// Yields `(entry, depth)` in display order: each entry before its
/// children, siblings left to right. External references are yielded as
/// the referencing entry only.
pub struct DepthFirst<'a> {
    stack: Vec<(&'a NavNode, usize)>,
}

impl<'a> DepthFirst<'a> {
    pub(crate) fn new(roots: &'a [NavNode]) -> Self {
        let stack = roots.iter().rev().map(|node| (node, 0)).collect();
        Self { stack }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (&'a NavNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let Children::Inline(children) = &node.children {
            for child in children.iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }
        Some((node, depth))
    }
}

/// Depth-first traversal over a list of root entries.
#[must_use]
pub fn walk(roots: &[NavNode]) -> DepthFirst<'_> {
    DepthFirst::new(roots)
}
