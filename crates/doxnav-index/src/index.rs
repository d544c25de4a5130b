//! Loaded index set.

use std::collections::BTreeMap;
use std::path::PathBuf;

use doxnav_script::NavScript;
use doxnav_tree::{Children, NavNode};

/// A navigation index as loaded from a directory: the main script plus
/// every external sub-index it references, directly or transitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavIndex {
    dir: PathBuf,
    filename: String,
    main: NavScript,
    externals: BTreeMap<String, NavScript>,
}

impl NavIndex {
    /// Assemble an index from already-parsed scripts.
    #[must_use]
    pub fn new(
        dir: PathBuf,
        filename: String,
        main: NavScript,
        externals: BTreeMap<String, NavScript>,
    ) -> Self {
        Self {
            dir,
            filename,
            main,
            externals,
        }
    }

    /// The main index script.
    #[must_use]
    pub fn main(&self) -> &NavScript {
        &self.main
    }

    /// Look up a loaded external sub-index by name.
    #[must_use]
    pub fn external(&self, name: &str) -> Option<&NavScript> {
        self.externals.get(name)
    }

    /// Every script with its file path, main first, externals in name
    /// order.
    pub fn scripts(&self) -> impl Iterator<Item = (PathBuf, &NavScript)> {
        std::iter::once((self.main_path(), &self.main)).chain(
            self.externals
                .values()
                .map(|script| (self.external_path(&script.name), script)),
        )
    }

    /// Total entry count across all scripts.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.scripts().map(|(_, script)| script.node_count()).sum()
    }

    /// Path of the main script file.
    #[must_use]
    pub fn main_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    /// Path of an external sub-index file. The viewer resolves a
    /// reference `<name>` to the sibling file `<name>.js`.
    #[must_use]
    pub fn external_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.js"))
    }

    /// The full tree with external references spliced in place.
    ///
    /// References to sub-indexes that were not loaded (and, defensively,
    /// cyclic ones) are left as-is.
    #[must_use]
    pub fn expanded(&self) -> Vec<NavNode> {
        let mut active = Vec::new();
        expand_nodes(&self.main.roots, &self.externals, &mut active)
    }
}

fn expand_nodes(
    nodes: &[NavNode],
    externals: &BTreeMap<String, NavScript>,
    active: &mut Vec<String>,
) -> Vec<NavNode> {
    nodes
        .iter()
        .map(|node| {
            let children = match &node.children {
                Children::Leaf => Children::Leaf,
                Children::Inline(inline) => {
                    Children::Inline(expand_nodes(inline, externals, active))
                }
                Children::External(name) => match externals.get(name) {
                    Some(script) if !active.iter().any(|seen| seen == name) => {
                        active.push(name.clone());
                        let inline = expand_nodes(&script.roots, externals, active);
                        active.pop();
                        Children::Inline(inline)
                    }
                    _ => Children::External(name.clone()),
                },
            };
            NavNode {
                label: node.label.clone(),
                target: node.target.clone(),
                children,
            }
        })
        .collect()
}
