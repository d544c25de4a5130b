//! Navigation tree model.
//!
//! A documentation navigation index is an ordered tree of entries, each
//! carrying a display label, an optional link target, and optional
//! children. [`NavNode`] models one entry; [`Children`] models the three
//! observed shapes of the child slot: none, an inline ordered list, or a
//! reference to an external sub-index kept in a sibling script.
//!
//! Trees are built wholesale by a loader and never mutated in place:
//! the generator that produces index files replaces them entirely on
//! every documentation build.
//!
//! # Example
//!
//! ```
//! use doxnav_tree::NavNode;
//!
//! let node = NavNode::new("RTL Verification")
//!     .with_target("index.html#verification")
//!     .with_children(vec![NavNode::new("Simulation").with_target("sim.html")]);
//!
//! assert!(node.is_grouping());
//! assert_eq!(node.node_count(), 2);
//! ```

mod iter;
mod node;

pub use iter::{DepthFirst, walk};
pub use node::{Children, NavNode};
