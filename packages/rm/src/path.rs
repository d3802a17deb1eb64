//! Path segment grammar for composition trees
//!
//! Defines the canonical segment syntax nodes use to address each other
//! and a builder for assembling descent paths.
//!
//! # Segment Syntax
//!
//! 1. **Node segment**: `/{name}[{archetype_node_id}]`, e.g. `/Vitals[at0001]`
//! 2. **Attribute segment**: the fixed `/items` marker selecting a node's
//!    child collection
//! 3. **Root marker**: a lone `/` addressing a node itself
//!
//! The bracketed archetype predicate keeps every node segment distinct
//! from the bare attribute marker, so a child named `items` cannot be
//! confused with the child collection itself.
//!
//! # Examples
//!
//! ```
//! use clinirec_rm::{Entry, NodePathBuilder, Section};
//!
//! let entry = Entry::new("at0004", "Blood pressure").unwrap();
//! let section = Section::new("at0001", "Vitals", Some(vec![entry.into()])).unwrap();
//!
//! let items = section.items().unwrap();
//! let path = NodePathBuilder::new(&section).with_item(&items[0]).build();
//! assert_eq!(path, "/Vitals[at0001]/items/Blood pressure[at0004]");
//! ```

use crate::node::AddressableNode;

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Marker addressing a node itself
pub const ROOT: &str = "/";

/// Attribute segment selecting a node's child collection
pub const ITEMS_ATTRIBUTE: &str = "/items";

/// Build the canonical segment for a node from its name and archetype
/// node identifier.
pub fn node_segment(name: &str, archetype_node_id: &str) -> String {
    format!("{SEPARATOR}{name}[{archetype_node_id}]")
}

/// A node's segment without its leading separator, the form children are
/// matched by during resolution.
pub fn local_segment(whole: &str) -> &str {
    whole.strip_prefix(SEPARATOR).unwrap_or(whole)
}

/// Whether `path` addresses the node owning `whole` itself rather than
/// anything below it.
pub(crate) fn addresses_node(path: &str, whole: &str) -> bool {
    path == ROOT || path == whole
}

/// Builder for canonical descent paths through a composition tree.
///
/// Starts at a root node's segment and appends one `/items` hop per
/// child, producing paths in the form the resolver accepts.
#[derive(Debug, Clone)]
pub struct NodePathBuilder {
    path: String,
}

impl NodePathBuilder {
    /// Start a path at the given root node.
    pub fn new(root: &dyn AddressableNode) -> Self {
        Self { path: root.whole() }
    }

    /// Descend into the child collection and select `item`.
    pub fn with_item(mut self, item: &dyn AddressableNode) -> Self {
        self.path.push_str(ITEMS_ATTRIBUTE);
        self.path.push_str(&item.whole());
        self
    }

    /// The assembled path string.
    pub fn build(self) -> String {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Entry;
    use crate::section::Section;

    // -------------------------------------------------------------------------
    // Segment Construction Tests
    // -------------------------------------------------------------------------

    mod segments {
        use super::*;

        #[test]
        fn test_node_segment_format() {
            assert_eq!(node_segment("Vitals", "at0001"), "/Vitals[at0001]");
        }

        #[test]
        fn test_node_segment_with_spaces() {
            assert_eq!(
                node_segment("Blood pressure", "at0004"),
                "/Blood pressure[at0004]"
            );
        }

        #[test]
        fn test_local_segment_strips_leading_separator() {
            assert_eq!(local_segment("/Vitals[at0001]"), "Vitals[at0001]");
        }

        #[test]
        fn test_local_segment_without_separator_unchanged() {
            assert_eq!(local_segment("Vitals[at0001]"), "Vitals[at0001]");
        }

        #[test]
        fn test_items_named_node_stays_distinct_from_marker() {
            let segment = node_segment("items", "at0009");
            assert_ne!(segment, ITEMS_ATTRIBUTE);
            assert!(segment.starts_with(ITEMS_ATTRIBUTE));
        }
    }

    // -------------------------------------------------------------------------
    // Self-Addressing Tests
    // -------------------------------------------------------------------------

    mod self_addressing {
        use super::*;

        #[test]
        fn test_root_marker_addresses_node() {
            assert!(addresses_node("/", "/Vitals[at0001]"));
        }

        #[test]
        fn test_whole_segment_addresses_node() {
            assert!(addresses_node("/Vitals[at0001]", "/Vitals[at0001]"));
        }

        #[test]
        fn test_other_paths_do_not_address_node() {
            assert!(!addresses_node("", "/Vitals[at0001]"));
            assert!(!addresses_node("/Other[at0002]", "/Vitals[at0001]"));
            assert!(!addresses_node("/Vitals[at0001]/items", "/Vitals[at0001]"));
        }
    }

    // -------------------------------------------------------------------------
    // NodePathBuilder Tests
    // -------------------------------------------------------------------------

    mod builder {
        use super::*;

        #[test]
        fn test_build_root_only() {
            let section = Section::new("at0001", "Vitals", None).unwrap();
            let path = NodePathBuilder::new(&section).build();
            assert_eq!(path, "/Vitals[at0001]");
        }

        #[test]
        fn test_build_one_hop() {
            let entry = Entry::new("at0004", "Pulse").unwrap();
            let section = Section::new("at0001", "Vitals", Some(vec![entry.into()])).unwrap();
            let items = section.items().unwrap();

            let path = NodePathBuilder::new(&section).with_item(&items[0]).build();
            assert_eq!(path, "/Vitals[at0001]/items/Pulse[at0004]");
        }

        #[test]
        fn test_build_two_hops() {
            let leaf = Entry::new("at0003", "Systolic").unwrap();
            let heading = Section::new("at0002", "Blood pressure", Some(vec![leaf.into()])).unwrap();
            let root = Section::new("at0001", "Vitals", Some(vec![heading.into()])).unwrap();

            let items = root.items().unwrap();
            let heading_ref = items[0].as_section().unwrap();
            let leaf_ref = &heading_ref.items().unwrap()[0];

            let path = NodePathBuilder::new(&root)
                .with_item(&items[0])
                .with_item(leaf_ref)
                .build();
            assert_eq!(
                path,
                "/Vitals[at0001]/items/Blood pressure[at0002]/items/Systolic[at0003]"
            );
        }
    }
}
