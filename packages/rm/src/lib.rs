//! CliniRec Reference Model
//!
//! A Rust implementation of the CliniRec clinical record composition
//! structures. This library provides:
//! - Tree nodes for heading structures (sections) and recorded content (entries)
//! - Structural path navigation over archetyped node trees
//! - Canonical path segment construction
//!
//! # Example
//!
//! ```
//! use clinirec_rm::{AddressableNode, Entry, Section};
//!
//! let systolic = Entry::new("at0003", "Systolic").unwrap();
//! let pressure = Section::new("at0002", "Blood pressure", Some(vec![systolic.into()])).unwrap();
//! let vitals = Section::new("at0001", "Vitals", Some(vec![pressure.into()])).unwrap();
//!
//! let found = vitals
//!     .item_at_path("/Vitals[at0001]/items/Blood pressure[at0002]/items/Systolic[at0003]")
//!     .unwrap();
//! assert_eq!(found.archetype_node_id(), "at0003");
//! ```

pub mod content;
pub mod error;
pub mod node;
pub mod path;
pub mod section;
pub mod types;

// Re-export commonly used items
pub use content::{ContentItem, Entry, EntryBuilder};
pub use error::{Result, RmError};
pub use node::AddressableNode;
pub use path::{local_segment, node_segment, NodePathBuilder, ITEMS_ATTRIBUTE, ROOT, SEPARATOR};
pub use section::{Section, SectionBuilder};
pub use types::{ArchetypeDetails, Link, ObjectId, SourceAudit};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        // Verify re-exports work
        let _id = ObjectId::new("n1");
        let _err = RmError::InvalidPath("p".to_string());
        let _segment = node_segment("Vitals", "at0001");
    }
}
