//! Content items of a composition tree
//!
//! The set of content node kinds is closed by the domain: a child of a
//! heading is either a further heading or an entry holding recorded
//! content. [`ContentItem`] models that as a tagged variant rather than
//! open-ended subtyping, so resolvers can treat children uniformly.

use crate::error::{Result, RmError};
use crate::node::{AddressableNode, NodeCore};
use crate::path;
use crate::section::Section;
use crate::types::{ArchetypeDetails, Link, ObjectId, SourceAudit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A child of a composite heading node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentItem {
    /// Nested heading organizing further content
    Section(Section),
    /// Leaf node holding recorded content
    Entry(Entry),
}

impl ContentItem {
    /// This item as the shared addressable capability.
    pub fn as_node(&self) -> &dyn AddressableNode {
        match self {
            ContentItem::Section(section) => section,
            ContentItem::Entry(entry) => entry,
        }
    }

    /// Try to get this item as a section.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            ContentItem::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Try to get this item as an entry.
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            ContentItem::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

impl From<Section> for ContentItem {
    fn from(section: Section) -> Self {
        ContentItem::Section(section)
    }
}

impl From<Entry> for ContentItem {
    fn from(entry: Entry) -> Self {
        ContentItem::Entry(entry)
    }
}

impl AddressableNode for ContentItem {
    fn uid(&self) -> Option<&ObjectId> {
        self.as_node().uid()
    }

    fn archetype_node_id(&self) -> &str {
        self.as_node().archetype_node_id()
    }

    fn name(&self) -> &str {
        self.as_node().name()
    }

    fn archetype_details(&self) -> Option<&ArchetypeDetails> {
        self.as_node().archetype_details()
    }

    fn audit(&self) -> Option<&SourceAudit> {
        self.as_node().audit()
    }

    fn links(&self) -> &HashSet<Link> {
        self.as_node().links()
    }

    fn item_at_path(&self, path: &str) -> Result<&dyn AddressableNode> {
        self.as_node().item_at_path(path)
    }
}

/// Leaf content node.
///
/// Holds recorded content with no further nested headings; the navigation
/// layer treats it as opaque beyond its addressable attributes, so it
/// resolves only paths addressing itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(flatten)]
    core: NodeCore,
}

impl Entry {
    /// Construct an entry from its archetype node id and name.
    ///
    /// # Errors
    ///
    /// Returns [`RmError::InvalidStructure`] if either is empty.
    pub fn new(archetype_node_id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            core: NodeCore::new(archetype_node_id, name)?,
        })
    }

    /// Start building an entry with optional attributes.
    pub fn builder(
        archetype_node_id: impl Into<String>,
        name: impl Into<String>,
    ) -> EntryBuilder {
        EntryBuilder {
            uid: None,
            archetype_node_id: archetype_node_id.into(),
            name: name.into(),
            archetype_details: None,
            audit: None,
            links: HashSet::new(),
        }
    }
}

impl AddressableNode for Entry {
    fn uid(&self) -> Option<&ObjectId> {
        self.core.uid()
    }

    fn archetype_node_id(&self) -> &str {
        self.core.archetype_node_id()
    }

    fn name(&self) -> &str {
        self.core.name()
    }

    fn archetype_details(&self) -> Option<&ArchetypeDetails> {
        self.core.archetype_details()
    }

    fn audit(&self) -> Option<&SourceAudit> {
        self.core.audit()
    }

    fn links(&self) -> &HashSet<Link> {
        self.core.links()
    }

    fn item_at_path(&self, path: &str) -> Result<&dyn AddressableNode> {
        if path::addresses_node(path, &self.whole()) {
            return Ok(self);
        }
        Err(RmError::InvalidPath(path.to_string()))
    }
}

/// Builder for [`Entry`] covering the optional node attributes.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    uid: Option<ObjectId>,
    archetype_node_id: String,
    name: String,
    archetype_details: Option<ArchetypeDetails>,
    audit: Option<SourceAudit>,
    links: HashSet<Link>,
}

impl EntryBuilder {
    /// Set the instance identifier.
    pub fn with_uid(mut self, uid: ObjectId) -> Self {
        self.uid = Some(uid);
        self
    }

    /// Set the archetype metadata.
    pub fn with_archetype_details(mut self, details: ArchetypeDetails) -> Self {
        self.archetype_details = Some(details);
        self
    }

    /// Set the feeder system provenance.
    pub fn with_audit(mut self, audit: SourceAudit) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Set the outbound links.
    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links = links.into_iter().collect();
        self
    }

    /// Build the entry.
    ///
    /// # Errors
    ///
    /// Returns [`RmError::InvalidStructure`] if the archetype node id or
    /// name is empty.
    pub fn build(self) -> Result<Entry> {
        Ok(Entry {
            core: NodeCore::from_parts(
                self.uid,
                self.archetype_node_id,
                self.name,
                self.archetype_details,
                self.audit,
                self.links,
            )?,
        })
    }
}
