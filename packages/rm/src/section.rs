//! Composite heading node
//!
//! A [`Section`] organizes content items under a named heading and hosts
//! the path resolver for the subtree it roots.
//!
//! # Resolution Order
//!
//! A path is matched in a fixed order (first hit wins):
//! 1. The node itself (`/` or its own segment)
//! 2. The `/items` attribute marker, then the children in document order
//!
//! Child matching is first-match, not best-match: when two sibling
//! segments are prefixes of one another the earlier child shadows the
//! later one for descent paths, while an exact segment match always beats
//! prefix descent. Sibling segment uniqueness is not enforced at
//! construction.
//!
//! # Examples
//!
//! ```
//! use clinirec_rm::{AddressableNode, Entry, Section};
//!
//! let pulse = Entry::new("at0004", "Pulse").unwrap();
//! let vitals = Section::new("at0001", "Vitals", Some(vec![pulse.into()])).unwrap();
//!
//! let found = vitals.item_at_path("/Vitals[at0001]/items/Pulse[at0004]").unwrap();
//! assert_eq!(found.archetype_node_id(), "at0004");
//! assert!(!vitals.valid_path("garbage"));
//! ```

use crate::content::ContentItem;
use crate::error::{Result, RmError};
use crate::node::{AddressableNode, NodeCore};
use crate::path;
use crate::types::{ArchetypeDetails, Link, ObjectId, SourceAudit};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A heading in a heading structure. Immutable after construction.
///
/// The child sequence is either absent or non-empty; an empty-but-present
/// sequence is rejected on every construction path, deserialization
/// included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(flatten)]
    core: NodeCore,
    #[serde(
        default,
        deserialize_with = "items_field",
        skip_serializing_if = "Option::is_none"
    )]
    items: Option<Vec<ContentItem>>,
}

impl Section {
    /// Construct a section from its archetype node id, name and children.
    ///
    /// # Errors
    ///
    /// Returns [`RmError::InvalidStructure`] if the archetype node id or
    /// name is empty, or if `items` is present but empty.
    pub fn new(
        archetype_node_id: impl Into<String>,
        name: impl Into<String>,
        items: Option<Vec<ContentItem>>,
    ) -> Result<Self> {
        Self::with_core(NodeCore::new(archetype_node_id, name)?, items)
    }

    /// Start building a section with the full attribute set.
    pub fn builder(
        archetype_node_id: impl Into<String>,
        name: impl Into<String>,
    ) -> SectionBuilder {
        SectionBuilder {
            uid: None,
            archetype_node_id: archetype_node_id.into(),
            name: name.into(),
            archetype_details: None,
            audit: None,
            links: HashSet::new(),
            items: None,
        }
    }

    fn with_core(core: NodeCore, items: Option<Vec<ContentItem>>) -> Result<Self> {
        if let Some(items) = &items {
            if items.is_empty() {
                return Err(RmError::InvalidStructure("empty items".to_string()));
            }
        }
        Ok(Self { core, items })
    }

    /// Ordered content items under this heading, as a read-only view, or
    /// `None` if the section has no child collection.
    pub fn items(&self) -> Option<&[ContentItem]> {
        self.items.as_deref()
    }

    /// Path of a descendant relative to the root of this structure.
    ///
    /// The inverse of [`AddressableNode::item_at_path`] has no specified
    /// contract yet, so this always fails rather than guessing one.
    // TODO: implement once the reverse-mapping contract is specified upstream.
    pub fn path_of_item(&self, _item: &dyn AddressableNode) -> Result<String> {
        Err(RmError::Unimplemented("path_of_item"))
    }
}

impl AddressableNode for Section {
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
        let whole = self.whole();
        if path::addresses_node(path, &whole) {
            return Ok(self);
        }
        let remaining = path.strip_prefix(whole.as_str()).unwrap_or(path);
        let remaining = remaining
            .strip_prefix(path::ITEMS_ATTRIBUTE)
            .ok_or_else(|| RmError::InvalidPath(path.to_string()))?;
        // Both canonical spellings are accepted after the marker: the
        // child's full segment or its local form without the separator.
        let remaining = remaining
            .strip_prefix(path::SEPARATOR)
            .unwrap_or(remaining);
        for item in self.items.iter().flatten() {
            let child_whole = item.whole();
            let local = path::local_segment(&child_whole);
            if remaining == local {
                return Ok(item.as_node());
            }
            if let Some(suffix) = remaining.strip_prefix(local) {
                if item.valid_path(suffix) {
                    tracing::trace!(segment = %local, suffix = %suffix, "descending into child");
                    return item.item_at_path(suffix);
                }
            }
        }
        tracing::debug!(path = %path, node = %whole, "no child matched");
        Err(RmError::InvalidPath(path.to_string()))
    }
}

/// Builder for [`Section`] covering the full constructor contract.
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    uid: Option<ObjectId>,
    archetype_node_id: String,
    name: String,
    archetype_details: Option<ArchetypeDetails>,
    audit: Option<SourceAudit>,
    links: HashSet<Link>,
    items: Option<Vec<ContentItem>>,
}

impl SectionBuilder {
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

    /// Set the ordered content items.
    pub fn with_items(mut self, items: Vec<ContentItem>) -> Self {
        self.items = Some(items);
        self
    }

    /// Build the section.
    ///
    /// # Errors
    ///
    /// Returns [`RmError::InvalidStructure`] if the archetype node id or
    /// name is empty, or if the child sequence was set but is empty.
    pub fn build(self) -> Result<Section> {
        let core = NodeCore::from_parts(
            self.uid,
            self.archetype_node_id,
            self.name,
            self.archetype_details,
            self.audit,
            self.links,
        )?;
        Section::with_core(core, self.items)
    }
}

fn items_field<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<ContentItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<ContentItem>>::deserialize(deserializer)?;
    if matches!(&items, Some(items) if items.is_empty()) {
        return Err(serde::de::Error::custom("empty items"));
    }
    Ok(items)
}
