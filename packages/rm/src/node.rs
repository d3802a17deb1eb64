//! Addressable node capability
//!
//! Every element of a composition tree can report its own canonical path
//! segment and attempt to resolve a path against itself. Resolution is a
//! fixed two-stage contract: the base stage answers paths addressing the
//! node itself, then node kinds with children continue into their child
//! collection. The stage order is part of the contract, so a base-level
//! match always wins over descending.

use crate::error::{Result, RmError};
use crate::path;
use crate::types::{ArchetypeDetails, Link, ObjectId, SourceAudit};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Capability shared by every element of a composition tree.
///
/// Object safe so mixed trees of headings and entries resolve through the
/// same protocol without the caller knowing concrete kinds.
pub trait AddressableNode: std::fmt::Debug {
    /// Instance identifier, when assigned.
    fn uid(&self) -> Option<&ObjectId>;

    /// Archetype node identifier. Never empty.
    fn archetype_node_id(&self) -> &str;

    /// Display name. Never empty.
    fn name(&self) -> &str;

    /// Archetype metadata, present on archetype root points.
    fn archetype_details(&self) -> Option<&ArchetypeDetails>;

    /// Provenance of content taken over from a feeder system.
    fn audit(&self) -> Option<&SourceAudit>;

    /// Outbound links from this node.
    fn links(&self) -> &HashSet<Link>;

    /// Canonical local path segment for this node, derived from its name
    /// and archetype node identifier.
    fn whole(&self) -> String {
        path::node_segment(self.name(), self.archetype_node_id())
    }

    /// Resolve a path relative to this node.
    ///
    /// # Errors
    ///
    /// Returns [`RmError::InvalidPath`] carrying the supplied path when no
    /// node matches.
    fn item_at_path(&self, path: &str) -> Result<&dyn AddressableNode>;

    /// Whether `path` resolves against this node.
    ///
    /// Pure and safe to call repeatedly or concurrently; a failed
    /// resolution is an expected outcome, not an error.
    fn valid_path(&self, path: &str) -> bool {
        self.item_at_path(path).is_ok()
    }
}

/// Attribute record shared by all node kinds.
///
/// Owned by each node and immutable after construction; deserialization
/// runs through the same field validation as the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct NodeCore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uid: Option<ObjectId>,
    #[serde(deserialize_with = "non_empty")]
    archetype_node_id: String,
    #[serde(deserialize_with = "non_empty")]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    archetype_details: Option<ArchetypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audit: Option<SourceAudit>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    links: HashSet<Link>,
}

impl NodeCore {
    pub(crate) fn new(
        archetype_node_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        Self::from_parts(
            None,
            archetype_node_id.into(),
            name.into(),
            None,
            None,
            HashSet::new(),
        )
    }

    pub(crate) fn from_parts(
        uid: Option<ObjectId>,
        archetype_node_id: String,
        name: String,
        archetype_details: Option<ArchetypeDetails>,
        audit: Option<SourceAudit>,
        links: HashSet<Link>,
    ) -> Result<Self> {
        if archetype_node_id.is_empty() {
            return Err(RmError::InvalidStructure(
                "archetype node id must not be empty".to_string(),
            ));
        }
        if name.is_empty() {
            return Err(RmError::InvalidStructure(
                "name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            uid,
            archetype_node_id,
            name,
            archetype_details,
            audit,
            links,
        })
    }

    pub(crate) fn uid(&self) -> Option<&ObjectId> {
        self.uid.as_ref()
    }

    pub(crate) fn archetype_node_id(&self) -> &str {
        &self.archetype_node_id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn archetype_details(&self) -> Option<&ArchetypeDetails> {
        self.archetype_details.as_ref()
    }

    pub(crate) fn audit(&self) -> Option<&SourceAudit> {
        self.audit.as_ref()
    }

    pub(crate) fn links(&self) -> &HashSet<Link> {
        &self.links
    }
}

fn non_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(serde::de::Error::custom("must not be empty"));
    }
    Ok(value)
}
