//! Supporting types for archetyped nodes
//!
//! These carry the identity, provenance and linkage attributes every node
//! in a composition tree shares. Identifier formatting and text
//! localization live in outer layers; the types here only fix the
//! semantic slots the navigation layer needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a node instance.
///
/// Kept as a newtype so signatures state intent; no formatting rules are
/// enforced at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Create an identifier from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The identifier as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Archetype metadata attached to a root point in a composition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeDetails {
    /// Identifier of the governing archetype definition
    pub archetype_id: String,
    /// Optional template the archetype was used through
    #[serde(default)]
    pub template_id: Option<String>,
    /// Reference model version the node was authored against
    pub rm_version: String,
}

/// Provenance record for content taken over from a feeder system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAudit {
    /// Identifier of the originating system
    pub system_id: String,
    /// Commit time in the originating system, when known
    #[serde(default)]
    pub committed_at: Option<DateTime<Utc>>,
    /// Version marker assigned by the originating system
    #[serde(default)]
    pub version_id: Option<String>,
}

/// Outbound link from one node to another part of the record.
///
/// Links form a set: duplicates are meaningless and order carries no
/// information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Why the link exists (e.g. "follow up", "caused by")
    pub meaning: String,
    /// Category of the relationship
    #[serde(rename = "type")]
    pub link_type: String,
    /// Target reference, owned by the identification layer
    pub target: String,
}
