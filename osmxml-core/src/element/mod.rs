//! The addressable map entities: nodes, ways and relations.
//!
//! Each kind wraps a shared [`ElementMeta`] record plus its own payload.
//! [`Element`] is the sum type over the three kinds and [`OsmElement`] the
//! common read/edit surface.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{Changeset, TrackedMap};

mod node;
mod relation;
mod way;

pub use node::Node;
pub use relation::{Relation, RelationMember};
pub use way::Way;

/// Version reported for elements whose source omits the `version` attribute.
pub const UNKNOWN_VERSION: i32 = -1;

/// Mutation-aware tag mapping carried by every element.
pub type Tags = TrackedMap<String, String>;

/// The three element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ElementKind {
    /// A single point.
    Node,
    /// An ordered list of nodes.
    Way,
    /// A group of members with roles.
    Relation,
}

impl ElementKind {
    /// Name used for this kind in map data documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`ElementKind`] from an unknown name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown element kind `{0}` (expected node, way or relation)")]
pub struct ElementKindError(pub String);

impl FromStr for ElementKind {
    type Err = ElementKindError;

    /// Parse the exact lower-case names used in map data documents.
    ///
    /// # Examples
    ///
    /// ```
    /// use osmxml_core::ElementKind;
    ///
    /// assert_eq!("way".parse(), Ok(ElementKind::Way));
    /// assert!("area".parse::<ElementKind>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "node" => Ok(Self::Node),
            "way" => Ok(Self::Way),
            "relation" => Ok(Self::Relation),
            other => Err(ElementKindError(other.to_owned())),
        }
    }
}

/// Fields shared by all element kinds, exactly as read from a document.
///
/// Element factories receive this plain record and decide how to wrap it.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementHeader {
    /// Element identifier.
    pub id: i64,
    /// Element version, [`UNKNOWN_VERSION`] when absent.
    pub version: i32,
    /// Tags as read; a repeated key keeps the last value.
    pub tags: HashMap<String, String>,
    /// Shared changeset, when the element names one.
    pub changeset: Option<Arc<Changeset>>,
    /// Time of the last edit.
    pub edited_at: Option<DateTime<Utc>>,
}

impl ElementHeader {
    /// A header with only an id; every optional field is absent.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id,
            version: UNKNOWN_VERSION,
            tags: HashMap::new(),
            changeset: None,
            edited_at: None,
        }
    }
}

/// Common record stored inside every element.
///
/// Identity fields are read-only after construction; only the tags may be
/// edited, and doing so is tracked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementMeta {
    id: i64,
    version: i32,
    tags: Tags,
    changeset: Option<Arc<Changeset>>,
    edited_at: Option<DateTime<Utc>>,
}

impl From<ElementHeader> for ElementMeta {
    fn from(header: ElementHeader) -> Self {
        Self {
            id: header.id,
            version: header.version,
            tags: Tags::new(header.tags),
            changeset: header.changeset,
            edited_at: header.edited_at,
        }
    }
}

/// Read and edit surface shared by [`Node`], [`Way`], [`Relation`] and
/// [`Element`].
pub trait OsmElement {
    /// The kind of this element.
    fn kind(&self) -> ElementKind;

    /// Borrow the shared record.
    fn meta(&self) -> &ElementMeta;

    /// Borrow the shared record mutably.
    fn meta_mut(&mut self) -> &mut ElementMeta;

    /// Element identifier.
    fn id(&self) -> i64 {
        self.meta().id
    }

    /// Element version, [`UNKNOWN_VERSION`] when the source omitted it.
    fn version(&self) -> i32 {
        self.meta().version
    }

    /// Tags attached to the element.
    fn tags(&self) -> &Tags {
        &self.meta().tags
    }

    /// Tags attached to the element, for editing.
    fn tags_mut(&mut self) -> &mut Tags {
        &mut self.meta_mut().tags
    }

    /// Changeset that last touched the element.
    fn changeset(&self) -> Option<&Arc<Changeset>> {
        self.meta().changeset.as_ref()
    }

    /// Time of the last edit.
    fn edited_at(&self) -> Option<DateTime<Utc>> {
        self.meta().edited_at
    }

    /// Report whether any of the element's collections was mutated.
    fn is_modified(&self) -> bool {
        self.tags().is_modified()
    }
}

/// Any of the three element kinds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Element {
    /// A node.
    Node(Node),
    /// A way.
    Way(Way),
    /// A relation.
    Relation(Relation),
}

impl OsmElement for Element {
    fn kind(&self) -> ElementKind {
        match self {
            Self::Node(_) => ElementKind::Node,
            Self::Way(_) => ElementKind::Way,
            Self::Relation(_) => ElementKind::Relation,
        }
    }

    fn meta(&self) -> &ElementMeta {
        match self {
            Self::Node(node) => node.meta(),
            Self::Way(way) => way.meta(),
            Self::Relation(relation) => relation.meta(),
        }
    }

    fn meta_mut(&mut self) -> &mut ElementMeta {
        match self {
            Self::Node(node) => node.meta_mut(),
            Self::Way(way) => way.meta_mut(),
            Self::Relation(relation) => relation.meta_mut(),
        }
    }

    fn is_modified(&self) -> bool {
        match self {
            Self::Node(node) => node.is_modified(),
            Self::Way(way) => way.is_modified(),
            Self::Relation(relation) => relation.is_modified(),
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Way> for Element {
    fn from(way: Way) -> Self {
        Self::Way(way)
    }
}

impl From<Relation> for Element {
    fn from(relation: Relation) -> Self {
        Self::Relation(relation)
    }
}

#[cfg(test)]
mod tests;
