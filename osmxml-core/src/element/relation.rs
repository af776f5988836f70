use super::{ElementHeader, ElementKind, ElementMeta, OsmElement};
use crate::TrackedVec;

/// One entry in a relation's member list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationMember {
    /// Kind of the referenced element.
    pub kind: ElementKind,
    /// Id of the referenced element.
    pub reference: i64,
    /// Role of the member within the relation. May be empty.
    pub role: String,
}

impl RelationMember {
    /// Construct a member.
    pub fn new(kind: ElementKind, reference: i64, role: impl Into<String>) -> Self {
        Self {
            kind,
            reference,
            role: role.into(),
        }
    }
}

/// A group of elements, each with a role.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    meta: ElementMeta,
    members: TrackedVec<RelationMember>,
}

impl Relation {
    /// Construct a relation from its header and members.
    #[must_use]
    pub fn new(header: ElementHeader, members: Vec<RelationMember>) -> Self {
        Self {
            meta: header.into(),
            members: TrackedVec::new(members),
        }
    }

    /// Members in source order.
    #[must_use]
    pub const fn members(&self) -> &TrackedVec<RelationMember> {
        &self.members
    }

    /// Members, for editing.
    pub const fn members_mut(&mut self) -> &mut TrackedVec<RelationMember> {
        &mut self.members
    }
}

impl OsmElement for Relation {
    fn kind(&self) -> ElementKind {
        ElementKind::Relation
    }

    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ElementMeta {
        &mut self.meta
    }

    fn is_modified(&self) -> bool {
        self.members.is_modified() || self.tags().is_modified()
    }
}
