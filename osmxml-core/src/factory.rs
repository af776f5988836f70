//! Pluggable construction of map data values.
//!
//! The decoder never names a concrete element type. It hands fully parsed
//! fields to an [`ElementFactory`] and forwards whatever comes back to the
//! handler, so consumers can substitute their own representation.

use crate::{
    BoundingBox, ElementHeader, ElementKind, LatLon, Node, Relation, RelationMember, Way,
};

/// Builds the values emitted by the map data decoder.
pub trait ElementFactory {
    /// Type produced for `bounds`.
    type BoundingBox;
    /// Type produced for `node`.
    type Node;
    /// Type produced for `way`.
    type Way;
    /// Type produced for `relation`.
    type Relation;
    /// Type produced for each relation `member`.
    type RelationMember;

    /// Build a bounding box from its four edges.
    fn create_bounding_box(
        &self,
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
    ) -> Self::BoundingBox;

    /// Build a node.
    fn create_node(&self, header: ElementHeader, position: Option<LatLon>) -> Self::Node;

    /// Build a way from its ordered node references.
    fn create_way(&self, header: ElementHeader, node_ids: Vec<i64>) -> Self::Way;

    /// Build a relation from members previously made by
    /// [`create_relation_member`](Self::create_relation_member).
    fn create_relation(
        &self,
        header: ElementHeader,
        members: Vec<Self::RelationMember>,
    ) -> Self::Relation;

    /// Build a single relation member.
    fn create_relation_member(
        &self,
        kind: ElementKind,
        reference: i64,
        role: String,
    ) -> Self::RelationMember;
}

/// Factory for the crate's own model types.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsmElementFactory;

impl ElementFactory for OsmElementFactory {
    type BoundingBox = BoundingBox;
    type Node = Node;
    type Way = Way;
    type Relation = Relation;
    type RelationMember = RelationMember;

    fn create_bounding_box(
        &self,
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
    ) -> BoundingBox {
        BoundingBox::new(min_latitude, min_longitude, max_latitude, max_longitude)
    }

    fn create_node(&self, header: ElementHeader, position: Option<LatLon>) -> Node {
        Node::new(header, position)
    }

    fn create_way(&self, header: ElementHeader, node_ids: Vec<i64>) -> Way {
        Way::new(header, node_ids)
    }

    fn create_relation(&self, header: ElementHeader, members: Vec<RelationMember>) -> Relation {
        Relation::new(header, members)
    }

    fn create_relation_member(
        &self,
        kind: ElementKind,
        reference: i64,
        role: String,
    ) -> RelationMember {
        RelationMember::new(kind, reference, role)
    }
}
