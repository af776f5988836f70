//! Receivers for decoded map data.
//!
//! [`MapDataHandler`] is the callback surface the decoder drives. The
//! collectors here sit on top of it for the default model: [`ListHandler`]
//! keeps every value convertible to `T`, [`SingleHandler`] keeps the first.

use crate::{BoundingBox, Element, ElementFactory, Node, OsmElementFactory, Relation, Way};

/// Receives each value as soon as its closing tag has been read.
///
/// Callbacks arrive in document order, one per element.
pub trait MapDataHandler<F: ElementFactory + ?Sized> {
    /// Called for `bounds`.
    fn on_bounding_box(&mut self, bounds: F::BoundingBox);
    /// Called for each `node`.
    fn on_node(&mut self, node: F::Node);
    /// Called for each `way`.
    fn on_way(&mut self, way: F::Way);
    /// Called for each `relation`.
    fn on_relation(&mut self, relation: F::Relation);
}

impl<F, H> MapDataHandler<F> for &mut H
where
    F: ElementFactory + ?Sized,
    H: MapDataHandler<F> + ?Sized,
{
    fn on_bounding_box(&mut self, bounds: F::BoundingBox) {
        (**self).on_bounding_box(bounds);
    }

    fn on_node(&mut self, node: F::Node) {
        (**self).on_node(node);
    }

    fn on_way(&mut self, way: F::Way) {
        (**self).on_way(way);
    }

    fn on_relation(&mut self, relation: F::Relation) {
        (**self).on_relation(relation);
    }
}

/// Everything the decoder emits with [`OsmElementFactory`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum MapData {
    /// The `bounds` element.
    BoundingBox(BoundingBox),
    /// A node.
    Node(Node),
    /// A way.
    Way(Way),
    /// A relation.
    Relation(Relation),
}

impl From<BoundingBox> for MapData {
    fn from(bounds: BoundingBox) -> Self {
        Self::BoundingBox(bounds)
    }
}

impl From<Element> for MapData {
    fn from(element: Element) -> Self {
        match element {
            Element::Node(node) => Self::Node(node),
            Element::Way(way) => Self::Way(way),
            Element::Relation(relation) => Self::Relation(relation),
        }
    }
}

impl TryFrom<MapData> for Element {
    type Error = MapData;

    fn try_from(value: MapData) -> Result<Self, Self::Error> {
        match value {
            MapData::Node(node) => Ok(Self::Node(node)),
            MapData::Way(way) => Ok(Self::Way(way)),
            MapData::Relation(relation) => Ok(Self::Relation(relation)),
            other @ MapData::BoundingBox(_) => Err(other),
        }
    }
}

macro_rules! map_data_variant {
    ($variant:ident) => {
        impl From<$variant> for MapData {
            fn from(value: $variant) -> Self {
                Self::$variant(value)
            }
        }

        impl TryFrom<MapData> for $variant {
            type Error = MapData;

            fn try_from(value: MapData) -> Result<Self, Self::Error> {
                match value {
                    MapData::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

map_data_variant!(Node);
map_data_variant!(Way);
map_data_variant!(Relation);

impl TryFrom<MapData> for BoundingBox {
    type Error = MapData;

    fn try_from(value: MapData) -> Result<Self, Self::Error> {
        match value {
            MapData::BoundingBox(bounds) => Ok(bounds),
            other => Err(other),
        }
    }
}

/// Collects every emitted value that converts into `T`.
///
/// Use `ListHandler<MapData>` for everything, `ListHandler<Element>` for
/// nodes, ways and relations, or a concrete type for one kind only.
///
/// # Examples
///
/// ```
/// use osmxml_core::{
///     ElementHeader, ListHandler, MapDataHandler, Node, OsmElementFactory, Way,
/// };
///
/// let mut ways = ListHandler::<Way>::new();
/// MapDataHandler::<OsmElementFactory>::on_node(&mut ways, Node::new(ElementHeader::new(1), None));
/// MapDataHandler::<OsmElementFactory>::on_way(&mut ways, Way::new(ElementHeader::new(2), vec![1]));
/// assert_eq!(ways.items().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ListHandler<T> {
    items: Vec<T>,
}

impl<T> ListHandler<T> {
    /// An empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Values collected so far, in document order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the collector and return its values.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: TryFrom<MapData>> ListHandler<T> {
    fn offer(&mut self, value: MapData) {
        if let Ok(item) = T::try_from(value) {
            self.items.push(item);
        }
    }
}

impl<T> Default for ListHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TryFrom<MapData>> MapDataHandler<OsmElementFactory> for ListHandler<T> {
    fn on_bounding_box(&mut self, bounds: BoundingBox) {
        self.offer(bounds.into());
    }

    fn on_node(&mut self, node: Node) {
        self.offer(node.into());
    }

    fn on_way(&mut self, way: Way) {
        self.offer(way.into());
    }

    fn on_relation(&mut self, relation: Relation) {
        self.offer(relation.into());
    }
}

/// Keeps the first emitted value that converts into `T` and ignores the
/// rest.
#[derive(Debug, Clone)]
pub struct SingleHandler<T> {
    item: Option<T>,
}

impl<T> SingleHandler<T> {
    /// An empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { item: None }
    }

    /// The captured value, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// Consume the collector and return the captured value.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.item
    }
}

impl<T: TryFrom<MapData>> SingleHandler<T> {
    fn offer(&mut self, value: MapData) {
        if self.item.is_none() {
            self.item = T::try_from(value).ok();
        }
    }
}

impl<T> Default for SingleHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TryFrom<MapData>> MapDataHandler<OsmElementFactory> for SingleHandler<T> {
    fn on_bounding_box(&mut self, bounds: BoundingBox) {
        self.offer(bounds.into());
    }

    fn on_node(&mut self, node: Node) {
        self.offer(node.into());
    }

    fn on_way(&mut self, way: Way) {
        self.offer(way.into());
    }

    fn on_relation(&mut self, relation: Relation) {
        self.offer(relation.into());
    }
}
