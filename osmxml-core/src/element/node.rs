use super::{ElementHeader, ElementKind, ElementMeta, OsmElement};
use crate::LatLon;

/// A single point on the map.
///
/// Deleted nodes are served without coordinates, so the position is
/// optional.
///
/// # Examples
///
/// ```
/// use osmxml_core::{ElementHeader, LatLon, Node, OsmElement};
///
/// let node = Node::new(ElementHeader::new(5), Some(LatLon::new(51.5, -0.1)));
/// assert_eq!(node.id(), 5);
/// assert_eq!(node.version(), -1);
/// assert_eq!(node.position(), Some(LatLon::new(51.5, -0.1)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    meta: ElementMeta,
    position: Option<LatLon>,
}

impl Node {
    /// Construct a node from its header and optional position.
    #[must_use]
    pub fn new(header: ElementHeader, position: Option<LatLon>) -> Self {
        Self {
            meta: header.into(),
            position,
        }
    }

    /// Position of the node, absent for deleted nodes.
    #[must_use]
    pub const fn position(&self) -> Option<LatLon> {
        self.position
    }
}

impl OsmElement for Node {
    fn kind(&self) -> ElementKind {
        ElementKind::Node
    }

    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ElementMeta {
        &mut self.meta
    }
}
