use super::{ElementHeader, ElementKind, ElementMeta, OsmElement};
use crate::TrackedVec;

/// An ordered list of node references.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Way {
    meta: ElementMeta,
    node_ids: TrackedVec<i64>,
}

impl Way {
    /// Construct a way from its header and node references.
    #[must_use]
    pub fn new(header: ElementHeader, node_ids: Vec<i64>) -> Self {
        Self {
            meta: header.into(),
            node_ids: TrackedVec::new(node_ids),
        }
    }

    /// Referenced node ids in order. Duplicates are allowed.
    #[must_use]
    pub const fn node_ids(&self) -> &TrackedVec<i64> {
        &self.node_ids
    }

    /// Referenced node ids, for editing.
    pub const fn node_ids_mut(&mut self) -> &mut TrackedVec<i64> {
        &mut self.node_ids
    }

    /// A way is closed when it has at least three references and the first
    /// equals the last.
    ///
    /// # Examples
    ///
    /// ```
    /// use osmxml_core::{ElementHeader, Way};
    ///
    /// let ring = Way::new(ElementHeader::new(1), vec![1, 2, 3, 1]);
    /// let there_and_back = Way::new(ElementHeader::new(2), vec![1, 1]);
    /// assert!(ring.is_closed());
    /// assert!(!there_and_back.is_closed());
    /// ```
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.node_ids.len() >= 3 && self.node_ids.first() == self.node_ids.last()
    }
}

impl OsmElement for Way {
    fn kind(&self) -> ElementKind {
        ElementKind::Way
    }

    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ElementMeta {
        &mut self.meta
    }

    fn is_modified(&self) -> bool {
        self.node_ids.is_modified() || self.tags().is_modified()
    }
}
