//! Core model types for OpenStreetMap map data.
//!
//! Responsibilities:
//! - Define the element model (nodes, ways, relations) and bounding boxes.
//! - Track local edits through mutation-aware collections.
//! - Declare the factory and handler seams the decoder is written against.
//!
//! Boundaries:
//! - No XML or I/O here; decoding lives in `osmxml-data`.
//!
//! Invariants:
//! - A changeset seen several times in one document is one shared [`Arc`]
//!   handle; identity is checked with [`Arc::ptr_eq`].
//! - Modification flags are one-way.
//!
//! [`Arc`]: std::sync::Arc
//! [`Arc::ptr_eq`]: std::sync::Arc::ptr_eq
#![forbid(unsafe_code)]

mod changeset;
mod element;
mod factory;
mod geometry;
mod handler;
mod trace;
mod tracked;

pub use changeset::{Changeset, User};
pub use element::{
    Element, ElementHeader, ElementKind, ElementKindError, ElementMeta, Node, OsmElement,
    Relation, RelationMember, Tags, UNKNOWN_VERSION, Way,
};
pub use factory::{ElementFactory, OsmElementFactory};
pub use geometry::{BoundingBox, LatLon};
pub use handler::{ListHandler, MapData, MapDataHandler, SingleHandler};
pub use trace::{GpsTraceDetails, Visibility, VisibilityError};
pub use tracked::{TrackedMap, TrackedVec};
