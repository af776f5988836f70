//! Facade crate for decoding OpenStreetMap XML API responses.
//!
//! This crate re-exports the element model from `osmxml-core` and the
//! streaming decoders from `osmxml-data`.
//!
//! ```
//! use osmxml::{ListHandler, Way, parse_map_data};
//!
//! # fn main() -> Result<(), osmxml::ParseError> {
//! let xml = br#"<osm><way id="7"><nd ref="1"/><nd ref="2"/></way></osm>"#;
//! let mut ways = ListHandler::<Way>::new();
//! parse_map_data(&xml[..], &mut ways)?;
//!
//! let way = &ways.items()[0];
//! assert_eq!(way.node_ids().as_slice(), &[1, 2]);
//! assert!(!way.is_closed());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use osmxml_core::{
    BoundingBox, Changeset, Element, ElementFactory, ElementHeader, ElementKind, ElementKindError,
    ElementMeta, GpsTraceDetails, LatLon, ListHandler, MapData, MapDataHandler, Node, OsmElement,
    OsmElementFactory, Relation, RelationMember, SingleHandler, Tags, TrackedMap, TrackedVec,
    UNKNOWN_VERSION, User, Visibility, VisibilityError, Way,
};

pub use osmxml_data::{
    ChangesetCache, MapDataParser, ParseError, ParseStats, XmlEvent, XmlEventReader,
    parse_gps_traces, parse_map_data, parse_permissions,
};
