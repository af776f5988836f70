//! Streaming decoders for OpenStreetMap XML API responses.
//!
//! Responsibilities:
//! - Read map data documents into the `osmxml-core` model in document order.
//! - Share changeset and author metadata across the elements of one document.
//! - Decode the smaller permissions and GPS trace listings.
//!
//! Boundaries:
//! - No transport, authentication or caching; callers supply a `BufRead`.
//! - Only [`XmlEventReader`] touches `quick-xml`.
//!
//! Invariants:
//! - Decoding is single-threaded and synchronous; handlers run inline.
//! - Any error aborts the whole parse call.
#![forbid(unsafe_code)]

mod changesets;
mod error;
mod map;
mod permissions;
mod traces;
mod xml;

pub use changesets::ChangesetCache;
pub use error::ParseError;
pub use map::{MapDataParser, ParseStats, parse_map_data};
pub use permissions::parse_permissions;
pub use traces::parse_gps_traces;
pub use xml::{XmlEvent, XmlEventReader};
