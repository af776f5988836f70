//! Streaming decoder for OpenStreetMap map data documents.
//!
//! The decoder recognises `bounds`, `node`, `way` and `relation` elements and
//! their `tag`, `nd` and `member` children. Every other element, including
//! the `osm` root, is skipped. Values are built through an
//! [`ElementFactory`] and handed to a [`MapDataHandler`] as soon as their
//! closing tag is read; nothing is buffered beyond the element that is
//! currently open.

use std::io::BufRead;

use log::debug;
use osmxml_core::{ElementFactory, MapDataHandler, OsmElementFactory};

use crate::{ParseError, XmlEvent, XmlEventReader};

mod session;

use session::Session;

/// Counts reported after a successful parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of `bounds` elements emitted.
    pub bounding_boxes: usize,
    /// Number of nodes emitted.
    pub nodes: usize,
    /// Number of ways emitted.
    pub ways: usize,
    /// Number of relations emitted.
    pub relations: usize,
    /// Number of distinct changesets referenced.
    pub changesets: usize,
}

impl ParseStats {
    /// Total number of nodes, ways and relations.
    #[must_use]
    pub const fn elements(&self) -> usize {
        self.nodes + self.ways + self.relations
    }
}

/// Decodes map data into a handler using a chosen factory.
///
/// Each call to [`MapDataParser::parse`] is an independent session with its
/// own changeset cache. The handler persists across calls.
///
/// # Examples
///
/// ```
/// use osmxml_core::{ListHandler, MapData, OsmElementFactory};
/// use osmxml_data::MapDataParser;
///
/// # fn main() -> Result<(), osmxml_data::ParseError> {
/// let xml = br#"<osm><node id="1" lat="51.5" lon="-0.1"/><way id="2"><nd ref="1"/></way></osm>"#;
/// let mut parser = MapDataParser::new(ListHandler::<MapData>::new(), OsmElementFactory);
/// let stats = parser.parse(&xml[..])?;
///
/// assert_eq!(stats.elements(), 2);
/// assert_eq!(parser.into_handler().into_items().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MapDataParser<H, F = OsmElementFactory> {
    handler: H,
    factory: F,
}

impl<H, F> MapDataParser<H, F> {
    /// Create a parser emitting values built by `factory` into `handler`.
    #[must_use]
    pub const fn new(handler: H, factory: F) -> Self {
        Self { handler, factory }
    }

    /// Borrow the handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Consume the parser and return the handler.
    #[must_use]
    pub fn into_handler(self) -> H {
        self.handler
    }
}

impl<H, F> MapDataParser<H, F>
where
    F: ElementFactory,
    H: MapDataHandler<F>,
{
    /// Decode one document from `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input cannot be read, is not
    /// well-formed XML, lacks a required attribute, carries an attribute that
    /// does not convert, nests top-level elements, or ends inside an element.
    /// Values emitted before the failure have already reached the handler.
    pub fn parse<R: BufRead>(&mut self, input: R) -> Result<ParseStats, ParseError> {
        let mut reader = XmlEventReader::new(input);
        let mut session = Session::new(&self.factory, &mut self.handler);
        loop {
            match reader.next_event()? {
                XmlEvent::StartElement => session.start(&reader)?,
                XmlEvent::EndElement => session.end(reader.name()),
                XmlEvent::EndOfDocument => break,
            }
        }
        let stats = session.finish()?;
        debug!(
            "decoded map data: {} bounds, {} nodes, {} ways, {} relations, {} changesets",
            stats.bounding_boxes, stats.nodes, stats.ways, stats.relations, stats.changesets
        );
        Ok(stats)
    }
}

/// Decode `input` into `handler` with the default model.
///
/// # Errors
///
/// See [`MapDataParser::parse`].
///
/// # Examples
///
/// ```
/// use osmxml_core::{ListHandler, Node, OsmElement};
/// use osmxml_data::parse_map_data;
///
/// # fn main() -> Result<(), osmxml_data::ParseError> {
/// let mut nodes = ListHandler::<Node>::new();
/// parse_map_data(&br#"<node id="5" version="2"/>"#[..], &mut nodes)?;
///
/// assert_eq!(nodes.items()[0].version(), 2);
/// assert!(nodes.items()[0].position().is_none());
/// # Ok(())
/// # }
/// ```
pub fn parse_map_data<R, H>(input: R, handler: &mut H) -> Result<ParseStats, ParseError>
where
    R: BufRead,
    H: MapDataHandler<OsmElementFactory> + ?Sized,
{
    MapDataParser::new(handler, OsmElementFactory).parse(input)
}
