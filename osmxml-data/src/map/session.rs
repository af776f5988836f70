//! Per-document decoding state.

use std::collections::HashMap;
use std::mem;

use chrono::{DateTime, Utc};
use log::warn;
use osmxml_core::{
    ElementFactory, ElementHeader, ElementKind, LatLon, MapDataHandler, UNKNOWN_VERSION,
};

use super::ParseStats;
use crate::{ChangesetCache, ParseError, XmlEventReader};

/// Element names the decoder reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Name {
    Bounds,
    Node,
    Way,
    Relation,
    NodeRef,
    Member,
    Tag,
    Other,
}

impl Name {
    fn of(raw: &str) -> Self {
        match raw {
            "bounds" => Self::Bounds,
            "node" => Self::Node,
            "way" => Self::Way,
            "relation" => Self::Relation,
            "nd" => Self::NodeRef,
            "member" => Self::Member,
            "tag" => Self::Tag,
            _ => Self::Other,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Bounds => "bounds",
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
            Self::NodeRef => "nd",
            Self::Member => "member",
            Self::Tag => "tag",
            Self::Other => "",
        }
    }

    const fn is_top_level(self) -> bool {
        matches!(self, Self::Bounds | Self::Node | Self::Way | Self::Relation)
    }
}

/// Changeset fields read from an element, resolved at its end tag.
#[derive(Debug)]
struct ChangesetRef {
    id: i64,
    user_id: Option<i64>,
    user_name: Option<String>,
}

/// Header fields of the element currently open.
#[derive(Debug)]
struct PendingHeader {
    id: i64,
    version: i32,
    changeset: Option<ChangesetRef>,
    edited_at: Option<DateTime<Utc>>,
    tags: HashMap<String, String>,
}

impl PendingHeader {
    fn read<R>(reader: &XmlEventReader<R>) -> Result<Self, ParseError> {
        let id = reader.required_long_attribute("id")?;
        let version = reader.int_attribute("version")?.unwrap_or(UNKNOWN_VERSION);
        let edited_at = reader.timestamp_attribute("timestamp")?;
        let user_id = reader.long_attribute("uid")?;
        let user_name = reader.attribute("user").map(str::to_owned);
        let changeset = reader
            .long_attribute("changeset")?
            .map(|changeset_id| ChangesetRef {
                id: changeset_id,
                user_id,
                user_name,
            });
        Ok(Self {
            id,
            version,
            changeset,
            edited_at,
            tags: HashMap::new(),
        })
    }

    fn resolve(self, changesets: &mut ChangesetCache) -> ElementHeader {
        let changeset = self.changeset.map(|reference| {
            changesets.resolve(
                reference.id,
                self.edited_at,
                reference.user_id,
                reference.user_name.as_deref(),
            )
        });
        ElementHeader {
            id: self.id,
            version: self.version,
            tags: self.tags,
            changeset,
            edited_at: self.edited_at,
        }
    }
}

#[derive(Debug)]
enum State<M> {
    Idle,
    Node {
        header: PendingHeader,
        position: Option<LatLon>,
    },
    Way {
        header: PendingHeader,
        node_ids: Vec<i64>,
    },
    Relation {
        header: PendingHeader,
        members: Vec<M>,
    },
}

impl<M> State<M> {
    const fn open(&self) -> Option<Name> {
        match self {
            Self::Idle => None,
            Self::Node { .. } => Some(Name::Node),
            Self::Way { .. } => Some(Name::Way),
            Self::Relation { .. } => Some(Name::Relation),
        }
    }

    fn header_mut(&mut self) -> Option<&mut PendingHeader> {
        match self {
            Self::Idle => None,
            Self::Node { header, .. }
            | Self::Way { header, .. }
            | Self::Relation { header, .. } => Some(header),
        }
    }
}

/// One decode call: the open element, the changeset cache and the tallies.
pub(super) struct Session<'p, F: ElementFactory, H> {
    factory: &'p F,
    handler: &'p mut H,
    changesets: ChangesetCache,
    state: State<F::RelationMember>,
    stats: ParseStats,
}

impl<'p, F, H> Session<'p, F, H>
where
    F: ElementFactory,
    H: MapDataHandler<F>,
{
    pub(super) fn new(factory: &'p F, handler: &'p mut H) -> Self {
        Self {
            factory,
            handler,
            changesets: ChangesetCache::new(),
            state: State::Idle,
            stats: ParseStats::default(),
        }
    }

    pub(super) fn start<R>(&mut self, reader: &XmlEventReader<R>) -> Result<(), ParseError> {
        let name = Name::of(reader.name());
        if name.is_top_level()
            && let Some(parent) = self.state.open()
        {
            return Err(ParseError::UnexpectedElement {
                element: name.as_str(),
                parent: parent.as_str(),
            });
        }
        match name {
            Name::Bounds => self.emit_bounds(reader)?,
            Name::Node => {
                let header = PendingHeader::read(reader)?;
                let position = read_position(reader, header.id)?;
                self.state = State::Node { header, position };
            }
            Name::Way => {
                self.state = State::Way {
                    header: PendingHeader::read(reader)?,
                    node_ids: Vec::new(),
                };
            }
            Name::Relation => {
                self.state = State::Relation {
                    header: PendingHeader::read(reader)?,
                    members: Vec::new(),
                };
            }
            Name::NodeRef => {
                if let State::Way { node_ids, .. } = &mut self.state {
                    node_ids.push(reader.required_long_attribute("ref")?);
                }
            }
            Name::Member => {
                if let State::Relation { members, .. } = &mut self.state {
                    let kind: ElementKind =
                        reader.required_parsed_attribute("type", "node, way or relation")?;
                    let reference = reader.required_long_attribute("ref")?;
                    let role = reader.required_attribute("role")?.to_owned();
                    members.push(self.factory.create_relation_member(kind, reference, role));
                }
            }
            Name::Tag => {
                if let Some(header) = self.state.header_mut() {
                    let key = reader.required_attribute("k")?.to_owned();
                    let value = reader.required_attribute("v")?.to_owned();
                    header.tags.insert(key, value);
                }
            }
            Name::Other => {}
        }
        Ok(())
    }

    pub(super) fn end(&mut self, raw: &str) {
        let name = Name::of(raw);
        if self.state.open() != Some(name) {
            return;
        }
        match mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::Node { header, position } => {
                let resolved = header.resolve(&mut self.changesets);
                self.handler
                    .on_node(self.factory.create_node(resolved, position));
                self.stats.nodes += 1;
            }
            State::Way { header, node_ids } => {
                let resolved = header.resolve(&mut self.changesets);
                self.handler
                    .on_way(self.factory.create_way(resolved, node_ids));
                self.stats.ways += 1;
            }
            State::Relation { header, members } => {
                let resolved = header.resolve(&mut self.changesets);
                self.handler
                    .on_relation(self.factory.create_relation(resolved, members));
                self.stats.relations += 1;
            }
        }
    }

    pub(super) fn finish(self) -> Result<ParseStats, ParseError> {
        if let Some(open) = self.state.open() {
            return Err(ParseError::Truncated {
                element: open.as_str(),
            });
        }
        Ok(ParseStats {
            changesets: self.changesets.len(),
            ..self.stats
        })
    }

    fn emit_bounds<R>(&mut self, reader: &XmlEventReader<R>) -> Result<(), ParseError> {
        let bounds = self.factory.create_bounding_box(
            reader.required_double_attribute("minlat")?,
            reader.required_double_attribute("minlon")?,
            reader.required_double_attribute("maxlat")?,
            reader.required_double_attribute("maxlon")?,
        );
        self.handler.on_bounding_box(bounds);
        self.stats.bounding_boxes += 1;
        Ok(())
    }
}

fn read_position<R>(reader: &XmlEventReader<R>, id: i64) -> Result<Option<LatLon>, ParseError> {
    let lat = reader.double_attribute("lat")?;
    let lon = reader.double_attribute("lon")?;
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => Ok(Some(LatLon::new(latitude, longitude))),
        (None, None) => Ok(None),
        _ => {
            warn!("Ignored partial position on node {id}: lat={lat:?}, lon={lon:?}");
            Ok(None)
        }
    }
}
