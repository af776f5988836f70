//! `summarise` command: decode a map file and report what it contains.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use osmxml_core::{
    BoundingBox, LatLon, MapDataHandler, Node, OsmElement, OsmElementFactory, Relation, Way,
};
use osmxml_data::parse_map_data;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, ErrorKind, Write};

use crate::{ARG_MAP, CliError, ENV_SUMMARISE_MAP, fs};

/// CLI arguments for the `summarise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Decode an OpenStreetMap XML map data file and print a JSON \
                 summary of its contents. The path can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Summarise a map data file"
)]
#[ortho_config(prefix = "OSMXML")]
pub struct SummariseArgs {
    /// Path to the OpenStreetMap XML file.
    #[arg(long = ARG_MAP, value_name = "path")]
    #[serde(default)]
    pub map: Option<Utf8PathBuf>,
}

impl SummariseArgs {
    /// Layer configuration files and environment over the flags and resolve
    /// the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Configuration`] when layering fails and
    /// [`CliError::MissingArgument`] when no map path is configured.
    pub fn into_config(self) -> Result<SummariseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SummariseConfig::try_from(merged)
    }
}

/// Resolved `summarise` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummariseConfig {
    /// Path to the map data file.
    pub map: Utf8PathBuf,
}

impl SummariseConfig {
    /// Check that the map path names an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingSourceFile`] when nothing exists at the
    /// path, [`CliError::SourcePathNotFile`] when something other than a file
    /// does, and [`CliError::InspectSourcePath`] when the path cannot be
    /// inspected.
    pub fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.map, ARG_MAP)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SummariseArgs> for SummariseConfig {
    type Error = CliError;

    fn try_from(args: SummariseArgs) -> Result<Self, Self::Error> {
        let map = args.map.ok_or(CliError::MissingArgument {
            field: ARG_MAP,
            env: ENV_SUMMARISE_MAP,
        })?;
        Ok(Self { map })
    }
}

/// What a map data file contains.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MapSummary {
    /// The first `bounds` element, if any.
    pub bounds: Option<BoundingBox>,
    /// Number of nodes.
    pub nodes: usize,
    /// Number of ways.
    pub ways: usize,
    /// Number of relations.
    pub relations: usize,
    /// Nodes carrying a position.
    pub positioned_nodes: usize,
    /// Ways whose first and last node coincide.
    pub closed_ways: usize,
    /// Elements with at least one tag.
    pub tagged_elements: usize,
    /// Distinct changesets referenced.
    pub changesets: usize,
    /// Smallest box enclosing every node position.
    pub extent: Option<BoundingBox>,
}

impl MapSummary {
    fn record_tags(&mut self, element: &impl OsmElement) {
        if !element.tags().is_empty() {
            self.tagged_elements += 1;
        }
    }

    fn include(&mut self, position: LatLon) {
        let LatLon {
            latitude,
            longitude,
        } = position;
        self.extent = Some(match self.extent {
            None => BoundingBox::new(latitude, longitude, latitude, longitude),
            Some(extent) => BoundingBox::new(
                extent.min_latitude().min(latitude),
                extent.min_longitude().min(longitude),
                extent.max_latitude().max(latitude),
                extent.max_longitude().max(longitude),
            ),
        });
    }
}

impl MapDataHandler<OsmElementFactory> for MapSummary {
    fn on_bounding_box(&mut self, bounds: BoundingBox) {
        self.bounds.get_or_insert(bounds);
    }

    fn on_node(&mut self, node: Node) {
        self.record_tags(&node);
        if let Some(position) = node.position() {
            self.positioned_nodes += 1;
            self.include(position);
        }
    }

    fn on_way(&mut self, way: Way) {
        self.record_tags(&way);
        if way.is_closed() {
            self.closed_ways += 1;
        }
    }

    fn on_relation(&mut self, relation: Relation) {
        self.record_tags(&relation);
    }
}

/// Decode the map file at `path` into a [`MapSummary`].
///
/// # Errors
///
/// Returns [`CliError::OpenMap`] when the file cannot be opened and
/// [`CliError::ParseMap`] when it cannot be decoded.
pub fn summarise_map(path: &Utf8Path) -> Result<MapSummary, CliError> {
    let file = fs::open_utf8_file(path).map_err(|source| CliError::OpenMap {
        path: path.to_path_buf(),
        source,
    })?;
    let mut summary = MapSummary::default();
    let stats = parse_map_data(BufReader::new(file), &mut summary).map_err(|source| {
        CliError::ParseMap {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    })?;
    summary.nodes = stats.nodes;
    summary.ways = stats.ways;
    summary.relations = stats.relations;
    summary.changesets = stats.changesets;
    info!(
        "summarised {path}: {} elements across {} changesets",
        stats.elements(),
        stats.changesets
    );
    Ok(summary)
}

/// Write `summary` to `out` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns [`CliError::WriteSummary`] when serialisation or the write fails.
pub fn write_summary<W: Write>(summary: &MapSummary, out: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    Ok(())
}
