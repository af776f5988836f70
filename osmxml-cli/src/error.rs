//! Error types emitted by the osmxml CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;

use osmxml_data::ParseError;
use thiserror::Error;

/// Errors emitted by the osmxml CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name of the option.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name of the option.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name of the option.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the map file failed.
    #[error("failed to open map data at {path:?}: {source}")]
    OpenMap {
        /// Path of the map file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The map file could not be decoded.
    #[error("failed to decode map data at {path:?}: {source}")]
    ParseMap {
        /// Path of the map file.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: Box<ParseError>,
    },
    /// Serialising or writing the summary failed.
    #[error("failed to write summary: {0}")]
    WriteSummary(#[from] serde_json::Error),
}
