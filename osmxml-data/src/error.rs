//! Error types produced while decoding API responses.

use thiserror::Error;

/// Errors produced while decoding an XML response.
///
/// Every variant is fatal to the parse call that raised it; no partial
/// results are returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The underlying stream could not be read or tokenised.
    #[error("failed to read XML at byte {position}: {source}")]
    Xml {
        /// Byte offset reached when the failure surfaced.
        position: usize,
        /// Source error from `quick-xml`, including I/O failures.
        #[source]
        source: quick_xml::Error,
    },
    /// An attribute on `element` could not be tokenised or unescaped.
    #[error("malformed attribute on <{element}>: {source}")]
    Attribute {
        /// Element carrying the attribute.
        element: String,
        /// Source error from `quick-xml`.
        #[source]
        source: quick_xml::Error,
    },
    /// A required attribute is absent.
    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        /// Element lacking the attribute.
        element: String,
        /// Name of the missing attribute.
        attribute: String,
    },
    /// An attribute is present but cannot be converted to its expected type.
    #[error("<{element}> attribute `{attribute}` has invalid value {value:?}: expected {expected}")]
    InvalidAttribute {
        /// Element carrying the attribute.
        element: String,
        /// Name of the offending attribute.
        attribute: String,
        /// Raw attribute value.
        value: String,
        /// Human-readable description of the accepted values.
        expected: &'static str,
    },
    /// A top-level element was opened inside another one.
    #[error("<{element}> cannot appear inside <{parent}>")]
    UnexpectedElement {
        /// Element that was opened.
        element: &'static str,
        /// Element that was still open.
        parent: &'static str,
    },
    /// The input ended while an element was still open.
    #[error("input ended inside <{element}>")]
    Truncated {
        /// Element that was still open.
        element: &'static str,
    },
}

impl ParseError {
    /// Report whether the error stems from a missing or unconvertible
    /// attribute, as opposed to a broken or truncated stream.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MissingAttribute { .. }
                | Self::InvalidAttribute { .. }
                | Self::UnexpectedElement { .. }
        )
    }

    pub(crate) fn missing(element: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            element: element.to_owned(),
            attribute: attribute.to_owned(),
        }
    }

    pub(crate) fn invalid(
        element: &str,
        attribute: &str,
        value: &str,
        expected: &'static str,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.to_owned(),
            attribute: attribute.to_owned(),
            value: value.to_owned(),
            expected,
        }
    }
}
