//! Streaming XML cursor with typed attribute access.
//!
//! [`XmlEventReader`] is the only place that talks to `quick-xml`. It reduces
//! the document to start/end events and keeps just enough state to answer
//! questions about the element that produced the latest event: its name, its
//! attributes and the text read since it opened.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::ParseError;

/// Structural event reported by [`XmlEventReader::next_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlEvent {
    /// An element opened. Self-closing tags produce a start and an end.
    StartElement,
    /// An element closed.
    EndElement,
    /// The input is exhausted.
    EndOfDocument,
}

/// Pull-style reader exposing one element at a time.
///
/// # Examples
///
/// ```
/// use osmxml_data::{XmlEvent, XmlEventReader};
///
/// # fn main() -> Result<(), osmxml_data::ParseError> {
/// let mut reader = XmlEventReader::new(&br#"<nd ref="246773324"/>"#[..]);
/// assert_eq!(reader.next_event()?, XmlEvent::StartElement);
/// assert_eq!(reader.name(), "nd");
/// assert_eq!(reader.long_attribute("ref")?, Some(246_773_324));
/// assert_eq!(reader.long_attribute("missing")?, None);
/// assert_eq!(reader.next_event()?, XmlEvent::EndElement);
/// assert_eq!(reader.next_event()?, XmlEvent::EndOfDocument);
/// # Ok(())
/// # }
/// ```
pub struct XmlEventReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
}

impl<R> fmt::Debug for XmlEventReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlEventReader")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("text", &self.text)
            .field("position", &self.reader.buffer_position())
            .finish_non_exhaustive()
    }
}

impl<R: BufRead> XmlEventReader<R> {
    /// Wrap a buffered byte stream.
    #[must_use]
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.expand_empty_elements(true);
        Self {
            reader,
            buf: Vec::new(),
            name: String::new(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    /// Advance to the next start or end event.
    ///
    /// Declarations, comments, processing instructions and doctypes are
    /// skipped. Text is accumulated and exposed through [`Self::text`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Xml`] when the stream cannot be read or is not
    /// well-formed, and [`ParseError::Attribute`] when an opening tag carries
    /// an attribute that cannot be decoded.
    pub fn next_event(&mut self) -> Result<XmlEvent, ParseError> {
        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|source| ParseError::Xml {
                    position: self.reader.buffer_position(),
                    source,
                })?;
            match event {
                Event::Start(start) => {
                    self.name = decode(&self.reader, start.name().as_ref())?;
                    self.attributes.clear();
                    self.text.clear();
                    for raw in start.attributes() {
                        let attribute = raw.map_err(|err| ParseError::Attribute {
                            element: self.name.clone(),
                            source: err.into(),
                        })?;
                        let pair = self
                            .reader
                            .decoder()
                            .decode(attribute.key.as_ref())
                            .and_then(|key| {
                                attribute
                                    .decode_and_unescape_value(&self.reader)
                                    .map(|value| (key.into_owned(), value.into_owned()))
                            })
                            .map_err(|source| ParseError::Attribute {
                                element: self.name.clone(),
                                source,
                            })?;
                        self.attributes.push(pair);
                    }
                    return Ok(XmlEvent::StartElement);
                }
                Event::End(end) => {
                    self.name = decode(&self.reader, end.name().as_ref())?;
                    self.attributes.clear();
                    return Ok(XmlEvent::EndElement);
                }
                Event::Text(text) => {
                    let unescaped = text.unescape().map_err(|source| ParseError::Xml {
                        position: self.reader.buffer_position(),
                        source,
                    })?;
                    self.text.push_str(&unescaped);
                }
                Event::CData(cdata) => {
                    let raw = decode(&self.reader, &cdata)?;
                    self.text.push_str(&raw);
                }
                Event::Eof => return Ok(XmlEvent::EndOfDocument),
                Event::Empty(_)
                | Event::Decl(_)
                | Event::PI(_)
                | Event::Comment(_)
                | Event::DocType(_) => {}
            }
        }
    }

    /// Byte offset reached in the input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.reader.buffer_position()
    }
}

impl<R> XmlEventReader<R> {
    /// Name of the element behind the latest event.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text read since the current element opened. Only meaningful at the
    /// end event of elements that carry character data.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Unescaped value of attribute `name` on the latest start event.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`Self::attribute`], but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingAttribute`] when the attribute is absent.
    pub fn required_attribute(&self, name: &str) -> Result<&str, ParseError> {
        self.attribute(name)
            .ok_or_else(|| ParseError::missing(&self.name, name))
    }

    /// Parse attribute `name` with [`FromStr`]; `expected` describes the
    /// accepted values in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAttribute`] when the value does not parse.
    pub fn parsed_attribute<T: FromStr>(
        &self,
        name: &str,
        expected: &'static str,
    ) -> Result<Option<T>, ParseError> {
        self.attribute(name)
            .map(|raw| {
                raw.parse()
                    .map_err(|_| ParseError::invalid(&self.name, name, raw, expected))
            })
            .transpose()
    }

    /// Like [`Self::parsed_attribute`], but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingAttribute`] or
    /// [`ParseError::InvalidAttribute`].
    pub fn required_parsed_attribute<T: FromStr>(
        &self,
        name: &str,
        expected: &'static str,
    ) -> Result<T, ParseError> {
        self.parsed_attribute(name, expected)?
            .ok_or_else(|| ParseError::missing(&self.name, name))
    }

    /// Attribute `name` as a 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAttribute`] when present but not an
    /// integer.
    pub fn long_attribute(&self, name: &str) -> Result<Option<i64>, ParseError> {
        self.parsed_attribute(name, "a 64-bit integer")
    }

    /// Attribute `name` as a 64-bit integer that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingAttribute`] or
    /// [`ParseError::InvalidAttribute`].
    pub fn required_long_attribute(&self, name: &str) -> Result<i64, ParseError> {
        self.required_parsed_attribute(name, "a 64-bit integer")
    }

    /// Attribute `name` as a 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAttribute`] when present but not a
    /// 32-bit integer.
    pub fn int_attribute(&self, name: &str) -> Result<Option<i32>, ParseError> {
        self.parsed_attribute(name, "a 32-bit integer")
    }

    /// Attribute `name` as a double.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAttribute`] when present but not a
    /// number.
    pub fn double_attribute(&self, name: &str) -> Result<Option<f64>, ParseError> {
        self.parsed_attribute(name, "a decimal number")
    }

    /// Attribute `name` as a double that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingAttribute`] or
    /// [`ParseError::InvalidAttribute`].
    pub fn required_double_attribute(&self, name: &str) -> Result<f64, ParseError> {
        self.required_parsed_attribute(name, "a decimal number")
    }

    /// Attribute `name` as a boolean, accepting `true`/`false` in any ASCII
    /// case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAttribute`] for any other value.
    pub fn boolean_attribute(&self, name: &str) -> Result<Option<bool>, ParseError> {
        self.attribute(name)
            .map(|raw| {
                if raw.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if raw.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(ParseError::invalid(&self.name, name, raw, "true or false"))
                }
            })
            .transpose()
    }

    /// Attribute `name` as an RFC 3339 timestamp, normalised to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAttribute`] when present but not a
    /// timestamp.
    pub fn timestamp_attribute(&self, name: &str) -> Result<Option<DateTime<Utc>>, ParseError> {
        self.attribute(name)
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .map(|timestamp| timestamp.with_timezone(&Utc))
                    .map_err(|_| {
                        ParseError::invalid(&self.name, name, raw, "an RFC 3339 timestamp")
                    })
            })
            .transpose()
    }
}

fn decode<R>(reader: &Reader<R>, raw: &[u8]) -> Result<String, ParseError> {
    reader
        .decoder()
        .decode(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|source| ParseError::Xml {
            position: reader.buffer_position(),
            source,
        })
}

#[cfg(test)]
mod tests;
