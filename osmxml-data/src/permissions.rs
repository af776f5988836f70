//! Decoder for the list of permissions granted to the current token.

use std::io::BufRead;

use crate::{ParseError, XmlEvent, XmlEventReader};

/// Collect the `name` of every `permission` element, in document order.
///
/// # Errors
///
/// Returns [`ParseError`] when the input is not well-formed or a
/// `permission` lacks its `name`.
///
/// # Examples
///
/// ```
/// use osmxml_data::parse_permissions;
///
/// # fn main() -> Result<(), osmxml_data::ParseError> {
/// let xml = br#"<osm><permissions>
///     <permission name="allow_read_prefs"/>
///     <permission name="allow_write_api"/>
/// </permissions></osm>"#;
/// assert_eq!(
///     parse_permissions(&xml[..])?,
///     ["allow_read_prefs", "allow_write_api"]
/// );
/// # Ok(())
/// # }
/// ```
pub fn parse_permissions<R: BufRead>(input: R) -> Result<Vec<String>, ParseError> {
    let mut reader = XmlEventReader::new(input);
    let mut permissions = Vec::new();
    loop {
        match reader.next_event()? {
            XmlEvent::StartElement if reader.name() == "permission" => {
                permissions.push(reader.required_attribute("name")?.to_owned());
            }
            XmlEvent::EndOfDocument => return Ok(permissions),
            XmlEvent::StartElement | XmlEvent::EndElement => {}
        }
    }
}
