//! Decoder for GPS trace listings.
//!
//! Each `gpx_file` element becomes one [`GpsTraceDetails`], handed to the
//! caller's closure once the element closes. `description` and `tag`
//! children contribute their text.

use std::io::BufRead;

use log::warn;
use osmxml_core::{GpsTraceDetails, LatLon, Visibility};

use crate::{ParseError, XmlEvent, XmlEventReader};

const TRACE: &str = "gpx_file";

/// Decode a trace listing, calling `on_trace` for each trace in document
/// order. Returns the number of traces emitted.
///
/// # Errors
///
/// Returns [`ParseError`] when the input is not well-formed, a trace lacks
/// its `id` or `visibility`, an attribute does not convert, traces are
/// nested, or the input ends inside a trace.
///
/// # Examples
///
/// ```
/// use osmxml_core::Visibility;
/// use osmxml_data::parse_gps_traces;
///
/// # fn main() -> Result<(), osmxml_data::ParseError> {
/// let xml = br#"<osm>
///   <gpx_file id="836619" name="track.gpx" user="someone" visibility="trackable"
///             pending="false" timestamp="2008-06-02T09:54:44Z">
///     <description>Morning ride</description>
///     <tag>cycling</tag>
///   </gpx_file>
/// </osm>"#;
/// let mut traces = Vec::new();
/// parse_gps_traces(&xml[..], |trace| traces.push(trace))?;
///
/// assert_eq!(traces[0].visibility, Visibility::Trackable);
/// assert_eq!(traces[0].description.as_deref(), Some("Morning ride"));
/// # Ok(())
/// # }
/// ```
pub fn parse_gps_traces<R, F>(input: R, mut on_trace: F) -> Result<usize, ParseError>
where
    R: BufRead,
    F: FnMut(GpsTraceDetails),
{
    let mut reader = XmlEventReader::new(input);
    let mut current: Option<GpsTraceDetails> = None;
    let mut emitted = 0;
    loop {
        match reader.next_event()? {
            XmlEvent::StartElement if reader.name() == TRACE => {
                if current.is_some() {
                    return Err(ParseError::UnexpectedElement {
                        element: TRACE,
                        parent: TRACE,
                    });
                }
                current = Some(read_trace(&reader)?);
            }
            XmlEvent::StartElement => {}
            XmlEvent::EndElement => {
                let Some(trace) = current.as_mut() else {
                    continue;
                };
                match reader.name() {
                    "description" => trace.description = Some(reader.text().to_owned()),
                    "tag" => trace.tags.push(reader.text().to_owned()),
                    TRACE => {
                        if let Some(done) = current.take() {
                            on_trace(done);
                            emitted += 1;
                        }
                    }
                    _ => {}
                }
            }
            XmlEvent::EndOfDocument => {
                if current.is_some() {
                    return Err(ParseError::Truncated { element: TRACE });
                }
                return Ok(emitted);
            }
        }
    }
}

fn read_trace<R>(reader: &XmlEventReader<R>) -> Result<GpsTraceDetails, ParseError> {
    let id = reader.required_long_attribute("id")?;
    let visibility: Visibility = reader.required_parsed_attribute(
        "visibility",
        "private, trackable, public or identifiable",
    )?;
    let mut trace = GpsTraceDetails::new(id, visibility);
    trace.name = reader.attribute("name").map(str::to_owned);
    trace.user_name = reader.attribute("user").map(str::to_owned);
    trace.pending = reader.boolean_attribute("pending")?.unwrap_or(true);
    trace.created_at = reader.timestamp_attribute("timestamp")?;
    let lat = reader.double_attribute("lat")?;
    let lon = reader.double_attribute("lon")?;
    trace.position = match (lat, lon) {
        (Some(latitude), Some(longitude)) => Some(LatLon::new(latitude, longitude)),
        (None, None) => None,
        _ => {
            warn!("Ignored partial position on trace {id}: lat={lat:?}, lon={lon:?}");
            None
        }
    };
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(xml: &str) -> Result<Vec<GpsTraceDetails>, ParseError> {
        let mut traces = Vec::new();
        parse_gps_traces(xml.as_bytes(), |trace| traces.push(trace))?;
        Ok(traces)
    }

    #[rstest]
    fn full_trace_is_read() {
        let traces = collect(
            r#"<osm><gpx_file id="1" name="a.gpx" lat="52.5" lon="13.4" user="u"
                 visibility="IDENTIFIABLE" pending="False" timestamp="2008-06-02T09:54:44Z">
                 <description>Run &amp; walk</description>
                 <tag>run</tag><tag>berlin</tag>
               </gpx_file></osm>"#,
        )
        .expect("valid traces");

        let trace = &traces[0];
        assert_eq!(trace.id, 1);
        assert_eq!(trace.name.as_deref(), Some("a.gpx"));
        assert_eq!(trace.user_name.as_deref(), Some("u"));
        assert_eq!(trace.visibility, Visibility::Identifiable);
        assert!(!trace.pending);
        assert_eq!(trace.position, Some(LatLon::new(52.5, 13.4)));
        assert_eq!(
            trace.created_at.map(|at| at.timestamp()),
            Some(1_212_400_484)
        );
        assert_eq!(trace.description.as_deref(), Some("Run & walk"));
        assert_eq!(trace.tags, ["run", "berlin"]);
    }

    #[rstest]
    fn minimal_trace_uses_defaults() {
        let traces =
            collect(r#"<gpx_file id="2" visibility="private"/>"#).expect("valid traces");
        assert_eq!(traces, [GpsTraceDetails::new(2, Visibility::Private)]);
        assert!(traces[0].pending);
    }

    #[rstest]
    fn traces_arrive_in_order() {
        let traces = collect(
            r#"<osm><gpx_file id="3" visibility="public"/><gpx_file id="4" visibility="public"/></osm>"#,
        )
        .expect("valid traces");
        let ids: Vec<i64> = traces.iter().map(|trace| trace.id).collect();
        assert_eq!(ids, [3, 4]);
    }

    #[rstest]
    #[case(r#"<gpx_file visibility="public"/>"#)]
    #[case(r#"<gpx_file id="1"/>"#)]
    #[case(r#"<gpx_file id="1" visibility="friends"/>"#)]
    #[case(r#"<gpx_file id="1" visibility="public" pending="maybe"/>"#)]
    fn malformed_traces_are_rejected(#[case] xml: &str) {
        let err = collect(xml).expect_err("malformed trace");
        assert!(err.is_malformed_input(), "unexpected error: {err}");
    }

    #[rstest]
    fn nested_traces_are_rejected() {
        let err = collect(
            r#"<gpx_file id="1" visibility="public"><gpx_file id="2" visibility="public"/></gpx_file>"#,
        )
        .expect_err("nested trace");
        assert!(matches!(err, ParseError::UnexpectedElement { .. }));
    }
}
