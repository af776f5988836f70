//! Unit tests for the XML event reader.

use super::*;
use rstest::rstest;

fn reader(xml: &str) -> XmlEventReader<&[u8]> {
    XmlEventReader::new(xml.as_bytes())
}

fn open(xml: &str) -> XmlEventReader<&[u8]> {
    let mut reader = reader(xml);
    assert_eq!(
        reader.next_event().expect("first event"),
        XmlEvent::StartElement
    );
    reader
}

#[rstest]
fn self_closing_tags_yield_start_and_end() {
    let mut reader = reader(r#"<?xml version="1.0"?><!-- note --><osm><nd ref="1"/></osm>"#);
    let mut events = Vec::new();
    loop {
        let event = reader.next_event().expect("event");
        events.push((event, reader.name().to_owned()));
        if event == XmlEvent::EndOfDocument {
            break;
        }
    }

    assert_eq!(
        events,
        vec![
            (XmlEvent::StartElement, "osm".to_owned()),
            (XmlEvent::StartElement, "nd".to_owned()),
            (XmlEvent::EndElement, "nd".to_owned()),
            (XmlEvent::EndElement, "osm".to_owned()),
            (XmlEvent::EndOfDocument, "osm".to_owned()),
        ]
    );
}

#[rstest]
fn attributes_are_unescaped() {
    let reader = open(r#"<tag k="name" v="Fish &amp; Chips &lt;3"/>"#);
    assert_eq!(reader.attribute("k"), Some("name"));
    assert_eq!(reader.attribute("v"), Some("Fish & Chips <3"));
    assert_eq!(reader.attribute("x"), None);
}

#[rstest]
fn utf8_attributes_survive() {
    let reader = open(r#"<tag k="name:de" v="Öffentliche Bücherei ✓"/>"#);
    assert_eq!(reader.attribute("v"), Some("Öffentliche Bücherei ✓"));
}

#[rstest]
#[case("true", Some(true))]
#[case("TRUE", Some(true))]
#[case("False", Some(false))]
fn booleans_ignore_case(#[case] raw: &str, #[case] expected: Option<bool>) {
    let xml = format!(r#"<node visible="{raw}"/>"#);
    let reader = open(&xml);
    assert_eq!(reader.boolean_attribute("visible").expect("valid"), expected);
}

#[rstest]
fn malformed_boolean_is_rejected() {
    let reader = open(r#"<node visible="yes"/>"#);
    let err = reader.boolean_attribute("visible").expect_err("invalid");
    assert!(matches!(
        err,
        ParseError::InvalidAttribute { ref attribute, ref value, .. }
            if attribute == "visible" && value == "yes"
    ));
    assert!(err.is_malformed_input());
}

#[rstest]
fn numbers_are_typed() {
    let reader = open(r#"<node id="-42" version="7" lat="51.7400523" lon="-0.5"/>"#);
    assert_eq!(reader.long_attribute("id").expect("id"), Some(-42));
    assert_eq!(reader.int_attribute("version").expect("version"), Some(7));
    assert_eq!(
        reader.required_double_attribute("lat").expect("lat"),
        51.740_052_3
    );
    assert_eq!(reader.double_attribute("lon").expect("lon"), Some(-0.5));
    assert_eq!(reader.double_attribute("ele").expect("ele"), None);
}

#[rstest]
#[case(r#"<node id="abc"/>"#, "id")]
#[case(r#"<node id="1.5"/>"#, "id")]
#[case(r#"<node id="99999999999999999999"/>"#, "id")]
fn malformed_longs_are_rejected(#[case] xml: &str, #[case] attribute: &str) {
    let reader = open(xml);
    let err = reader.long_attribute(attribute).expect_err("invalid");
    assert!(matches!(err, ParseError::InvalidAttribute { .. }));
}

#[rstest]
fn version_out_of_i32_range_is_rejected() {
    let reader = open(r#"<node version="4294967296"/>"#);
    assert!(reader.int_attribute("version").is_err());
}

#[rstest]
fn required_attributes_report_the_element() {
    let reader = open("<node/>");
    let err = reader.required_long_attribute("id").expect_err("missing");
    assert!(matches!(
        err,
        ParseError::MissingAttribute { ref element, ref attribute }
            if element == "node" && attribute == "id"
    ));
    assert_eq!(err.to_string(), "<node> is missing required attribute `id`");
}

#[rstest]
#[case("2012-09-27T11:45:30Z", 1_348_746_330)]
#[case("2012-09-27T13:45:30+02:00", 1_348_746_330)]
fn timestamps_normalise_to_utc(#[case] raw: &str, #[case] epoch: i64) {
    let xml = format!(r#"<node timestamp="{raw}"/>"#);
    let reader = open(&xml);
    let timestamp = reader
        .timestamp_attribute("timestamp")
        .expect("valid")
        .expect("present");
    assert_eq!(timestamp.timestamp(), epoch);
}

#[rstest]
fn malformed_timestamp_is_rejected() {
    let reader = open(r#"<node timestamp="yesterday"/>"#);
    assert!(reader.timestamp_attribute("timestamp").is_err());
}

#[rstest]
fn text_accumulates_until_the_end_tag() {
    let mut reader = reader("<description>Morning &amp; <![CDATA[<run>]]></description>");
    assert_eq!(reader.next_event().expect("start"), XmlEvent::StartElement);
    assert_eq!(reader.next_event().expect("end"), XmlEvent::EndElement);
    assert_eq!(reader.text(), "Morning & <run>");
}

#[rstest]
fn mismatched_end_tag_is_an_xml_error() {
    let mut reader = reader("<osm><node></way></osm>");
    let result = (0..4).try_for_each(|_| reader.next_event().map(|_| ()));
    assert!(matches!(result, Err(ParseError::Xml { .. })));
}

#[rstest]
fn debug_output_describes_the_current_element() {
    let reader = open(r#"<node id="7">"#);
    let rendered = format!("{reader:?}");
    assert!(rendered.starts_with("XmlEventReader"));
    assert!(rendered.contains(r#"name: "node""#));
    assert!(rendered.contains(r#"("id", "7")"#));
    assert!(rendered.contains("position: "));
}
