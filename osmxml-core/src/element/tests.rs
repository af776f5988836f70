//! Unit tests for the element model.

use super::*;
use crate::{LatLon, User};
use rstest::{fixture, rstest};

#[fixture]
fn tagged_header() -> ElementHeader {
    let mut header = ElementHeader::new(22_918_072);
    header.version = 3;
    header.tags.insert("highway".into(), "footway".into());
    header.changeset = Some(Arc::new(Changeset::new(
        80_692,
        None,
        Some(Arc::new(User::new(12_503, "Yeah"))),
    )));
    header
}

#[rstest]
#[case(vec![], false)]
#[case(vec![1, 1], false)]
#[case(vec![1, 2, 1], true)]
#[case(vec![1, 2, 3], false)]
#[case(vec![7, 8, 9, 10, 7], true)]
fn closed_ways_need_three_refs_and_matching_ends(#[case] refs: Vec<i64>, #[case] closed: bool) {
    let way = Way::new(ElementHeader::new(1), refs);
    assert_eq!(way.is_closed(), closed);
}

#[rstest]
fn header_fields_are_exposed(tagged_header: ElementHeader) {
    let way = Way::new(tagged_header, vec![1, 2]);

    assert_eq!(way.id(), 22_918_072);
    assert_eq!(way.version(), 3);
    assert_eq!(way.kind(), ElementKind::Way);
    assert_eq!(
        way.tags().get("highway").map(String::as_str),
        Some("footway")
    );
    let changeset = way.changeset().expect("changeset attached");
    assert_eq!(changeset.id, 80_692);
    assert_eq!(
        changeset.user.as_ref().map(|user| user.display_name.as_str()),
        Some("Yeah")
    );
}

#[rstest]
fn node_modification_follows_tags(tagged_header: ElementHeader) {
    let mut node = Node::new(tagged_header, Some(LatLon::new(51.0, 0.1)));
    assert!(!node.is_modified());

    node.tags_mut().remove("highway");
    assert!(node.is_modified());
}

#[rstest]
fn way_modification_follows_node_ids(tagged_header: ElementHeader) {
    let mut way = Way::new(tagged_header, vec![10, 20]);
    assert!(!way.is_modified());

    way.node_ids_mut().push(30);
    assert!(way.is_modified());
    assert!(!way.tags().is_modified(), "tags were not touched");
}

#[rstest]
fn relation_modification_follows_members(tagged_header: ElementHeader) {
    let member = RelationMember::new(ElementKind::Way, 236_852_867, "outer");
    let mut relation = Relation::new(tagged_header, vec![member.clone()]);
    assert!(!relation.is_modified());

    relation.members_mut().clear();
    relation.members_mut().push(member);
    assert!(relation.is_modified());
}

#[rstest]
fn element_sum_type_delegates(tagged_header: ElementHeader) {
    let mut element = Element::from(Way::new(tagged_header, vec![1, 2, 3]));
    assert_eq!(element.kind(), ElementKind::Way);
    assert_eq!(element.id(), 22_918_072);
    assert!(!element.is_modified());

    if let Element::Way(way) = &mut element {
        way.node_ids_mut().truncate(2);
    }
    assert!(element.is_modified());
}

#[rstest]
#[case("node", ElementKind::Node)]
#[case("way", ElementKind::Way)]
#[case("relation", ElementKind::Relation)]
fn element_kinds_round_trip_their_names(#[case] name: &str, #[case] kind: ElementKind) {
    assert_eq!(name.parse::<ElementKind>(), Ok(kind));
    assert_eq!(kind.to_string(), name);
}

#[rstest]
#[case("Node")]
#[case("area")]
#[case("")]
fn unknown_kind_names_are_rejected(#[case] name: &str) {
    let err = name.parse::<ElementKind>().expect_err("unknown kind");
    assert_eq!(err, ElementKindError(name.to_owned()));
}
