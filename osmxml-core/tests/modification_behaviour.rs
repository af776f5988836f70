//! Behavioural tests for modification tracking on decoded elements.

use osmxml_core::{Element, ElementHeader, OsmElement, Way};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[fixture]
fn way() -> RefCell<Option<Way>> {
    RefCell::new(None)
}

fn with_way<T>(slot: &RefCell<Option<Way>>, f: impl FnOnce(&mut Way) -> T) -> T {
    let mut guard = slot.borrow_mut();
    f(guard.as_mut().expect("way prepared"))
}

#[given("a closed way with a name tag")]
fn closed_way(#[from(way)] slot: &RefCell<Option<Way>>) {
    let mut header = ElementHeader::new(10);
    header.version = 3;
    header.tags.insert("name".to_owned(), "Ring Road".to_owned());
    *slot.borrow_mut() = Some(Way::new(header, vec![1, 2, 3, 1]));
}

#[when("I read its tags and node ids")]
fn read_only(#[from(way)] slot: &RefCell<Option<Way>>) {
    with_way(slot, |way| {
        assert_eq!(way.tags().get("name").map(String::as_str), Some("Ring Road"));
        assert_eq!(way.node_ids().iter().sum::<i64>(), 7);
        assert!(way.is_closed());
    });
}

#[when("I replace the first node id and then restore it")]
fn replace_and_restore(#[from(way)] slot: &RefCell<Option<Way>>) {
    with_way(slot, |way| {
        let original = way.node_ids_mut().replace(0, 42);
        assert_eq!(original, Some(1));
        way.node_ids_mut().replace(0, 1);
        assert_eq!(way.node_ids().as_slice(), &[1, 2, 3, 1]);
    });
}

#[when("I rename the way")]
fn rename(#[from(way)] slot: &RefCell<Option<Way>>) {
    with_way(slot, |way| {
        way.tags_mut().insert("name".to_owned(), "Orbital".to_owned());
    });
}

#[then("the way is not modified")]
fn not_modified(#[from(way)] slot: &RefCell<Option<Way>>) {
    assert!(!with_way(slot, |way| way.is_modified()));
}

#[then("the way is modified")]
fn modified(#[from(way)] slot: &RefCell<Option<Way>>) {
    assert!(with_way(slot, |way| way.is_modified()));
}

#[then("its tags are not modified")]
fn tags_untouched(#[from(way)] slot: &RefCell<Option<Way>>) {
    assert!(!with_way(slot, |way| way.tags().is_modified()));
}

#[then("the element view of the way is modified")]
fn element_modified(#[from(way)] slot: &RefCell<Option<Way>>) {
    let element = Element::from(with_way(slot, |way| way.clone()));
    assert!(element.is_modified());
    assert_eq!(element.id(), 10);
}

#[scenario(path = "tests/features/modification_tracking.feature", index = 0)]
fn reading_leaves_unmodified(way: RefCell<Option<Way>>) {
    let _ = way;
}

#[scenario(path = "tests/features/modification_tracking.feature", index = 1)]
fn restoring_keeps_modified(way: RefCell<Option<Way>>) {
    let _ = way;
}

#[scenario(path = "tests/features/modification_tracking.feature", index = 2)]
fn editing_tags_marks_modified(way: RefCell<Option<Way>>) {
    let _ = way;
}
