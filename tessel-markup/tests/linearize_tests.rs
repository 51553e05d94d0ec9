use tessel_markup::{Event, Events, FieldIndex, PropValue, Slot, linearize};

fn field(position: usize) -> FieldIndex {
    FieldIndex::from_position(position)
}

fn tag(name: &str) -> Event {
    Event::SetTag(Slot::Text(name.to_string()))
}

fn element(events: Vec<Event>) -> Event {
    Event::Recurse(Events::from(events))
}

#[test]
fn element_with_attribute_and_text() {
    let events = linearize(&[r#"<tag attr="v">text</tag>"#]);
    assert_eq!(
        events,
        Events::from(vec![element(vec![
            tag("tag"),
            Event::SetProp {
                name: "attr".into(),
                value: PropValue::Text("v".into()),
            },
            Event::AppendChild(Slot::Text("text".into())),
        ])])
    );
}

#[test]
fn spread_then_named_attribute() {
    let events = linearize(&["<div ...", r#" b="1" />"#]);
    assert_eq!(
        events,
        Events::from(vec![element(vec![
            tag("div"),
            Event::AssignSpreadProps(field(0)),
            Event::SetProp {
                name: "b".into(),
                value: PropValue::Text("1".into()),
            },
        ])])
    );
}

#[test]
fn multi_part_attribute_keeps_written_order() {
    let events = linearize(&[r#"<p attr="a"#, "b", r#"c" />"#]);
    let text = |s: &str| PropValue::Text(s.to_string());
    assert_eq!(
        events,
        Events::from(vec![element(vec![
            tag("p"),
            Event::SetProp { name: "attr".into(), value: text("a") },
            Event::AppendProp { name: "attr".into(), value: PropValue::Field(field(0)) },
            Event::AppendProp { name: "attr".into(), value: text("b") },
            Event::AppendProp { name: "attr".into(), value: PropValue::Field(field(1)) },
            Event::AppendProp { name: "attr".into(), value: text("c") },
        ])])
    );
}

#[test]
fn whole_attribute_from_a_placeholder() {
    let events = linearize(&["<input value=", " disabled>"]);
    assert_eq!(
        events,
        Events::from(vec![element(vec![
            tag("input"),
            Event::SetProp { name: "value".into(), value: PropValue::Field(field(0)) },
            Event::SetProp { name: "disabled".into(), value: PropValue::True },
        ])])
    );
}

#[test]
fn empty_quoted_value_is_an_empty_string() {
    let events = linearize(&[r#"<a title="">"#]);
    assert_eq!(
        events,
        Events::from(vec![element(vec![
            tag("a"),
            Event::SetProp { name: "title".into(), value: PropValue::Text(String::new()) },
        ])])
    );
}

#[test]
fn dynamic_tag_and_child_fields() {
    let events = linearize(&["<", ">Hello ", "!<//>"]);
    assert_eq!(
        events,
        Events::from(vec![element(vec![
            Event::SetTag(Slot::Field(field(0))),
            Event::AppendChild(Slot::Text("Hello ".into())),
            Event::AppendChild(Slot::Field(field(1))),
            Event::AppendChild(Slot::Text("!".into())),
        ])])
    );
}

#[test]
fn comments_emit_nothing() {
    let events = linearize(&["<!-- ignore ", " -->"]);
    assert!(events.is_empty());

    let events = linearize(&["a<!---->b"]);
    assert_eq!(
        events,
        Events::from(vec![
            Event::AppendChild(Slot::Text("a".into())),
            Event::AppendChild(Slot::Text("b".into())),
        ])
    );
}

#[test]
fn nested_elements_recurse() {
    let events = linearize(&["<ul><li>a</li><li>b</li></ul>"]);
    assert_eq!(
        events,
        Events::from(vec![element(vec![
            tag("ul"),
            element(vec![tag("li"), Event::AppendChild(Slot::Text("a".into()))]),
            element(vec![tag("li"), Event::AppendChild(Slot::Text("b".into()))]),
        ])])
    );
}

#[test]
fn slash_inside_unquoted_value_is_literal() {
    let events = linearize(&["<a href=/x/y>go</a>"]);
    assert_eq!(
        events,
        Events::from(vec![element(vec![
            tag("a"),
            Event::SetProp { name: "href".into(), value: PropValue::Text("/x/y".into()) },
            Event::AppendChild(Slot::Text("go".into())),
        ])])
    );
}

#[test]
fn every_placeholder_is_referenced_once() {
    let fragments = ["<", " ...", " title=", ">hello ", "<//>"];
    let events = linearize(&fragments);
    let positions: Vec<usize> = events
        .field_indices()
        .into_iter()
        .map(FieldIndex::position)
        .collect();
    assert_eq!(positions, [0, 1, 2, 3]);
}

#[test]
fn closing_tag_placeholder_is_not_referenced() {
    let events = linearize(&["<", ">x</", ">"]);
    let positions: Vec<usize> = events
        .field_indices()
        .into_iter()
        .map(FieldIndex::position)
        .collect();
    assert_eq!(positions, [0]);
}

#[test]
fn placeholder_in_tag_whitespace_without_spread_is_dropped() {
    // a bare word right before the placeholder goes with it
    for fragments in [["<a b", ">"], ["<a ", ">"]] {
        let events = linearize(&fragments);
        assert_eq!(events, Events::from(vec![element(vec![tag("a")])]));
        assert!(events.field_indices().is_empty());
    }
}
