use serde_json::json;
use tessel_markup::{Child, Tree, parse_str, parse_template};

#[test]
fn empty_string_is_an_empty_fragment() {
    let tree = parse_str("").unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree, Tree::Fragment(vec![]));
}

#[test]
fn plain_text_is_a_single_root() {
    assert_eq!(parse_str("hello").unwrap(), Tree::Single(Child::Text("hello".into())));
}

#[test]
fn interior_whitespace_between_siblings_is_kept() {
    let tree = parse_str("<a/> <b/>").unwrap();
    let children = tree.into_children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[1], Child::Text(" ".into()));
}

#[test]
fn plain_and_template_forms_agree_without_placeholders() {
    let source = r#"<ul><li class="x">one</li><li>two</li></ul>"#;
    let plain = serde_json::to_value(parse_str(source).unwrap()).unwrap();
    let template = serde_json::to_value(parse_template::<_, u32>(&[source], &[]).unwrap()).unwrap();
    assert_eq!(plain, template);
}

#[test]
fn serializes_to_tag_props_children() {
    let tree = parse_str(r#"<a href="x" hidden>hi</a>"#).unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "tag": "a",
            "props": [{ "href": ["x"], "hidden": [true] }],
            "children": ["hi"],
        })
    );
}

#[test]
fn serializes_fields_as_their_values() {
    let tree = parse_template(&["<", r#" a="x"#, r#"">"#, "</>"], &[json!("Comp"), json!(1), json!({ "n": 2 })])
        .unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "tag": "Comp",
            "props": [{ "a": ["x", 1] }],
            "children": [{ "n": 2 }],
        })
    );
}
