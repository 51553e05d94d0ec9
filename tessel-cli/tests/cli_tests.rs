use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tessel_cli::InputMode;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn scratch_dir(tag: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../target/tessel-cli-tests")
        .join(format!("{}-{}", std::process::id(), tag))
}

#[test]
fn tree_resolves_placeholders_and_drops_comments() {
    let out = tessel_cli::tree_cmd(&fixture("card.tpl"), InputMode::Template, false)
        .expect("tree");
    let tree: Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(
        tree,
        json!({
            "tag": "div",
            "props": [
                { "class": ["card ", { "field": 0, "expr": "tone" }] },
                { "field": 1, "expr": "attrs" },
            ],
            "children": [
                {
                    "tag": "h2",
                    "props": [],
                    "children": [{ "field": 2, "expr": "title" }],
                },
                {
                    "tag": "p",
                    "props": [],
                    "children": ["Posted by ", { "field": 4, "expr": "author" }],
                },
            ],
        })
    );
}

#[test]
fn plain_mode_keeps_interpolation_syntax_as_text() {
    let out = tessel_cli::tree_cmd(&fixture("list.html"), InputMode::Plain, true).expect("tree");
    let tree: Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(tree["tag"], "ul");
    assert_eq!(tree["children"][0]["children"], json!(["${not a field}"]));
    assert_eq!(tree["children"][1]["props"], json!([{ "hidden": [true] }]));
}

#[test]
fn events_lists_one_event_per_line() {
    let out = tessel_cli::events_cmd(&fixture("card.tpl"), InputMode::Template).expect("events");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Recurse");
    assert_eq!(lines[1], "  SetTag \"div\"");
    assert_eq!(lines[2], "  SetProp class = \"card \"");
    assert_eq!(lines[3], "  AppendProp class += $1");
    assert_eq!(lines[4], "  AssignSpreadProps $2");
    assert!(!out.contains("$4"), "comment placeholder must not be referenced");
}

#[test]
fn build_writes_generated_expression() {
    let out_dir = scratch_dir("build");
    let out_path = tessel_cli::build_cmd(
        &fixture("card.tpl"),
        InputMode::Template,
        Some(out_dir.as_path()),
        None,
    )
    .expect("build");
    assert_eq!(out_path, out_dir.join("card.rs"));

    let content = fs::read_to_string(&out_path).expect("read output");
    assert!(content.contains("VNode"));
    assert!(content.contains("Props :: merge"));
    assert!(content.contains("author"));
    assert!(!content.contains("debug"));
}

#[test]
fn build_plain_with_custom_runtime() {
    let out_dir = scratch_dir("plain");
    let out_path = tessel_cli::build_cmd(
        &fixture("list.html"),
        InputMode::Plain,
        Some(out_dir.as_path()),
        Some("crate::ui"),
    )
    .expect("build");
    let content = fs::read_to_string(&out_path).expect("read output");
    assert!(content.starts_with("crate :: ui :: VNode"));
    assert!(content.contains("Option :: Some"), "key attribute should become the node key");
}

#[test]
fn invalid_expression_fails_the_build() {
    let dir = scratch_dir("invalid");
    fs::create_dir_all(&dir).expect("create scratch dir");
    let input = dir.join("broken.tpl");
    fs::write(&input, "<p>${a +}</p>").expect("write input");

    let err = tessel_cli::build_cmd(&input, InputMode::Template, Some(dir.as_path()), None)
        .unwrap_err();
    assert!(format!("{err:#}").contains("not a valid expression"));
}

#[test]
fn missing_input_reports_the_path() {
    let err = tessel_cli::tree_cmd(&fixture("nope.tpl"), InputMode::Template, false).unwrap_err();
    assert!(err.to_string().contains("nope.tpl"));
}
