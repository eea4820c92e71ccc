use pathtree::input::{load_paths, parse_paths};
use pathtree::output::{OutputFormat, format_path_list, format_tree, write_tree_to_file};
use pathtree::{
    LineSink, PathTreeError, PrintOptions, TreeNode, WriterSink, build, print_tree, write_tree,
};
use std::fs;
use tempfile::tempdir;
struct ClosedSink;
impl LineSink for ClosedSink {
    fn write_line(&mut self, _line: &str) -> Result<(), PathTreeError> {
        Err(PathTreeError::Output(std::io::Error::other("sink closed")))
    }
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("paths.json");
    fs::write(
        &input,
        r#"["/srv/app/main.rs", "/srv/app/lib.rs", "/srv/README.md", "/srv/app/main.rs"]"#,
    )
    .unwrap();
    let paths = load_paths(&input).unwrap();
    assert_eq!(paths.len(), 4);
    let tree = build(&paths);
    let out = dir.path().join("tree.txt");
    write_tree_to_file(
        &tree,
        OutputFormat::Tree,
        &PrintOptions::default(),
        &out,
        false,
    )
    .unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "srv\n    README.md\n    app\n        lib.rs\n        main.rs\n"
    );
}
#[test]
fn integration_line_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("paths.txt");
    fs::write(&input, "/a/b.txt\n\n/a/c.txt\r\n  \n").unwrap();
    let paths = load_paths(&input).unwrap();
    assert_eq!(paths, ["/a/b.txt", "/a/c.txt"]);
}
#[test]
fn integration_input_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    assert!(matches!(
        load_paths(&missing).unwrap_err(),
        PathTreeError::Io { .. }
    ));
    assert!(matches!(
        parse_paths(r#"["/a.txt", null]"#).unwrap_err(),
        PathTreeError::InvalidInput(_)
    ));
    assert!(matches!(
        parse_paths("[\"/a.txt\"").unwrap_err(),
        PathTreeError::Json(_)
    ));
}
#[test]
fn integration_json_output() {
    let tree = build(["/home/user/a.txt", "/home/user/b.txt"]);
    let json = format_tree(&tree, OutputFormat::Json, &PrintOptions::default(), false).unwrap();
    assert_eq!(
        json,
        "{\"children\":{\"home\":{\"children\":{\"user\":{\"leaves\":[\"a.txt\",\"b.txt\"]}}}}}\n"
    );
    let parsed: TreeNode = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, tree);
}
#[test]
fn integration_paths_output_ignores_limits() {
    let tree = build(["/a/b/c/d.txt", "/a/e.txt"]);
    let options = PrintOptions {
        max_depth: 0,
        max_leaves: 0,
    };
    let paths = format_tree(&tree, OutputFormat::Paths, &options, false).unwrap();
    assert_eq!(paths, "a/b/c/d.txt\na/e.txt\n");
    assert_eq!(
        format_tree(&tree, OutputFormat::Tree, &options, false).unwrap(),
        ""
    );
}
#[test]
fn integration_writer_sink() {
    let tree = build(["x/y.txt"]);
    let mut sink = WriterSink::new(Vec::new());
    print_tree(&tree, 5, 5, &mut sink).unwrap();
    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "x\n    y.txt\n");
}
#[test]
fn integration_sink_error_propagates() {
    let tree = build(["x/y.txt"]);
    let err = write_tree(&tree, &PrintOptions::default(), &mut ClosedSink).unwrap_err();
    assert!(matches!(err, PathTreeError::Output(_)));
}
#[test]
fn integration_format_extensions() {
    assert_eq!(OutputFormat::Tree.extension(), "txt");
    assert_eq!(OutputFormat::Paths.extension(), "txt");
    assert_eq!(OutputFormat::Json.extension(), "json");
    let dir = tempdir().unwrap();
    let tree = build(["/a/b.txt"]);
    let out = dir
        .path()
        .join(format!("tree.{}", OutputFormat::Json.extension()));
    write_tree_to_file(&tree, OutputFormat::Json, &PrintOptions::default(), &out, true).unwrap();
    let parsed: TreeNode = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed, tree);
}
#[test]
fn integration_json_output_rejects_unreadable_depth() {
    let options = PrintOptions::default();
    let readable = build([format!("{}f.txt", "d/".repeat(62))]);
    let json = format_tree(&readable, OutputFormat::Json, &options, false).unwrap();
    let parsed: TreeNode = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.depth(), 62);
    let deep = build([format!("{}f.txt", "d/".repeat(5_000))]);
    assert!(matches!(
        format_tree(&deep, OutputFormat::Json, &options, false).unwrap_err(),
        PathTreeError::InvalidArgument(_)
    ));
    let paths = format_tree(&deep, OutputFormat::Paths, &options, false).unwrap();
    assert_eq!(paths.lines().count(), 1);
}
#[test]
fn integration_path_list_formats() {
    let paths = vec!["/b/folder1/x.txt".to_string(), "/b/a.txt".to_string()];
    assert_eq!(
        format_path_list(&paths, OutputFormat::Paths, false).unwrap(),
        "/b/folder1/x.txt\n/b/a.txt\n"
    );
    let json = format_path_list(&paths, OutputFormat::Json, false).unwrap();
    assert_eq!(json, "[\"/b/folder1/x.txt\",\"/b/a.txt\"]\n");
    assert!(matches!(
        format_path_list(&paths, OutputFormat::Tree, false).unwrap_err(),
        PathTreeError::InvalidArgument(_)
    ));
}
