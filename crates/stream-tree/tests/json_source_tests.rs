//! JSON AST source tests

use pretty_assertions::assert_eq;
use stream_tree::hex::parse_hex;
use stream_tree::sources::JsonAstSource;
use stream_tree::*;

const STRING_AND_REFERENCE: &str = r#"{
  "root": {
    "type": "root",
    "children": [
      { "type": "magic", "children": null },
      { "type": "version", "children": null },
      { "type": "contents", "children": [
        { "type": "object", "objectType": "new-string",
          "handle": { "epoch": 0, "handle": 8257536 }, "value": "hello",
          "children": [
            { "type": "tc", "value": 116, "children": null },
            { "type": "utf", "value": "hello", "children": null }
          ] },
        { "type": "object", "objectType": "prev-object",
          "value": { "epoch": 0, "handle": 8257536 },
          "children": [
            { "type": "tc", "value": "TC_REFERENCE", "children": null },
            { "type": "primitive", "dataType": "int", "value": 8257536, "children": null }
          ] }
      ] }
    ]
  }
}"#;

// ═══════════════════════════════════════════════════════════════════════
// Decoding
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_decode_document() {
    let ast = JsonAstSource::new()
        .decode(STRING_AND_REFERENCE.as_bytes())
        .unwrap();

    let contents = &ast.root.children()[2];
    assert_eq!(contents.kind, NodeKind::Contents);
    assert_eq!(
        contents.children()[1].as_object(),
        Some(&ObjectKind::PrevObject {
            target: Handle::new(0, 0x7e0000)
        })
    );
    assert_eq!(
        contents.children()[0].children()[0].kind,
        NodeKind::Tc {
            value: TypeCode::String
        }
    );
}

#[test]
fn test_decode_bare_root() {
    let ast = JsonAstSource::new()
        .decode(br#"{ "type": "root", "children": [] }"#)
        .unwrap();
    assert_eq!(ast, Ast::new(Node::root(vec![])));
}

#[test]
fn test_missing_children_means_leaf() {
    let ast = JsonAstSource::new()
        .decode(br#"{ "type": "root", "children": [ { "type": "version" } ] }"#)
        .unwrap();
    assert!(ast.root.children()[0].is_leaf());
}

#[test]
fn test_unknown_type_code_is_corruption() {
    let err = JsonAstSource::new()
        .decode(br#"{ "type": "root", "children": [ { "type": "tc", "value": 1, "children": null } ] }"#)
        .unwrap_err();
    assert!(err.to_string().starts_with("file corrupted"), "{}", err);
}

#[test]
fn test_built_ast_survives_json() {
    let ast = Ast::new(Node::root(vec![
        Node::magic(),
        Node::version(),
        Node::contents(vec![Node::new_object(
            Handle::new(0, 0x7e0001),
            Node::class_desc(Handle::new(0, 0x7e0000), "Point", vec![Node::field_desc('I', "x")]),
            vec![],
        )]),
    ]));
    let json = serde_json::to_vec(&ast).unwrap();
    assert_eq!(JsonAstSource::new().decode(&json).unwrap(), ast);
}

// ═══════════════════════════════════════════════════════════════════════
// End to End
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_decode_and_render() {
    let ast = JsonAstSource::new()
        .decode(STRING_AND_REFERENCE.as_bytes())
        .unwrap();
    let tree = render(&ast, &RenderConfig::default()).unwrap();

    let expected = "\
- STREAM_MAGIC
- STREAM_VERSION
v contents
  + string \"hello\" (0x7e0000)
    - TC_STRING
    - utf \"hello\"
  + reference to string \"hello\" (0x7e0000)
    - TC_REFERENCE
    - int: 8257536
";
    assert_eq!(outline(&tree), expected);
}

#[test]
fn test_hex_encoded_input() {
    let dump = ::hex::encode(STRING_AND_REFERENCE.as_bytes());
    let bytes = parse_hex(&dump).unwrap();
    let ast = JsonAstSource::new().decode(&bytes).unwrap();
    assert_eq!(render(&ast, &RenderConfig::default()).unwrap().len(), 3);
}
