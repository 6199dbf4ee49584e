//! Tree flattening tests

use pretty_assertions::assert_eq;
use stream_tree::*;

fn h(epoch: u32, offset: u32) -> Handle {
    Handle::new(epoch, BASE_WIRE_HANDLE + offset)
}

fn render_default(root: Node) -> Vec<DisplayNode> {
    render(&Ast::new(root), &RenderConfig::default()).expect("render failed")
}

fn texts(nodes: &[DisplayNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.text.as_str()).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Transparent Nodes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_root_is_never_rendered() {
    let tree = render_default(Node::root(vec![Node::magic(), Node::version()]));
    assert_eq!(texts(&tree), vec!["STREAM_MAGIC", "STREAM_VERSION"]);
}

#[test]
fn test_empty_root_renders_nothing() {
    assert!(render_default(Node::root(vec![])).is_empty());
}

#[test]
fn test_reset_children_are_spliced() {
    let tree = render_default(Node::root(vec![
        Node::magic(),
        Node::version(),
        Node::contents(vec![
            Node::null(),
            Node::reset(vec![Node::new_string(h(1, 0), "after")]),
            Node::null(),
        ]),
    ]));

    let payload = tree[2].children();
    assert_eq!(
        texts(payload),
        vec!["null", "string \"after\" (0x7e0000)", "null"]
    );
}

#[test]
fn test_nested_resets_and_blockdata_sequences() {
    let blocks = Node::branch(
        NodeKind::BlockdataSequence,
        vec![
            Node::branch(NodeKind::Blockdata, vec![]),
            Node::reset(vec![Node::reset(vec![Node::null()])]),
        ],
    );
    let tree = render_default(Node::root(vec![Node::branch(
        NodeKind::Annotation,
        vec![blocks],
    )]));

    assert_eq!(tree.len(), 1);
    assert_eq!(texts(tree[0].children()), vec!["blockdata", "null"]);
}

#[test]
fn test_flatten_transparent_returns_spliced() {
    let root = Node::root(vec![Node::magic()]);
    let index = HandleIndex::build(&root);
    let config = RenderConfig::default();
    let flattener = Flattener::new(&index, &config);

    match flattener.flatten(&root, Some("ignored")).unwrap() {
        Flattened::Spliced(nodes) => assert_eq!(texts(&nodes), vec!["STREAM_MAGIC"]),
        other => panic!("expected spliced nodes, got {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Rendered Nodes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_label_prefix() {
    let root = Node::root(vec![]);
    let index = HandleIndex::build(&root);
    let config = RenderConfig::default();
    let flattener = Flattener::new(&index, &config);

    let flat = flattener.flatten(&Node::null(), Some("next")).unwrap();
    assert_eq!(flat.into_vec()[0].text, "next: null");
}

#[test]
fn test_icon_follows_child_slot() {
    let tree = render_default(Node::root(vec![
        Node::magic(),
        Node::branch(NodeKind::Contents, vec![]),
        Node::leaf(NodeKind::Contents),
    ]));

    assert!(tree[0].is_leaf());
    assert_eq!(tree[0].icon, "jstree-file");

    // Present but empty is still a branch.
    assert_eq!(tree[1].icon, "jstree-folder");
    assert_eq!(tree[1].children, Some(vec![]));

    // Same kind, absent slot: a leaf.
    assert_eq!(tree[2].icon, "jstree-file");
    assert_eq!(tree[2].children, None);
}

#[test]
fn test_custom_icons() {
    let config = RenderConfig {
        leaf_icon: "leaf".to_string(),
        branch_icon: "dir".to_string(),
        ..Default::default()
    };
    let ast = Ast::new(Node::root(vec![Node::magic(), Node::contents(vec![])]));
    let tree = render(&ast, &config).unwrap();
    assert_eq!(tree[0].icon, "leaf");
    assert_eq!(tree[1].icon, "dir");
}

#[test]
fn test_full_object_tree() {
    let desc = Node::class_desc(h(0, 0), "Point", vec![Node::field_desc('I', "x")]);
    let obj = Node::new_object(
        h(0, 1),
        desc,
        vec![Node::branch(
            NodeKind::ClassData,
            vec![Node::branch(
                NodeKind::Values,
                vec![Node::primitive("int", Some(Scalar::Int(3)))],
            )],
        )],
    );
    let tree = render_default(Node::root(vec![
        Node::magic(),
        Node::version(),
        Node::contents(vec![obj, Node::reference(h(0, 1))]),
    ]));

    let expected = "\
- STREAM_MAGIC
- STREAM_VERSION
v contents
  + object Point (0x7e0001)
    - TC_OBJECT
    + classDesc Point (0x7e0000)
      - TC_CLASSDESC
      - utf \"Point\"
      + classDescInfo
        + fields
          + int x
            - byte: 73
            - utf \"x\"
        + annotation
        + null
          - TC_NULL
    + classdata[]
      + classdata
        + values
          - int: 3
  + reference to object Point (0x7e0001)
    - TC_REFERENCE
    - int: 8257537
";
    assert_eq!(outline(&tree), expected);
}

// ═══════════════════════════════════════════════════════════════════════
// Payload Expansion
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_third_entry_opened_with_three_top_level() {
    let tree = render_default(Node::root(vec![
        Node::magic(),
        Node::version(),
        Node::contents(vec![]),
    ]));
    assert_eq!(tree.len(), 3);
    assert!(!tree[0].is_opened());
    assert!(!tree[1].is_opened());
    assert!(tree[2].is_opened());
}

#[test]
fn test_no_expansion_for_two_or_four() {
    let two = render_default(Node::root(vec![Node::magic(), Node::version()]));
    assert!(two.iter().all(|n| !n.is_opened()));

    let four = render_default(Node::root(vec![
        Node::magic(),
        Node::version(),
        Node::contents(vec![]),
        Node::contents(vec![]),
    ]));
    assert!(four.iter().all(|n| !n.is_opened()));
}

#[test]
fn test_expansion_counts_spliced_entries() {
    // A top-level reset contributes its children, so the count is taken
    // after splicing.
    let tree = render_default(Node::root(vec![
        Node::magic(),
        Node::reset(vec![Node::version(), Node::null()]),
    ]));
    assert_eq!(tree.len(), 3);
    assert!(tree[2].is_opened());
}

#[test]
fn test_expansion_can_be_disabled() {
    let config = RenderConfig {
        expand_payload: false,
        ..Default::default()
    };
    let ast = Ast::new(Node::root(vec![
        Node::magic(),
        Node::version(),
        Node::contents(vec![]),
    ]));
    let tree = render(&ast, &config).unwrap();
    assert!(!tree[2].is_opened());
}

// ═══════════════════════════════════════════════════════════════════════
// Epochs and Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_after_reset_does_not_reach_earlier_epoch() {
    let tree = render_default(Node::root(vec![
        Node::magic(),
        Node::version(),
        Node::contents(vec![
            Node::new_string(h(0, 0), "before"),
            Node::reset(vec![Node::reference(h(1, 0))]),
        ]),
    ]));
    assert_eq!(tree[2].children()[1].text, "broken reference (0x7e0000)");
}

#[test]
fn test_reference_after_reset_resolves_in_its_epoch() {
    let tree = render_default(Node::root(vec![
        Node::magic(),
        Node::version(),
        Node::contents(vec![
            Node::new_string(h(0, 0), "before"),
            Node::reset(vec![
                Node::new_string(h(1, 0), "after"),
                Node::reference(h(1, 0)),
            ]),
            Node::reference(h(0, 0)),
        ]),
    ]));
    assert_eq!(
        texts(tree[2].children()),
        vec![
            "string \"before\" (0x7e0000)",
            "string \"after\" (0x7e0000)",
            "reference to string \"after\" (0x7e0000)",
            "reference to string \"before\" (0x7e0000)",
        ]
    );
}

#[test]
fn test_error_aborts_whole_render() {
    let ast = Ast::new(Node::root(vec![
        Node::magic(),
        Node::contents(vec![Node::null(), Node::field_desc('Q', "bad")]),
    ]));
    assert_eq!(
        render(&ast, &RenderConfig::default()),
        Err(RenderError::InvalidFieldTypeCode { code: 'Q' })
    );
}

#[test]
fn test_serialized_shape() {
    let tree = render_default(Node::root(vec![Node::magic(), Node::contents(vec![])]));
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "text": "STREAM_MAGIC", "icon": "jstree-file", "state": { "opened": false } },
            { "text": "contents", "icon": "jstree-folder", "state": { "opened": false }, "children": [] }
        ])
    );
}
