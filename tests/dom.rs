use lsf::{
    parse_to_dom, parse_to_dom_with_options, scan_tokens, DecodeOptions, ErrorKind, NodeKind,
    TokenKind, TypeHint,
};
use rstest::rstest;

fn shape(input: &str) -> Vec<(NodeKind, Option<usize>, String)> {
    let dom = parse_to_dom(input.as_bytes()).unwrap();
    let nav = dom.navigator();
    (0..nav.len())
        .map(|idx| {
            (
                nav.kind_of(idx).unwrap(),
                nav.parent_of(idx),
                nav.text_of(idx).into_owned(),
            )
        })
        .collect()
}

#[rstest]
fn scanner_reports_kinds_and_offsets() {
    let tokens = scan_tokens(b"$o~doc$f~a$v~1$t~n");
    let summary: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.offset)).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Object, 0),
            (TokenKind::Field, 6),
            (TokenKind::Value, 10),
            (TokenKind::TypeHint, 14),
        ]
    );
}

#[rstest]
fn empty_input_has_no_nodes() {
    let dom = parse_to_dom(b"").unwrap();
    assert!(dom.nodes.is_empty());
    assert!(dom.roots.is_empty());
}

#[rstest]
fn implicit_root_matches_explicit_root() {
    let implicit = parse_to_dom(b"$f~Name$v~X").unwrap();
    let explicit = parse_to_dom(b"$o~$f~Name$v~X").unwrap();

    assert_eq!(implicit.nodes.len(), explicit.nodes.len());
    assert_eq!(implicit.roots, explicit.roots);
    for (a, b) in implicit.nodes.iter().zip(&explicit.nodes) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.parent, b.parent);
        assert_eq!(a.children, b.children);
    }

    // Only the root's association differs: the field marker vs. its own `$o~`.
    assert!(implicit.nodes[0].implicit);
    assert!(!explicit.nodes[0].implicit);
    assert_eq!(implicit.nodes[0].token_offset, 0);
    assert_eq!(explicit.nodes[0].token_offset, 0);
    assert_eq!(implicit.nodes[1].token_offset, 0);
    assert_eq!(explicit.nodes[1].token_offset, 3);
}

#[rstest]
fn array_values_are_siblings() {
    assert_eq!(
        shape("$o~$f~items$v~A$v~B$v~C"),
        vec![
            (NodeKind::Object, None, String::new()),
            (NodeKind::Field, Some(0), "items".to_string()),
            (NodeKind::Value, Some(1), "A".to_string()),
            (NodeKind::Value, Some(1), "B".to_string()),
            (NodeKind::Value, Some(1), "C".to_string()),
        ]
    );
}

#[rstest]
fn structure_invariants_hold_for_messy_input() {
    let input = "$v~x$t~n$t~b$f~$v~$o~a$t~s$v~y$f~b$o~$o~c$f~d$v~1$v~2$t~z";
    let dom = parse_to_dom(input.as_bytes()).unwrap();
    let nav = dom.navigator();
    for idx in 0..nav.len() {
        let kind = nav.kind_of(idx).unwrap();
        for &child in nav.children_of(idx) {
            let child_kind = nav.kind_of(child).unwrap();
            match kind {
                NodeKind::Object => assert_eq!(child_kind, NodeKind::Field),
                NodeKind::Field => assert_eq!(child_kind, NodeKind::Value),
                NodeKind::Value => panic!("value node {idx} has children"),
            }
            assert_eq!(nav.parent_of(child), Some(idx));
        }
        if nav.parent_of(idx).is_none() {
            assert_eq!(kind, NodeKind::Object);
            assert!(nav.roots().contains(&idx));
        }
    }
    assert_eq!(nav.roots().len(), 4);
}

#[rstest]
fn orphan_type_hint_leaves_dom_unchanged() {
    let with_hint = parse_to_dom(b"$o~$t~n$f~a$v~1").unwrap();
    let without = parse_to_dom(b"$o~$f~a$v~1").unwrap();
    assert_eq!(with_hint.nodes.len(), without.nodes.len());
    for (a, b) in with_hint.nodes.iter().zip(&without.nodes) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.type_hint, b.type_hint);
        assert_eq!(a.children, b.children);
    }
}

#[rstest]
#[case("$o~$f~a$v~1$t~$v~2$t~n", &[TypeHint::None, TypeHint::Number])]
#[case("$v~1$t~$t~n", &[TypeHint::None])]
#[case("$v~1$t~n$t~b$v~x", &[TypeHint::Number, TypeHint::None])]
fn empty_or_spent_hints_do_not_carry_over(#[case] input: &str, #[case] expected: &[TypeHint]) {
    let dom = parse_to_dom(input.as_bytes()).unwrap();
    let hints: Vec<TypeHint> = dom
        .nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Value)
        .map(|node| node.type_hint)
        .collect();
    assert_eq!(hints, expected);
}

#[rstest]
#[case("$v~1$t~n", TypeHint::Number)]
#[case("$v~1.5$t~f", TypeHint::Float)]
#[case("$v~true$t~b", TypeHint::Boolean)]
#[case("$v~2024-01-01$t~d", TypeHint::DateTime)]
#[case("$v~x$t~s", TypeHint::String)]
#[case("$v~$t~z", TypeHint::Null)]
#[case("$v~x", TypeHint::None)]
fn hints_land_on_the_value(#[case] input: &str, #[case] expected: TypeHint) {
    let dom = parse_to_dom(input.as_bytes()).unwrap();
    let value = dom
        .nodes
        .iter()
        .position(|node| node.kind == NodeKind::Value)
        .unwrap();
    assert_eq!(dom.navigator().type_hint_of(value), expected);
}

#[rstest]
fn invalid_hint_fails_by_default_and_falls_back_when_lenient() {
    let input = b"$o~$f~a$v~1$t~x";
    let err = parse_to_dom(input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidTypeHint);
    assert!(err.to_string().contains("'x'"));
    assert!(err.to_string().contains("offset 14"));

    let options = DecodeOptions::new().with_validate_type_hints(false);
    let dom = parse_to_dom_with_options(input, &options).unwrap();
    assert_eq!(dom.nodes[2].type_hint, TypeHint::String);
}

#[rstest]
fn oversized_input_is_rejected_before_scanning() {
    let options = DecodeOptions::new().with_max_input_size(8);
    let err = parse_to_dom_with_options(b"$o~$f~a$v~b", &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InputTooLarge);
    assert!(err.to_string().contains("8 bytes"));
}

#[rstest]
fn spans_are_zero_copy_views() {
    let input = b"$o~rec$f~name$v~Ada".to_vec();
    let dom = parse_to_dom(&input).unwrap();
    let nav = dom.navigator();
    let bytes = nav.bytes_of(2);
    assert_eq!(bytes, b"Ada");
    assert!(std::ptr::eq(bytes.as_ptr(), input[16..].as_ptr()));
}
