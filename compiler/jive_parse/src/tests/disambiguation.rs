//! The ambiguity decisions, exercised on mixed realistic input: contextual
//! keyword reclassification, cast versus grouping, generics versus
//! relational chains, and the shared switch surface.

#![allow(clippy::unwrap_used)]

use crate::parse;
use jive_syntax::{Child, Field, SyntaxKind};

fn ok(source: &str) -> crate::ParseResult {
    let result = parse(source);
    assert!(!result.has_errors(), "errors in {source:?}: {:?}", result.errors);
    result
}

const CONTEXTUAL_WORDS: [&str; 16] = [
    "exports", "module", "open", "opens", "permits", "provides", "record", "requires", "sealed",
    "to", "transitive", "uses", "var", "when", "with", "yield",
];

#[test]
fn test_every_contextual_word_works_as_identifier() {
    for word in CONTEXTUAL_WORDS {
        let source = format!("int {word} = 1; {word} = {word} + 1; f({word});");
        let result = parse(&source);
        assert!(!result.has_errors(), "`{word}` as identifier: {:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::LocalVariableDeclaration).is_some());
    }
}

#[test]
fn test_contextual_words_as_members_and_parameters() {
    ok("class C { int record; void permits(int sealed) { this.record = sealed; } }");
}

#[test]
fn test_record_both_readings_in_one_unit() {
    let result = ok("int record = 5; record Point(int x, int y) {}");
    assert!(result.tree.find(SyntaxKind::LocalVariableDeclaration).is_some());
    assert!(result.tree.find(SyntaxKind::RecordDeclaration).is_some());
}

#[test]
fn test_var_type_inference_and_var_name() {
    let result = ok("var xs = f(); int var = 3;");
    assert_eq!(result.tree.find_all(SyntaxKind::LocalVariableDeclaration).len(), 2);
}

#[test]
fn test_cast_versus_grouping_with_minus() {
    // `(a) - b` is subtraction of a grouped name.
    let result = ok("x = (a) - b;");
    assert!(result.tree.find(SyntaxKind::CastExpression).is_none());
    assert!(result.tree.find(SyntaxKind::BinaryExpression).is_some());

    // `(byte) - b` casts a negation.
    let result = ok("x = (byte) - b;");
    let cast = result.tree.find(SyntaxKind::CastExpression).unwrap();
    let value = result.tree.child_by_field(cast, Field::Value).unwrap();
    match value {
        Child::Node(n) => assert_eq!(result.tree.kind(n), SyntaxKind::UnaryExpression),
        Child::Token(_) => panic!("cast value should be a node"),
    }

    // A generic target is unambiguous even before a name.
    let result = ok("x = (List<String>) items;");
    assert!(result.tree.find(SyntaxKind::CastExpression).is_some());
}

#[test]
fn test_relational_chain_is_not_generics() {
    let result = ok("x = f(a < b, c > d);");
    let args = result.tree.find(SyntaxKind::ArgumentList).unwrap();
    let exprs: Vec<_> = result.tree.child_nodes(args).collect();
    assert_eq!(exprs.len(), 2);
    for e in exprs {
        assert_eq!(result.tree.kind(e), SyntaxKind::BinaryExpression);
    }
}

#[test]
fn test_nested_generic_close_versus_shift() {
    let result = ok("Map<String, List<Map<K, V>>> deep; int x = a >> b;");
    assert_eq!(result.tree.find_all(SyntaxKind::GenericType).len(), 3);
    assert!(result.tree.find(SyntaxKind::BinaryExpression).is_some());
}

#[test]
fn test_switch_shared_between_positions() {
    let result = ok(
        "int r = switch (x) { case 1 -> 2; default -> 0; }; \
         switch (y) { case 1 -> f(); default -> g(); }",
    );
    assert_eq!(result.tree.find_all(SyntaxKind::SwitchExpression).len(), 2);
}

#[test]
fn test_lambda_versus_parenthesized() {
    let result = ok("a = (x); b = (x) -> x; c = (x, y) -> x; d = (Foo f) -> f;");
    assert_eq!(result.tree.find_all(SyntaxKind::LambdaExpression).len(), 3);
    assert_eq!(result.tree.find_all(SyntaxKind::ParenthesizedExpression).len(), 1);
}

#[test]
fn test_annotated_declaration_versus_annotated_local() {
    let result = ok("@Entry class C {} ");
    assert!(result.tree.find(SyntaxKind::ClassDeclaration).is_some());
    let result = ok("@NonNull String s = t;");
    assert!(result.tree.find(SyntaxKind::LocalVariableDeclaration).is_some());
    assert!(result.tree.find(SyntaxKind::ClassDeclaration).is_none());
}

#[test]
fn test_guarded_record_pattern_in_switch() {
    let result = ok(
        "String d = switch (shape) { \
           case Circle(Point(var x, var y), double r) when r > 0 -> \"circle\"; \
           case Rect r -> \"rect\"; \
           default -> \"?\"; };",
    );
    assert!(result.tree.find(SyntaxKind::RecordPattern).is_some());
    assert!(result.tree.find(SyntaxKind::Guard).is_some());
    assert_eq!(result.tree.find_all(SyntaxKind::TypePattern).len(), 3);
}

#[test]
fn test_interpolation_inside_switch_inside_interpolation() {
    let result = ok(r#"String s = "v=\{switch (k) { case 1 -> "one \{unit}"; default -> ""; }}";"#);
    assert_eq!(result.tree.find_all(SyntaxKind::StringInterpolation).len(), 2);
    assert_eq!(result.tree.find_all(SyntaxKind::SwitchExpression).len(), 1);
}
