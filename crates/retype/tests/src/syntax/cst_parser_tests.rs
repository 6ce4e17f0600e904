use expect_test::{Expect, expect};

use super::*;
use crate::syntax::cst::SyntaxNode;

fn check(
    input: &str,
    expected: Expect,
) {
    let (green, errors) = Parser::new(input).parse();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let node = SyntaxNode::new_root(green);
    expected.assert_eq(&format!("{node:#?}"));
}

fn parse(input: &str) -> (SyntaxNode, Vec<SyntaxError>) {
    let (green, errors) = Parser::new(input).parse();
    (SyntaxNode::new_root(green), errors)
}

fn kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.descendants().map(|n| n.kind()).collect()
}

fn count(
    node: &SyntaxNode,
    kind: SyntaxKind,
) -> usize {
    node.descendants().filter(|n| n.kind() == kind).count()
}

#[test]
fn test_package_clause() {
    check(
        "package p",
        expect![[r#"
            SourceFile@0..9
              PackageClause@0..9
                KwPackage@0..7 "package"
                Whitespace@7..8 " "
                Ident@8..9 "p"
        "#]],
    );
}

#[test]
fn test_struct_decl() {
    check(
        "package p\ntype T struct{ A int }",
        expect![[r#"
            SourceFile@0..32
              PackageClause@0..9
                KwPackage@0..7 "package"
                Whitespace@7..8 " "
                Ident@8..9 "p"
              Whitespace@9..10 "\n"
              TypeDecl@10..32
                KwType@10..14 "type"
                Whitespace@14..15 " "
                TypeSpec@15..32
                  Ident@15..16 "T"
                  Whitespace@16..17 " "
                  StructType@17..32
                    KwStruct@17..23 "struct"
                    LBrace@23..24 "{"
                    Whitespace@24..25 " "
                    Field@25..30
                      Ident@25..26 "A"
                      Whitespace@26..27 " "
                      TypeName@27..30
                        Ident@27..30 "int"
                    Whitespace@30..31 " "
                    RBrace@31..32 "}"
        "#]],
    );
}

#[test]
fn test_lossless_round_trip() {
    let input = r#"// Package p does things.
package p

import (
	"fmt"
	str "strings"
)

type (
	A struct {
		Name, Alias string `json:"name"` // trailing
		*B
		fmt.Stringer
		List[int]
		items []struct{ v int }
	}
	B = map[string]chan<- error
)

var x, y = struct{ n int }{1}, 2

func (a *A) Run(ctx context.Context, opts ...Option) (n int, err error) {
	for i := 0; i < 10; i++ {
		if v := (T{}); v.ok {
			continue
		}
	}
	switch t := x.(type) {
	case int:
		fallthrough
	default:
	}
	go func() { _ = str.ToUpper("x") }()
	return len(a.items), nil
}
"#;
    let (root, errors) = parse(input);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(root.to_string(), input);
}

#[test]
fn test_field_shapes() {
    let (root, errors) = parse("package p\ntype S struct {\n\ta, b int\n\tio.Reader\n\t*Node\n\tList[T]\n\tgrid [4][]byte\n}\n");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let fields: Vec<SyntaxNode> = root.descendants().filter(|n| n.kind() == SyntaxKind::Field).collect();
    assert_eq!(fields.len(), 5);

    let names = |field: &SyntaxNode| -> Vec<String> {
        field
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::Ident)
            .map(|t| t.text().to_string())
            .collect()
    };
    assert_eq!(names(&fields[0]), vec!["a", "b"]);
    assert!(names(&fields[1]).is_empty());
    assert!(names(&fields[2]).is_empty());
    assert!(names(&fields[3]).is_empty());
    assert_eq!(names(&fields[4]), vec!["grid"]);
}

#[test]
fn test_field_tag_stays_on_its_line() {
    let (root, errors) = parse("package p\ntype S struct {\n\tA int `a`\n\tB string\n}\n");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(count(&root, SyntaxKind::Tag), 1);
    assert_eq!(count(&root, SyntaxKind::Field), 2);
}

#[test]
fn test_generic_type_params() {
    let (root, errors) = parse("package p\ntype Pair[K comparable, V any] struct {\n\tKey K\n\tVal V\n}\ntype Arr [N]int\n");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(count(&root, SyntaxKind::TypeParamList), 1);
    assert_eq!(count(&root, SyntaxKind::ArrayType), 1);
}

#[test]
fn test_composite_literals_with_struct_types() {
    let (root, errors) = parse(
        "package p\nfunc f() {\n\tcases := []struct {\n\t\tin string\n\t}{\n\t\t{\"a\"},\n\t}\n\t_ = &struct{ x int }{x: 1}\n\t_ = T{}\n}\n",
    );
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(count(&root, SyntaxKind::CompositeLit), 2);
    assert_eq!(count(&root, SyntaxKind::StructType), 2);
}

#[test]
fn test_if_header_brace_opens_block() {
    let (root, errors) = parse("package p\nfunc f() {\n\tif x {\n\t\ty()\n\t} else if z {\n\t} else {\n\t}\n}\n");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert!(!kinds(&root).contains(&SyntaxKind::LiteralValue));
    assert_eq!(count(&root, SyntaxKind::Block), 4);
}

#[test]
fn test_func_literals() {
    let (root, errors) = parse("package p\nvar handler = func(w io.Writer, v struct{ N int }) error {\n\treturn nil\n}\n");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(count(&root, SyntaxKind::FuncLit), 1);
    assert_eq!(count(&root, SyntaxKind::StructType), 1);
}

#[test]
fn test_unnamed_params() {
    let (root, errors) = parse("package p\nfunc f(int, []string) (bool, error)\n");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let fields: Vec<SyntaxNode> = root.descendants().filter(|n| n.kind() == SyntaxKind::Field).collect();
    assert_eq!(fields.len(), 4);
    assert!(fields.iter().all(|f| f.children_with_tokens().filter_map(|e| e.into_token()).all(|t| t.kind() != SyntaxKind::Ident)));
}

#[test]
fn test_missing_package_clause() {
    let (root, errors) = parse("type T int\n");
    assert!(!errors.is_empty());
    assert_eq!(errors[0].message, "expected package clause");
    assert_eq!(root.to_string(), "type T int\n");
}

#[test]
fn test_unbalanced_braces_are_reported() {
    let (root, errors) = parse("package p\ntype T struct {\n\tA int\n");
    assert!(errors.iter().any(|e| e.message == "expected `}`"));
    assert_eq!(root.to_string(), "package p\ntype T struct {\n\tA int\n");
}

#[test]
fn test_unexpected_character_is_reported() {
    let (_, errors) = parse("package p\ntype T $int\n");
    assert!(!errors.is_empty());
}
