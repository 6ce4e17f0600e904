use super::*;
use crate::syntax::SyntaxTree;

fn index_of(source: &str) -> (SyntaxTree, StructIndex) {
    let tree = SyntaxTree::parse(source);
    assert!(tree.errors().is_empty(), "unexpected errors: {:?}", tree.errors());
    let index = collect_structs(&tree.root());
    (tree, index)
}

fn names(index: &StructIndex) -> Vec<&str> {
    index.iter().map(|entry| entry.name.as_str()).collect()
}

#[test]
fn type_declarations_are_named_after_the_type() {
    let (_, index) = index_of("package p\n\ntype Config struct {\n\tPath string\n}\n\ntype ID int\n");
    assert_eq!(names(&index), vec!["Config"]);
}

#[test]
fn all_binding_sites_in_source_order() {
    let source = r#"package p

type T struct{ A int }

var opts struct{ Verbose bool }

var table = []struct{ in, out string }{{"a", "b"}}

func run(arg *struct{ N int }) (res []*struct{ M int }) {
	return nil
}
"#;
    let (_, index) = index_of(source);
    assert_eq!(names(&index), vec!["T", "opts", "", "arg", "res"]);
}

#[test]
fn nested_struct_field_is_named_after_the_field() {
    let (_, index) = index_of("package p\n\ntype Outer struct {\n\tInner struct {\n\t\tX int\n\t}\n}\n");
    assert_eq!(names(&index), vec!["Outer", "Inner"]);
}

#[test]
fn pointer_and_slice_wrappers_are_looked_through() {
    let (_, index) = index_of("package p\n\nvar a *[]struct{ X int }\nvar b []*struct{ Y int }\nvar c [3]struct{ Z int }\n");
    assert_eq!(names(&index), vec!["a", "b", "c"]);
}

#[test]
fn map_and_chan_element_structs_are_not_bound() {
    let (_, index) = index_of("package p\n\nvar m map[string]struct{ X int }\nvar ch chan struct{}\n");
    assert!(index.is_empty());
}

#[test]
fn find_last_prefers_the_later_declaration() {
    let source = "package p\n\nfunc a() {\n\ttype dup struct{ A int }\n}\n\nfunc b() {\n\ttype dup struct{ B int }\n}\n";
    let (tree, index) = index_of(source);
    assert_eq!(index.len(), 2);
    let found = index.find_last("dup").expect("dup is indexed");
    assert_eq!(tree.line_of(found.node.syntax().text_range().start()), 8);
    assert!(index.find_last("missing").is_none());
}
