//! Canonical spelling of type expressions.
//!
//! Types are compared by their spelling, not by what they resolve to, so the
//! spelling has to be independent of the source layout: `[] byte`, `[]byte`
//! and `[]byte /* data */` all render as `[]byte`. The rules follow Go's own
//! expression printer (`go/types.ExprString`): no spaces inside composite
//! types, `; ` between struct fields and interface elements, `, ` between
//! parameters and type arguments, and struct tags dropped.

use crate::syntax::ast::is_type_kind;
use crate::syntax::cst::{SyntaxNode, SyntaxToken};
use crate::syntax::kind::SyntaxKind;

pub fn type_string(ty: &SyntaxNode) -> String {
    let mut out = String::new();
    write_type(&mut out, ty);
    out
}

fn write_type(
    out: &mut String,
    ty: &SyntaxNode,
) {
    match ty.kind() {
        SyntaxKind::TypeName => {
            for token in significant_tokens(ty) {
                out.push_str(token.text());
            }
            if let Some(args) = child_of_kind(ty, SyntaxKind::TypeArgList) {
                out.push('[');
                write_separated(out, type_children(&args), ", ");
                out.push(']');
            }
        },
        SyntaxKind::PointerType => {
            out.push('*');
            write_first_type(out, ty);
        },
        SyntaxKind::VariadicType => {
            out.push_str("...");
            write_first_type(out, ty);
        },
        SyntaxKind::ArrayType => {
            out.push('[');
            if let Some(len) = child_of_kind(ty, SyntaxKind::ArrayLen) {
                write_expr_tokens(out, &len);
            }
            out.push(']');
            write_first_type(out, ty);
        },
        SyntaxKind::MapType => {
            let mut types = type_children(ty);
            out.push_str("map[");
            if let Some(key) = types.next() {
                write_type(out, &key);
            }
            out.push(']');
            if let Some(value) = types.next() {
                write_type(out, &value);
            }
        },
        SyntaxKind::ChanType => {
            let tokens: Vec<SyntaxKind> = significant_tokens(ty).map(|token| token.kind()).collect();
            match tokens.as_slice() {
                [SyntaxKind::Arrow, ..] => out.push_str("<-chan "),
                [SyntaxKind::KwChan, SyntaxKind::Arrow, ..] => out.push_str("chan<- "),
                _ => out.push_str("chan "),
            }
            write_first_type(out, ty);
        },
        SyntaxKind::FuncType => {
            out.push_str("func");
            write_signature(out, ty);
        },
        SyntaxKind::StructType => {
            out.push_str("struct{");
            write_field_list(out, ty.children().filter(|child| child.kind() == SyntaxKind::Field), "; ");
            out.push('}');
        },
        SyntaxKind::InterfaceType => {
            out.push_str("interface{");
            let mut first = true;
            for elem in ty.children() {
                if !first {
                    out.push_str("; ");
                }
                first = false;
                if elem.kind() == SyntaxKind::MethodElem {
                    if let Some(name) = significant_tokens(&elem).find(|token| token.kind() == SyntaxKind::Ident) {
                        out.push_str(name.text());
                    }
                    write_signature(out, &elem);
                } else {
                    write_type(out, &elem);
                }
            }
            out.push('}');
        },
        SyntaxKind::ParenType => {
            out.push('(');
            write_first_type(out, ty);
            out.push(')');
        },
        SyntaxKind::TypeElem => {
            for element in ty.children_with_tokens() {
                match element {
                    rowan::NodeOrToken::Node(node) => write_type(out, &node),
                    rowan::NodeOrToken::Token(token) => match token.kind() {
                        SyntaxKind::Tilde => out.push('~'),
                        SyntaxKind::Pipe => out.push_str(" | "),
                        _ => {},
                    },
                }
            }
        },
        _ => write_expr_tokens(out, ty),
    }
}

fn write_first_type(
    out: &mut String,
    ty: &SyntaxNode,
) {
    if let Some(inner) = type_children(ty).next() {
        write_type(out, &inner);
    }
}

/// `(params) results`, where a single unnamed result is written without parentheses.
fn write_signature(
    out: &mut String,
    owner: &SyntaxNode,
) {
    out.push('(');
    if let Some(params) = child_of_kind(owner, SyntaxKind::ParamList) {
        write_field_list(out, fields(&params), ", ");
    }
    out.push(')');

    let Some(results) = child_of_kind(owner, SyntaxKind::Results) else {
        return;
    };
    let list: Vec<SyntaxNode> = match child_of_kind(&results, SyntaxKind::ParamList) {
        Some(params) => fields(&params).collect(),
        None => fields(&results).collect(),
    };
    if list.is_empty() {
        return;
    }
    out.push(' ');
    let single_unnamed = list.len() == 1 && field_names(&list[0]).next().is_none();
    if single_unnamed {
        if let Some(ty) = type_children(&list[0]).next() {
            write_type(out, &ty);
        }
        return;
    }
    out.push('(');
    write_field_list(out, list.into_iter(), ", ");
    out.push(')');
}

fn write_field_list(
    out: &mut String,
    fields: impl Iterator<Item = SyntaxNode>,
    separator: &str,
) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        let mut named = false;
        for (j, name) in field_names(&field).enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            out.push_str(name.text());
            named = true;
        }
        if named {
            out.push(' ');
        }
        if let Some(ty) = type_children(&field).next() {
            write_type(out, &ty);
        }
    }
}

fn write_separated(
    out: &mut String,
    types: impl Iterator<Item = SyntaxNode>,
    separator: &str,
) {
    for (i, ty) in types.enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_type(out, &ty);
    }
}

/// Array lengths and other plain expressions: tokens without layout, binary
/// operators surrounded by single spaces.
fn write_expr_tokens(
    out: &mut String,
    node: &SyntaxNode,
) {
    let mut prev: Option<SyntaxKind> = None;
    for token in node.descendants_with_tokens().filter_map(|element| element.into_token()) {
        let kind = token.kind();
        if kind.is_trivia() {
            continue;
        }
        let binary = kind.is_binary_operator() && prev.is_some_and(is_operand_end);
        if binary {
            out.push(' ');
        }
        out.push_str(token.text());
        if binary {
            out.push(' ');
        } else if kind == SyntaxKind::Comma {
            out.push(' ');
        }
        prev = Some(kind);
    }
}

fn is_operand_end(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Ident
            | SyntaxKind::Integer
            | SyntaxKind::Float
            | SyntaxKind::Imaginary
            | SyntaxKind::Rune
            | SyntaxKind::String
            | SyntaxKind::RawString
            | SyntaxKind::RParen
            | SyntaxKind::RBracket
    )
}

fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    node.children_with_tokens().filter_map(|element| element.into_token()).filter(|token| !token.kind().is_trivia())
}

fn field_names(field: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    significant_tokens(field).filter(|token| token.kind() == SyntaxKind::Ident)
}

fn fields(list: &SyntaxNode) -> impl Iterator<Item = SyntaxNode> {
    list.children().filter(|child| child.kind() == SyntaxKind::Field)
}

fn type_children(node: &SyntaxNode) -> impl Iterator<Item = SyntaxNode> {
    node.children().filter(|child| is_type_kind(child.kind()))
}

fn child_of_kind(
    node: &SyntaxNode,
    kind: SyntaxKind,
) -> Option<SyntaxNode> {
    node.children().find(|child| child.kind() == kind)
}

#[cfg(test)]
#[path = "../../tests/src/syntax/render_tests.rs"]
mod tests;
