//! In-place replacement of struct field types.

use rowan::GreenNodeBuilder;
use serde::Serialize;
use tracing::debug;

use crate::select::Span;
use crate::syntax::SyntaxTree;
use crate::syntax::ast::{AstNode, Field, StructType, TypeName};
use crate::syntax::cst::SyntaxNode;
use crate::syntax::kind::SyntaxKind;
use crate::syntax::render::type_string;

/// Replace every field type spelled `from` with `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSpec {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRewrite {
    /// Line of the field in the original source.
    pub line: u32,
    pub name: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    OutsideSpan,
    /// No export-visible name while unexported fields are skipped.
    Unexported,
    /// Embedded field whose type is not a plain identifier (`*T`, `pkg.T`, `T[U]`).
    ComplexEmbedded,
    TypeMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Rewritten(FieldRewrite),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub span: Span,
    pub rewrites: Vec<FieldRewrite>,
}

/// Rewrites the fields of every struct type in `tree` whose first line lies in `span`.
///
/// Structs are visited in pre-order. A struct nested in a field type that was
/// replaced is gone from the tree and is not visited.
pub fn rewrite(
    tree: &mut SyntaxTree,
    span: Span,
    spec: &RewriteSpec,
    skip_unexported: bool,
) -> RewriteReport {
    let root = tree.root_mut();

    // Lines are resolved against the original layout, before the first edit
    // shifts any offsets.
    let fields: Vec<(Field, u32)> = root
        .descendants()
        .filter_map(StructType::cast)
        .flat_map(|node| node.fields().collect::<Vec<_>>())
        .map(|field| {
            let line = tree.line_of(field.syntax().text_range().start());
            (field, line)
        })
        .collect();

    let mut rewrites = Vec::new();
    for (field, line) in fields {
        if !is_attached(field.syntax()) {
            continue;
        }
        match rewrite_field(&field, line, span, spec, skip_unexported) {
            FieldOutcome::Rewritten(rewrite) => {
                debug!(line, name = %rewrite.name, from = %rewrite.from, to = %rewrite.to, "rewrote field");
                rewrites.push(rewrite);
            },
            FieldOutcome::Skipped(reason) => debug!(line, ?reason, "skipped field"),
        }
    }

    tree.commit(&root);
    RewriteReport {
        span,
        rewrites,
    }
}

fn rewrite_field(
    field: &Field,
    line: u32,
    span: Span,
    spec: &RewriteSpec,
    skip_unexported: bool,
) -> FieldOutcome {
    if !span.contains(line) {
        return FieldOutcome::Skipped(SkipReason::OutsideSpan);
    }
    let name = match representative_name(field, skip_unexported) {
        Ok(name) => name,
        Err(reason) => return FieldOutcome::Skipped(reason),
    };
    let Some(ty) = field.type_expr() else {
        return FieldOutcome::Skipped(SkipReason::TypeMismatch);
    };
    let current = type_string(&ty);
    if current != spec.from {
        return FieldOutcome::Skipped(SkipReason::TypeMismatch);
    }

    let index = ty.index();
    field.syntax().splice_children(index..index + 1, vec![type_name_node(&spec.to).into()]);
    FieldOutcome::Rewritten(FieldRewrite {
        line,
        name,
        from: current,
        to: spec.to.clone(),
    })
}

/// The name a field is known by: its first (exported) name, or for embedded
/// fields the type's identifier.
fn representative_name(
    field: &Field,
    skip_unexported: bool,
) -> Result<String, SkipReason> {
    if !field.is_embedded() {
        return field
            .names()
            .map(|name| name.text().to_string())
            .find(|name| !skip_unexported || is_exported(name))
            .ok_or(SkipReason::Unexported);
    }

    let ident = field
        .type_expr()
        .and_then(TypeName::cast)
        .and_then(|name| name.simple_ident())
        .ok_or(SkipReason::ComplexEmbedded)?;
    if skip_unexported {
        return Err(SkipReason::Unexported);
    }
    Ok(ident.text().to_string())
}

pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

fn is_attached(node: &SyntaxNode) -> bool {
    node.ancestors().last().is_some_and(|top| top.kind() == SyntaxKind::SourceFile)
}

fn type_name_node(text: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::TypeName.into());
    builder.token(SyntaxKind::Ident.into(), text);
    builder.finish_node();
    SyntaxNode::new_root_mut(builder.finish())
}

#[cfg(test)]
#[path = "../tests/src/rewrite_tests.rs"]
mod tests;
