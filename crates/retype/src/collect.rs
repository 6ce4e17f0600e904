//! Index of the struct types in a file, named after the place they are bound.
//!
//! A `struct { ... }` literal has no name of its own. The name used for
//! `--struct` lookups comes from the surrounding declaration:
//!
//! ```go
//! type Config struct { ... }          // "Config"
//! var defaults = []struct { ... }{}   // "" (composite literal)
//! var opts struct { ... }             // "opts"
//! func run(arg *struct { ... }) {}    // "arg"
//! ```
//!
//! Struct fields are binding sites too, so an inline struct nested in a field
//! is indexed under the field's name.

use std::collections::BTreeMap;

use rowan::TextSize;

use crate::syntax::ast::{AstNode, CompositeLit, Field, StructType, TypeSpec, ValueSpec, deref};
use crate::syntax::cst::SyntaxNode;

/// A declaration that can give a name to a struct type.
#[derive(Debug, Clone)]
pub enum BindingSite {
    TypeDecl(TypeSpec),
    CompositeLit(CompositeLit),
    VarDecl(ValueSpec),
    /// Parameters, results, type parameters and struct fields.
    Param(Field),
}

impl BindingSite {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        if let Some(spec) = TypeSpec::cast(node.clone()) {
            return Some(Self::TypeDecl(spec));
        }
        if let Some(lit) = CompositeLit::cast(node.clone()) {
            return Some(Self::CompositeLit(lit));
        }
        if let Some(spec) = ValueSpec::cast(node.clone()) {
            return Some(Self::VarDecl(spec));
        }
        Field::cast(node).map(Self::Param)
    }

    pub fn inferred_name(&self) -> String {
        let token = match self {
            Self::TypeDecl(spec) => spec.name_token(),
            Self::CompositeLit(_) => None,
            Self::VarDecl(spec) => spec.names().next(),
            Self::Param(field) => field.names().next(),
        };
        token.map(|token| token.text().to_string()).unwrap_or_default()
    }

    pub fn type_expr(&self) -> Option<SyntaxNode> {
        match self {
            Self::TypeDecl(spec) => spec.type_expr(),
            Self::CompositeLit(lit) => lit.type_expr(),
            Self::VarDecl(spec) => spec.type_expr(),
            Self::Param(field) => field.type_expr(),
        }
    }

    /// The struct type bound here, looking through pointers, slices and arrays.
    pub fn struct_type(&self) -> Option<StructType> {
        StructType::cast(deref(self.type_expr()?))
    }
}

#[derive(Debug, Clone)]
pub struct NamedStruct {
    pub name: String,
    pub node: StructType,
}

/// Struct types keyed by the offset of their `struct` keyword, so iteration
/// follows source order.
#[derive(Debug, Clone, Default)]
pub struct StructIndex {
    entries: BTreeMap<TextSize, NamedStruct>,
}

impl StructIndex {
    pub fn iter(&self) -> impl Iterator<Item = &NamedStruct> {
        self.entries.values()
    }

    /// The last struct, in source order, bound to `name`.
    pub fn find_last(
        &self,
        name: &str,
    ) -> Option<&NamedStruct> {
        self.entries.values().rev().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn collect_structs(root: &SyntaxNode) -> StructIndex {
    let mut index = StructIndex::default();
    for site in root.descendants().filter_map(BindingSite::cast) {
        let Some(node) = site.struct_type() else {
            continue;
        };
        index.entries.insert(
            node.syntax().text_range().start(),
            NamedStruct {
                name: site.inferred_name(),
                node,
            },
        );
    }
    index
}

#[cfg(test)]
#[path = "../tests/src/collect_tests.rs"]
mod tests;
