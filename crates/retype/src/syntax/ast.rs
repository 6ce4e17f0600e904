use crate::syntax::cst::{SyntaxNode, SyntaxToken};
use crate::syntax::kind::SyntaxKind;

pub trait AstNode: Sized {
    fn cast(syntax: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

fn first_ident_token(syntax: &SyntaxNode) -> Option<SyntaxToken> {
    syntax
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| token.kind() == SyntaxKind::Ident)
}

fn ident_tokens(syntax: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    syntax
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::Ident)
}

/// The first child node that is a type expression.
fn type_child(syntax: &SyntaxNode) -> Option<SyntaxNode> {
    syntax.children().find(|child| is_type_kind(child.kind()))
}

pub fn is_type_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TypeName
            | SyntaxKind::PointerType
            | SyntaxKind::ArrayType
            | SyntaxKind::MapType
            | SyntaxKind::ChanType
            | SyntaxKind::FuncType
            | SyntaxKind::InterfaceType
            | SyntaxKind::StructType
            | SyntaxKind::ParenType
            | SyntaxKind::VariadicType
            | SyntaxKind::TypeElem
    )
}

/// Strips leading `*` and `[]`/`[N]` from a type, so `*[]T` and `[]*T` both yield `T`.
pub fn deref(ty: SyntaxNode) -> SyntaxNode {
    match ty.kind() {
        SyntaxKind::PointerType | SyntaxKind::ArrayType => match type_child(&ty) {
            Some(inner) => deref(inner),
            None => ty,
        },
        _ => ty,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
    syntax: SyntaxNode,
}

impl AstNode for SourceFile {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::SourceFile {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl SourceFile {
    pub fn package_name(&self) -> Option<SyntaxToken> {
        let clause = self.syntax.children().find(|child| child.kind() == SyntaxKind::PackageClause)?;
        first_ident_token(&clause)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    syntax: SyntaxNode,
}

impl AstNode for TypeSpec {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::TypeSpec {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl TypeSpec {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn type_expr(&self) -> Option<SyntaxNode> {
        type_child(&self.syntax)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueSpec {
    syntax: SyntaxNode,
}

impl AstNode for ValueSpec {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::ValueSpec {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl ValueSpec {
    pub fn names(&self) -> impl Iterator<Item = SyntaxToken> {
        ident_tokens(&self.syntax)
    }

    /// Declared type; `None` for `var x = ...`.
    pub fn type_expr(&self) -> Option<SyntaxNode> {
        type_child(&self.syntax)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeLit {
    syntax: SyntaxNode,
}

impl AstNode for CompositeLit {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::CompositeLit {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl CompositeLit {
    pub fn type_expr(&self) -> Option<SyntaxNode> {
        type_child(&self.syntax)
    }
}

/// A struct field, function parameter, result or type parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    syntax: SyntaxNode,
}

impl AstNode for Field {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::Field {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl Field {
    /// Declared names, in order. Empty for embedded fields and unnamed parameters.
    pub fn names(&self) -> impl Iterator<Item = SyntaxToken> {
        ident_tokens(&self.syntax)
    }

    pub fn is_embedded(&self) -> bool {
        self.names().next().is_none()
    }

    pub fn type_expr(&self) -> Option<SyntaxNode> {
        type_child(&self.syntax)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructType {
    syntax: SyntaxNode,
}

impl AstNode for StructType {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::StructType {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl StructType {
    pub fn fields(&self) -> impl Iterator<Item = Field> {
        self.syntax.children().filter_map(Field::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    syntax: SyntaxNode,
}

impl AstNode for TypeName {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::TypeName {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl TypeName {
    /// The identifier of an unqualified, non-generic type name such as `string`.
    pub fn simple_ident(&self) -> Option<SyntaxToken> {
        let mut idents = ident_tokens(&self.syntax);
        let ident = idents.next()?;
        if idents.next().is_some() || self.syntax.children().next().is_some() {
            return None;
        }
        Some(ident)
    }
}
