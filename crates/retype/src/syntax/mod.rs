pub mod ast;
pub mod cst;
pub mod cst_parser;
pub mod kind;
pub mod lexer;
pub mod render;

use std::{
    fmt::{Display, Formatter},
    sync::Arc,
};

use rowan::{GreenNode, TextRange, TextSize};

use crate::syntax::cst::SyntaxNode;
use crate::syntax::cst_parser::Parser;
use crate::text_pos::LineIndex;

/// A problem found while parsing, anchored at a byte offset of the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub offset: TextSize,
}

impl Display for SyntaxError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.message, u32::from(self.offset))
    }
}

/// Parsed Go source file.
///
/// Owns the green tree, the original text and the line table computed at parse
/// time. The line table is never rebuilt: after a rewrite the tree text differs
/// from `source`, but every line lookup still refers to the original layout.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    green: GreenNode,
    source: Arc<str>,
    lines: LineIndex,
    errors: Vec<SyntaxError>,
}

impl SyntaxTree {
    pub fn parse(source: &str) -> Self {
        let parser = Parser::new(source);
        let (green, errors) = parser.parse();
        Self {
            green,
            source: Arc::from(source),
            lines: LineIndex::new(source),
            errors,
        }
    }

    /// Read-only view of the current tree.
    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Mutable view of the current tree. Edits made through it are kept only
    /// after [`SyntaxTree::commit`].
    pub(crate) fn root_mut(&self) -> SyntaxNode {
        SyntaxNode::new_root_mut(self.green.clone())
    }

    pub(crate) fn commit(
        &mut self,
        root: &SyntaxNode,
    ) {
        self.green = root.green().into_owned();
    }

    /// Original source text, as it was when the tree was parsed.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current text of the tree, including any rewrites.
    pub fn text(&self) -> String {
        self.root().to_string()
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.lines
    }

    /// 1-based line of an offset in the original source.
    pub fn line_of(
        &self,
        offset: TextSize,
    ) -> u32 {
        self.lines.line_of(offset)
    }

    /// First and last line covered by a range of the original source.
    pub fn line_span(
        &self,
        range: TextRange,
    ) -> (u32, u32) {
        (self.lines.line_of(range.start()), self.lines.line_of(range.end()))
    }

    pub fn line_count(&self) -> u32 {
        self.lines.line_count()
    }
}
