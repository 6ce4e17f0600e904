use serde::Serialize;
use tracing::debug;

use crate::collect::collect_structs;
use crate::error::{Result, RetypeError};
use crate::syntax::SyntaxTree;
use crate::syntax::ast::{AstNode, StructType};

/// Which fields a run should consider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// `"N"` or `"N,M"`.
    Lines(String),
    Struct {
        name: String,
        field: Option<String>,
    },
    All,
}

/// Inclusive range of 1-based lines of the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            start,
            end,
        }
    }

    pub fn contains(
        &self,
        line: u32,
    ) -> bool {
        self.start <= line && line <= self.end
    }
}

pub fn find_selection(
    tree: &SyntaxTree,
    locator: &Locator,
) -> Result<Span> {
    let span = match locator {
        Locator::Lines(lines) => parse_line_range(lines)?,
        Locator::Struct {
            name,
            field,
        } => struct_selection(tree, name, field.as_deref())?,
        Locator::All => Span::new(1, tree.line_count()),
    };
    debug!(start = span.start, end = span.end, ?locator, "selected lines");
    Ok(span)
}

/// Parses `"N"` or `"N,M"`. Only the first two comma-separated parts are read.
pub fn parse_line_range(lines: &str) -> Result<Span> {
    let parts: Vec<&str> = lines.split(',').collect();
    let start = parse_line_number(parts[0])?;
    let end = match parts.as_slice() {
        [_, end] => parse_line_number(end)?,
        _ => start,
    };
    if start > end {
        return Err(RetypeError::InvalidRange {
            start,
            end,
        });
    }
    Ok(Span::new(start, end))
}

fn parse_line_number(token: &str) -> Result<u32> {
    token.parse::<u32>().map_err(|source| RetypeError::InvalidLineNumber {
        token: token.to_string(),
        source,
    })
}

fn struct_selection(
    tree: &SyntaxTree,
    name: &str,
    field: Option<&str>,
) -> Result<Span> {
    let index = collect_structs(&tree.root());
    let Some(found) = index.find_last(name) else {
        return Err(RetypeError::StructNotFound {
            name: name.to_string(),
        });
    };

    match field {
        Some(field) => field_selection(tree, &found.node, name, field),
        None => {
            let (start, end) = tree.line_span(found.node.syntax().text_range());
            Ok(Span::new(start, end))
        },
    }
}

fn field_selection(
    tree: &SyntaxTree,
    node: &StructType,
    struct_name: &str,
    field_name: &str,
) -> Result<Span> {
    let found = node.fields().filter(|field| field.names().any(|name| name.text() == field_name)).last();
    let Some(field) = found else {
        return Err(RetypeError::FieldNotFound {
            struct_name: struct_name.to_string(),
            field_name: field_name.to_string(),
        });
    };
    let (start, end) = tree.line_span(field.syntax().text_range());
    Ok(Span::new(start, end))
}

#[cfg(test)]
#[path = "../tests/src/select_tests.rs"]
mod tests;
