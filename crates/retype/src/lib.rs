pub mod collect;
pub mod config;
pub mod driver;
pub mod error;
pub mod format;
pub mod rewrite;
pub mod select;
pub mod syntax;
pub mod text_pos;

pub use collect::{BindingSite, NamedStruct, StructIndex, collect_structs};
pub use config::Settings;
pub use driver::{Options, RunConfig, RunOutput, retype_source, run};
pub use error::{Result, RetypeError};
pub use rewrite::{FieldOutcome, FieldRewrite, RewriteReport, RewriteSpec, SkipReason, rewrite};
pub use select::{Locator, Span, find_selection, parse_line_range};
pub use syntax::SyntaxTree;
