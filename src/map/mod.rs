//! Map document model and parsing (JSON and RON wire formats).

mod document;
mod parse;

pub use document::*;
pub use parse::*;
