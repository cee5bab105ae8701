//! Markdown line classification.
//!
//! Every physical line is classified on its own: there is no lookahead and
//! no state carried between lines, so multi-line constructs (tables, fenced
//! code, wrapped list items) are handled one row at a time.

mod classify;
mod inline;

pub use classify::{classify_line, LineKind, DEFAULT_DOCUMENT_TITLE};
pub use inline::{clean_paragraph, rewrite_links, strip_emphasis};
