//! Document model types for report generation.
//!
//! The model sits between markdown line classification and PDF output:
//! a [`SourceDocument`] is classified line by line into [`Block`]s, each
//! carrying the [`TextStyle`] and spacing it is written with.

mod block;
mod document;
mod style;
mod title;

pub use block::{Block, BlockKind};
pub use document::SourceDocument;
pub use style::{FontStyle, TextStyle};
pub use title::TitlePage;
