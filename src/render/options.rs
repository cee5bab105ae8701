//! Report options and configuration.

use crate::error::Result;
use crate::model::TitlePage;
use crate::parser::DEFAULT_DOCUMENT_TITLE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Markdown source read when no input is given.
pub const DEFAULT_INPUT_PATH: &str = "Requirement_Specification_Document.md";

/// Report written when no output is given.
pub const DEFAULT_OUTPUT_PATH: &str = "Requirement_Specification_Document.pdf";

/// Running header text shown on every page after the title page.
pub const DEFAULT_HEADER_TITLE: &str = "Personal Finance Management & Investment Tracker - RSD";

/// Options for producing a report.
///
/// Only the fixed strings are configurable; fonts, sizes, spacing and
/// margins follow the fixed block formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Markdown source path
    pub input_path: PathBuf,

    /// PDF output path, overwritten if present
    pub output_path: PathBuf,

    /// Source line dropped because the title page replaces it
    pub document_title_line: String,

    /// Text on the left of the running header
    pub header_title: String,

    /// Title page content
    pub title_page: TitlePage,

    /// Author recorded in the PDF metadata
    pub author: Option<String>,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON file; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        log::info!("Loaded options from {}", path.display());
        Self::from_json_str(&data)
    }

    /// Parse options from JSON text.
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Set the input path.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the skipped document title line.
    pub fn with_document_title_line(mut self, line: impl Into<String>) -> Self {
        self.document_title_line = line.into();
        self
    }

    /// Set the running header text.
    pub fn with_header_title(mut self, title: impl Into<String>) -> Self {
        self.header_title = title.into();
        self
    }

    /// Set the title page content.
    pub fn with_title_page(mut self, title_page: TitlePage) -> Self {
        self.title_page = title_page;
        self
    }

    /// Set the metadata author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            document_title_line: DEFAULT_DOCUMENT_TITLE.to_string(),
            header_title: DEFAULT_HEADER_TITLE.to_string(),
            title_page: TitlePage::default(),
            author: None,
        }
    }
}
