//! Title page content.

use serde::{Deserialize, Serialize};

/// Fixed text of the generated title page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlePage {
    /// Large title, one centered row per entry
    pub title_lines: Vec<String>,

    /// Subtitle, one centered row per entry
    pub subtitle_lines: Vec<String>,

    /// Program or track label
    pub program: String,

    /// Submission date line
    pub submission_date: String,

    /// Version line
    pub version: String,
}

impl TitlePage {
    /// Create a title page with a single title row and nothing else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title_lines: vec![title.into()],
            subtitle_lines: Vec::new(),
            program: String::new(),
            submission_date: String::new(),
            version: String::new(),
        }
    }

    /// Add a subtitle row.
    pub fn with_subtitle(mut self, line: impl Into<String>) -> Self {
        self.subtitle_lines.push(line.into());
        self
    }

    /// Set the program label.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the submission date line.
    pub fn with_submission_date(mut self, date: impl Into<String>) -> Self {
        self.submission_date = date.into();
        self
    }

    /// Set the version line.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Title rows joined with spaces, used as the PDF document title.
    pub fn document_title(&self) -> String {
        self.title_lines.join(" ")
    }
}

impl Default for TitlePage {
    fn default() -> Self {
        Self {
            title_lines: vec!["REQUIREMENT SPECIFICATION".into(), "DOCUMENT".into()],
            subtitle_lines: vec![
                "Personal Finance Management &".into(),
                "Investment Tracker System".into(),
            ],
            program: "B.Sc. (Computer Science) Internship 2025".into(),
            submission_date: "Submission Date: January 8, 2026".into(),
            version: "Version: 1.0".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title_page() {
        let page = TitlePage::default();
        assert_eq!(page.document_title(), "REQUIREMENT SPECIFICATION DOCUMENT");
        assert_eq!(page.subtitle_lines.len(), 2);
        assert_eq!(page.version, "Version: 1.0");
    }

    #[test]
    fn test_title_page_builder() {
        let page = TitlePage::new("Annual Report")
            .with_subtitle("Operations")
            .with_program("Finance Department")
            .with_submission_date("Submitted: March 3, 2026")
            .with_version("Version: 2.1");
        assert_eq!(page.title_lines, vec!["Annual Report"]);
        assert_eq!(page.subtitle_lines, vec!["Operations"]);
        assert_eq!(page.program, "Finance Department");
        assert_eq!(page.submission_date, "Submitted: March 3, 2026");
        assert_eq!(page.version, "Version: 2.1");
    }

    #[test]
    fn test_new_clears_default_text() {
        let page = TitlePage::new("Annual Report");
        assert!(page.subtitle_lines.is_empty());
        assert!(page.program.is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let page: TitlePage = serde_json::from_str(r#"{"version":"Version: 3"}"#).unwrap();
        assert_eq!(page.version, "Version: 3");
        assert_eq!(page.title_lines, TitlePage::default().title_lines);
    }
}
