//! Report rendering: markdown source to paginated PDF.

mod decorator;
mod json;
mod options;
mod report;
mod result;

pub use decorator::{page_label, ReportDecorator};
pub use json::{to_json, JsonFormat};
pub use options::{
    ReportOptions, DEFAULT_HEADER_TITLE, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
pub use report::{render_markdown, ReportRenderer};
pub use result::{RenderOutput, RenderStats};
