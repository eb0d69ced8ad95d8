pub mod html;
pub mod json;
pub mod text;

use crate::config::OutputFormat;
use crate::transcript::Block;

/// A fully assembled transcript ready for rendering.
#[derive(Debug, Clone)]
pub struct TranscriptDoc {
    pub title: Option<String>,
    pub language: String,
    pub blocks: Vec<Block>,
}

pub trait TranscriptRenderer {
    fn render(&self, doc: &TranscriptDoc) -> String;
    fn extension(&self) -> &'static str;
}

pub fn create_renderer(format: OutputFormat) -> Box<dyn TranscriptRenderer> {
    match format {
        OutputFormat::Text => Box::new(text::TextRenderer),
        OutputFormat::Html => Box::new(html::HtmlRenderer),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}

/// Format a block start time as `MM:SS`, flooring both components.
pub fn format_timestamp(secs: f64) -> String {
    let minutes = (secs / 60.0).floor();
    let seconds = (secs % 60.0).floor();
    format!("{:02}:{:02}", minutes as u64, seconds as u64)
}
