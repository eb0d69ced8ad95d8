pub mod parser;

pub use parser::parse;

/// A single timed subtitle entry. Times are in seconds from the start of
/// the media, with `start <= end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Cue {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}
