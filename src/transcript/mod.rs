//! The transcript core: pause detection and paragraph grouping.
//!
//! A flat, time-ordered cue sequence goes in; paragraph blocks come out.
//! Cues separated by more than the pause threshold are treated as belonging
//! to different paragraphs. Both passes are pure and synchronous, safe to
//! call from any number of concurrent requests.

pub mod annotate;
pub mod merge;

pub use annotate::{annotate, AnnotatedCue};
pub use merge::{merge, Block};

use crate::vtt::Cue;

/// Group cues into paragraph blocks: annotate pauses, then merge.
pub fn group_into_blocks(cues: &[Cue], threshold: f64) -> Vec<Block> {
    merge(&annotate(cues, threshold))
}
