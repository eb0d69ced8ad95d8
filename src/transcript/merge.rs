use super::annotate::AnnotatedCue;

/// A paragraph of consecutive cues not separated by a significant pause.
/// `start` is the start time of the first constituent cue, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub start: f64,
    pub text: String,
}

/// Fold annotated cues into paragraph blocks.
///
/// A cue with `starts_block` set opens a new block; every other cue is
/// appended to the open block with a newline separator, leaving the block's
/// start time unchanged. Total over any input: the output has exactly one
/// block per `starts_block` flag, and every cue lands in exactly one block
/// in its original position.
pub fn merge(annotated: &[AnnotatedCue]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for entry in annotated {
        match blocks.last_mut() {
            Some(open) if !entry.starts_block => {
                open.text.push('\n');
                open.text.push_str(&entry.cue.text);
            }
            _ => blocks.push(Block {
                start: entry.cue.start,
                text: entry.cue.text.clone(),
            }),
        }
    }

    blocks
}
