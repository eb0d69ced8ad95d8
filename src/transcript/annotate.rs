use crate::vtt::Cue;

/// A cue flagged with whether it opens a new paragraph block.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedCue {
    pub cue: Cue,
    pub starts_block: bool,
}

/// Flag each cue that follows a pause longer than `threshold` seconds.
///
/// The first cue always starts a block. Every later cue starts a block
/// exactly when the gap since the previous cue's end exceeds the threshold.
/// Overlapping cues produce a negative gap and never start a block.
///
/// Pure over the original cue times, so the flags do not depend on each
/// other and the result is the same regardless of evaluation order.
pub fn annotate(cues: &[Cue], threshold: f64) -> Vec<AnnotatedCue> {
    cues.iter()
        .enumerate()
        .map(|(i, cue)| {
            let starts_block = match i {
                0 => true,
                _ => cue.start - cues[i - 1].end > threshold,
            };
            AnnotatedCue {
                cue: cue.clone(),
                starts_block,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(text: &str, start: f64, end: f64) -> Cue {
        Cue::new(text, start, end)
    }

    #[test]
    fn test_annotate_empty() {
        assert!(annotate(&[], 0.1).is_empty());
    }

    #[test]
    fn test_annotate_first_cue_always_starts_block() {
        let cues = vec![cue("Hi", 0.0, 1.0)];
        let annotated = annotate(&cues, 0.1);
        assert_eq!(annotated.len(), 1);
        assert!(annotated[0].starts_block);
    }

    #[test]
    fn test_annotate_preserves_length_and_order() {
        let cues = vec![
            cue("a", 0.0, 1.0),
            cue("b", 1.05, 2.0),
            cue("c", 2.5, 3.0),
        ];
        let annotated = annotate(&cues, 0.1);

        assert_eq!(annotated.len(), cues.len());
        for (a, c) in annotated.iter().zip(&cues) {
            assert_eq!(&a.cue, c);
        }
    }

    #[test]
    fn test_annotate_small_gap_continues_block() {
        let cues = vec![cue("Hello", 0.0, 1.0), cue("world", 1.05, 2.0)];
        let annotated = annotate(&cues, 0.1);
        assert!(!annotated[1].starts_block);
    }

    #[test]
    fn test_annotate_large_gap_starts_block() {
        let cues = vec![cue("Hello", 0.0, 1.0), cue("world", 1.5, 2.0)];
        let annotated = annotate(&cues, 0.1);
        assert!(annotated[1].starts_block);
    }

    #[test]
    fn test_annotate_gap_exactly_at_threshold_continues() {
        // The rule is strictly greater than. 1.5 - 1.0 is exactly 0.5 in
        // f64, so this gap sits precisely on the threshold.
        let cues = vec![cue("a", 0.0, 1.0), cue("b", 1.5, 2.0)];
        let annotated = annotate(&cues, 0.5);
        assert!(!annotated[1].starts_block);
    }

    #[test]
    fn test_annotate_overlap_never_starts_block() {
        let cues = vec![cue("a", 0.0, 2.0), cue("b", 1.0, 3.0)];
        let annotated = annotate(&cues, 0.1);
        assert!(!annotated[1].starts_block);
    }

    #[test]
    fn test_annotate_custom_threshold() {
        let cues = vec![cue("a", 0.0, 1.0), cue("b", 1.5, 2.0)];

        let strict = annotate(&cues, 0.1);
        assert!(strict[1].starts_block);

        let relaxed = annotate(&cues, 1.0);
        assert!(!relaxed[1].starts_block);
    }
}
