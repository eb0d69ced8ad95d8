// Plain-text transcript output
use super::{format_timestamp, TranscriptDoc, TranscriptRenderer};

pub struct TextRenderer;

impl TranscriptRenderer for TextRenderer {
    fn render(&self, doc: &TranscriptDoc) -> String {
        let mut output = String::new();

        if let Some(ref title) = doc.title {
            output.push_str(title);
            output.push_str("\n\n");
        }

        for block in &doc.blocks {
            let label = format_timestamp(block.start);
            let mut lines = block.text.lines();

            if let Some(first) = lines.next() {
                output.push_str(&format!("{}  {}\n", label, first));
            } else {
                output.push_str(&format!("{}\n", label));
            }
            // Continuation lines align under the first.
            for line in lines {
                output.push_str(&format!("{:width$}  {}\n", "", line, width = label.len()));
            }
            output.push('\n');
        }

        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
