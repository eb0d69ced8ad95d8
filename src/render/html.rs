// Standalone HTML transcript page
use super::{format_timestamp, TranscriptDoc, TranscriptRenderer};

pub struct HtmlRenderer;

impl TranscriptRenderer for HtmlRenderer {
    fn render(&self, doc: &TranscriptDoc) -> String {
        let title = doc.title.as_deref().unwrap_or("Transcript");
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!("<html lang=\"{}\">\n", escape(&doc.language)));
        output.push_str("<head>\n<meta charset=\"utf-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", escape(title)));
        output.push_str(STYLE);
        output.push_str("</head>\n<body>\n<div class=\"output\">\n");
        output.push_str(&format!("<h1>{}</h1>\n", escape(title)));

        for block in &doc.blocks {
            output.push_str("<div class=\"row\">\n");
            output.push_str(&format!(
                "<div class=\"timeTag\" data-time=\"{}\">{}</div>\n",
                block.start,
                format_timestamp(block.start)
            ));
            // Block text keeps its internal line breaks; white-space: pre-line
            // turns them into rendered lines.
            output.push_str(&format!(
                "<div class=\"text\">{}</div>\n",
                escape(&block.text)
            ));
            output.push_str("</div>\n");
        }

        output.push_str("</div>\n</body>\n</html>\n");
        output
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

const STYLE: &str = "<style>\n\
    body { font-family: sans-serif; max-width: 40em; margin: 2em auto; }\n\
    .row { display: flex; margin-bottom: 1em; }\n\
    .timeTag { color: #888; margin-right: 1em; white-space: nowrap; }\n\
    .text { white-space: pre-line; }\n\
    </style>\n";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
