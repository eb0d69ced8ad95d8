// JSON transcript output
use super::{format_timestamp, TranscriptDoc, TranscriptRenderer};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonOutput {
    metadata: JsonMetadata,
    blocks: Vec<JsonBlock>,
}

#[derive(Serialize)]
struct JsonMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    language: String,
    block_count: usize,
}

#[derive(Serialize)]
struct JsonBlock {
    start: f64,
    start_formatted: String,
    text: String,
}

impl TranscriptRenderer for JsonRenderer {
    fn render(&self, doc: &TranscriptDoc) -> String {
        let output = JsonOutput {
            metadata: JsonMetadata {
                title: doc.title.clone(),
                language: doc.language.clone(),
                block_count: doc.blocks.len(),
            },
            blocks: doc
                .blocks
                .iter()
                .map(|b| JsonBlock {
                    start: b.start,
                    start_formatted: format_timestamp(b.start),
                    text: b.text.clone(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
