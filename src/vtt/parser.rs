//! WebVTT parsing.
//!
//! Parses a WebVTT document into a time-ordered sequence of [`Cue`]s.
//! Handles optional cue identifiers, multi-line payloads, and NOTE / STYLE /
//! REGION blocks. Inline markup tags are stripped from payload text.

use crate::error::{Result, SubtextError};
use crate::vtt::Cue;
use regex::Regex;
use std::sync::LazyLock;

/// Cue timing line: `[HH:]MM:SS.mmm --> [HH:]MM:SS.mmm`, with optional
/// settings after the second timestamp.
static TIMING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(\d+):)?(\d{2}):(\d{2})[.,](\d{3})[ \t]*-->[ \t]*(?:(\d+):)?(\d{2}):(\d{2})[.,](\d{3})",
    )
    .unwrap()
});

/// Inline markup: `<c.class>`, `<i>`, `</v>`, `<00:00:01.000>`, etc.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Parse a WebVTT document.
///
/// Returns a distinguishable error when the input is not valid WebVTT:
/// a missing `WEBVTT` header or a malformed cue timing line.
pub fn parse(raw: &str) -> Result<Vec<Cue>> {
    let input = raw.trim_start_matches('\u{feff}');

    let mut lines = input.lines();

    // Header line may carry trailing metadata ("WEBVTT - description").
    let header = lines.next().unwrap_or("");
    if header != "WEBVTT" && !header.starts_with("WEBVTT ") && !header.starts_with("WEBVTT\t") {
        return Err(SubtextError::VttParse(
            "missing WEBVTT header".to_string(),
        ));
    }

    let mut cues = Vec::new();

    while let Some(first) = next_block_line(&mut lines) {
        // Non-cue blocks are skipped wholesale.
        if first.starts_with("NOTE") || first.starts_with("STYLE") || first.starts_with("REGION") {
            skip_block(&mut lines);
            continue;
        }

        // A cue block is an optional identifier line followed by a timing line.
        let timing_line = if first.contains("-->") {
            first
        } else {
            match lines.next() {
                Some(line) if line.contains("-->") => line,
                _ => {
                    return Err(SubtextError::VttParse(format!(
                        "expected cue timing line after '{}'",
                        first
                    )))
                }
            }
        };

        let (start, end) = parse_timing_line(timing_line)?;

        let mut payload: Vec<String> = Vec::new();
        for line in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            payload.push(strip_tags(line));
        }

        cues.push(Cue {
            text: payload.join("\n"),
            start,
            end,
        });
    }

    Ok(cues)
}

/// Advance past blank lines to the first line of the next block.
fn next_block_line<'a, I>(lines: &mut I) -> Option<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    for line in lines.by_ref() {
        if !line.trim().is_empty() {
            return Some(line);
        }
    }
    None
}

/// Consume the remainder of the current block, up to its trailing blank line.
fn skip_block<'a, I>(lines: &mut I)
where
    I: Iterator<Item = &'a str>,
{
    for line in lines.by_ref() {
        if line.trim().is_empty() {
            break;
        }
    }
}

fn parse_timing_line(line: &str) -> Result<(f64, f64)> {
    let caps = TIMING_REGEX.captures(line).ok_or_else(|| {
        SubtextError::VttParse(format!("malformed cue timing line: '{}'", line))
    })?;

    let start = timestamp_seconds(&caps, 1, line)?;
    let end = timestamp_seconds(&caps, 5, line)?;

    if end < start {
        return Err(SubtextError::VttParse(format!(
            "cue ends before it starts: '{}'",
            line
        )));
    }

    Ok((start, end))
}

/// Convert one captured timestamp (4 groups starting at `base`) to seconds.
fn timestamp_seconds(caps: &regex::Captures<'_>, base: usize, line: &str) -> Result<f64> {
    let component = |i: usize| -> Result<u64> {
        match caps.get(base + i) {
            Some(m) => m.as_str().parse().map_err(|_| {
                SubtextError::VttParse(format!("invalid timestamp components in '{}'", line))
            }),
            None => Ok(0),
        }
    };

    let hours = component(0)?;
    let minutes = component(1)?;
    let seconds = component(2)?;
    let millis = component(3)?;

    // Hours are unbounded; minutes and seconds are not.
    if minutes >= 60 || seconds >= 60 {
        return Err(SubtextError::VttParse(format!(
            "invalid timestamp components in '{}'",
            line
        )));
    }

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + millis as f64 / 1000.0)
}

fn strip_tags(line: &str) -> String {
    TAG_REGEX.replace_all(line, "").to_string()
}
