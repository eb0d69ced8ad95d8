use crate::config::{OutputFormat, DEFAULT_PAUSE_THRESHOLD};
use crate::error::Result;
use crate::fetch::MediatorClient;
use crate::render::{create_renderer, TranscriptDoc};
use crate::transcript::group_into_blocks;
use crate::vtt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for one transcript run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Language code for the media-item lookup.
    pub language: String,
    /// Output rendering format.
    pub format: OutputFormat,
    /// Gap between cues (seconds) above which a new paragraph starts.
    pub pause_threshold: f64,
    /// Show progress spinners during network stages.
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: "E".to_string(),
            format: OutputFormat::default(),
            pause_threshold: DEFAULT_PAUSE_THRESHOLD,
            show_progress: true,
        }
    }
}

/// Statistics from a transcript run.
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Total time taken, network included.
    pub total_time: Duration,
    /// Time spent on the two network fetches.
    pub fetch_time: Duration,
    /// Number of parsed cues.
    pub cues: usize,
    /// Number of paragraph blocks after merging.
    pub blocks: usize,
}

/// Result of a transcript run.
#[derive(Debug)]
pub struct PipelineResult {
    /// The assembled transcript document.
    pub doc: TranscriptDoc,
    /// The rendered output in the requested format.
    pub rendered: String,
    /// Run statistics.
    pub stats: PipelineStats,
}

/// Fetch a publication's subtitle track and render its transcript.
///
/// Sequential flow: fetch metadata, fetch the referenced subtitle track,
/// parse, group into paragraphs, render. The grouping core is pure and
/// stateless, so concurrent invocations need no coordination.
pub async fn render_publication(
    client: &MediatorClient,
    pub_id: &str,
    pipeline_config: &PipelineConfig,
) -> Result<PipelineResult> {
    let start_time = Instant::now();

    info!(
        "Looking up publication {} (language {})",
        pub_id, pipeline_config.language
    );
    let spinner = make_spinner(pipeline_config.show_progress, "Fetching metadata...");

    let fetch_start = Instant::now();
    let item = client
        .media_item(&pipeline_config.language, pub_id)
        .await?;
    let track_url = item.subtitle_url()?.to_string();
    debug!("Subtitle track: {}", track_url);

    if let Some(ref pb) = spinner {
        pb.set_message("Downloading subtitle track...");
    }
    let raw = client.fetch_track(&track_url).await?;
    let fetch_time = fetch_start.elapsed();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    info!(
        "Fetched {} bytes of subtitles in {:.2}s",
        raw.len(),
        fetch_time.as_secs_f64()
    );

    let mut result = assemble(&raw, Some(item.title), pipeline_config)?;
    result.stats.fetch_time = fetch_time;
    result.stats.total_time = start_time.elapsed();
    Ok(result)
}

/// Render a transcript from a local subtitle file, skipping the network.
pub async fn render_local_file(
    path: &Path,
    pipeline_config: &PipelineConfig,
) -> Result<PipelineResult> {
    let start_time = Instant::now();

    info!("Reading subtitle file {:?}", path);
    let raw = tokio::fs::read_to_string(path).await?;

    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned());

    let mut result = assemble(&raw, title, pipeline_config)?;
    result.stats.total_time = start_time.elapsed();
    Ok(result)
}

/// Parse, group, and render raw VTT text. The synchronous tail of both
/// entry points.
fn assemble(
    raw: &str,
    title: Option<String>,
    pipeline_config: &PipelineConfig,
) -> Result<PipelineResult> {
    let cues = vtt::parse(raw)?;
    let blocks = group_into_blocks(&cues, pipeline_config.pause_threshold);
    info!(
        "Grouped {} cues into {} paragraphs (threshold {}s)",
        cues.len(),
        blocks.len(),
        pipeline_config.pause_threshold
    );

    let stats = PipelineStats {
        total_time: Duration::ZERO,
        fetch_time: Duration::ZERO,
        cues: cues.len(),
        blocks: blocks.len(),
    };

    let doc = TranscriptDoc {
        title,
        language: pipeline_config.language.clone(),
        blocks,
    };

    let renderer = create_renderer(pipeline_config.format);
    let rendered = renderer.render(&doc);

    Ok(PipelineResult {
        doc,
        rendered,
        stats,
    })
}

fn make_spinner(show_progress: bool, message: &'static str) -> Option<ProgressBar> {
    if !show_progress {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}
