use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use subtext::config::{Config, OutputFormat};
use subtext::fetch::MediatorClient;
use subtext::pipeline::{self, PipelineConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "subtext")]
#[command(version, about = "Render a publication's subtitles as a transcript")]
#[command(
    long_about = "Fetch a video publication's WebVTT subtitle track and render it as a time-stamped, paragraph-grouped transcript."
)]
struct Cli {
    /// Publication id to look up
    #[arg(required_unless_present = "input")]
    pub_id: Option<String>,

    /// Language code (e.g. E for English)
    #[arg(short, long)]
    language: Option<String>,

    /// Output format: text, html, json
    #[arg(short, long)]
    format: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render a local .vtt file instead of fetching from the API
    #[arg(short, long, conflicts_with = "pub_id")]
    input: Option<PathBuf>,

    /// Pause length in seconds that starts a new paragraph
    #[arg(long)]
    threshold: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load and validate configuration
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // CLI flags override config defaults
    let format: OutputFormat = match cli.format {
        Some(f) => f.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => config.default_format,
    };

    let pipeline_config = PipelineConfig {
        language: cli.language.unwrap_or(config.default_language),
        format,
        pause_threshold: cli.threshold.unwrap_or(config.pause_threshold),
        // Spinners would corrupt output that goes to stdout
        show_progress: cli.output.is_some(),
    };

    let result = match (&cli.input, &cli.pub_id) {
        (Some(path), _) => pipeline::render_local_file(path, &pipeline_config).await?,
        (None, Some(pub_id)) => {
            let client = MediatorClient::new()
                .with_base_url(config.api_base_url)
                .with_client_type(config.client_type);
            pipeline::render_publication(&client, pub_id, &pipeline_config).await?
        }
        (None, None) => unreachable!("clap requires pub_id or --input"),
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &result.rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} paragraphs to {}",
                result.stats.blocks,
                path.display()
            );
        }
        None => print!("{}", result.rendered),
    }

    Ok(())
}
