pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod render;
pub mod transcript;
pub mod vtt;

pub use config::Config;
pub use error::{Result, SubtextError};
pub use pipeline::{
    render_local_file, render_publication, PipelineConfig, PipelineResult, PipelineStats,
};
