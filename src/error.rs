use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubtextError {
    #[error("Publication {0} not found")]
    MediaNotFound(String),

    #[error("No subtitle track available for this publication")]
    NoSubtitles,

    #[error("Subtitle track is not valid WebVTT: {0}")]
    VttParse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SubtextError>;
