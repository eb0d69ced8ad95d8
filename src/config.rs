use crate::error::{Result, SubtextError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default mediator API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://data.jw-api.org/mediator/v1";

/// Client type sent with every media-item lookup.
pub const DEFAULT_CLIENT_TYPE: &str = "tvjworg";

/// Gap between cues (seconds) above which a new paragraph starts.
pub const DEFAULT_PAUSE_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: {}. Use 'text', 'html', or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub client_type: String,
    pub default_language: String,
    pub pause_threshold: f64,
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            client_type: DEFAULT_CLIENT_TYPE.to_string(),
            default_language: "E".to_string(),
            pause_threshold: DEFAULT_PAUSE_THRESHOLD,
            default_format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Load from config file if it exists
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                if let Ok(file_config) = toml::from_str::<Config>(&contents) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables
        if let Ok(url) = std::env::var("SUBTEXT_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Ok(lang) = std::env::var("SUBTEXT_LANGUAGE") {
            config.default_language = lang;
        }
        if let Ok(threshold) = std::env::var("SUBTEXT_PAUSE_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                config.pause_threshold = t;
            }
        }
        if let Ok(format) = std::env::var("SUBTEXT_DEFAULT_FORMAT") {
            if let Ok(f) = format.parse() {
                config.default_format = f;
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(SubtextError::Config(
                "API base URL must not be empty".to_string(),
            ));
        }

        if self.default_language.is_empty() {
            return Err(SubtextError::Config(
                "Default language must not be empty".to_string(),
            ));
        }

        if !self.pause_threshold.is_finite() || self.pause_threshold < 0.0 {
            return Err(SubtextError::Config(format!(
                "Pause threshold must be a non-negative number of seconds, got {}",
                self.pause_threshold
            )));
        }

        Ok(())
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("subtext").join("config.toml"))
    }
}
