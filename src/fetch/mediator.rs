use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_CLIENT_TYPE};
use crate::error::{Result, SubtextError};
use serde::Deserialize;
use tracing::debug;

/// Client for the mediator media-items API.
pub struct MediatorClient {
    client: reqwest::Client,
    base_url: String,
    client_type: String,
}

impl Default for MediatorClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MediatorClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            client_type: DEFAULT_CLIENT_TYPE.to_string(),
        }
    }

    /// Point the client at a different API endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the client type sent with every lookup.
    pub fn with_client_type(mut self, client_type: impl Into<String>) -> Self {
        self.client_type = client_type.into();
        self
    }

    /// Look up a publication's media item by language code and publication id.
    pub async fn media_item(&self, lang: &str, pub_id: &str) -> Result<MediaItem> {
        let url = format!(
            "{}/media-items/{}/{}?clientType={}",
            self.base_url, lang, pub_id, self.client_type
        );
        debug!("Fetching media item: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubtextError::Api(format!(
                "media item lookup failed ({}): {}",
                status, url
            )));
        }

        let body: MediaItemResponse = response.json().await?;
        body.media
            .into_iter()
            .next()
            .ok_or_else(|| SubtextError::MediaNotFound(pub_id.to_string()))
    }

    /// Download the raw subtitle track text.
    pub async fn fetch_track(&self, url: &str) -> Result<String> {
        debug!("Fetching subtitle track: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubtextError::Api(format!(
                "subtitle track download failed ({}): {}",
                status, url
            )));
        }

        Ok(response.text().await?)
    }
}

// API response types

#[derive(Debug, Deserialize)]
struct MediaItemResponse {
    #[serde(default)]
    media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub title: String,
    #[serde(default)]
    pub files: Vec<MediaFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaFile {
    #[serde(default)]
    pub subtitles: Option<SubtitleTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubtitleTrack {
    pub url: String,
}

impl MediaItem {
    /// URL of the first subtitle track carried by any of the item's files.
    pub fn subtitle_url(&self) -> Result<&str> {
        self.files
            .iter()
            .find_map(|f| f.subtitles.as_ref())
            .map(|s| s.url.as_str())
            .ok_or(SubtextError::NoSubtitles)
    }
}
