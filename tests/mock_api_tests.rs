//! Mock API tests for the mediator client and the fetch-to-render pipeline
//!
//! A wiremock server stands in for the media-items API and the subtitle CDN.

use serde_json::json;
use subtext::config::OutputFormat;
use subtext::fetch::MediatorClient;
use subtext::pipeline::{render_publication, PipelineConfig};
use subtext::SubtextError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_VTT: &str = "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nHello\n\n00:00:01.050 --> 00:00:02.000\nworld\n\n00:00:05.000 --> 00:00:06.000\nA new thought\n";

fn test_client(server: &MockServer) -> MediatorClient {
    MediatorClient::new()
        .with_base_url(server.uri())
        .with_client_type("testclient")
}

fn pipeline_config() -> PipelineConfig {
    PipelineConfig {
        show_progress: false,
        ..PipelineConfig::default()
    }
}

async fn mount_media_item(server: &MockServer, pub_id: &str, track_url: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/media-items/E/{}", pub_id)))
        .and(query_param("clientType", "testclient"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "media": [{
                "title": "A Sample Talk",
                "files": [{ "subtitles": { "url": track_url } }]
            }]
        })))
        .mount(server)
        .await;
}

async fn mount_track(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/tracks/sample.vtt"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/vtt"))
        .mount(server)
        .await;
}

// ============================================================================
// Mediator client tests
// ============================================================================

mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_media_item_lookup() {
        let server = MockServer::start().await;
        mount_media_item(&server, "pub-1", "https://example.org/x.vtt").await;

        let item = test_client(&server).media_item("E", "pub-1").await.unwrap();

        assert_eq!(item.title, "A Sample Talk");
        assert_eq!(item.subtitle_url().unwrap(), "https://example.org/x.vtt");
    }

    #[tokio::test]
    async fn test_media_item_not_found_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media-items/E/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = test_client(&server).media_item("E", "missing").await;
        assert!(matches!(result, Err(SubtextError::Api(_))));
    }

    #[tokio::test]
    async fn test_media_item_empty_media_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media-items/E/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "media": [] })))
            .mount(&server)
            .await;

        let result = test_client(&server).media_item("E", "empty").await;
        assert!(matches!(result, Err(SubtextError::MediaNotFound(id)) if id == "empty"));
    }

    #[tokio::test]
    async fn test_media_item_without_subtitles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media-items/E/nosubs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "media": [{ "title": "Silent", "files": [{}] }]
            })))
            .mount(&server)
            .await;

        let item = test_client(&server).media_item("E", "nosubs").await.unwrap();
        assert!(matches!(
            item.subtitle_url(),
            Err(SubtextError::NoSubtitles)
        ));
    }

    #[tokio::test]
    async fn test_fetch_track() {
        let server = MockServer::start().await;
        mount_track(&server, SAMPLE_VTT).await;

        let raw = test_client(&server)
            .fetch_track(&format!("{}/tracks/sample.vtt", server.uri()))
            .await
            .unwrap();
        assert!(raw.starts_with("WEBVTT"));
    }

    #[tokio::test]
    async fn test_fetch_track_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tracks/gone.vtt"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = test_client(&server)
            .fetch_track(&format!("{}/tracks/gone.vtt", server.uri()))
            .await;
        assert!(matches!(result, Err(SubtextError::Api(_))));
    }
}

// ============================================================================
// End-to-end pipeline tests
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn test_render_publication_end_to_end() {
        let server = MockServer::start().await;
        let track_url = format!("{}/tracks/sample.vtt", server.uri());
        mount_media_item(&server, "pub-1", &track_url).await;
        mount_track(&server, SAMPLE_VTT).await;

        let client = test_client(&server);
        let result = render_publication(&client, "pub-1", &pipeline_config())
            .await
            .unwrap();

        assert_eq!(result.doc.title.as_deref(), Some("A Sample Talk"));
        assert_eq!(result.stats.cues, 3);
        assert_eq!(result.stats.blocks, 2);
        assert_eq!(result.doc.blocks[0].text, "Hello\nworld");
        assert_eq!(result.doc.blocks[1].start, 5.0);
        assert!(result.rendered.contains("A Sample Talk"));
        assert!(result.rendered.contains("00:00  Hello"));
    }

    #[tokio::test]
    async fn test_render_publication_html_output() {
        let server = MockServer::start().await;
        let track_url = format!("{}/tracks/sample.vtt", server.uri());
        mount_media_item(&server, "pub-1", &track_url).await;
        mount_track(&server, SAMPLE_VTT).await;

        let config = PipelineConfig {
            format: OutputFormat::Html,
            ..pipeline_config()
        };
        let client = test_client(&server);
        let result = render_publication(&client, "pub-1", &config).await.unwrap();

        assert!(result.rendered.starts_with("<!DOCTYPE html>"));
        assert!(result.rendered.contains("<h1>A Sample Talk</h1>"));
        assert!(result.rendered.contains(">00:05</div>"));
    }

    #[tokio::test]
    async fn test_render_publication_invalid_track() {
        let server = MockServer::start().await;
        let track_url = format!("{}/tracks/sample.vtt", server.uri());
        mount_media_item(&server, "pub-1", &track_url).await;
        mount_track(&server, "this is not vtt").await;

        let client = test_client(&server);
        let result = render_publication(&client, "pub-1", &pipeline_config()).await;

        assert!(matches!(result, Err(SubtextError::VttParse(_))));
    }

    #[tokio::test]
    async fn test_render_publication_custom_threshold() {
        let server = MockServer::start().await;
        let track_url = format!("{}/tracks/sample.vtt", server.uri());
        mount_media_item(&server, "pub-1", &track_url).await;
        mount_track(&server, SAMPLE_VTT).await;

        // A 5-second threshold swallows the pause before "A new thought".
        let config = PipelineConfig {
            pause_threshold: 5.0,
            ..pipeline_config()
        };
        let client = test_client(&server);
        let result = render_publication(&client, "pub-1", &config).await.unwrap();

        assert_eq!(result.stats.blocks, 1);
    }
}
