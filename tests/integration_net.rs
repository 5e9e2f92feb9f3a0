// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the network module using wiremock.
//!
//! Covers byte, string and JSON downloads, custom headers and HTTP errors.

use obs_translation_updater::error::{NetworkError, SyncError};
use obs_translation_updater::net::{Downloader, ProgressDisplay};
use serde::Deserialize;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn expect_network_error(err: SyncError) -> NetworkError {
    match err {
        SyncError::Network(boxed) => *boxed,
        other => panic!("Expected SyncError::Network, got {other:?}"),
    }
}

// =============================================================================
// download_bytes
// =============================================================================

#[tokio::test]
async fn test_download_bytes_success() {
    let mock_server = MockServer::start().await;
    let body: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    Mock::given(method("GET"))
        .and(path("/builds/1.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&mock_server)
        .await;

    let bytes = Downloader::new()
        .url(format!("{}/builds/1.zip", mock_server.uri()))
        .progress(ProgressDisplay::Spinner)
        .download_bytes()
        .await
        .unwrap();

    assert_eq!(bytes, body);
}

#[tokio::test]
async fn test_download_bytes_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let bytes = Downloader::new()
        .url(format!("{}/empty", mock_server.uri()))
        .progress(ProgressDisplay::Bar)
        .download_bytes()
        .await
        .unwrap();

    assert!(bytes.is_empty());
}

// =============================================================================
// download_string
// =============================================================================

#[tokio::test]
async fn test_download_string_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello, World!"))
        .mount(&mock_server)
        .await;

    let text = Downloader::new()
        .url(format!("{}/test.txt", mock_server.uri()))
        .download_string()
        .await
        .unwrap();

    assert_eq!(text, "Hello, World!");
}

#[tokio::test]
async fn test_download_string_http_errors() {
    for (status, file) in [(403, "expired.zip"), (404, "missing.txt"), (500, "error.txt")] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/{file}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        let url = format!("{}/{file}", mock_server.uri());
        let err = Downloader::new().url(&url).download_string().await.unwrap_err();

        match expect_network_error(err) {
            NetworkError::HttpError {
                status: actual,
                url: actual_url,
            } => {
                assert_eq!(actual, status);
                assert_eq!(actual_url, url);
            }
            other => panic!("Expected NetworkError::HttpError for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_download_without_url() {
    let err = Downloader::new().download_string().await.unwrap_err();
    assert!(matches!(
        expect_network_error(err),
        NetworkError::InvalidUrl(_)
    ));
}

#[tokio::test]
async fn test_download_sends_custom_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signed"))
        .and(header("X-Request-Id", "sync-42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let text = Downloader::new()
        .url(format!("{}/signed", mock_server.uri()))
        .header("X-Request-Id", "sync-42")
        .silent()
        .download_string()
        .await
        .unwrap();

    assert_eq!(text, "ok");
}

// =============================================================================
// download_json
// =============================================================================

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct Language {
    id: String,
    name: String,
}

#[tokio::test]
async fn test_download_json_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/language.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "de",
                "name": "German"
            })),
        )
        .mount(&mock_server)
        .await;

    let language: Language = Downloader::new()
        .url(format!("{}/language.json", mock_server.uri()))
        .download_json()
        .await
        .unwrap();

    assert_eq!(
        language,
        Language {
            id: "de".to_string(),
            name: "German".to_string()
        }
    );
}

#[tokio::test]
async fn test_download_json_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/broken.json", mock_server.uri());
    let err = Downloader::new()
        .url(&url)
        .download_json::<Language>()
        .await
        .unwrap_err();

    match expect_network_error(err) {
        NetworkError::InvalidResponse { url: actual, .. } => assert_eq!(actual, url),
        other => panic!("Expected NetworkError::InvalidResponse, got {other:?}"),
    }
}
