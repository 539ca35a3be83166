//! HTTP client for the meeting transcription service.
//!
//! Three calls: submit an audio file for processing, search past meetings,
//! and build the deterministic report download URL. Report bytes are never
//! fetched here; downloads go through the platform URL handler.

use reqwest::multipart::{Form, Part};
use std::path::Path;
use tokio::fs;
use tokio_util::codec::{BytesCodec, FramedRead};
use tracing::{debug, info};

use super::error::{ApiError, ApiResult};
use super::types::{ErrorDetail, Meeting, SearchResponse, ServiceInfo};

/// Default API host of the meeting service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (trailing slash tolerated).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Report URL for a meeting id: `<base>/download/<id>`.
    pub fn download_url(&self, meeting_id: &str) -> String {
        format!("{}/download/{}", self.base_url, meeting_id)
    }

    /// Submit an audio file for transcription and summarization.
    ///
    /// The file is streamed as the single multipart field `file` with a
    /// MIME type derived from its extension.
    pub async fn transcribe(&self, audio_path: &Path) -> ApiResult<Meeting> {
        let filename = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        let ext = audio_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        let mime_type = mime_type_for_extension(&ext).unwrap_or("application/octet-stream");

        let file = fs::File::open(audio_path).await.map_err(ApiError::File)?;
        let length = file.metadata().await.map_err(ApiError::File)?.len();
        let body = reqwest::Body::wrap_stream(FramedRead::new(file, BytesCodec::new()));

        let part = Part::stream_with_length(body, length)
            .file_name(filename)
            .mime_str(mime_type)?;
        let form = Form::new().part("file", part);

        info!(
            "Uploading {:?} ({} bytes) for transcription",
            audio_path, length
        );

        let response = self
            .client
            .post(format!("{}/transcribe", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(server_error(status, &body));
        }

        let meeting: Meeting = serde_json::from_str(&body).map_err(ApiError::UnexpectedData)?;
        info!(
            "Processed meeting {} ({} action items)",
            meeting.meeting_id,
            meeting.action_items.len()
        );
        Ok(meeting)
    }

    /// Search previously processed meetings by free text.
    pub async fn search(&self, query: &str) -> ApiResult<SearchResponse> {
        debug!("Searching meetings for {:?}", query);

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(server_error(status, &body));
        }

        serde_json::from_str(&body).map_err(ApiError::UnexpectedData)
    }

    /// Liveness probe against the service root.
    pub async fn health(&self) -> ApiResult<ServiceInfo> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(server_error(status, &body));
        }

        serde_json::from_str(&body).map_err(ApiError::UnexpectedData)
    }
}

fn server_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .map(|e| e.detail);
    ApiError::Server { status, detail }
}

/// MIME type for a lowercase audio file extension.
///
/// `None` means the format is not accepted for upload.
pub fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mpeg"),
        "m4a" => Some("audio/mp4"),
        "flac" => Some("audio/flac"),
        "ogg" => Some("audio/ogg"),
        "opus" => Some("audio/opus"),
        _ => None,
    }
}
