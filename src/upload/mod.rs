//! Upload form: pick a local audio file and submit it for processing.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

use crate::api::{mime_type_for_extension, ApiClient};
use crate::app::UiStateHandle;

pub struct UploadForm {
    client: Arc<ApiClient>,
    state: UiStateHandle,
    selected: Option<PathBuf>,
    status: Option<String>,
}

impl UploadForm {
    pub fn new(client: Arc<ApiClient>, state: UiStateHandle) -> Self {
        Self {
            client,
            state,
            selected: None,
            status: None,
        }
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Local status line ("Uploading ...", "Successfully processed ...").
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Store the chosen file and clear any prior status text and error.
    ///
    /// A file that does not exist or is not a supported audio format is
    /// rejected and the selection is cleared.
    pub async fn select_file(&mut self, path: PathBuf) {
        if let Err(err) = validate_file(&path) {
            self.selected = None;
            self.state.report_error(err.to_string()).await;
            return;
        }
        self.selected = Some(path);
        self.status = None;
        self.state.report_error("").await;
    }

    /// Submit the selected file for transcription.
    ///
    /// Without a selection this reports an error and issues no request.
    /// Otherwise every outcome flows through the shared state, and the
    /// in-flight count is released exactly once.
    pub async fn submit(&mut self) {
        let Some(path) = self.selected.clone() else {
            self.state
                .report_error("Please select an audio file first.")
                .await;
            return;
        };
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        self.state.begin_request().await;
        self.status = Some(format!(
            "Uploading \"{name}\" and processing... please wait."
        ));
        self.state.report_error("").await;

        let result = self.client.transcribe(&path).await;
        self.state.finish_request().await;

        match result {
            Ok(meeting) => {
                self.status = Some(format!("Successfully processed \"{name}\"!"));
                self.state.accept_meeting(meeting).await;
            }
            Err(err) => {
                warn!("Upload failed: {err}");
                self.status = None;
                self.state
                    .report_error(format!("Upload failed: {err}"))
                    .await;
            }
        }
    }
}

/// Check that the file exists and has a supported audio format.
pub fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if mime_type_for_extension(&ext).is_none() {
        bail!(
            "Unsupported format: .{}\nSupported formats: wav, mp3, m4a, flac, ogg, opus",
            ext
        );
    }

    Ok(())
}
