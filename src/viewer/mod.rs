//! Renders the most recent meeting notes and triggers report downloads.

use std::sync::Arc;
use tracing::{info, warn};

use crate::api::{ApiClient, Meeting};
use crate::app::UiStateHandle;

pub struct NotesView {
    client: Arc<ApiClient>,
    state: UiStateHandle,
    open_reports: bool,
}

impl NotesView {
    pub fn new(client: Arc<ApiClient>, state: UiStateHandle) -> Self {
        Self {
            client,
            state,
            open_reports: true,
        }
    }

    /// When disabled, downloads surface the report URL as a notice instead
    /// of launching the platform URL handler (headless machines).
    pub fn with_open_reports(mut self, open_reports: bool) -> Self {
        self.open_reports = open_reports;
        self
    }

    /// Render the meeting notes, or the placeholder prompt when there is no
    /// meeting (or it is missing an id).
    pub fn render(meeting: Option<&Meeting>) -> String {
        let Some(meeting) = meeting.filter(|m| !m.meeting_id.is_empty()) else {
            return "Upload an audio file to see the results here.".to_string();
        };

        let mut out = format!("Meeting Results (ID: {})\n", meeting.meeting_id);
        if let Some(filename) = &meeting.filename {
            out.push_str(&format!("File: {}\n", filename));
        }

        out.push_str("\nSummary:\n");
        if meeting.summary.is_empty() {
            out.push_str("No summary generated.\n");
        } else {
            out.push_str(&meeting.summary);
            out.push('\n');
        }

        out.push_str("\nAction Items:\n");
        if meeting.action_items.is_empty() {
            out.push_str("No action items identified.\n");
        } else {
            for item in &meeting.action_items {
                out.push_str(&format!("  - {}\n", item));
            }
        }

        if let Some(preview) = &meeting.transcript_preview {
            out.push_str("\nTranscript Preview:\n");
            out.push_str(preview);
            out.push('\n');
        }

        out
    }

    /// Fire-and-forget report download for the given meeting id.
    ///
    /// "Success" means the request was issued to the URL handler, not that
    /// a file was received; there is no completion confirmation.
    pub async fn download(&self, meeting_id: Option<&str>) {
        let Some(id) = meeting_id.filter(|id| !id.is_empty()) else {
            self.state
                .report_error("Cannot download - Meeting ID is missing.")
                .await;
            return;
        };

        self.state.begin_request().await;
        self.state.report_error("").await;

        let url = self.client.download_url(id);
        info!("Triggering report download from {url}");

        if self.open_reports {
            match open::that_detached(&url) {
                Ok(()) => {
                    self.state
                        .report_info(format!("Report download started for meeting {id}."))
                        .await;
                }
                Err(err) => {
                    warn!("Failed to launch URL handler: {err}");
                    self.state
                        .report_error(format!("Failed to initiate download for {id}."))
                        .await;
                }
            }
        } else {
            self.state
                .report_info(format!("Report for meeting {id} available at {url}"))
                .await;
        }

        // Released whether or not the trigger succeeded.
        self.state.finish_request().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NoticeKind;

    fn meeting() -> Meeting {
        Meeting {
            meeting_id: "abc123".to_string(),
            filename: Some("standup.wav".to_string()),
            transcript_preview: Some("Good morning...".to_string()),
            summary: "Discussed the release.".to_string(),
            action_items: vec!["Ship it".to_string(), "Book the retro".to_string()],
        }
    }

    fn view() -> (NotesView, UiStateHandle) {
        let state = UiStateHandle::default();
        let view = NotesView::new(
            Arc::new(ApiClient::new("http://localhost:8000")),
            state.clone(),
        )
        .with_open_reports(false);
        (view, state)
    }

    #[test]
    fn test_render_placeholder_when_absent() {
        assert_eq!(
            NotesView::render(None),
            "Upload an audio file to see the results here."
        );
    }

    #[test]
    fn test_render_placeholder_when_id_missing() {
        let mut m = meeting();
        m.meeting_id.clear();
        assert_eq!(
            NotesView::render(Some(&m)),
            "Upload an audio file to see the results here."
        );
    }

    #[test]
    fn test_render_full_notes() {
        let out = NotesView::render(Some(&meeting()));
        assert!(out.contains("Meeting Results (ID: abc123)"));
        assert!(out.contains("File: standup.wav"));
        assert!(out.contains("Discussed the release."));
        assert!(out.contains("  - Ship it"));
        assert!(out.contains("Transcript Preview:"));
    }

    #[test]
    fn test_render_empty_action_items() {
        let mut m = meeting();
        m.action_items.clear();
        let out = NotesView::render(Some(&m));
        assert!(out.contains("No action items identified."));
        assert!(!out.contains("  - "));
    }

    #[test]
    fn test_render_empty_summary() {
        let mut m = meeting();
        m.summary.clear();
        assert!(NotesView::render(Some(&m)).contains("No summary generated."));
    }

    #[tokio::test]
    async fn test_download_without_id_reports_error() {
        let (view, state) = view();
        view.download(None).await;

        let snapshot = state.snapshot().await;
        assert_eq!(
            snapshot.notice.map(|n| n.message),
            Some("Cannot download - Meeting ID is missing.".to_string())
        );
        assert_eq!(snapshot.in_flight, 0);
    }

    #[tokio::test]
    async fn test_download_empty_id_reports_error() {
        let (view, state) = view();
        view.download(Some("")).await;
        assert!(state.snapshot().await.notice.is_some());
    }

    #[tokio::test]
    async fn test_download_constructs_deterministic_url() {
        let (view, state) = view();
        view.download(Some("abc123")).await;

        let snapshot = state.snapshot().await;
        let notice = snapshot.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice
            .message
            .contains("http://localhost:8000/download/abc123"));
        // Trigger issued and the in-flight count released exactly once.
        assert_eq!(snapshot.in_flight, 0);
    }
}
