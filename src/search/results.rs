//! Rendering for search results, plus the per-row report download.

use chrono::DateTime;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::{ApiClient, SearchMatch};
use crate::app::UiStateHandle;

/// Longest summary snippet shown per row.
const SNIPPET_CHARS: usize = 100;

pub struct ResultsList {
    client: Arc<ApiClient>,
    state: UiStateHandle,
    open_reports: bool,
}

impl ResultsList {
    pub fn new(client: Arc<ApiClient>, state: UiStateHandle) -> Self {
        Self {
            client,
            state,
            open_reports: true,
        }
    }

    pub fn with_open_reports(mut self, open_reports: bool) -> Self {
        self.open_reports = open_reports;
        self
    }

    /// Render the result set.
    ///
    /// `None` (no search ran, or the last one failed) renders nothing at
    /// all. An empty set renders an explicit no-meetings panel. Otherwise
    /// one row per match.
    pub fn render(results: Option<&[SearchMatch]>) -> Option<String> {
        let results = results?;

        if results.is_empty() {
            return Some("No meetings found matching your query.".to_string());
        }

        let mut out = String::from("Search Results:\n");
        for m in results {
            out.push_str(&format!(
                "File: {}\nDate: {}\nSummary: {}\n---\n",
                m.filename.as_deref().unwrap_or("N/A"),
                format_timestamp(&m.timestamp),
                snippet(&m.summary),
            ));
        }
        out.push_str("To fetch a report, use: download <meeting-id>");
        Some(out)
    }

    /// Fire-and-forget report download for one matched meeting.
    ///
    /// Same external contract as the notes view's download: deterministic
    /// URL, issuance only, in-flight count released unconditionally.
    pub async fn download(&self, meeting_id: &str) {
        if meeting_id.is_empty() {
            self.state
                .report_error("Cannot download - Meeting ID is missing.")
                .await;
            return;
        }

        self.state.begin_request().await;
        self.state.report_error("").await;

        let url = self.client.download_url(meeting_id);
        info!("Triggering report download from {url}");

        if self.open_reports {
            match open::that_detached(&url) {
                Ok(()) => {
                    self.state
                        .report_info(format!("Report download started for meeting {meeting_id}."))
                        .await;
                }
                Err(err) => {
                    warn!("Failed to launch URL handler: {err}");
                    self.state
                        .report_error(format!("Failed to initiate download for {meeting_id}."))
                        .await;
                }
            }
        } else {
            self.state
                .report_info(format!(
                    "Report for meeting {meeting_id} available at {url}"
                ))
                .await;
        }

        self.state.finish_request().await;
    }
}

/// Format a server timestamp for display: short month, numeric day and
/// year, 12-hour time. A string that does not parse as ISO-8601 is
/// returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn snippet(summary: &str) -> String {
    if summary.is_empty() {
        return "N/A".to_string();
    }
    if summary.chars().count() <= SNIPPET_CHARS {
        return summary.to_string();
    }
    let cut: String = summary.chars().take(SNIPPET_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NoticeKind;

    fn search_match() -> SearchMatch {
        SearchMatch {
            id: "abc123".to_string(),
            filename: Some("standup.wav".to_string()),
            timestamp: "2024-03-05T14:30:00Z".to_string(),
            summary: "Discussed the release.".to_string(),
        }
    }

    fn list() -> (ResultsList, UiStateHandle) {
        let state = UiStateHandle::default();
        let list = ResultsList::new(
            Arc::new(ApiClient::new("http://localhost:8000")),
            state.clone(),
        )
        .with_open_reports(false);
        (list, state)
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-03-05T14:30:00Z"),
            "Mar 5, 2024, 02:30 PM"
        );
    }

    #[test]
    fn test_format_timestamp_morning() {
        assert_eq!(
            format_timestamp("2024-12-25T09:05:00Z"),
            "Dec 25, 2024, 09:05 AM"
        );
    }

    #[test]
    fn test_format_timestamp_malformed_passthrough() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_render_absent_renders_nothing() {
        assert!(ResultsList::render(None).is_none());
    }

    #[test]
    fn test_render_empty_renders_no_meetings_panel() {
        let out = ResultsList::render(Some(&[])).unwrap();
        assert!(out.contains("No meetings found matching your query."));
    }

    #[test]
    fn test_render_rows() {
        let out = ResultsList::render(Some(&[search_match()])).unwrap();
        assert!(out.contains("File: standup.wav"));
        assert!(out.contains("Date: Mar 5, 2024, 02:30 PM"));
        assert!(out.contains("Summary: Discussed the release."));
    }

    #[test]
    fn test_render_missing_filename() {
        let mut m = search_match();
        m.filename = None;
        let out = ResultsList::render(Some(&[m])).unwrap();
        assert!(out.contains("File: N/A"));
    }

    #[test]
    fn test_snippet_truncates_long_summaries() {
        let long = "x".repeat(150);
        let s = snippet(&long);
        assert!(s.ends_with("..."));
        assert_eq!(s.chars().count(), SNIPPET_CHARS + 3);
    }

    #[test]
    fn test_snippet_keeps_short_summaries() {
        assert_eq!(snippet("short"), "short");
    }

    #[tokio::test]
    async fn test_download_empty_id_reports_error() {
        let (list, state) = list();
        list.download("").await;
        assert_eq!(
            state.snapshot().await.notice.map(|n| n.message),
            Some("Cannot download - Meeting ID is missing.".to_string())
        );
    }

    #[tokio::test]
    async fn test_download_uses_same_url_as_notes_view() {
        let (list, state) = list();
        list.download("abc123").await;

        let snapshot = state.snapshot().await;
        let notice = snapshot.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice
            .message
            .contains("http://localhost:8000/download/abc123"));
        assert_eq!(snapshot.in_flight, 0);
    }
}
