//! Wire types for the meeting service API.

use serde::{Deserialize, Serialize};

/// Notes for one processed meeting, as returned by `POST /transcribe`.
///
/// Replaced wholesale on every successful upload; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub meeting_id: String,
    pub filename: Option<String>,
    #[serde(default)]
    pub transcript_preview: Option<String>,
    pub summary: String,
    pub action_items: Vec<String>,
}

/// One hit from `GET /search`. `id` equals the meeting's `meeting_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub id: String,
    pub filename: Option<String>,
    /// ISO-8601, server-assigned. Formatted client-side for display.
    pub timestamp: String,
    pub summary: String,
}

/// Envelope returned by `GET /search`.
///
/// `results` stays optional so a 2xx body missing the list can be told
/// apart from a genuine empty result set.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Option<Vec<SearchMatch>>,
}

/// Body of `GET /`, the service liveness probe.
#[derive(Debug, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
}

/// Optional error body sent with non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meeting() {
        let body = r#"{
            "meeting_id": "42",
            "filename": "standup.wav",
            "transcript_preview": "Good morning...",
            "summary": "Discussed roadmap.",
            "action_items": ["Ship the release", "Book the retro"]
        }"#;
        let meeting: Meeting = serde_json::from_str(body).unwrap();
        assert_eq!(meeting.meeting_id, "42");
        assert_eq!(meeting.filename.as_deref(), Some("standup.wav"));
        assert_eq!(meeting.action_items.len(), 2);
    }

    #[test]
    fn test_parse_meeting_without_preview_or_filename() {
        let body = r#"{
            "meeting_id": "42",
            "filename": null,
            "summary": "",
            "action_items": []
        }"#;
        let meeting: Meeting = serde_json::from_str(body).unwrap();
        assert!(meeting.filename.is_none());
        assert!(meeting.transcript_preview.is_none());
        assert!(meeting.action_items.is_empty());
    }

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "query": "roadmap",
            "results": [
                {"id": "1", "filename": "a.wav", "timestamp": "2024-03-05T14:30:00Z", "summary": "s"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.query, "roadmap");
        assert_eq!(response.results.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_search_response_missing_results_field() {
        let response: SearchResponse = serde_json::from_str(r#"{"query": "x"}"#).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn test_parse_error_detail() {
        let detail: ErrorDetail =
            serde_json::from_str(r#"{"detail": "Meeting not found"}"#).unwrap();
        assert_eq!(detail.detail, "Meeting not found");
    }
}
