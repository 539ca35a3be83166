//! Shared UI state and the coordinator handle.
//!
//! All cross-widget state lives here: the current meeting notes, the
//! current search results, the in-flight request count, and a single
//! notice slot. Widgets receive a clone of [`UiStateHandle`] and mutate
//! state only through its contract methods.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::{Meeting, SearchMatch};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient user-facing text. One slot; a new notice replaces the old.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Cross-widget UI state, owned solely by the coordinator handle.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Count of outstanding requests. The UI is idle only at zero.
    pub in_flight: usize,
    pub notice: Option<Notice>,
    pub current_meeting: Option<Meeting>,
    /// `None` means no search has produced a usable result state; an empty
    /// vec means a search ran and matched nothing.
    pub search_results: Option<Vec<SearchMatch>>,
}

/// Cheaply clonable handle through which widgets report into shared state.
///
/// A pure merge point: no validation happens here.
#[derive(Clone, Default)]
pub struct UiStateHandle {
    inner: Arc<Mutex<UiState>>,
}

impl UiStateHandle {
    pub async fn snapshot(&self) -> UiState {
        self.inner.lock().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.in_flight > 0
    }

    /// Mark one request as outstanding.
    pub async fn begin_request(&self) {
        let mut state = self.inner.lock().await;
        state.in_flight += 1;
    }

    /// Mark one request as finished. Call exactly once per `begin_request`.
    pub async fn finish_request(&self) {
        let mut state = self.inner.lock().await;
        state.in_flight = state.in_flight.saturating_sub(1);
    }

    /// A successful upload: replace the current meeting, clear the notice,
    /// and drop any search results.
    pub async fn accept_meeting(&self, meeting: Meeting) {
        let mut state = self.inner.lock().await;
        state.current_meeting = Some(meeting);
        state.notice = None;
        state.search_results = None;
    }

    /// Replace the search result set unconditionally.
    pub async fn accept_search_results(&self, results: Option<Vec<SearchMatch>>) {
        let mut state = self.inner.lock().await;
        state.search_results = results;
    }

    /// Report an error notice. An empty message clears the slot.
    pub async fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        let mut state = self.inner.lock().await;
        state.notice = if message.is_empty() {
            None
        } else {
            Some(Notice::error(message))
        };
    }

    /// Report an informational notice (zero-result searches and the like).
    pub async fn report_info(&self, message: impl Into<String>) {
        let mut state = self.inner.lock().await;
        state.notice = Some(Notice::info(message));
    }
}
