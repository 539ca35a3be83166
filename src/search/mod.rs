//! Search over previously processed meetings.

pub mod results;

pub use results::ResultsList;

use std::sync::Arc;
use tracing::warn;

use crate::api::{ApiClient, ApiError};
use crate::app::UiStateHandle;

pub struct SearchPanel {
    client: Arc<ApiClient>,
    state: UiStateHandle,
}

impl SearchPanel {
    pub fn new(client: Arc<ApiClient>, state: UiStateHandle) -> Self {
        Self { client, state }
    }

    /// Run a search and report the outcome into shared state.
    ///
    /// A blank query reports an error and issues no request. A well-formed
    /// response is reported verbatim, empty included (zero matches also
    /// raise an informational notice). A 2xx body missing the result list
    /// reports an empty list plus an unexpected-data error. Transport and
    /// server failures report the absent value, so no stale or inconsistent
    /// list ever renders.
    pub async fn submit(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.state.report_error("Please enter a search term.").await;
            return;
        }

        self.state.begin_request().await;
        self.state.report_error("").await;
        // A stale list never shows while the new search is in flight.
        self.state.accept_search_results(None).await;

        let result = self.client.search(query).await;
        self.state.finish_request().await;

        match result {
            Ok(response) => match response.results {
                Some(results) => {
                    let empty = results.is_empty();
                    self.state.accept_search_results(Some(results)).await;
                    if empty {
                        self.state
                            .report_info(format!("No results found for \"{query}\"."))
                            .await;
                    }
                }
                None => {
                    self.state.accept_search_results(Some(Vec::new())).await;
                    self.state
                        .report_error("Received unexpected data from search.")
                        .await;
                }
            },
            Err(ApiError::UnexpectedData(err)) => {
                warn!("Search returned an unparseable body: {err}");
                self.state.accept_search_results(Some(Vec::new())).await;
                self.state
                    .report_error("Received unexpected data from search.")
                    .await;
            }
            Err(err) => {
                warn!("Search failed: {err}");
                self.state
                    .report_error(format!("Search failed: {err}"))
                    .await;
                self.state.accept_search_results(None).await;
            }
        }
    }
}
