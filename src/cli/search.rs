//! CLI handler for one-shot searches.

use anyhow::{bail, Result};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::app::{NoticeKind, UiStateHandle};
use crate::cli::args::SearchCliArgs;
use crate::search::{ResultsList, SearchPanel};

pub async fn handle_search_command(args: SearchCliArgs, api_url: Option<String>) -> Result<()> {
    let query = args.query.join(" ");

    let base_url = super::resolve_base_url(api_url);
    let state = UiStateHandle::default();
    let panel = SearchPanel::new(Arc::new(ApiClient::new(&base_url)), state.clone());

    panel.submit(&query).await;

    let snapshot = state.snapshot().await;
    if let Some(notice) = &snapshot.notice {
        match notice.kind {
            NoticeKind::Error => bail!("{}", notice.message),
            NoticeKind::Info => eprintln!("{}", notice.message),
        }
    }

    if let Some(panel_text) = ResultsList::render(snapshot.search_results.as_deref()) {
        println!("{panel_text}");
    }

    Ok(())
}
