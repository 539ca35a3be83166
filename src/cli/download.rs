//! CLI handler for triggering report downloads.

use anyhow::{bail, Result};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::app::{NoticeKind, UiStateHandle};
use crate::cli::args::DownloadCliArgs;
use crate::config::Config;
use crate::search::ResultsList;

pub async fn handle_download_command(args: DownloadCliArgs, api_url: Option<String>) -> Result<()> {
    let base_url = super::resolve_base_url(api_url);
    let open_reports =
        !args.print_url && Config::load().map(|c| c.behavior.open_reports).unwrap_or(true);

    let state = UiStateHandle::default();
    let list = ResultsList::new(Arc::new(ApiClient::new(&base_url)), state.clone())
        .with_open_reports(open_reports);

    list.download(&args.meeting_id).await;

    match state.snapshot().await.notice {
        Some(notice) if notice.kind == NoticeKind::Error => bail!("{}", notice.message),
        Some(notice) => println!("{}", notice.message),
        None => {}
    }

    Ok(())
}
