//! CLI handler for one-shot uploads.

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

use crate::api::ApiClient;
use crate::app::{NoticeKind, UiStateHandle};
use crate::cli::args::UploadCliArgs;
use crate::upload::{validate_file, UploadForm};
use crate::viewer::NotesView;

pub async fn handle_upload_command(args: UploadCliArgs, api_url: Option<String>) -> Result<()> {
    validate_file(&args.file)?;

    let base_url = super::resolve_base_url(api_url);
    let state = UiStateHandle::default();
    let client = Arc::new(ApiClient::new(&base_url));
    let mut form = UploadForm::new(client, state.clone());

    form.select_file(args.file.clone()).await;

    let spinner = if args.no_progress {
        None
    } else {
        Some(create_spinner())
    };

    form.submit().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let snapshot = state.snapshot().await;
    if let Some(notice) = &snapshot.notice {
        if notice.kind == NoticeKind::Error {
            bail!("{}", notice.message);
        }
    }

    if let Some(status) = form.status() {
        eprintln!("{status}");
    }
    println!("{}", NotesView::render(snapshot.current_meeting.as_ref()));

    Ok(())
}

fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Uploading and processing...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
