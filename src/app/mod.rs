//! Session coordinator: owns the shared UI state and runs the interactive
//! loop that ties the widgets together.

pub mod state;

pub use state::{Notice, NoticeKind, UiState, UiStateHandle};

use anyhow::Result;
use dialoguer::{FuzzySelect, Input};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::api::{ApiClient, DEFAULT_API_URL};
use crate::config::Config;
use crate::search::{results::format_timestamp, ResultsList, SearchPanel};
use crate::upload::UploadForm;
use crate::viewer::NotesView;

const HELP: &str = "Commands:
  file <path>        Select an audio file for upload
  upload [path]      Upload the selected (or given) file for processing
  show               Show the current meeting notes
  search <terms>     Search past meetings
  results            Show the last search results
  download [id]      Download a meeting report (defaults to the current meeting)
  status             Check that the service is reachable
  help               Show this help
  quit               Leave the session";

/// Run the interactive session: render state, read a command, dispatch to
/// a widget, re-render. The analog of the original single-page client.
pub async fn run_session(api_url: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let base_url = api_url
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    info!("Starting meetnotes session against {base_url}");

    let client = Arc::new(ApiClient::new(&base_url));
    let state = UiStateHandle::default();

    let mut upload = UploadForm::new(client.clone(), state.clone());
    let search = SearchPanel::new(client.clone(), state.clone());
    let notes = NotesView::new(client.clone(), state.clone())
        .with_open_reports(config.behavior.open_reports);
    let results = ResultsList::new(client.clone(), state.clone())
        .with_open_reports(config.behavior.open_reports);

    println!("Meeting Note Taker");
    println!("Connected to {base_url}");
    println!("{HELP}");

    loop {
        let line: String = Input::new()
            .with_prompt("meetnotes")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" | "q" => break,
            "help" => println!("{HELP}"),
            "file" => {
                upload.select_file(PathBuf::from(rest)).await;
                if let Some(path) = upload.selected_file() {
                    println!("Selected {}", path.display());
                }
                render_notice(&state).await;
            }
            "upload" => {
                if busy(&state).await {
                    continue;
                }
                if !rest.is_empty() {
                    upload.select_file(PathBuf::from(rest)).await;
                    if upload.selected_file().is_none() {
                        render_notice(&state).await;
                        continue;
                    }
                }
                upload.submit().await;
                if let Some(status) = upload.status() {
                    println!("Status: {status}");
                }
                render_notice(&state).await;
                let snapshot = state.snapshot().await;
                println!("{}", NotesView::render(snapshot.current_meeting.as_ref()));
            }
            "show" => {
                let snapshot = state.snapshot().await;
                println!("{}", NotesView::render(snapshot.current_meeting.as_ref()));
            }
            "search" => {
                if busy(&state).await {
                    continue;
                }
                search.submit(rest).await;
                render_notice(&state).await;
                render_results(&state).await;
            }
            "results" => {
                render_results(&state).await;
            }
            "download" => {
                if busy(&state).await {
                    continue;
                }
                download_command(rest, &state, &notes, &results).await?;
                render_notice(&state).await;
            }
            "status" => match client.health().await {
                Ok(service) => println!("{}", service.message),
                Err(err) => println!("error: {err}"),
            },
            _ => println!("Unknown command: {command}. Type \"help\" for the command list."),
        }
    }

    Ok(())
}

/// The session's version of disabling controls while a request is out.
async fn busy(state: &UiStateHandle) -> bool {
    if state.is_loading().await {
        println!("Still processing, please wait.");
        return true;
    }
    false
}

async fn render_notice(state: &UiStateHandle) {
    if let Some(notice) = state.snapshot().await.notice {
        match notice.kind {
            NoticeKind::Error => println!("error: {}", notice.message),
            NoticeKind::Info => println!("note: {}", notice.message),
        }
    }
}

async fn render_results(state: &UiStateHandle) {
    let snapshot = state.snapshot().await;
    if let Some(panel) = ResultsList::render(snapshot.search_results.as_deref()) {
        println!("{panel}");
    }
}

/// `download <id>` fetches that meeting's report; bare `download` falls
/// back to the current meeting, then to picking from the last search
/// results, then to the missing-id error.
async fn download_command(
    rest: &str,
    state: &UiStateHandle,
    notes: &NotesView,
    results: &ResultsList,
) -> Result<()> {
    if !rest.is_empty() {
        results.download(rest).await;
        return Ok(());
    }

    let snapshot = state.snapshot().await;
    if let Some(meeting) = &snapshot.current_meeting {
        notes.download(Some(&meeting.meeting_id)).await;
        return Ok(());
    }

    if let Some(matches) = snapshot.search_results.as_deref().filter(|m| !m.is_empty()) {
        let labels: Vec<String> = matches
            .iter()
            .map(|m| {
                format!(
                    "{} ({})",
                    m.filename.as_deref().unwrap_or("N/A"),
                    format_timestamp(&m.timestamp)
                )
            })
            .collect();
        let choice = FuzzySelect::new()
            .with_prompt("Download report for")
            .items(&labels)
            .interact()?;
        results.download(&matches[choice].id).await;
        return Ok(());
    }

    notes.download(None).await;
    Ok(())
}
