//! One-shot CLI handlers. Each drives the same widgets the interactive
//! session uses and exits non-zero when the operation reports an error.

pub mod args;

mod download;
mod search;
mod status;
mod upload;

pub use args::{Cli, CliCommand, DownloadCliArgs, SearchCliArgs, UploadCliArgs};
pub use download::handle_download_command;
pub use search::handle_search_command;
pub use status::handle_status_command;
pub use upload::handle_upload_command;

use crate::api::DEFAULT_API_URL;
use crate::config::Config;

/// Resolve the service base URL: `--api-url` flag, then the config file,
/// then the built-in default.
pub(crate) fn resolve_base_url(flag: Option<String>) -> String {
    flag.or_else(|| Config::load().ok().and_then(|c| c.api.base_url))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
