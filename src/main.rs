use anyhow::Result;
use clap::Parser;
use meetnotes::{
    app,
    cli::{
        handle_download_command, handle_search_command, handle_status_command,
        handle_upload_command, Cli, CliCommand,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("meetnotes {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(CliCommand::Upload(args)) => handle_upload_command(args, cli.api_url).await,
        Some(CliCommand::Search(args)) => handle_search_command(args, cli.api_url).await,
        Some(CliCommand::Download(args)) => handle_download_command(args, cli.api_url).await,
        Some(CliCommand::Status) => handle_status_command(cli.api_url).await,
        None => app::run_session(cli.api_url).await,
    }
}
