use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meetnotes")]
#[command(about = "Meeting note taker client", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the meeting service base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Upload an audio file and print the resulting meeting notes
    Upload(UploadCliArgs),
    /// Search past meetings
    Search(SearchCliArgs),
    /// Trigger a meeting report download
    Download(DownloadCliArgs),
    /// Check that the meeting service is reachable
    Status,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct UploadCliArgs {
    /// Audio file to upload (wav, mp3, m4a, flac, ogg, opus)
    pub file: PathBuf,
    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(ClapArgs, Debug)]
pub struct SearchCliArgs {
    /// Search terms, matched against transcripts and summaries
    #[arg(required = true)]
    pub query: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct DownloadCliArgs {
    /// Meeting id to fetch the report for
    pub meeting_id: String,
    /// Print the report URL instead of launching the system handler
    #[arg(long)]
    pub print_url: bool,
}
