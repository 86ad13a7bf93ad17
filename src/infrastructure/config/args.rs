use super::app_config::{LogLevel, SessionBackend};
use crate::presentation::cli::Command;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cleangrid",
    version,
    about = "Command-line client for the CleanGrid cleaning services platform",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL.
    #[arg(long, env = "CLEANGRID_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Where the session is kept between runs.
    #[arg(long, value_enum, global = true)]
    pub session_backend: Option<SessionBackend>,

    /// Skip confirming the stored session with the server.
    #[arg(long, global = true)]
    pub no_revalidate: bool,

    #[command(subcommand)]
    pub command: Command,
}
