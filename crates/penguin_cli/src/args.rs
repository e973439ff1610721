//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "data/penguin.txt";
const DEFAULT_LIMIT: usize = 100;
const LOG_DIR_APP_NAME: &str = "penguin";

/// Penguin - a chill personal task tracker for your terminal
#[derive(Parser, Debug)]
#[command(name = "penguin")]
#[command(version, about = "A chill personal task tracker for your terminal")]
pub struct Cli {
    /// Backing file tasks are loaded from and saved to
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Maximum number of tasks kept in the list
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
    pub limit: usize,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Start with an empty list that is never loaded or saved
    #[arg(long)]
    pub no_store: bool,
}

impl Cli {
    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| penguin_core::default_log_level())
    }

    /// Explicit `--log-dir`, else `<local data dir>/penguin/logs`, else the
    /// system temp dir.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(LOG_DIR_APP_NAME)
            .join("logs")
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    let limit = value
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("`{value}` is not a number: {err}"))?;
    if limit == 0 {
        return Err("limit must be at least 1".to_string());
    }
    Ok(limit)
}
