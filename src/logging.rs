//! File-backed tracing. Stdout belongs to the TUI, so without a log file
//! nothing is installed.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, TaskBoardError};

pub fn init(file: Option<&Path>, level: &str) -> Result<()> {
    let Some(path) = file else {
        return Ok(());
    };

    let filter =
        EnvFilter::try_new(level).map_err(|e| TaskBoardError::LogFilter(e.to_string()))?;
    let writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TaskBoardError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(writer))
        .init();
    Ok(())
}
