use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Terminal to-do list with drag-and-drop")]
pub struct Cli {
    /// Config file (defaults to <config dir>/taskboard/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "taskboard=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the final board as JSON on exit
    #[arg(long)]
    pub dump_state: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "taskboard",
            "--config",
            "/tmp/c.toml",
            "--log-level",
            "debug",
            "--dump-state",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.log_file.is_none());
        assert!(cli.dump_state);
    }
}
