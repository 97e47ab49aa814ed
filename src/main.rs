use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use taskboard::{cli::Cli, config::Config, logging, App, TaskBoard};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let log_file = cli.log_file.as_deref().or(config.logging.file.as_deref());
    let log_level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init(log_file, log_level)?;
    tracing::info!(drop = ?config.drop, "starting taskboard");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(TaskBoard::with_drop_config(config.drop));
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result.context("event loop failed")?;

    if cli.dump_state {
        println!("{}", serde_json::to_string_pretty(&app.board)?);
    }
    Ok(())
}
