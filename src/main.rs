use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf};
use todo_cards::{
    logging::LoggingArgs,
    theme::{Theme, ThemeName},
    ui::{run_app, App},
    PageConfig,
};

#[derive(Debug, Parser)]
#[command(name = "todo-cards", version, about = "To-do cards in the terminal")]
struct Cli {
    /// JSON page config (title, theme, pre-existing cards)
    #[arg(long, env = "TODO_CARDS_CONFIG")]
    config: Option<PathBuf>,

    /// Colour theme, overrides the config
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_path = cli.logging.init("todo-cards")?;
    tracing::info!(log = %log_path.display(), "starting");

    let config = PageConfig::load_or_default(cli.config.as_deref())?;
    let theme = Theme::named(cli.theme.unwrap_or(config.theme));
    let mut app = App::new(todo_cards::initialize(&config), theme);

    // Terminal setup
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "ui loop failed");
        return Err(todo_cards::TodoError::Terminal(err).into());
    }
    Ok(())
}
