use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, stdout};
use std::panic::PanicHookInfo;
use std::path::Path;
use std::sync::Mutex;

use particle_shooter::{App, Config};

fn init_tracing(log_file: &Path) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The terminal belongs to the game, so logs go to a file
    let file = File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

/// Leaves raw mode, mouse capture and the alternate screen.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)
}

/// Logs panics and runs `restore` before handing over to the previously
/// installed hook (the color-eyre report).
fn install_panic_hook<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        restore();
        hook(info);
    }));
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_file)?;
    install_panic_hook(|| {
        let _ = restore_terminal();
    });

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    let result = App::new(&config, size.width, size.height).run(&mut terminal);

    // Restore terminal before reporting any error
    restore_terminal()?;
    terminal.show_cursor()?;

    result
}
