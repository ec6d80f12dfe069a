use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::tui::apps::{CompareApp, CompareParams};
use crate::tui::{KeyBinding, Runtime, Theme, ThemeVariant};

#[derive(Args)]
pub struct TuiCommands {
    /// Base URL of the comparison service (overrides env and config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory the file picker opens in (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub async fn tui_command(args: TuiCommands) -> Result<()> {
    let config = Config::load()?;
    let (endpoint, _) = config.resolve_endpoint(args.endpoint.clone())?;
    let start_dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let params = CompareParams {
        endpoint,
        timeout: Duration::from_secs(config.timeout_secs),
        reveal_delay: Duration::from_millis(config.reveal_delay_ms),
        start_dir,
    };
    let theme = Theme::new(ThemeVariant::from_name(&config.theme));
    let mut runtime = Runtime::<CompareApp>::new(params, theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui(&mut terminal, &mut runtime).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &mut Runtime<CompareApp>,
) -> Result<()> {
    loop {
        let frame_start = std::time::Instant::now();

        // Drain pending events first for minimal input latency
        let force_quit = KeyBinding::ctrl(KeyCode::Char('c'));
        let mut should_quit = false;
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C always quits, regardless of app state
                if force_quit.matches(&key) {
                    should_quit = true;
                    break;
                }

                if !runtime.handle_key(key)? {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        runtime.poll_timers()?;
        runtime.poll_async()?;

        if runtime.should_quit() {
            break;
        }

        terminal.draw(|frame| {
            runtime.render(frame);
        })?;

        // Sleep for the remainder of a 16ms frame (60 FPS)
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = Duration::from_millis(16).checked_sub(elapsed) {
            tokio::time::sleep(remaining).await;
        }
    }

    Ok(())
}
