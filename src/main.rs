use std::io;
use std::sync::Arc;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use gamedeck::adapters::FileLocation;
use gamedeck::app::{App, AppMessage};
use gamedeck::catalog::CatalogClient;
use gamedeck::cli::{parse_args, CliCommand};
use gamedeck::startup::{self, AppConfig};
use gamedeck::traits::LocationStore;
use gamedeck::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("gamedeck {}", VERSION);
            Ok(())
        }
        CliCommand::RunTui { link, api_url } => run_tui(link, api_url).await,
    }
}

async fn run_tui(link: Option<String>, api_url: Option<String>) -> Result<()> {
    let config = AppConfig::from_env(api_url);

    // A missing log file is not worth refusing to start over.
    if let Err(e) = startup::init_logging() {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::info!(api = %config.api_base_url, "starting gamedeck {}", VERSION);

    let location: Arc<dyn LocationStore> = match &config.location_path {
        Some(path) => Arc::new(FileLocation::new(path.clone())),
        None => Arc::new(FileLocation::new(FileLocation::default_path()?)),
    };
    let client = CatalogClient::with_base_url(config.api_base_url.clone());

    let (message_tx, mut message_rx) = mpsc::unbounded_channel::<AppMessage>();
    let mut app = App::new(client, location, message_tx);
    app.start(link.as_deref());

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, &mut message_rx).await;

    // Restore the terminal whether the loop ended cleanly or not.
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    message_rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll both keyboard events and the message channel.
        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(_)) => {} // resize and friends redraw on the next pass
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
                    }
                    None => break,
                }
            }
            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
