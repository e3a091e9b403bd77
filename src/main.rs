use blockdash::app::{App, AppMessage};
use blockdash::cli::{parse_args, run_cli_command};
use blockdash::config::DashboardConfig;
use blockdash::logging::init_logging;
use blockdash::terminal::{setup_panic_hook, TerminalManager};
use blockdash::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Idle wake-up period of the event loop
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    if run_cli_command(parse_args(std::env::args())) {
        return Ok(());
    }

    color_eyre::install()?;
    setup_panic_hook();

    let config = DashboardConfig::from_env()?;
    let log_path = init_logging(&config)?;
    tracing::info!(
        version = blockdash::cli::VERSION,
        log = %log_path.display(),
        "Starting blockdash"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let mut app = App::from_config(config)?;
    tracing::info!(source = app.source_name(), "Snapshot source selected");

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(async {
        // The scheduler spawns onto the runtime, so mount inside it
        app.navigate_to_dashboard();
        run_app(manager.terminal(), &mut app).await
    });

    // Stop timers before the runtime goes away
    app.navigate_to_home();
    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {}", e);
    } else {
        tracing::info!("Exited cleanly");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the receiver out of the app so select! can own it
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.should_quit {
            return Ok(());
        }

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(FRAME_INTERVAL);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => {
                        tracing::info!("Terminal event stream closed");
                        return Ok(());
                    }
                }
            }

            msg = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}
