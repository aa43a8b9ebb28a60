//! inventory-tui - terminal user interface for the inventory management REST API.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - REST details (see `crates/client`).
//! - Building project views (see `crates/view`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - Configuration is loaded before the terminal enters raw mode, so a bad
//!   profile or missing credentials are reported on a normal terminal.
//! - `load_dotenv()` runs before CLI parsing so `.env` can supply clap env defaults.
//! - Configuration precedence: CLI args > env vars > profile config > defaults.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use inventory_client::{InventoryClient, MetricsCollector, MetricsExporter};
use inventory_config::ConfigLoader;
use inventory_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use inventory_tui::action::{Action, RedactedAction};
use inventory_tui::app::App;
use inventory_tui::cli::Cli;
use inventory_tui::runtime::{
    config::{connection_context, load_config},
    side_effects::{TaskTracker, handle_side_effects},
    startup::startup_actions,
    terminal::TerminalGuard,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load environment")?;

    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "inventory-tui.log");
    // Must live until main returns so buffered log lines are flushed.
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let _metrics_exporter = match &cli.metrics_bind {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!(addr = %exporter.bind_addr(), "Metrics exporter started");
                Some(exporter)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to start metrics exporter");
                None
            }
        },
        None => None,
    };
    let metrics_enabled = _metrics_exporter.is_some();

    let config = load_config(&cli)?;
    let mut builder = InventoryClient::builder().from_config(&config);
    if metrics_enabled {
        builder = builder.metrics(MetricsCollector::new());
    }
    let client = Arc::new(builder.build().context("Failed to build client")?);
    tracing::info!(base_url = %config.connection.base_url, "Client ready");

    let mut app = App::new(connection_context(&config, cli.profile.clone()));
    let task_tracker = TaskTracker::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard::new();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let tx_input = tx.clone();
    task_tracker.spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};

        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    for action in startup_actions(&config) {
        if let Some(request) = app.update(action) {
            handle_side_effects(request, client.clone(), tx.clone(), &task_tracker);
        }
    }

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        let render_start = std::time::Instant::now();
        terminal.draw(|f| app.render(f))?;
        if metrics_enabled {
            metrics::histogram!("inventory_tui_frame_render_duration_seconds")
                .record(render_start.elapsed().as_secs_f64());
        }

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(action = ?RedactedAction(&action), "Handling action");
                if let Some(request) = app.update(action) {
                    handle_side_effects(request, client.clone(), tx.clone(), &task_tracker);
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // In-flight requests are abandoned; the input task never finishes on its own.
    task_tracker.close();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
