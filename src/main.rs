use bookstock::adapters::ReqwestHttpClient;
use bookstock::app::{App, AppMessage};
use bookstock::catalog::CatalogClient;
use bookstock::cli::{parse_args, run_cli_command, CliCommand, RunOptions};
use bookstock::config::AppConfig;
use bookstock::logging;
use bookstock::terminal::{setup_panic_hook, TerminalManager};
use bookstock::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner/animation tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        CliCommand::RunTui(options) => options,
        other => {
            let code = run_cli_command(&other).unwrap_or(0);
            std::process::exit(code);
        }
    };

    color_eyre::install()?;

    let config = load_config(&options)?;
    logging::init(&config.log_file, &config.log_filter)?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    tracing::info!(api_base_url = %config.api_base_url, "starting dashboard");

    let runtime = tokio::runtime::Runtime::new()?;

    let http = match config.request_timeout() {
        Some(timeout) => ReqwestHttpClient::with_timeout(timeout),
        None => ReqwestHttpClient::new(),
    };
    let client = CatalogClient::with_http(config.api_base_url.clone(), Arc::new(http));

    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        let mut app = App::new(Arc::new(client));
        let result = run_app(term_manager.terminal(), &mut app).await;
        app.shutdown();
        result
    });

    term_manager.restore()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "dashboard exited with error");
    } else {
        tracing::info!("dashboard closed");
    }
    result
}

/// Defaults, then config file, then environment, then `--api-url`.
fn load_config(options: &RunOptions) -> Result<AppConfig> {
    Ok(AppConfig::load_with_overrides(
        options.config_path.as_deref(),
        options.api_url.as_deref(),
    )?)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut tick = tokio::time::interval(TICK_INTERVAL);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    app.mount();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tick.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!(error = %err, "terminal event stream failed");
                        return Err(err.into());
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
