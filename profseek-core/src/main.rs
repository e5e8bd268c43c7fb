//! src/main.rs
//! Faculty semantic-search TUI client.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event as TerminalEvent, EventStream, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{signal, sync::Notify, sync::mpsc};
use tracing::{info, warn};

use profseek_core::{
    Logger,
    config::Config,
    controller::{actions::Action, event_loop::EventLoop, event_loop::TaskResult},
    model::app_state::AppState,
    view::ui::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    setup_panic_handler();

    let app = App::new().await.context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    event_loop: EventLoop,
    ui_renderer: UIRenderer,
    shutdown: Arc<Notify>,
    _log_guard: tracing_appender::non_blocking::WorkerGuard,
}

impl App {
    async fn new() -> Result<Self> {
        let log_guard = Logger::init_tracing().context("Failed to initialize logging")?;
        info!("Starting faculty search client");

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        let config: Arc<Config> = Arc::new(Config::load().await.unwrap_or_else(|e| {
            info!("Failed to load config, using defaults: {}", e);
            Config::default()
        }));
        info!(search_url = %config.search_url, "Configuration ready");

        let (task_tx, task_rx) = mpsc::unbounded_channel::<TaskResult>();

        let state = AppState::new(config, task_tx);
        let event_loop = EventLoop::new(state, task_rx);

        Ok(Self {
            terminal,
            event_loop,
            ui_renderer: UIRenderer::new(),
            shutdown: Arc::new(Notify::new()),
            _log_guard: log_guard,
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream = EventStream::new();

        loop {
            self.render()?;

            tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_event = event_stream.next() => {
                    if let Some(Ok(terminal_event)) = maybe_event
                        && let Some(action) = map_terminal_event(terminal_event)
                        && !self.event_loop.handle_action(action)
                    {
                        info!("Quit action from terminal event");
                        break;
                    }
                }

                maybe_result = self.event_loop.next_task_result() => {
                    if let Some(result) = maybe_result {
                        self.event_loop.apply_task_result(result);
                    }
                }
            }
        }

        info!("Event loop terminated cleanly");
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        if self.event_loop.state().ui.needs_redraw() {
            let ui_renderer = &self.ui_renderer;
            let state = self.event_loop.state();

            self.terminal
                .draw(|frame: &mut Frame<'_>| {
                    ui_renderer.render(frame, state);
                })
                .context("Failed to draw terminal")?;

            self.event_loop.state_mut().ui.clear_redraw();
        }

        Ok(())
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let mut sigterm =
                    signal(SignalKind::terminate()).expect("Failed to create SIGTERM handler");

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

/// Translate a terminal event into an application action.
fn map_terminal_event(event: TerminalEvent) -> Option<Action> {
    match event {
        TerminalEvent::Key(key_event) => map_key_event(key_event),
        TerminalEvent::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

fn map_key_event(key_event: KeyEvent) -> Option<Action> {
    match (key_event.code, key_event.modifiers) {
        (KeyCode::Char('c' | 'q'), KeyModifiers::CONTROL) => Some(Action::Quit),

        // Submit: Enter, or the explicit binding.
        (KeyCode::Enter, _) => Some(Action::SubmitSearch),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Action::SubmitSearch),

        (KeyCode::Up, _) => Some(Action::MoveSelectionUp),
        (KeyCode::Down, _) => Some(Action::MoveSelectionDown),

        (KeyCode::Char('o'), KeyModifiers::CONTROL) => Some(Action::OpenSelectedProfile),

        (KeyCode::Esc, _) => Some(Action::ClearInput),
        (KeyCode::Backspace, _) => Some(Action::DeleteCharBefore),
        (KeyCode::Left, _) => Some(Action::MoveCursorLeft),
        (KeyCode::Right, _) => Some(Action::MoveCursorRight),

        (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            Some(Action::InsertChar(ch))
        }

        _ => None,
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}
