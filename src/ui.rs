// src/ui.rs

use crate::app::App;
use crate::chat_view;
use crate::errors::MostradorResult;
use crate::key_handlers;
use crate::session::ChatSession;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;

/// Runs the terminal UI: raw-mode setup, the event loop, and teardown.
pub async fn run_ui() -> MostradorResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Replies flow back from the deferred tasks over this channel.
    let (reply_tx, reply_rx) = mpsc::unbounded_channel();
    let app = App::new(ChatSession::new(reply_tx));

    let res = run_app(&mut terminal, app, reply_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut reply_rx: mpsc::UnboundedReceiver<String>,
) -> MostradorResult<()> {
    let (input_tx, mut input_rx) = mpsc::channel::<CEvent>(100);

    // Spawn a task to read terminal input
    tokio::spawn(async move {
        loop {
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if input_tx.send(ev).await.is_err() {
                        break;
                    }
                }
            } else if input_tx.is_closed() {
                break;
            }
        }
    });

    loop {
        terminal.draw(|f| chat_view::draw(f, &mut app))?;

        tokio::select! {
            Some(ev) = input_rx.recv() => {
                if let CEvent::Key(key) = ev {
                    if let Some(action) = key_handlers::action_for_key(key, app.panel) {
                        app.dispatch(action);
                    }
                }
            }
            Some(reply) = reply_rx.recv() => {
                app.on_reply(reply);
            }
            _ = tokio::time::sleep(Duration::from_millis(120)) => {
                app.status_indicator.update_spinner();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
