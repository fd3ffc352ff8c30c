//! # TUI Adapter
//!
//! The terminal-facing layer. Owns the event loop: poll crossterm, translate
//! to core events, fold them into the [`Launcher`], paint whatever it
//! renders. This is the only module that knows about ratatui and crossterm.
//!
//! Actions are the one place concurrency enters. When the launcher hands
//! one back, it is spawned onto a tokio task running the executor; the
//! result is funneled into the same `mpsc` channel the loop drains between
//! polls, so the launcher only ever sees a serialized event stream.
//!
//! ```text
//!   crossterm ──▶ translate ──▶ Launcher::handle ──▶ Action?
//!                                    ▲                  │
//!                                    │                  ▼
//!                               mpsc channel ◀── tokio::spawn(executor)
//! ```

mod event;

use std::io::stdout;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{info, warn};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::event::Event;
use crate::core::launcher::Launcher;
use crate::core::layout::Layout;
use crate::executor::{ActionExecutor, LocalExecutor};
use crate::tui::event::{poll_event, poll_event_immediate};

/// How long one poll blocks before the loop checks the executor channel.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    run_with_executor(config, Arc::new(LocalExecutor))
}

pub fn run_with_executor(
    config: ResolvedConfig,
    executor: Arc<dyn ActionExecutor>,
) -> std::io::Result<()> {
    let mut launcher = Launcher::new(Layout::default(), &config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for results coming back from executor tasks.
    let (tx, rx) = mpsc::channel::<Event>();

    // crossterm only reports *changes* in size, so seed the launcher with
    // the dimensions it starts with.
    if let Ok((width, height)) = crossterm::terminal::size() {
        launcher.handle(Event::Resize(width, height));
    }

    loop {
        let frame = launcher.render();
        terminal.draw(|f| f.render_widget(Paragraph::new(frame), f.area()))?;

        // The farewell frame above is the last one.
        if launcher.is_quitting() {
            break;
        }

        // One blocking poll, then drain whatever queued up behind it.
        for event in poll_event(POLL_TIMEOUT)
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = launcher.handle(event) {
                spawn_action(action, Arc::clone(&executor), tx.clone());
            }
        }

        // Executor results re-enter through the same serialized stream.
        while let Ok(event) = rx.try_recv() {
            if let Some(action) = launcher.handle(event) {
                spawn_action(action, Arc::clone(&executor), tx.clone());
            }
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_action(action: Action, executor: Arc<dyn ActionExecutor>, tx: mpsc::Sender<Event>) {
    info!("Dispatching {:?} to executor '{}'", action.kind, executor.name());
    tokio::spawn(async move {
        let result = executor.execute(action).await;
        if tx.send(Event::ActionResult(result)).is_err() {
            warn!("Failed to deliver action result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::widgets::Paragraph;

    use crate::test_support::ready_launcher;

    #[test]
    fn test_frame_paints_into_terminal() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut launcher = ready_launcher();

        let frame = launcher.render();
        terminal
            .draw(|f| f.render_widget(Paragraph::new(frame), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Functions"));
        assert!(text.contains("Create"));
    }
}
