//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::action::{Action, ActionResult};
use crate::core::config::ResolvedConfig;
use crate::core::event::Event;
use crate::core::launcher::Launcher;
use crate::core::layout::Layout;
use crate::executor::ActionExecutor;

/// An executor that resolves every action successfully with a fixed note.
pub struct NoopExecutor;

#[async_trait]
impl ActionExecutor for NoopExecutor {
    fn name(&self) -> &str {
        "noop"
    }

    async fn execute(&self, action: Action) -> ActionResult {
        ActionResult {
            token: action.token,
            outcome: Ok(String::from("noop")),
        }
    }
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        language: "node".into(),
        template: "http".into(),
        log_file: "funcpad.log".into(),
    }
}

/// A launcher that has not yet seen a resize.
pub fn test_launcher() -> Launcher {
    Launcher::new(Layout::default(), &test_config())
}

/// A launcher sized to a standard 80x24 terminal.
pub fn ready_launcher() -> Launcher {
    let mut launcher = test_launcher();
    launcher.handle(Event::Resize(80, 24));
    launcher
}
