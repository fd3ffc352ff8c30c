//! # Actions
//!
//! Screens never perform work themselves. When the user confirms something,
//! the screen emits an `Action` (an opaque, deferred unit of work) and
//! keeps a copy of its token as the single pending slot. An executor outside
//! the core runs the action and posts an [`ActionResult`] back through the
//! event channel, where the owning screen cross-checks the token before
//! folding the outcome into its visible state.
//!
//! ```text
//! Screen ── Action{token} ──▶ executor ── ActionResult{token} ──▶ Screen
//! ```
//!
//! Results with an unknown or stale token are inert: a screen that was
//! deactivated, replaced, or already resolved simply ignores them.

use uuid::Uuid;

/// Correlates an issued [`Action`] with its eventual [`ActionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionToken(Uuid);

impl ActionToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActionToken {
    fn default() -> Self {
        Self::new()
    }
}

/// A deferred unit of work originated by a screen.
///
/// The core only creates and re-delivers these; executing one is the
/// [`ActionExecutor`](crate::executor::ActionExecutor)'s job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub token: ActionToken,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            token: ActionToken::new(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// Scaffold a new function project.
    CreateProject { language: String, template: String },
}

/// The at-most-once resolution of an action.
///
/// `outcome` is `Ok` with a user-facing summary on success, `Err` with a
/// user-facing failure message otherwise. Either way the owning screen
/// renders it; failures are never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub token: ActionToken,
    pub outcome: Result<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(ActionToken::new(), ActionToken::new());
    }

    #[test]
    fn test_action_carries_fresh_token() {
        let a = Action::new(ActionKind::CreateProject {
            language: "node".into(),
            template: "http".into(),
        });
        let b = Action::new(ActionKind::CreateProject {
            language: "node".into(),
            template: "http".into(),
        });
        assert_ne!(a.token, b.token);
        assert_eq!(a.kind, b.kind);
    }
}
