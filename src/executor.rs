//! # Action Executors
//!
//! The async boundary of the launcher. Screens originate [`Action`] values;
//! an executor performs them somewhere else entirely (another task, another
//! process, a cluster) and reports back exactly once. The core never waits:
//! it records the pending token and keeps processing input, and the result
//! re-enters through the same serialized event channel as keypresses.

use async_trait::async_trait;

use crate::core::action::{Action, ActionKind, ActionResult};

#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Returns the name of the executor.
    fn name(&self) -> &str;

    /// Perform the action and produce its single result. Failures are
    /// reported through the result payload, never as a panic.
    async fn execute(&self, action: Action) -> ActionResult;
}

/// Executor wired into the shipped binary.
///
/// Actual project scaffolding (templates, filesystem, cluster clients)
/// lives outside this launcher; the local executor resolves each action
/// with a human-readable summary the owning screen can display.
pub struct LocalExecutor;

#[async_trait]
impl ActionExecutor for LocalExecutor {
    fn name(&self) -> &str {
        "local"
    }

    async fn execute(&self, action: Action) -> ActionResult {
        let outcome = match &action.kind {
            ActionKind::CreateProject { language, template } => Ok(format!(
                "Created a {language} function project ({template} template)"
            )),
        };
        ActionResult {
            token: action.token,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_executor_preserves_token() {
        let action = Action::new(ActionKind::CreateProject {
            language: "go".into(),
            template: "cloudevents".into(),
        });
        let token = action.token;

        let result = LocalExecutor.execute(action).await;
        assert_eq!(result.token, token);
        let summary = result.outcome.expect("local create succeeds");
        assert!(summary.contains("go"));
        assert!(summary.contains("cloudevents"));
    }
}
