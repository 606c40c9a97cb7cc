//! Shared helpers for command handlers.

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use pronet_core::services::ConversationSource;
use pronet_core::{Conversation, CountryCode, NotificationFilter, SwipeAction};

use crate::cli::{CountryArg, FilterArg, GlobalOpts, SwipeArg};
use crate::error::CliError;

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)
}

/// Await `fut` behind a spinner on stderr. Silent when quiet or piped.
pub async fn with_spinner<F: Future>(global: &GlobalOpts, message: &str, fut: F) -> F::Output {
    if global.quiet || !std::io::stderr().is_terminal() {
        return fut.await;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_owned());
    pb.enable_steady_tick(Duration::from_millis(80));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

/// Resolve a partner name (case-insensitive, partial) to a conversation.
pub async fn resolve_partner<S: ConversationSource>(
    source: &S,
    partner: &str,
) -> Result<Conversation, CliError> {
    let needle = partner.to_lowercase();
    source
        .fetch_conversations(None)
        .await?
        .into_iter()
        .find(|c| c.partner_name.to_lowercase().contains(&needle))
        .ok_or_else(|| CliError::NotFound {
            resource_type: "conversation".into(),
            identifier: partner.into(),
            list_command: "chats list".into(),
        })
}

// ── Arg conversions ─────────────────────────────────────────────────

impl From<SwipeArg> for SwipeAction {
    fn from(arg: SwipeArg) -> Self {
        match arg {
            SwipeArg::Like => Self::Like,
            SwipeArg::Pass => Self::Pass,
        }
    }
}

impl From<CountryArg> for CountryCode {
    fn from(arg: CountryArg) -> Self {
        match arg {
            CountryArg::Us => Self::Us,
            CountryArg::Gb => Self::Gb,
            CountryArg::Bd => Self::Bd,
            CountryArg::In => Self::In,
        }
    }
}

impl From<FilterArg> for NotificationFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Messages => Self::Messages,
            FilterArg::Matches => Self::Matches,
            FilterArg::System => Self::System,
        }
    }
}

/// `"a, b, c"` or `"-"` when empty.
pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".into()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use pronet_core::MockLatency;
    use pronet_core::services::MockConversationSource;

    use super::*;

    #[tokio::test]
    async fn partner_lookup_is_partial_and_case_insensitive() {
        let source = MockConversationSource::new(MockLatency::NONE);
        let found = resolve_partner(&source, "liam").await;
        assert_eq!(found.ok().map(|c| c.partner_name), Some("Liam Nguyen".into()));

        let missing = resolve_partner(&source, "nobody").await;
        assert!(matches!(missing, Err(CliError::NotFound { .. })));
    }

    #[test]
    fn join_or_dash_handles_empty() {
        assert_eq!(join_or_dash(&[]), "-");
        assert_eq!(join_or_dash(&["a".into(), "b".into()]), "a, b");
    }
}
