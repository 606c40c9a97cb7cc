//! Command dispatch: bridges CLI args -> core view-models -> output formatting.

pub mod auth;
pub mod chats;
pub mod config_cmd;
pub mod discover;
pub mod flow;
pub mod notifications;
pub mod onboarding;
pub mod profile;
pub mod session;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::context::Context;
use crate::error::CliError;

/// Dispatch a state-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &mut Context, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Flow => flow::handle(ctx, global),
        Command::Onboarding(args) => onboarding::handle(ctx, args, global).await,
        Command::Auth(args) => auth::handle(ctx, args, global).await,
        Command::Discover(args) => discover::handle(ctx, args, global),
        Command::Chats(args) => chats::handle(ctx, args, global).await,
        Command::Notifications(args) => notifications::handle(ctx, args, global).await,
        Command::Profile(args) => profile::handle(ctx, args, global).await,
        Command::Session => session::run(ctx, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
