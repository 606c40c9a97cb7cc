//! Chat command handlers.

use tabled::Tabled;

use pronet_core::viewmodels::{ChatThreadViewModel, ChatsListViewModel};
use pronet_core::{ChatMessage, Conversation, Route};

use crate::cli::{ChatsArgs, ChatsCommand, GlobalOpts};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ConversationRow {
    #[tabled(rename = "Partner")]
    partner: String,
    #[tabled(rename = "Last message")]
    last_message: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Unread")]
    unread: String,
}

impl From<&Conversation> for ConversationRow {
    fn from(c: &Conversation) -> Self {
        Self {
            partner: c.partner_name.clone(),
            last_message: c.last_message.clone(),
            time: c.time.clone(),
            unread: if c.unread_count == 0 {
                String::new()
            } else {
                c.unread_count.to_string()
            },
        }
    }
}

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "Message")]
    text: String,
    #[tabled(rename = "Time")]
    time: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &mut Context, args: ChatsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ChatsCommand::List { search } => {
            let mut vm = ChatsListViewModel::new(ctx.conversations());
            if let Some(search) = search {
                vm.set_search_text(search);
            }
            util::with_spinner(global, "Loading conversations", vm.load()).await;
            if let Some(message) = vm.error_message() {
                return Err(CliError::Service {
                    service: "chats".into(),
                    message: message.into(),
                });
            }

            let out = output::render_list(
                &global.format(),
                vm.conversations(),
                |c| ConversationRow::from(c),
                |c| c.partner_name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ChatsCommand::Thread { partner, send } => {
            let conversation = util::resolve_partner(&ctx.conversations(), &partner).await?;
            let partner = conversation.partner_name;
            ctx.app.navigate(Route::ChatThread {
                partner: partner.clone(),
            });

            let mut vm = ChatThreadViewModel::new(ctx.chat_threads(), partner.clone());
            util::with_spinner(global, "Loading thread", vm.load()).await;

            if let Some(text) = send {
                vm.set_input_text(text);
                if vm.input_text().trim().is_empty() {
                    return Err(CliError::Validation {
                        field: "send".into(),
                        reason: "message is empty".into(),
                    });
                }
                if vm.send().await.is_none() {
                    return Err(CliError::Service {
                        service: "chat".into(),
                        message: vm.error_message().unwrap_or("message not sent").into(),
                    });
                }
            }

            let out = output::render_list(
                &global.format(),
                vm.messages(),
                |m: &ChatMessage| MessageRow {
                    from: if m.is_me { "You".into() } else { partner.clone() },
                    text: m.text.clone(),
                    time: m.time.clone(),
                },
                |m| m.text.clone(),
            )?;
            output::note(&ctx.app.visible_screen().to_string(), global.quiet);
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
