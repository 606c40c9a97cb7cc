//! Notification command handler.

use tabled::Tabled;

use pronet_core::AppNotification;
use pronet_core::viewmodels::NotificationsViewModel;

use crate::cli::{GlobalOpts, NotificationsArgs};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct NotificationRow {
    #[tabled(rename = "")]
    unread: &'static str,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Time")]
    time: String,
}

impl From<&AppNotification> for NotificationRow {
    fn from(n: &AppNotification) -> Self {
        Self {
            unread: if n.unread { "●" } else { "" },
            kind: n.kind.to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
            time: n.time.clone(),
        }
    }
}

pub async fn handle(ctx: &Context, args: NotificationsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut vm = NotificationsViewModel::new(ctx.notifications());
    vm.set_filter(args.filter.into());
    util::with_spinner(global, "Loading notifications", vm.load()).await;
    if let Some(message) = vm.error_message() {
        return Err(CliError::Service {
            service: "notifications".into(),
            message: message.into(),
        });
    }

    let items: Vec<AppNotification> = vm
        .filtered()
        .filter(|n| !args.unread || n.unread)
        .cloned()
        .collect();
    let out = output::render_list(&global.format(), &items, |n| NotificationRow::from(n), |n| {
        n.id.to_string()
    })?;
    output::print_output(&out, global.quiet);
    output::note(&format!("{} unread", vm.unread_count()), global.quiet);
    Ok(())
}
