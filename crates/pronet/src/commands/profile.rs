//! Profile command handlers.

use pronet_core::viewmodels::ProfileViewModel;
use pronet_core::UserProfile;

use crate::cli::{GlobalOpts, ProfileArgs, ProfileCommand};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

use super::util;

pub(crate) fn detail(p: &UserProfile) -> String {
    let mut lines = vec![
        format!("ID:          {}", p.id),
        format!(
            "Name:        {}{}",
            p.full_name,
            if p.is_verified { " ✓" } else { "" }
        ),
        format!("Headline:    {}", or_dash(&p.headline)),
        format!("Location:    {}", p.location().unwrap_or_else(|| "-".into())),
    ];
    if let Some(age) = p.age {
        lines.push(format!("Age:         {age}"));
    }
    if !p.bio.is_empty() {
        lines.push(format!("Bio:         {}", p.bio));
    }
    if let Some(h) = p.height_cm {
        lines.push(format!("Height:      {h} cm"));
    }
    if let Some(status) = &p.relationship_status {
        lines.push(format!("Status:      {status}"));
    }
    lines.push(format!("Interests:   {}", util::join_or_dash(&p.interests)));
    lines.push(format!("Looking for: {}", util::join_or_dash(&p.looking_for)));
    let friends: Vec<String> = p.friends.iter().map(|f| f.name.clone()).collect();
    lines.push(format!("Friends:     {}", util::join_or_dash(&friends)));
    lines.join("\n")
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

pub async fn handle(ctx: &Context, args: ProfileArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut vm = ProfileViewModel::new(ctx.profiles());
    match args.command {
        ProfileCommand::Show => {
            util::with_spinner(global, "Loading profile", vm.load_own_profile()).await;
        }
        ProfileCommand::View { id } => {
            util::with_spinner(global, "Loading profile", vm.load_other_user_profile(&id)).await;
        }
    }

    let Some(profile) = vm.profile() else {
        return Err(CliError::Service {
            service: "profile".into(),
            message: vm.error_message().unwrap_or("no profile returned").into(),
        });
    };
    let out = output::render_single(&global.format(), profile, detail, |p| p.id.to_string())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
