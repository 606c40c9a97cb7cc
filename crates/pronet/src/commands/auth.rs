//! Sign-in command handlers.

use pronet_core::viewmodels::{AuthenticationViewModel, OtpEntry, OTP_LENGTH};
use pronet_core::{CountryCode, Flow, Route};

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(ctx: &mut Context, args: AuthArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AuthCommand::SendCode { phone, country } => {
            ctx.require_flow("auth send-code", Flow::Auth)?;
            let country = CountryCode::from(country);
            let mut vm = AuthenticationViewModel::new(ctx.auth_provider());
            if !vm.set_phone(country, &phone) {
                return Err(CliError::Validation {
                    field: "phone".into(),
                    reason: format!("'{phone}' is not a valid {} number", country.display_name()),
                });
            }
            ctx.app.navigate(Route::PhoneLogin);

            if !util::with_spinner(global, "Sending code", vm.send_otp()).await {
                return Err(CliError::Service {
                    service: "auth".into(),
                    message: vm.error_message().unwrap_or("code not sent").into(),
                });
            }
            let dialled = vm.state().phone_number.clone();
            ctx.app.navigate(Route::OtpVerification {
                phone: dialled.clone(),
            });
            output::note(
                &format!("{} Code sent to {dialled}", country.flag()),
                global.quiet,
            );
            output::print_output(&ctx.app.visible_screen().to_string(), global.quiet);
            Ok(())
        }

        AuthCommand::Verify { code } => {
            ctx.require_flow("auth verify", Flow::Auth)?;
            let mut entry = OtpEntry::default();
            entry.set(&code);
            if !entry.is_complete() {
                return Err(CliError::Validation {
                    field: "code".into(),
                    reason: format!("expected {OTP_LENGTH} digits"),
                });
            }

            let mut vm = AuthenticationViewModel::new(ctx.auth_provider());
            if !util::with_spinner(global, "Verifying", vm.verify_otp(entry.code())).await {
                return Err(CliError::AuthFailed {
                    reason: vm.error_message().unwrap_or("code rejected").into(),
                });
            }
            signed_in(ctx, global);
            Ok(())
        }

        AuthCommand::Oauth { provider } => {
            ctx.require_flow("auth oauth", Flow::Auth)?;
            ctx.app.navigate(Route::OAuthLogin);
            let mut vm = AuthenticationViewModel::new(ctx.auth_provider());
            let message = format!("Signing in with {provider}");
            if !util::with_spinner(global, &message, vm.sign_in_with_oauth(&provider)).await {
                return Err(CliError::AuthFailed {
                    reason: vm.error_message().unwrap_or("provider declined").into(),
                });
            }
            signed_in(ctx, global);
            Ok(())
        }

        AuthCommand::Logout => {
            match ctx.flow() {
                Flow::Main => {
                    if !util::confirm("Sign out?", "auth logout", global.yes)? {
                        return Ok(());
                    }
                    ctx.app.logout();
                    output::note("Signed out", global.quiet);
                }
                Flow::Auth => output::note("Not signed in", global.quiet),
                Flow::Onboarding => ctx.require_flow("auth logout", Flow::Main)?,
            }
            Ok(())
        }
    }
}

fn signed_in(ctx: &mut Context, global: &GlobalOpts) {
    ctx.app.login_succeeded();
    output::note(
        &format!("Signed in. Now on {}", ctx.app.visible_screen()),
        global.quiet,
    );
}
