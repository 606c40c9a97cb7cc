//! Onboarding command handlers.

use serde::Serialize;
use tabled::Tabled;

use pronet_core::services::OnboardingOutcome;
use pronet_core::viewmodels::{OnboardingPager, OnboardingViewModel};
use pronet_core::Flow;

use crate::cli::{GlobalOpts, OnboardingArgs, OnboardingCommand};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Clone, Serialize, Tabled)]
struct SlideRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Heading")]
    heading: String,
    #[tabled(rename = "Text")]
    text: String,
    #[tabled(skip)]
    animation: String,
}

pub async fn handle(ctx: &mut Context, args: OnboardingArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        OnboardingCommand::Slides => {
            let pager = OnboardingPager::default();
            let slides: Vec<SlideRow> = pager
                .slides()
                .iter()
                .enumerate()
                .map(|(i, s)| SlideRow {
                    index: i + 1,
                    heading: s.heading.clone(),
                    text: s.text.clone(),
                    animation: s.animation.clone(),
                })
                .collect();
            let out = output::render_list(&global.format(), &slides, Clone::clone, |s| {
                s.heading.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OnboardingCommand::Complete { simulate_failure } => {
            if ctx.flow() != Flow::Onboarding {
                output::note("Onboarding already complete", global.quiet);
                return Ok(());
            }

            let outcome = if simulate_failure {
                OnboardingOutcome::Fail
            } else {
                OnboardingOutcome::Succeed
            };
            let mut vm = OnboardingViewModel::new(ctx.onboarding_service(outcome));
            let done = util::with_spinner(global, "Finishing onboarding", vm.complete_onboarding()).await;
            if !done {
                return Err(CliError::Service {
                    service: "onboarding".into(),
                    message: vm.error_message().unwrap_or("not acknowledged").into(),
                });
            }

            ctx.app.complete_onboarding();
            output::note(
                &format!("Onboarding complete. Next: {}", ctx.app.visible_screen()),
                global.quiet,
            );
            Ok(())
        }
    }
}
