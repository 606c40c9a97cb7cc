//! `pronet flow`: persisted flags and the flow they select.

use serde::Serialize;

use pronet_core::Flow;

use crate::cli::GlobalOpts;
use crate::context::Context;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct FlowView {
    flow: Flow,
    has_completed_onboarding: bool,
    is_authenticated: bool,
    screen: String,
}

pub fn handle(ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    let state = ctx.app.app_state();
    let view = FlowView {
        flow: ctx.flow(),
        has_completed_onboarding: state.has_completed_onboarding(),
        is_authenticated: state.is_authenticated(),
        screen: ctx.app.visible_screen().to_string(),
    };

    let color = ctx.color;
    let out = output::render_single(
        &global.format(),
        &view,
        |v| {
            [
                format!("Flow:        {}", output::paint_flow(v.flow, color)),
                format!("Onboarded:   {}", v.has_completed_onboarding),
                format!("Signed in:   {}", v.is_authenticated),
                format!("Screen:      {}", v.screen),
            ]
            .join("\n")
        },
        |v| v.flow.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
