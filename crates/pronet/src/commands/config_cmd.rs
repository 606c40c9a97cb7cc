//! Config subcommand handlers.

use dialoguer::{Confirm, Input, Select};
use serde::Serialize;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util::{self, prompt_err};

const OUTPUT_CHOICES: [&str; 5] = ["table", "json", "json-compact", "yaml", "plain"];

#[derive(Serialize)]
struct Paths {
    config: String,
    state: Option<String>,
}

/// Guided setup. With `--yes` the defaults are written without prompting.
fn wizard(yes: bool) -> Result<Config, CliError> {
    let mut cfg = Config::default();
    if yes {
        return Ok(cfg);
    }

    let output = Select::new()
        .with_prompt("Default output format")
        .items(&OUTPUT_CHOICES)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    cfg.defaults.output = OUTPUT_CHOICES
        .get(output)
        .map_or_else(|| "table".into(), |s| (*s).into());

    cfg.discovery.circular = Confirm::new()
        .with_prompt("Recycle swiped cards to the back of the deck?")
        .default(true)
        .interact()
        .map_err(prompt_err)?;

    let limit: u32 = Input::new()
        .with_prompt("Free swipes per day (0 = unlimited)")
        .default(0)
        .interact_text()
        .map_err(prompt_err)?;
    cfg.discovery.daily_free_limit = (limit > 0).then_some(limit);

    cfg.mock.latency_ms = Input::new()
        .with_prompt("Simulated service latency (ms)")
        .default(cfg.mock.latency_ms)
        .interact_text()
        .map_err(prompt_err)?;

    Ok(cfg)
}

pub fn handle(args: ConfigArgs, global: &mut GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            if config_path.exists()
                && !util::confirm(
                    &format!("Overwrite {}?", config_path.display()),
                    "config init",
                    global.yes,
                )?
            {
                return Ok(());
            }

            output::note("pronet configuration wizard", global.quiet || global.yes);
            let cfg = wizard(global.yes)?;
            let written = pronet_config::save_config(&cfg)?;
            output::note(
                &format!("Configuration written to {}", written.display()),
                global.quiet,
            );
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let out = output::render_single(
                &global.format(),
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("{c:#?}\n# {e}")),
                |_| "config".into(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            let cfg = config::load(global)?;
            let paths = Paths {
                config: config::config_path().display().to_string(),
                state: config::state_path(global, &cfg).map(|p| p.display().to_string()),
            };
            let out = output::render_single(
                &global.format(),
                &paths,
                |p| {
                    format!(
                        "Config: {}\nState:  {}",
                        p.config,
                        p.state.as_deref().unwrap_or("(in memory)")
                    )
                },
                |p| p.config.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
