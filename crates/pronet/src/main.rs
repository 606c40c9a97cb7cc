mod cli;
mod commands;
mod config;
mod context;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::context::Context;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    // A single -v limits debug output to the pronet crates.
    let filter = match verbosity {
        0 => "warn",
        1 => "warn,pronet=debug,pronet_core=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        mut global,
        command,
    } = cli;

    match command {
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "pronet", &mut std::io::stdout());
            Ok(())
        }

        // Config commands don't need the flag store
        Command::Config(args) => commands::config_cmd::handle(args, &mut global),

        cmd => {
            let cfg = config::load(&mut global)?;
            let mut ctx = Context::build(&global, &cfg)?;

            tracing::debug!(command = ?cmd, flow = %ctx.flow(), "dispatching command");
            commands::dispatch(cmd, &mut ctx, &global).await
        }
    }
}
