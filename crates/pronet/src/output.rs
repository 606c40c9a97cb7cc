//! Rendering for `--output`.
//!
//! Lists and single records share one path for the serde formats; only
//! `table` and `plain` need per-command closures. Notes and progress go
//! to stderr so stdout stays machine-readable.

use std::io::{IsTerminal, Write, stdout};

use owo_colors::OwoColorize;
use pronet_core::{DeckStatus, Flow};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color ───────────────────────────────────────────────────────────

/// `auto` colors only an interactive stdout without `NO_COLOR`.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Auto => stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        ColorMode::Always => true,
        ColorMode::Never => false,
    }
}

pub fn paint_status(status: DeckStatus, color: bool) -> String {
    let label = status.to_string();
    match (color, status) {
        (false, _) => label,
        (true, DeckStatus::Active) => label.green().to_string(),
        (true, DeckStatus::Exhausted) => label.yellow().to_string(),
        (true, DeckStatus::LimitReached) => label.red().to_string(),
    }
}

pub fn paint_flow(flow: Flow, color: bool) -> String {
    let label = flow.to_string();
    match (color, flow) {
        (false, _) => label,
        (true, Flow::Onboarding) => label.cyan().to_string(),
        (true, Flow::Auth) => label.yellow().to_string(),
        (true, Flow::Main) => label.green().bold().to_string(),
    }
}

// ── Rendering ───────────────────────────────────────────────────────

/// The serde-backed formats, or `None` for `table` and `plain`.
fn structured<T: Serialize + ?Sized>(
    format: &OutputFormat,
    data: &T,
) -> Option<Result<String, CliError>> {
    let (name, rendered) = match format {
        OutputFormat::Json => (
            "json",
            serde_json::to_string_pretty(data).map_err(|e| e.to_string()),
        ),
        OutputFormat::JsonCompact => (
            "json-compact",
            serde_json::to_string(data).map_err(|e| e.to_string()),
        ),
        OutputFormat::Yaml => (
            "yaml",
            serde_yaml::to_string(data)
                .map(|y| y.trim_end().to_owned())
                .map_err(|e| e.to_string()),
        ),
        OutputFormat::Table | OutputFormat::Plain => return None,
    };
    Some(rendered.map_err(|reason| CliError::Output {
        format: name.into(),
        reason,
    }))
}

/// Records as a table of `to_row` rows, one `key` per line for `plain`,
/// or the records themselves through serde.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    key: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    if let Some(out) = structured(format, data) {
        return out;
    }
    if *format == OutputFormat::Plain {
        return Ok(data.iter().map(key).collect::<Vec<_>>().join("\n"));
    }
    Ok(Table::new(data.iter().map(to_row))
        .with(Style::rounded())
        .to_string())
}

/// One record: `detail` builds the human view, `key` the plain one.
pub fn render_single<T: Serialize>(
    format: &OutputFormat,
    data: &T,
    detail: impl Fn(&T) -> String,
    key: impl Fn(&T) -> String,
) -> Result<String, CliError> {
    structured(format, data).unwrap_or_else(|| {
        Ok(match format {
            OutputFormat::Plain => key(data),
            _ => detail(data),
        })
    })
}

/// Write rendered output to stdout unless quiet or empty.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let _ = writeln!(stdout().lock(), "{output}");
}

/// Status line on stderr, suppressed by `--quiet`.
pub fn note(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}
