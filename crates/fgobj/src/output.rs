//! Output formatting: CLI text, JSON, YAML.
//!
//! Renders data in the format selected by `--output` (or the active
//! profile). `cli` means FortiOS CLI text for rendered resources and a
//! `tabled` table for listings; the structured formats use serde.

use std::io::{self, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable items in the chosen format.
///
/// - `cli`: uses the `Tabled` row type to build a table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Cli => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        structured => render_structured(structured, data),
    }
}

/// Render a single item; `text_fn` supplies the `cli` form.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    text_fn: impl Fn(&T) -> Result<String, CliError>,
) -> Result<String, CliError>
where
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Cli => text_fn(data),
        structured => render_structured(structured, data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) -> Result<(), CliError> {
    if quiet || output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    if output.ends_with('\n') {
        write!(stdout, "{output}")?;
    } else {
        writeln!(stdout, "{output}")?;
    }
    Ok(())
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// JSON (pretty or compact) or YAML; `cli` falls back to pretty JSON.
pub(crate) fn render_structured<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Json | OutputFormat::Cli => serde_json::to_string_pretty(data)?,
    })
}
