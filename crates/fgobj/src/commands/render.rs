//! `fgobj render <resource> <file>`
//!
//! A definition file is a flat mapping of field keyword (local field names
//! plus `vdom`) to value; `null` leaves a field at its device default.
//! Every entry goes through the resource's validators before anything is
//! printed.

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use fgobj_core::{ApiAction, FieldValue, Resource, ResourceRecord};

use crate::cli::{GlobalOpts, InputFormat, OutputFormat, RenderArgs};
use crate::commands::resolve_kind;
use crate::config;
use crate::error::CliError;
use crate::output;

type Entries = IndexMap<String, Option<FieldValue>>;

const STDIN: &str = "-";

// ── Input ───────────────────────────────────────────────────────────

fn input_format(path: &Path, flag: Option<InputFormat>) -> Result<InputFormat, CliError> {
    if let Some(format) = flag {
        return Ok(format);
    }
    if path.as_os_str() == STDIN {
        // JSON documents are valid YAML too.
        return Ok(InputFormat::Yaml);
    }

    let ext = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("toml") => Ok(InputFormat::Toml),
        Some("yaml" | "yml") => Ok(InputFormat::Yaml),
        Some("json") => Ok(InputFormat::Json),
        _ => Err(CliError::InputFormat {
            path: path.display().to_string(),
        }),
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == STDIN {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn parse_entries(format: InputFormat, text: &str, path: &Path) -> Result<Entries, CliError> {
    let parsed = match format {
        InputFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        InputFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        InputFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| CliError::Parse {
        path: path.display().to_string(),
        reason,
    })
}

// ── Output ──────────────────────────────────────────────────────────

fn cli_text(record: &ResourceRecord, action: ApiAction) -> Result<String, CliError> {
    let block = match action {
        ApiAction::Delete => record.cli_delete()?,
        ApiAction::Add | ApiAction::Update => record.cli_block()?,
    };
    Ok(block.to_string())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &RenderArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let kind = resolve_kind(&args.resource)?;
    let settings = config::effective(global)?;

    let format = input_format(&args.file, args.input_format)?;
    let entries = parse_entries(format, &read_input(&args.file)?, &args.file)?;
    tracing::debug!(resource = %kind, entries = entries.len(), ?format, "parsed definition");

    let mut record = kind.build(entries)?;

    // --vdom beats the file, the file beats the profile.
    if let Some(vdom) = &args.vdom {
        record.set_vdom(Some(vdom.as_str().into()))?;
    } else if record.vdom().is_none() {
        if let Some(vdom) = settings.vdom {
            record.set_vdom(Some(vdom.into()))?;
        }
    }

    let action = args.action.map_or(settings.action, config::api_action);
    tracing::info!(
        resource = %kind,
        object = record.object_id().unwrap_or("-"),
        vdom = record.vdom().unwrap_or("-"),
        profile = settings.profile.as_deref().unwrap_or("-"),
        %action,
        "rendering"
    );

    let out = match settings.output {
        OutputFormat::Cli => cli_text(&record, action)?,
        structured => {
            let request = record.api_request(action)?;
            output::render_structured(structured, &request)?
        }
    };
    output::print_output(&out, global.quiet)
}
