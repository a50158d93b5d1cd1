//! `fgobj fields <resource>`

use serde::Serialize;
use tabled::Tabled;

use fgobj_core::FieldDescriptor;

use crate::cli::{FieldsArgs, GlobalOpts};
use crate::commands::resolve_kind;
use crate::config;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct FieldInfo {
    field: &'static str,
    wire_name: &'static str,
    kind: String,
    rules: String,
    default: Option<String>,
    in_cli: bool,
}

impl From<&FieldDescriptor> for FieldInfo {
    fn from(d: &FieldDescriptor) -> Self {
        Self {
            field: d.name,
            wire_name: d.wire_name,
            kind: d.kind.to_string(),
            rules: d.describe_rules(),
            default: d.initial_value().map(|v| v.to_wire_string()),
            in_cli: !d.ignore_in_cli,
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Wire")]
    wire_name: &'static str,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Rule")]
    rules: String,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "CLI")]
    in_cli: &'static str,
}

pub fn handle(args: &FieldsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let kind = resolve_kind(&args.resource)?;
    let format = config::effective(global)?.output;
    let data: Vec<FieldInfo> = kind.schema().fields.iter().map(FieldInfo::from).collect();

    let out = output::render_list(format, &data, |f| FieldRow {
        field: f.field,
        wire_name: f.wire_name,
        kind: f.kind.clone(),
        rules: f.rules.clone(),
        default: f.default.clone().unwrap_or_default(),
        in_cli: if f.in_cli { "yes" } else { "no" },
    })?;
    output::print_output(&out, global.quiet)
}
