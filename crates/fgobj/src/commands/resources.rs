//! `fgobj resources`

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::Tabled;

use fgobj_core::ResourceKind;

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct ResourceInfo {
    resource: String,
    api_path: String,
    cli_path: &'static str,
    id_field: &'static str,
}

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "API Path")]
    api_path: String,
    #[tabled(rename = "CLI Path")]
    cli_path: &'static str,
    #[tabled(rename = "ID")]
    id_field: &'static str,
}

fn info(kind: ResourceKind) -> ResourceInfo {
    let identity = &kind.schema().identity;
    ResourceInfo {
        resource: kind.to_string(),
        api_path: identity.method_path(),
        cli_path: identity.cli_path,
        id_field: identity.id_field,
    }
}

pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let format = config::effective(global)?.output;
    let data: Vec<ResourceInfo> = ResourceKind::iter().map(info).collect();

    let out = output::render_list(format, &data, |r| ResourceRow {
        resource: r.resource.clone(),
        api_path: r.api_path.clone(),
        cli_path: r.cli_path,
        id_field: r.id_field,
    })?;
    output::print_output(&out, global.quiet)
}
