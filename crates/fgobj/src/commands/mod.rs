//! Command handlers.

pub mod config_cmd;
pub mod fields;
pub mod render;
pub mod resources;

use strum::IntoEnumIterator;

use fgobj_core::ResourceKind;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler.
pub fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Render(args) => render::handle(&args, global),
        Command::Fields(args) => fields::handle(&args, global),
        Command::Resources => resources::handle(global),
        Command::Config(args) => config_cmd::handle(args, global),
        // Handled in main before dispatch
        Command::Completions(_) => Ok(()),
    }
}

/// Look up a resource by name or alias.
pub(crate) fn resolve_kind(name: &str) -> Result<ResourceKind, CliError> {
    name.parse().map_err(|_| CliError::UnknownResource {
        name: name.to_owned(),
        available: ResourceKind::iter()
            .map(|kind| kind.schema().resource)
            .collect::<Vec<_>>()
            .join(", "),
    })
}
