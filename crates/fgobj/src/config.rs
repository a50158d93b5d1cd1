//! CLI configuration, a thin wrapper around `fgobj_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--config, --profile, --output).

use std::path::PathBuf;

use clap::ValueEnum;

use fgobj_config::ConfigError;
use fgobj_core::ApiAction;

use crate::cli::{ActionArg, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use fgobj_config::{Config, save_config_to};

/// Settings after flags, profile and defaults are layered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effective {
    pub profile: Option<String>,
    pub vdom: Option<String>,
    pub output: OutputFormat,
    pub action: ApiAction,
}

/// `--config` / `FGOBJ_CONFIG`, else the platform default.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(fgobj_config::config_path)
}

pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(fgobj_config::load_config_from(&config_path(global))?)
}

/// Resolve effective settings: flag > profile > defaults.
pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Effective, CliError> {
    let settings = cfg.resolve(global.profile.as_deref())?;

    let output = global.output.map_or_else(
        || {
            OutputFormat::from_str(&settings.output, true).map_err(|reason| {
                ConfigError::Validation {
                    field: "output".into(),
                    reason,
                }
            })
        },
        Ok,
    )?;

    tracing::debug!(
        profile = ?settings.profile,
        vdom = ?settings.vdom,
        ?output,
        action = %settings.action,
        "resolved settings"
    );

    Ok(Effective {
        profile: settings.profile,
        vdom: settings.vdom,
        output,
        action: settings.action,
    })
}

/// Load the config and resolve it in one step.
pub fn effective(global: &GlobalOpts) -> Result<Effective, CliError> {
    let cfg = load(global)?;
    resolve(global, &cfg)
}

pub fn api_action(arg: ActionArg) -> ApiAction {
    match arg {
        ActionArg::Add => ApiAction::Add,
        ActionArg::Update => ApiAction::Update,
        ActionArg::Delete => ApiAction::Delete,
    }
}
