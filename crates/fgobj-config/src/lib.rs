//! Configuration for the fgobj renderer.
//!
//! TOML profiles layered under `FGOBJ_*` environment overrides. A profile
//! supplies per-target defaults (VDOM scope, output format, API action)
//! that command-line flags can still override.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fgobj_core::ApiAction;

/// Output formats accepted by `defaults.output` and `profiles.*.output`.
pub const OUTPUT_FORMATS: &[&str] = &["cli", "json", "json-compact", "yaml"];

/// Prefix of environment overrides; nested keys are separated by `__`,
/// e.g. `FGOBJ_DEFAULTS__OUTPUT=yaml`.
pub const ENV_PREFIX: &str = "FGOBJ_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found in config")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is requested.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named target profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// `add`, `update` or `delete`.
    #[serde(default = "default_action")]
    pub action: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            action: default_action(),
        }
    }
}

fn default_output() -> String {
    "cli".into()
}
fn default_action() -> String {
    "update".into()
}

/// A named target, typically one device or one tenant VDOM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// VDOM applied to rendered resources that do not name one.
    pub vdom: Option<String>,

    /// Override `defaults.output`.
    pub output: Option<String>,

    /// Override `defaults.action`.
    pub action: Option<String>,
}

/// Effective settings after profile resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name of the profile that contributed, if any.
    pub profile: Option<String>,
    pub vdom: Option<String>,
    pub output: String,
    pub action: ApiAction,
}

impl Config {
    /// Resolve the effective settings for `requested` (or the default
    /// profile).
    ///
    /// An explicitly requested profile must exist. A missing default
    /// profile falls back to the global defaults.
    pub fn resolve(&self, requested: Option<&str>) -> Result<Settings, ConfigError> {
        let (name, profile) = if let Some(name) = requested {
            let profile = self
                .profiles
                .get(name)
                .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })?;
            (Some(name), Some(profile))
        } else {
            let name = self.default_profile.as_deref();
            (name, name.and_then(|n| self.profiles.get(n)))
        };

        let output = profile
            .and_then(|p| p.output.clone())
            .unwrap_or_else(|| self.defaults.output.clone());
        let action = profile
            .and_then(|p| p.action.as_deref())
            .unwrap_or(&self.defaults.action);

        Ok(Settings {
            profile: profile.and(name).map(str::to_owned),
            vdom: profile.and_then(|p| p.vdom.clone()),
            output: validate_output(&output)?,
            action: parse_action(action)?,
        })
    }

    /// Check every output and action string in the file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_output(&self.defaults.output)?;
        parse_action(&self.defaults.action)?;
        for profile in self.profiles.values() {
            if let Some(output) = &profile.output {
                validate_output(output)?;
            }
            if let Some(action) = &profile.action {
                parse_action(action)?;
            }
        }
        Ok(())
    }
}

fn validate_output(output: &str) -> Result<String, ConfigError> {
    let normalized = output.to_ascii_lowercase();
    if OUTPUT_FORMATS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ConfigError::Validation {
            field: "output".into(),
            reason: format!("expected one of {}, got '{output}'", OUTPUT_FORMATS.join(", ")),
        })
    }
}

fn parse_action(action: &str) -> Result<ApiAction, ConfigError> {
    action.parse().map_err(|_| ConfigError::Validation {
        field: "action".into(),
        reason: format!("expected 'add', 'update', or 'delete', got '{action}'"),
    })
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "fgobj", "fgobj").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("fgobj");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from `path` + environment. A missing file is not
/// an error; defaults and environment still apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
