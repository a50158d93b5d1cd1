//! CLI error types with miette diagnostics.
//!
//! Maps `ModelError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use fgobj_config::ConfigError;
use fgobj_core::ModelError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const VALIDATION: i32 = 3;
    pub const UNSUPPORTED: i32 = 4;
    pub const MISSING_FIELD: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Model ────────────────────────────────────────────────────────

    #[error("Invalid value for {field}: {rule} (got {value})")]
    #[diagnostic(
        code(fgobj::validation),
        help("Run: fgobj fields <resource> to see the rules for each field")
    )]
    Validation {
        field: String,
        value: String,
        rule: String,
    },

    #[error("{keyword} is not a declared field of {resource}")]
    #[diagnostic(
        code(fgobj::unknown_field),
        help("Run: fgobj fields {resource} to list accepted keywords")
    )]
    UnknownField { keyword: String, resource: String },

    #[error("{field}: {value} is recognized but not yet supported")]
    #[diagnostic(code(fgobj::unsupported))]
    Unsupported { field: String, value: String },

    #[error("{resource}: {field} {reason}")]
    #[diagnostic(
        code(fgobj::missing_field),
        help("Add `{field}` to the definition file")
    )]
    MissingField {
        resource: String,
        field: String,
        reason: String,
    },

    // ── Input ────────────────────────────────────────────────────────

    #[error("Unknown resource '{name}'")]
    #[diagnostic(
        code(fgobj::unknown_resource),
        help("Available resources: {available}")
    )]
    UnknownResource { name: String, available: String },

    #[error("Cannot infer the input format of {path}")]
    #[diagnostic(
        code(fgobj::input_format),
        help("Use a .toml, .yaml, .yml or .json extension, or pass --input-format")
    )]
    InputFormat { path: String },

    #[error("Failed to parse {path}: {reason}")]
    #[diagnostic(
        code(fgobj::parse),
        help("A definition file is a flat mapping of field keyword to value")
    )]
    Parse { path: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(fgobj::profile_not_found),
        help("Run: fgobj config profiles to list configured profiles")
    )]
    ProfileNotFound { name: String },

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(fgobj::config_exists),
        help("Pass --force to overwrite it")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(fgobj::config))]
    Config(ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(fgobj::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(fgobj::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(fgobj::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::VALIDATION,
            Self::Unsupported { .. } => exit_code::UNSUPPORTED,
            Self::MissingField { .. } => exit_code::MISSING_FIELD,
            Self::UnknownField { .. } | Self::UnknownResource { .. } | Self::InputFormat { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── ModelError → CliError mapping ────────────────────────────────────

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Domain { field, value, rule } => Self::Validation { field, value, rule },
            ModelError::UnknownField { keyword, resource } => {
                Self::UnknownField { keyword, resource }
            }
            ModelError::Unsupported { field, value } => Self::Unsupported { field, value },
            ModelError::CrossField {
                resource,
                field,
                reason,
            } => Self::MissingField {
                resource,
                field,
                reason,
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownProfile { name } => Self::ProfileNotFound { name },
            other => Self::Config(other),
        }
    }
}
