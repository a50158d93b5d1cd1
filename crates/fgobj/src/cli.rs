//! Clap derive structures for the `fgobj` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Kept
//! free of workspace crates so build.rs can compile it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fgobj -- validated FortiGate configuration objects
#[derive(Debug, Parser)]
#[command(
    name = "fgobj",
    version,
    about = "Render validated FortiGate resource definitions",
    long_about = "Validate FortiGate resource definitions and render them as\n\
        FortiOS CLI blocks or REST API requests.\n\n\
        Every value is checked against the resource's field rules before\n\
        anything is printed.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "FGOBJ_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Profile to take defaults from
    #[arg(long, short = 'p', env = "FGOBJ_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Output format (overrides profile and defaults)
    #[arg(long, short = 'o', env = "FGOBJ_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// FortiOS CLI block (tables for listings)
    Cli,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    /// Create the object (POST)
    Add,
    /// Create or modify the object (PUT)
    Update,
    /// Remove the object (DELETE / `delete` line)
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Toml,
    Yaml,
    Json,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a resource definition file and render it
    #[command(alias = "r")]
    Render(RenderArgs),

    /// List the fields of a resource with their rules
    Fields(FieldsArgs),

    /// List known resources
    #[command(alias = "ls")]
    Resources,

    /// Manage the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Render ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Resource name (see `fgobj resources`)
    pub resource: String,

    /// Definition file (.toml, .yaml, .yml, .json), or `-` for stdin
    pub file: PathBuf,

    /// What the rendered output should do with the object
    #[arg(long, short = 'a')]
    pub action: Option<ActionArg>,

    /// VDOM scope (overrides the file and profile)
    #[arg(long)]
    pub vdom: Option<String>,

    /// Input format when it cannot be inferred from the file extension
    #[arg(long, short = 'f')]
    pub input_format: Option<InputFormat>,
}

// ── Fields ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Resource name (see `fgobj resources`)
    pub resource: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Display the effective configuration
    Show,

    /// Write a starter config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List configured profiles
    Profiles,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
