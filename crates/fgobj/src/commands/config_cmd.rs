//! Config subcommand handlers.

use fgobj_config::Profile;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Starter file written by `config init`: the built-in defaults plus an
/// empty `default` profile to fill in.
fn starter_config() -> Config {
    let mut cfg = Config::default();
    cfg.profiles.insert("default".into(), Profile::default());
    cfg
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            let path = config::config_path(global);
            output::print_output(&path.display().to_string(), global.quiet)
        }

        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let format = global.output.unwrap_or(OutputFormat::Cli);
            let out = output::render_single(format, &cfg, |c| Ok(toml::to_string_pretty(c)?))?;
            output::print_output(&out, global.quiet)
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path(global);
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            config::save_config_to(&path, &starter_config())?;
            tracing::info!(path = %path.display(), "wrote config");
            if !global.quiet {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load(global)?;
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                if !global.quiet {
                    eprintln!("No profiles configured. Run: fgobj config init");
                }
                return Ok(());
            }

            let mut names: Vec<_> = cfg.profiles.keys().collect();
            names.sort();
            let listing = names
                .into_iter()
                .map(|name| {
                    if name == default {
                        format!("{name} *")
                    } else {
                        name.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            output::print_output(&listing, global.quiet)
        }
    }
}
