//! Format Resolver CLI
//!
//! Resolves format identifiers to their representative output and lists the
//! registered formats.
//!
//! ## Usage
//!
//! ```bash
//! # Resolve identifiers (unknown ones print an empty line)
//! format-resolver resolve json xml pdf
//!
//! # Fail on unknown identifiers
//! format-resolver resolve --strict yaml
//!
//! # List registered formats
//! format-resolver list --format json-pretty
//!
//! # Write an example config with custom formats
//! format-resolver config init ./format-resolver.yaml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{debug, warn};

mod cli;

use cli::{Args, Command, ConfigAction};
use format_resolver::config::{env, ConfigFile, EnvConfig};
use format_resolver::output::{EntryFormatter, OutputFormat};
use format_resolver::utils::{init_logger, LogLevel};
use format_resolver::FormatResolver;

fn main() -> Result<()> {
    let args = Args::parse();
    let env_config = EnvConfig::load();

    let config_path = args
        .config
        .clone()
        .or_else(|| env_config.config_file.clone());

    let config = match &args.command {
        // These must work even when the discovered config is broken
        Command::Config(config_args)
            if !matches!(config_args.action, ConfigAction::Show { .. }) =>
        {
            ConfigFile::default()
        }
        _ => load_config(config_path.as_deref())?,
    };

    let config = effective_config(&args, &env_config, config);

    let level = LogLevel::from_str(&config.app.log_level).unwrap_or(LogLevel::Info);
    init_logger(level, config.app.colorize);
    if LogLevel::from_str(&config.app.log_level).is_none() {
        warn!("Unknown log level '{}', using info", config.app.log_level);
    }

    match args.command {
        Command::Resolve(resolve_args) => {
            let resolver = config.build_resolver()?;
            run_resolve(&resolver, &config, resolve_args)?;
        }
        Command::List(list_args) => {
            let resolver = config.build_resolver()?;
            list_formats(&resolver, &config, list_args)?;
        }
        Command::Config(config_args) => {
            manage_config(config_args, &config, &env_config, config_path.as_deref())?;
        }
    }

    Ok(())
}

/// Overlay settings: CLI flags over environment over the config file
fn effective_config(args: &Args, env: &EnvConfig, mut config: ConfigFile) -> ConfigFile {
    config.app.apply_env(env);
    if let Some(level) = &args.log_level {
        config.app.log_level = level.clone();
    }
    if args.verbose {
        config.app.log_level = "debug".to_string();
    }
    if args.no_color {
        config.app.colorize = false;
    }
    config
}

fn load_config(path: Option<&str>) -> Result<ConfigFile> {
    match path {
        Some(path) => {
            debug!("Loading config from {path}");
            ConfigFile::load(path)
        }
        None => ConfigFile::load_default(),
    }
}

fn output_format(flag: Option<&str>, config: &ConfigFile) -> Result<OutputFormat> {
    let name = flag.unwrap_or(&config.app.output_format);
    OutputFormat::from_str(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown output format: {name}"))
}

fn formatter(format: OutputFormat, config: &ConfigFile) -> EntryFormatter {
    let formatter = EntryFormatter::new(format);
    if config.app.colorize {
        formatter
    } else {
        formatter.no_color()
    }
}

fn print_output(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

fn run_resolve(
    resolver: &FormatResolver,
    config: &ConfigFile,
    args: cli::ResolveArgs,
) -> Result<()> {
    let format = output_format(args.format.as_deref(), config)?;

    let resolutions: Vec<_> = args
        .identifiers
        .iter()
        .map(|id| resolver.resolution(id))
        .collect();

    for resolution in resolutions.iter().filter(|r| !r.is_found()) {
        if args.strict {
            anyhow::bail!("Unknown format identifier: {:?}", resolution.identifier);
        }
        debug!("No format registered for {:?}", resolution.identifier);
    }

    print_output(&formatter(format, config).format_resolutions(&resolutions)?);
    Ok(())
}

fn list_formats(
    resolver: &FormatResolver,
    config: &ConfigFile,
    args: cli::ListArgs,
) -> Result<()> {
    let format = output_format(args.format.as_deref(), config)?;

    let entries: Vec<_> = resolver
        .entries()
        .into_iter()
        .filter(|e| !args.builtin || e.is_builtin())
        .collect();

    debug!("{} formats registered", entries.len());
    print_output(&formatter(format, config).format_entries(&entries)?);
    Ok(())
}

fn manage_config(
    args: cli::ConfigArgs,
    config: &ConfigFile,
    env_config: &EnvConfig,
    config_path: Option<&str>,
) -> Result<()> {
    match args.action {
        ConfigAction::Init { path, force } => {
            if Path::new(&path).exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {path}. Use --force to overwrite."
                );
            }

            ConfigFile::example().save(&path)?;
            println!("✓ Configuration file created: {path}");
        }

        ConfigAction::Show { json } => {
            let output = if json {
                serde_json::to_string_pretty(config).context("Failed to serialize config")?
            } else {
                serde_yaml::to_string(config).context("Failed to serialize config")?
            };
            print_output(&output);
        }

        ConfigAction::Validate { file } => {
            let path = file
                .or_else(|| config_path.map(str::to_string))
                .or_else(|| ConfigFile::find().map(|p| p.to_string_lossy().to_string()))
                .unwrap_or_else(|| "./format-resolver.yaml".to_string());

            match ConfigFile::load(&path) {
                Ok(loaded) => {
                    println!("✓ Configuration file is valid: {path}");
                    println!("  {} custom formats", loaded.app.formats.len());
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e:#}");
                    return Err(e);
                }
            }
        }

        ConfigAction::Env => {
            env::print_env_help();
            println!();
            if env_config.has_any() {
                env_config.print_summary();
            } else {
                println!("No FORMAT_RESOLVER_* variables are set.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use format_resolver::config::AppConfig;

    fn file_config() -> ConfigFile {
        ConfigFile {
            app: AppConfig {
                log_level: "warn".to_string(),
                output_format: "csv".to_string(),
                colorize: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn env_config() -> EnvConfig {
        EnvConfig {
            log_level: Some("error".to_string()),
            format: Some("yaml".to_string()),
            no_color: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_values_without_overrides() {
        let args = Args::parse_from(["format-resolver", "list"]);
        let config = effective_config(&args, &EnvConfig::default(), file_config());

        assert_eq!(config.app.log_level, "warn");
        assert_eq!(config.app.output_format, "csv");
        assert!(config.app.colorize);
    }

    #[test]
    fn test_env_overrides_file() {
        let args = Args::parse_from(["format-resolver", "list"]);
        let config = effective_config(&args, &env_config(), file_config());

        assert_eq!(config.app.log_level, "error");
        assert_eq!(config.app.output_format, "yaml");
        assert!(config.app.colorize);
    }

    #[test]
    fn test_cli_overrides_env_and_file() {
        let args = Args::parse_from([
            "format-resolver",
            "list",
            "--log-level",
            "trace",
            "--no-color",
        ]);
        let config = effective_config(&args, &env_config(), file_config());

        assert_eq!(config.app.log_level, "trace");
        assert_eq!(config.app.output_format, "yaml");
        assert!(!config.app.colorize);
    }

    #[test]
    fn test_verbose_overrides_log_level() {
        let args = Args::parse_from(["format-resolver", "-v", "list", "--log-level", "error"]);
        let config = effective_config(&args, &env_config(), file_config());

        assert_eq!(config.app.log_level, "debug");
    }

    #[test]
    fn test_no_color_from_env_overrides_file() {
        let args = Args::parse_from(["format-resolver", "list"]);
        let env = EnvConfig {
            no_color: Some(true),
            ..Default::default()
        };
        let config = effective_config(&args, &env, file_config());

        assert!(!config.app.colorize);
        assert_eq!(config.app.log_level, "warn");
    }

    #[test]
    fn test_output_format_flag_overrides_config() {
        let config = effective_config(
            &Args::parse_from(["format-resolver", "list"]),
            &env_config(),
            file_config(),
        );

        assert_eq!(output_format(Some("json"), &config).unwrap(), OutputFormat::Json);
        assert_eq!(output_format(None, &config).unwrap(), OutputFormat::Yaml);
        assert!(output_format(Some("xml"), &config).is_err());
    }
}
