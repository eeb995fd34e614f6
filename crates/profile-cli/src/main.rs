//! Profile CLI - command-line front end for building user profile records
//!
//! This is the main entry point for the profile CLI application, exposing
//! the positional, fluent builder and options-object construction styles.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so the file can shape the subscriber
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e, !cli.no_color),
    };

    // Set up colored output
    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

fn exit_with(e: &Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(e, use_color));
    process::exit(e.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = resolve_output_format(cli.output, &config)?;
    let use_color = cli.use_color() && config.output.color;
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        output_format = ?format,
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Build(args) => handlers::handle_build(args, &mut output),
        Commands::Options(args) => handlers::handle_options(args, &config, &mut output),
        Commands::Positional(args) => handlers::handle_positional(args, &mut output),
        Commands::Demo => handlers::handle_demo(&mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// The `--output` flag wins; otherwise the configured format is used
fn resolve_output_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => OutputFormat::from_name(&config.output.format).ok_or_else(|| {
            Error::config(format!("unknown output format '{}'", config.output.format))
        }),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    logging_config.merge_with_file(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["profile", "demo"]);
        assert_eq!(cli.verbosity_level(), 0);

        let cli = Cli::parse_from(["profile", "-vv", "build", "Harley"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["profile", "--quiet", "demo"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_resolve_output_format() {
        let mut config = Config::default();
        assert_eq!(resolve_output_format(None, &config).unwrap(), OutputFormat::Human);
        assert_eq!(
            resolve_output_format(Some(OutputFormat::Yaml), &config).unwrap(),
            OutputFormat::Yaml
        );

        config.output.format = "json-pretty".to_string();
        assert_eq!(resolve_output_format(None, &config).unwrap(), OutputFormat::JsonPretty);

        config.output.format = "xml".to_string();
        assert!(resolve_output_format(None, &config).is_err());
    }
}
