//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use profile_core::Phone;
use std::convert::Infallible;
use std::path::PathBuf;

/// Profile CLI - build user profile records three different ways
///
/// Construct a record positionally, through a fluent builder, or from an
/// options object, and print it as text, JSON or YAML.
#[derive(Parser, Debug)]
#[command(
    name = "profile",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PROFILE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (falls back to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a record with the fluent builder, calling only the given setters
    #[command(args_override_self = true)]
    Build(BuildArgs),

    /// Build a record from a name and an options object
    #[command(args_override_self = true)]
    Options(OptionsArgs),

    /// Build a record with every field passed positionally
    Positional(PositionalArgs),

    /// Print the canonical example records for each construction style
    Demo,

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Phone values go through `FromStr` so plain digits become a number
fn parse_phone(input: &str) -> Result<Phone, Infallible> {
    input.parse()
}

/// Optional record fields shared by `build` and `options`
///
/// Repeating a flag keeps the last value.
#[derive(Parser, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Age of the user
    #[arg(long)]
    pub age: Option<u32>,

    /// Phone number; plain digits are stored as a number, anything else as text
    #[arg(long, value_parser = parse_phone)]
    pub phone: Option<Phone>,

    /// Street address
    #[arg(long)]
    pub address: Option<String>,
}

impl FieldArgs {
    /// Whether no field flag was given
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Name of the user (mandatory)
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Arguments for the options command
#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Name of the user (mandatory)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Options file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short, long, value_name = "OPTIONS_FILE")]
    pub file: Option<PathBuf>,

    // Applied over values read from the options file
    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Arguments for the positional command
#[derive(Parser, Debug)]
pub struct PositionalArgs {
    /// Name of the user (mandatory)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Age of the user
    #[arg(value_name = "AGE")]
    pub age: Option<u32>,

    /// Phone number
    #[arg(value_name = "PHONE", value_parser = parse_phone)]
    pub phone: Option<Phone>,

    /// Street address
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init(ConfigInitArgs),

    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// List the configuration file locations that are searched
    Path,
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file (defaults to the user config directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Force overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl OutputFormat {
    /// Parse a format name as written in a config file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: None,
            no_color: false,
            command: Commands::Demo,
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli { quiet: true, ..cli };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_build_flags_parse() {
        let cli = Cli::parse_from([
            "profile", "build", "Travis", "--age", "18", "--phone", "111222333",
            "--address", "123 Loom Avenue",
        ]);
        let Commands::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.name, "Travis");
        assert_eq!(args.fields.age, Some(18));
        assert_eq!(args.fields.phone, Some(Phone::Number(111222333)));
        assert_eq!(args.fields.address.as_deref(), Some("123 Loom Avenue"));
    }

    #[test]
    fn test_repeated_flag_keeps_last_value() {
        let cli = Cli::parse_from(["profile", "build", "Ann", "--age", "30", "--age", "31"]);
        let Commands::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.fields.age, Some(31));
    }

    #[test]
    fn test_text_phone_flag() {
        let cli = Cli::parse_from(["profile", "options", "Kim", "--phone", "555-0100"]);
        let Commands::Options(args) = cli.command else {
            panic!("expected options command");
        };
        assert_eq!(args.fields.phone, Some(Phone::Text("555-0100".to_string())));
        assert!(args.file.is_none());
    }

    #[test]
    fn test_positional_partial() {
        let cli = Cli::parse_from(["profile", "positional", "Bob", "40"]);
        let Commands::Positional(args) = cli.command else {
            panic!("expected positional command");
        };
        assert_eq!(args.age, Some(40));
        assert_eq!(args.phone, None);
        assert_eq!(args.address, None);
    }

    #[test]
    fn test_positional_numeric_phone() {
        let cli = Cli::parse_from(["profile", "positional", "Bob", "40", "5550100", "1 Main St"]);
        let Commands::Positional(args) = cli.command else {
            panic!("expected positional command");
        };
        assert_eq!(args.phone, Some(Phone::Number(5550100)));
        assert_eq!(args.address.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("json-pretty"), Some(OutputFormat::JsonPretty));
        assert_eq!(OutputFormat::from_name("YAML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }

    #[test]
    fn test_field_args_is_empty() {
        assert!(FieldArgs::default().is_empty());
        let fields = FieldArgs {
            age: Some(1),
            ..Default::default()
        };
        assert!(!fields.is_empty());
    }
}
