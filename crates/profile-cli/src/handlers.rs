//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod config;
mod demo;

pub use completions::handle_completions;
pub use config::handle_config;
pub use demo::handle_demo;

use crate::cli::{BuildArgs, FieldArgs, OptionsArgs, PositionalArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use profile_core::{User, UserBuilder, UserOptions};
use std::path::Path;
use tracing::{debug, info};

/// Handle the build command
pub fn handle_build(args: BuildArgs, output: &mut OutputWriter) -> Result<()> {
    info!(name = %args.name, "Building user with the fluent builder");

    let user = apply_setters(UserBuilder::new(args.name), &args.fields).build();
    output.user(&user)
}

/// Call only the setters whose flags were given
fn apply_setters(mut builder: UserBuilder, fields: &FieldArgs) -> UserBuilder {
    if let Some(age) = fields.age {
        builder = builder.age(age);
    }
    if let Some(phone) = &fields.phone {
        builder = builder.phone(phone.clone());
    }
    if let Some(address) = &fields.address {
        builder = builder.address(address.clone());
    }
    builder
}

/// Handle the options command
pub fn handle_options(args: OptionsArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    info!(name = %args.name, "Building user from options");

    let options = resolve_options(args.file.as_deref(), &args.fields, config)?;
    if options.is_none() {
        debug!("No options given, omitting the options object");
    }

    let user = User::from_options(args.name, options);
    output.user(&user)
}

/// Assemble the options object from an optional file, field flags and the
/// configured phone default.
///
/// Returns `None` when nothing would differ from the built-in defaults, so
/// the record is built exactly as if the options object were left out.
fn resolve_options(
    file: Option<&Path>,
    fields: &FieldArgs,
    config: &Config,
) -> Result<Option<UserOptions>> {
    let mut options = match file {
        Some(path) => Some(UserOptions::from_path(path)?),
        None => None,
    };

    if !fields.is_empty() {
        let options = options.get_or_insert_with(UserOptions::default);
        if let Some(age) = fields.age {
            options.age = Some(age);
        }
        if let Some(phone) = &fields.phone {
            options.phone = phone.clone();
        }
        if let Some(address) = &fields.address {
            options.address = Some(address.clone());
        }
    }

    let configured_phone = &config.defaults.phone;
    if !configured_phone.is_placeholder() {
        let options = options.get_or_insert_with(UserOptions::default);
        if options.phone.is_placeholder() {
            options.phone = configured_phone.clone();
        }
    }

    Ok(options)
}

/// Handle the positional command
pub fn handle_positional(args: PositionalArgs, output: &mut OutputWriter) -> Result<()> {
    info!(name = %args.name, "Building user positionally");

    let user = User::from_parts(args.name, args.age, args.phone, args.address);
    output.user(&user)
}
