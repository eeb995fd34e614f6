//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) for user records and
//! the labelled record lists printed by `demo`.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use profile_core::{Phone, User};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use tracing::trace;

/// How a record was constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionStyle {
    /// Every field passed in order
    Positional,
    /// Fluent builder with chained setters
    Builder,
    /// Name plus an options object
    Options,
}

impl fmt::Display for ConstructionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionStyle::Positional => write!(f, "positional"),
            ConstructionStyle::Builder => write!(f, "builder"),
            ConstructionStyle::Options => write!(f, "options"),
        }
    }
}

/// A record together with a label and the style that produced it
#[derive(Debug, Clone, Serialize)]
pub struct RecordEntry {
    pub label: String,
    pub style: ConstructionStyle,
    pub user: User,
}

impl RecordEntry {
    pub fn new(label: impl Into<String>, style: ConstructionStyle, user: User) -> Self {
        Self {
            label: label.into(),
            style,
            user,
        }
    }
}

/// Trait for formatting output with specialized support for records
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a single record
    fn format_user(&self, user: &User) -> Result<String>;

    /// Format a list of labelled records
    fn format_entries(&self, entries: &[RecordEntry]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_user(&self, user: &User) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_user_human(user)),
            _ => self.format(user),
        }
    }

    fn format_entries(&self, entries: &[RecordEntry]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_entries_human(entries)),
            _ => self.format(&entries),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message (human format only)
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message (human format only)
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message (human format only)
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header (human format only)
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write a single record
    pub fn user(&mut self, user: &User) -> Result<()> {
        trace!(user = %user, "Outputting user");
        let formatted = self.format.format_user(user)?;
        self.emit(formatted)
    }

    /// Write a list of labelled records
    pub fn entries(&mut self, entries: &[RecordEntry]) -> Result<()> {
        trace!(count = entries.len(), "Outputting record entries");
        let formatted = self.format.format_entries(entries)?;
        self.emit(formatted)
    }

    fn emit(&mut self, formatted: String) -> Result<()> {
        // serde_yaml already ends its output with a newline
        if formatted.ends_with('\n') {
            self.write(&formatted)
        } else {
            self.writeln(&formatted)
        }
    }
}

/// Format a record for human reading, one field per line
fn format_user_human(user: &User) -> String {
    let mut output = String::new();

    output.push_str(&format!("name:    {}\n", user.name()));
    output.push_str(&format!(
        "age:     {}\n",
        user.age().map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!("phone:   {}\n", format_phone(user.phone())));
    output.push_str(&format!("address: {}", user.address().unwrap_or("-")));

    output
}

fn format_phone(phone: Option<&Phone>) -> String {
    match phone {
        Some(phone) if phone.is_placeholder() => format!("{} (placeholder)", phone),
        Some(phone) => phone.to_string(),
        None => "-".to_string(),
    }
}

/// Format labelled records the way the demo prints them
fn format_entries_human(entries: &[RecordEntry]) -> String {
    let width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            format!(
                "{:width$}  [{}] {}",
                entry.label,
                entry.style,
                entry.user,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
