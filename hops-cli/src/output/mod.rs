//! Output formatting module for hops CLI
//!
//! Every command result implements [`Outputter`] and can be rendered as:
//! - `plain`: the classic one-line-per-result text (`3 2 A-->B-->C`)
//! - `table`: human-readable tables built with `tabled`
//! - `json`: machine-readable output via `serde_json`

use clap::ValueEnum;
use serde::Serialize;
use std::str::FromStr;

mod table;

pub use self::table::{grid_table, key_value_table};

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one result per line (default)
    #[default]
    Plain,
    /// Human-readable table format
    Table,
    /// JSON format for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Trait for types that can be formatted as output
pub trait Outputter: Serialize {
    /// Render as plain text
    fn to_plain(&self) -> String;

    /// Render as table format
    fn to_table(&self) -> String {
        self.to_plain()
    }

    /// Render as JSON format
    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Render using the given format
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Plain => self.to_plain(),
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => self.to_json(),
        }
    }
}

/// Result wrapper that renders in the selected format
pub struct Output<T> {
    data: T,
    format: OutputFormat,
}

impl<T: Outputter> Output<T> {
    pub fn new(data: T, format: OutputFormat) -> Self {
        Self { data, format }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        let rendered = self.render_to_string();
        if rendered.ends_with('\n') {
            print!("{}", rendered);
        } else {
            println!("{}", rendered);
        }
        Ok(())
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        self.data.render(self.format)
    }
}

/// Print an error line to stderr
pub fn print_error(message: &str) {
    use colored::Colorize;
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        value: u32,
    }

    impl Outputter for Sample {
        fn to_plain(&self) -> String {
            format!("value {}", self.value)
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("TABLE".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_table_falls_back_to_plain() {
        let sample = Sample { value: 4 };
        assert_eq!(sample.render(OutputFormat::Table), "value 4");
    }

    #[test]
    fn test_json_render() {
        let rendered = Output::new(Sample { value: 9 }, OutputFormat::Json).render_to_string();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["value"], 9);
    }
}
