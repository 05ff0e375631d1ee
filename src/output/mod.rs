//
//  kongo
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Renders Admin API results for the terminal, either as tables and
//! key/value listings or as pretty-printed JSON (`--json`).
//!
//! ## Components
//!
//! - [`OutputWriter`]: Picks the format and writes values, errors and notices
//! - [`TableOutput`]: Implemented by every type the CLI can show as a table
//! - [`TableBuilder`]: comfy-table wrapper used by those implementations
//!
//! ## Color
//!
//! Color follows `console::colors_enabled()`, so `NO_COLOR`, `CLICOLOR` and
//! non-terminal stdout all disable it.

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tables and key/value listings.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Writes results in the selected format.
///
/// # Example
///
/// ```rust,no_run
/// use kongo::output::{OutputFormat, OutputWriter};
///
/// let writer = OutputWriter::new(OutputFormat::Json);
/// writer.write_success("Deleted service foo");
/// ```
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a value as a table or as JSON.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes an informational line to stderr, keeping stdout clean for data.
    pub fn write_info(&self, msg: &str) {
        use console::style;

        if self.color {
            eprintln!("{}", style(msg).dim());
        } else {
            eprintln!("{}", msg);
        }
    }

    /// Writes a success message to stdout.
    ///
    /// In JSON mode nothing is printed; scripts check the exit code.
    pub fn write_success(&self, msg: &str) {
        use console::style;

        if self.format == OutputFormat::Json {
            return;
        }
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Types that can render themselves for the terminal.
pub trait TableOutput {
    /// Prints the value to stdout.
    fn print_table(&self, color: bool);
}

/// Prints a bold header underlined with dashes.
pub fn print_header(text: &str) {
    use console::style;

    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a `key: value` line, dimming the key when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;

    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
        assert_eq!(OutputWriter::new(OutputFormat::Json).format(), OutputFormat::Json);
    }
}
