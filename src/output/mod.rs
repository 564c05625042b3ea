//
//  unsplash-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders decoded records for the terminal in one of two formats:
//!
//! - **Table format**: Human-readable output for interactive use
//! - **JSON format**: The record re-serialized with `serde_json`, for scripting
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available formats
//! - [`OutputWriter`]: Entry point for writing records and status messages
//! - [`TableOutput`]: Detail view of a single record
//! - [`TableRow`]: One row of a listing rendered through [`TableBuilder`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use unsplash_client::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Table);
//! writer.write(&photo)?;
//! writer.write_list(&photos)?;
//! writer.write_success("Liked photo Dwu85P9SOIk");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// `Json` when the `--json` flag is set, `Table` otherwise.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Writes records and status messages in the selected format.
///
/// Colour follows the terminal (`console::colors_enabled`), which honours
/// `NO_COLOR` and `CLICOLOR`.
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

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a single record.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes a listing. An empty listing prints a short note in table mode
    /// and `[]` in JSON mode.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values)?,
            OutputFormat::Table if values.is_empty() => self.write_info("No results"),
            OutputFormat::Table => TableBuilder::new()
                .color(self.color)
                .headers(T::headers().iter().copied())
                .rows(values.iter().map(|value| value.row(self.color)))
                .print(),
        }
        Ok(())
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Detail view of one record.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// One row in a listing table.
pub trait TableRow {
    /// Column headers, in the order [`row`](Self::row) fills them.
    fn headers() -> &'static [&'static str];

    fn row(&self, color: bool) -> Vec<String>;
}

impl<T: TableOutput> TableOutput for Vec<T> {
    fn print_table(&self, color: bool) {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                println!();
            }
            value.print_table(color);
        }
    }
}

pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

/// Prints `key: value` only when `value` is present and not blank.
pub fn print_optional_field(key: &str, value: Option<&str>, color: bool) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        print_field(key, value, color);
    }
}
