//
//  kongo
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Builder and cell helpers over `comfy_table` for listing Admin API
//! entities.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kongo::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "Name", "Host"])
//!     .row(["4e13f54a", "billing", "billing.internal"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::api::Timestamp;

/// Creates a table with the UTF-8 border preset and dynamic width.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for listing tables.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides color detection.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row, cyan when color is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a cluster member status.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;

    match status.to_lowercase().as_str() {
        "alive" | "reachable" => style(status).green().to_string(),
        "leaving" | "left" => style(status).yellow().to_string(),
        "failed" | "unreachable" => style(status).red().to_string(),
        _ => status.to_string(),
    }
}

/// Formats a boolean as `Yes` / `No`.
pub fn format_bool(value: bool, color: bool) -> String {
    use console::style;

    match (value, color) {
        (true, true) => style("Yes").green().to_string(),
        (false, true) => style("No").dim().to_string(),
        (true, false) => "Yes".to_string(),
        (false, false) => "No".to_string(),
    }
}

/// Formats a timestamp, showing `-` for the zero value.
pub fn format_timestamp(value: &Timestamp) -> String {
    if value.is_zero() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Joins a list for a single cell, showing `-` when it is empty.
pub fn format_list(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `...`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("4e13f54a-bbf1-47a8", 11), "4e13f54a...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_helpers_without_color() {
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_bool(false, false), "No");
        assert_eq!(format_status("alive", false), "alive");
        assert_eq!(format_list(&[]), "-");
        assert_eq!(format_list(&["a".into(), "b".into()]), "a, b");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&Timestamp::ZERO), "-");
        let ts = Timestamp::parse("1422386534").unwrap();
        assert_eq!(format_timestamp(&ts), "2015-01-27T20:42:14Z");
    }

    #[test]
    fn test_builder_renders_rows() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["Name", "Host"])
            .rows([["billing", "billing.internal"], ["auth", "auth.internal"]])
            .build();

        let rendered = table.to_string();
        assert!(rendered.contains("billing.internal"));
        assert!(rendered.contains("auth"));
    }
}
