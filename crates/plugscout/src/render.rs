// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal table for plugin records.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use plugscout_core::{Plugin, UpdateStatus};

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = [
    "Num",
    "Name",
    "Current Version",
    "Last Version",
    "Update Available",
];

/// Build the plugin table. Rows are numbered from 1 in input order.
pub fn plugin_table(plugins: &[Plugin], use_color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if !use_color {
        table.force_no_tty();
    }
    table.set_header(HEADERS.iter().map(|h| header_cell(h, use_color)));

    for (idx, plugin) in plugins.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(plugin.name()),
            Cell::new(plugin.version()),
            Cell::new(plugin.last_version()),
            status_cell(plugin.update_available(), use_color),
        ]);
    }
    table
}

fn header_cell(text: &str, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    if use_color { cell.fg(Color::Cyan) } else { cell }
}

fn status_cell(status: UpdateStatus, use_color: bool) -> Cell {
    let cell = Cell::new(status);
    if !use_color {
        return cell;
    }
    match status {
        UpdateStatus::Available => cell.fg(Color::Yellow),
        UpdateStatus::UpToDate => cell.fg(Color::Green),
        UpdateStatus::Unknown => cell.fg(Color::DarkGrey),
    }
}

#[cfg(test)]
mod tests {
    use plugscout_core::NOT_FOUND;

    use super::*;

    #[test]
    fn plain_table_has_headers_and_rows() {
        let plugins = vec![
            Plugin::new("Essentials", "2.19.0", "2.20.1", "Essentials.jar"),
            Plugin::new("Custom", "0.1", NOT_FOUND, "Custom.jar"),
        ];
        let rendered = plugin_table(&plugins, false).to_string();

        for header in HEADERS {
            assert!(rendered.contains(header), "missing header {header}");
        }
        assert!(rendered.contains("Essentials"));
        assert!(rendered.contains("2.20.1"));
        assert!(rendered.contains("Not Found"));
        assert!(rendered.contains("unknown"));
        assert!(rendered.contains("yes"));
        assert!(!rendered.contains('\u{1b}'), "plain output must not contain escapes");
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let plugins = vec![
            Plugin::new("A", "1", "1", "A.jar"),
            Plugin::new("B", "1", "2", "B.jar"),
        ];
        let table = plugin_table(&plugins, false);
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        let a = rendered.find("│ 1 ").unwrap();
        let b = rendered.find("│ 2 ").unwrap();
        assert!(a < b);
    }
}
