//! Clipboard format: tab-separated `date\tvalue` lines
//!
//! Derived from the panel text; the header never survives because it
//! does not split into exactly two fields.

use crate::board::ResultBoard;
use crate::output::panel::format_panel;

/// Keep only lines with exactly two whitespace-separated fields, tab-joined
pub(crate) fn format_clipboard(text: &str) -> String {
    text.trim()
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [date, value] => Some(format!("{date}\t{value}")),
                _ => None,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One clipboard block per panel, blank line between panels
pub(crate) fn print_clipboard(board: &ResultBoard) {
    let blocks: Vec<String> = board
        .panels()
        .iter()
        .map(|panel| format_clipboard(&format_panel(panel)))
        .collect();
    println!("{}", blocks.join("\n\n"));
}
