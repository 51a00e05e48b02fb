//! Log list rendering. Pure string building so it can be tested on the host.

use crate::constants::LOG_ENTRY_CLASS;
use hgif_core::{LogBook, LogEntry};

/// Escape text for insertion as HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn log_entry_html(entry: &LogEntry) -> String {
    format!(
        "<div class=\"{} {}\">[{}] {}</div>",
        LOG_ENTRY_CLASS,
        entry.severity.as_str(),
        escape_html(&entry.timestamp),
        escape_html(&entry.message)
    )
}

/// The whole list, newest first, as stored in the book.
pub fn log_list_html(book: &LogBook) -> String {
    book.iter().map(log_entry_html).collect()
}
