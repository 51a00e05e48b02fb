// Host-side tests for the agent log markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/markup.rs"]
mod markup;

use hgif_core::{Agent, DeviceKind, LogEntry, Severity};
use markup::*;

fn entry(msg: &str, severity: Severity) -> LogEntry {
    LogEntry {
        timestamp: "12:34:56".into(),
        message: msg.into(),
        severity,
    }
}

#[test]
fn escape_html_neutralises_markup() {
    assert_eq!(
        escape_html("<b>\"x\" & 'y'</b>"),
        "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn entry_carries_severity_class() {
    assert_eq!(
        log_entry_html(&entry("Preset selected: 5G", Severity::Decision)),
        "<div class=\"log-entry decision\">[12:34:56] Preset selected: 5G</div>"
    );
    assert!(log_entry_html(&entry("x", Severity::Error)).contains("log-entry error"));
    assert!(log_entry_html(&entry("x", Severity::Info)).contains("log-entry info"));
}

#[test]
fn entry_message_is_escaped() {
    let html = log_entry_html(&entry("<script>alert(1)</script>", Severity::Info));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn list_renders_newest_first() {
    let mut agent = Agent::with_clock(
        DeviceKind::Desktop.capability(),
        100.0,
        20,
        Box::new(|| "00:00:01".to_string()),
    );
    agent.log("first", Severity::Info);
    agent.log("second", Severity::Decision);
    let html = log_list_html(agent.log_book());
    let second = html.find("second").expect("second rendered");
    let first = html.find("first").expect("first rendered");
    assert!(second < first);
    assert_eq!(html.matches("<div").count(), 2);
}

#[test]
fn empty_book_renders_nothing() {
    let agent = Agent::with_clock(
        DeviceKind::Mobile.capability(),
        10.0,
        20,
        Box::new(|| "00:00:00".to_string()),
    );
    assert_eq!(log_list_html(agent.log_book()), "");
}
