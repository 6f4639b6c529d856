//! Operator-facing output.
//!
//! Every message goes through one of the helpers here so that `--json` and
//! `--quiet` are honored in one place. Human output uses colored symbols;
//! JSON mode writes one `{"type": ..., "payload": ...}` object per line.
//! Warnings and errors are never silenced by `--quiet`.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Output switches taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Machine-readable JSON lines instead of text.
    pub json: bool,
    /// Drop informational lines.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(config));
    match cell.write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Whether `--json` is in effect.
#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// How a message is treated by the output switches.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    /// Hidden by `--quiet`.
    Info,
    /// Always shown.
    Alert,
}

/// Route one message: a JSON line in JSON mode, otherwise `human` unless
/// quiet mode hides it.
fn emit(kind: &str, level: Level, payload: Value, human: impl FnOnce()) {
    let config = current();
    if config.json {
        let line = json!({ "type": kind, "payload": payload });
        if kind == "error" {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
        return;
    }
    if config.quiet && level == Level::Info {
        return;
    }
    human();
}

/// Application name and version, shown when the menu opens.
pub fn header(version: &str) {
    emit(
        "header",
        Level::Info,
        json!({ "app": "employee-manager", "version": version }),
        || println!("{} {}", "employee-manager".bold(), version.dimmed()),
    );
}

/// A labeled value, one per line.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        Level::Info,
        json!({ "label": label, "value": value }),
        || println!("  {:<14} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit("success", Level::Info, json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

pub fn warning(message: &str) {
    emit("warning", Level::Alert, json!({ "message": message }), || {
        println!("  {} {}", "⚠".yellow(), message);
    });
}

/// An error line, written to stderr.
pub fn error(message: &str) {
    emit("error", Level::Alert, json!({ "message": message }), || {
        eprintln!("  {} {}", "×".red(), message);
    });
}

/// A blank line followed by a bold title.
pub fn section(title: &str) {
    emit("section", Level::Info, json!({ "title": title }), || {
        println!();
        println!("{}", title.bold());
    });
}

/// Secondary, dimmed text.
pub fn note(message: &str) {
    emit("note", Level::Info, json!({ "message": message }), || {
        println!("  {}", message.dimmed());
    });
}

/// A multi-line block such as a rendered table, indented.
pub fn lines(content: &str) {
    emit("lines", Level::Info, json!({ "content": content }), || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Print a complete JSON document for commands with their own JSON shape.
pub fn json_output(value: Value) {
    println!("{value}");
}

/// Cyan text in human mode, plain text in JSON mode.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    value.cyan().to_string()
}
