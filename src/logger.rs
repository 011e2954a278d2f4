//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, shown only with `--verbose`
//! - `ProgressLine` for single-line progress display with multiple counters
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "wrote {} bundles", count);
//!
//! let progress = ProgressLine::new(&[("bundles", 4)]);
//! progress.inc("bundles");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Shared terminal state, so log lines and the progress line don't clobber
/// each other.
static TERMINAL: Mutex<Terminal> = Mutex::new(Terminal { progress: None });

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
pub fn log(module: &str, message: &str) {
    let line = format!("{} {message}", colorize_prefix(module));
    TERMINAL.lock().write_message(&mut stdout().lock(), &line);
}

/// Apply color to a module prefix based on module type
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_magenta().bold().to_string(),
        "check" => prefix.bright_green().bold().to_string(),
        "config" | "startup" => prefix.bright_blue().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

/// `count` followed by `noun`, pluralized with a trailing `s`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

// ============================================================================
// Terminal
// ============================================================================

/// The bottom terminal line, owned by a progress display while one is
/// running.
struct Terminal {
    progress: Option<String>,
}

impl Terminal {
    /// Print a full line. An active progress line is erased first and
    /// redrawn underneath.
    fn write_message(&self, out: &mut impl Write, line: &str) {
        match &self.progress {
            Some(progress) => {
                execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
                writeln!(out, "{line}").ok();
                write!(out, "{progress}").ok();
            }
            None => {
                execute!(out, Clear(ClearType::UntilNewLine)).ok();
                writeln!(out, "{line}").ok();
            }
        }
        out.flush().ok();
    }

    /// Replace the progress line. With `done` it is kept as ordinary output
    /// and the terminal released.
    fn write_progress(&mut self, out: &mut impl Write, line: String, done: bool) {
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        if done {
            writeln!(out, "{line}").ok();
            self.progress = None;
        } else {
            write!(out, "{line}").ok();
            self.progress = Some(line);
        }
        out.flush().ok();
    }

    fn clear_progress(&mut self, out: &mut impl Write) {
        if self.progress.take().is_some() {
            execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
            out.flush().ok();
        }
    }
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[build] bundles(2/4)`
///
/// Uses `try_lock` so worker threads never wait on the terminal; if the
/// display is busy the refresh is skipped.
pub struct ProgressLine {
    counters: Vec<Counter>,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
}

impl ProgressLine {
    /// Create a new progress display. Only counters with total > 0 are shown.
    pub fn new(items: &[(&'static str, usize)]) -> Self {
        let counters = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|&(name, total)| Counter {
                name,
                total,
                current: AtomicUsize::new(0),
            })
            .collect();

        let progress = Self { counters };
        progress.display(&mut TERMINAL.lock(), false);
        progress
    }

    /// Increment the counter with the given name.
    pub fn inc(&self, name: &str) {
        let Some(counter) = self.counters.iter().find(|c| c.name == name) else {
            return;
        };
        counter.current.fetch_add(1, Ordering::Relaxed);
        if let Some(mut terminal) = TERMINAL.try_lock() {
            self.display(&mut terminal, false);
        }
    }

    fn line(&self) -> String {
        self.counters
            .iter()
            .map(|c| format!("{}({}/{})", c.name, c.current.load(Ordering::Relaxed), c.total))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn display(&self, terminal: &mut Terminal, done: bool) {
        let line = format!("{} {}", colorize_prefix("build"), self.line());
        terminal.write_progress(&mut stdout().lock(), line, done);
    }

    /// Finish progress display, keeping the final line.
    pub fn finish(self) {
        self.display(&mut TERMINAL.lock(), true);
        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        TERMINAL.lock().clear_progress(&mut stdout().lock());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "bundle"), "0 bundles");
        assert_eq!(plural(1, "bundle"), "1 bundle");
        assert_eq!(plural(4, "bundle"), "4 bundles");
    }

    #[test]
    fn test_progress_line_skips_empty_counters() {
        let progress = ProgressLine::new(&[("bundles", 2), ("files", 0)]);
        progress.inc("bundles");
        progress.inc("files");
        progress.inc("unknown");
        assert_eq!(progress.line(), "bundles(1/2)");
    }

    #[test]
    fn test_message_redraws_progress_line() {
        let mut terminal = Terminal { progress: None };
        let mut out = Vec::new();
        terminal.write_progress(&mut out, "bundles(1/4)".to_string(), false);
        out.clear();

        terminal.write_message(&mut out, "[error] boom");
        let text = String::from_utf8(out).unwrap();
        let message = text.find("[error] boom\n").unwrap();
        let progress = text.rfind("bundles(1/4)").unwrap();
        assert!(message < progress);
        assert!(text.ends_with("bundles(1/4)"));
    }

    #[test]
    fn test_finished_progress_is_not_redrawn() {
        let mut terminal = Terminal { progress: None };
        let mut out = Vec::new();
        terminal.write_progress(&mut out, "bundles(4/4)".to_string(), true);
        assert!(terminal.progress.is_none());
        out.clear();

        terminal.write_message(&mut out, "[build] done");
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("[build] done\n"));
        assert!(!text.contains("bundles"));
    }
}
