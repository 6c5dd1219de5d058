//! Centralized user messaging for CLI output, with quiet-mode gating.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Suppresses warnings and non-essential output.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// True when interactive prompts should be skipped: quiet mode, or stdin
/// is not a tty.
fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Warning to stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red). Never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Strength report line, suppressed in quiet mode.
pub fn strength_line(label: &str, bits: f64) {
    if !quiet() {
        eprintln!("Strength: {label} (~{bits:.0} bits)");
    }
}

/// Clipboard confirmation, suppressed in quiet mode.
pub fn clipboard_copied(count: usize) {
    if !quiet() {
        eprintln!("{count} password(s) copied to clipboard");
    }
}

/// Clipboard failure. Never suppressed.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Returns true to fall back, false to abort. Falls back silently when
/// quiet or non-interactive.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
