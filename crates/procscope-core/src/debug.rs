//! # Debug Logger
//!
//! Best-effort trace lines on standard error, gated by the debug flag of the
//! [`crate::diagnostics`] state.
//!
//! Backends call [`debug_log!`](crate::debug_log) at any checkpoint without
//! looking at the flag themselves. When debug mode is off nothing is formatted
//! and nothing is written, and standard error is not touched at all. When it
//! is on, each call writes exactly one line:
//!
//! ```text
//! procscope-debug> <message>
//! ```
//!
//! Line breaks inside the message are written as the two characters `\n`
//! (or `\r`) so a call never spills over several lines.
//!
//! The stream is flushed right away so the line survives an immediate crash.
//! Write errors are dropped: a diagnostic must never turn into a user-visible
//! failure.

use std::fmt;
use std::io::{self, Write};

use crate::diagnostics::{self, DiagnosticState};

/// Prefix of every debug line
pub const PREFIX: &str = "procscope-debug> ";

/// Emit a debug line if debug mode is enabled
///
/// Takes the same arguments as [`format!`].
///
/// ```rust
/// use procscope_core::debug_log;
///
/// let pid = 42;
/// debug_log!("reading /proc/{}/exe", pid);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debug::log(::std::format_args!($($arg)*))
    };
}

/// Write `args` to standard error if the process-wide debug flag is set
pub fn log(args: fmt::Arguments<'_>)
{
    let state = diagnostics::global();
    if !state.is_debug_enabled() {
        return;
    }

    // Unlocked handle: the lock is only taken inside the single `write_all`.
    log_to(state, &mut io::stderr(), args);
}

/// Write `args` to `writer` if `state` has debug mode enabled
///
/// The whole line is rendered first and handed to the writer in one call, so
/// concurrent callers do not interleave inside a line.
pub fn log_to<W>(state: &DiagnosticState, writer: &mut W, args: fmt::Arguments<'_>)
where
    W: Write + ?Sized,
{
    if !state.is_debug_enabled() {
        return;
    }

    let message = args.to_string();
    let line = if message.contains(['\n', '\r']) {
        format!("{PREFIX}{}\n", message.replace('\n', "\\n").replace('\r', "\\r"))
    } else {
        format!("{PREFIX}{message}\n")
    };

    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}
