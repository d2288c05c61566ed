//! # Diagnostic State
//!
//! Process-wide flags consulted by every platform backend:
//!
//! - **debug**: enables the [`crate::debug`] trace lines on standard error
//! - **testing**: enables extra consistency checks in the backends
//!
//! Both flags start out `false` and only ever move to `true`. They are raised
//! either from the environment at startup ([`initialize`]) or explicitly by a
//! test harness ([`force_testing_mode`]), for hosts where changing environment
//! variables at runtime has no effect on an already initialized process.
//!
//! ## Environment Variables
//!
//! - `PROCSCOPE_DEBUG`: presence enables debug mode (the value is ignored)
//! - `PROCSCOPE_TESTING`: presence enables testing mode (the value is ignored)
//!
//! ## Example
//!
//! ```rust
//! use procscope_core::diagnostics;
//!
//! diagnostics::initialize();
//! diagnostics::force_testing_mode();
//! assert!(diagnostics::is_testing_enabled());
//! ```

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable enabling debug mode
pub const DEBUG_ENV_VAR: &str = "PROCSCOPE_DEBUG";

/// Environment variable enabling testing mode
pub const TESTING_ENV_VAR: &str = "PROCSCOPE_TESTING";

/// Pair of monotonic diagnostic flags
///
/// Reads and writes use relaxed atomics: the flags never go back to `false`,
/// and a reader observing a stale `false` only misses a diagnostic.
#[derive(Debug, Default)]
pub struct DiagnosticState
{
    debug: AtomicBool,
    testing: AtomicBool,
}

impl DiagnosticState
{
    /// Create a state with both flags disabled
    pub const fn new() -> Self
    {
        DiagnosticState {
            debug: AtomicBool::new(false),
            testing: AtomicBool::new(false),
        }
    }

    /// Raise the flags whose environment variable is present
    pub fn initialize(&self)
    {
        self.initialize_with(|name| env::var_os(name).is_some());
    }

    /// Raise the flags for which `is_present` reports the variable as set
    ///
    /// Never lowers a flag, so calling it repeatedly is harmless.
    pub fn initialize_with<F>(&self, is_present: F)
    where
        F: Fn(&str) -> bool,
    {
        if is_present(DEBUG_ENV_VAR) {
            self.debug.store(true, Ordering::Relaxed);
        }
        if is_present(TESTING_ENV_VAR) {
            self.testing.store(true, Ordering::Relaxed);
        }
    }

    /// Enable testing mode regardless of the environment
    pub fn force_testing_mode(&self)
    {
        self.testing.store(true, Ordering::Relaxed);
    }

    /// Whether debug trace lines are emitted
    pub fn is_debug_enabled(&self) -> bool
    {
        self.debug.load(Ordering::Relaxed)
    }

    /// Whether backends run their testing-mode checks
    pub fn is_testing_enabled(&self) -> bool
    {
        self.testing.load(Ordering::Relaxed)
    }
}

static GLOBAL: DiagnosticState = DiagnosticState::new();

/// The process-wide diagnostic state
pub fn global() -> &'static DiagnosticState
{
    &GLOBAL
}

/// Initialize the process-wide state from the environment
///
/// Call once at startup, before any backend runs.
pub fn initialize()
{
    GLOBAL.initialize();
    tracing::debug!(
        debug = GLOBAL.is_debug_enabled(),
        testing = GLOBAL.is_testing_enabled(),
        "diagnostic state initialized"
    );
}

/// Enable testing mode for the whole process
pub fn force_testing_mode()
{
    GLOBAL.force_testing_mode();
}

/// Whether debug mode is enabled for the whole process
pub fn is_debug_enabled() -> bool
{
    GLOBAL.is_debug_enabled()
}

/// Whether testing mode is enabled for the whole process
pub fn is_testing_enabled() -> bool
{
    GLOBAL.is_testing_enabled()
}
