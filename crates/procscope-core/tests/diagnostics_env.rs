//! Tests for environment-driven diagnostic state
//!
//! These touch the real process environment, so they live in their own test
//! binary and in a single test function.

use procscope_core::debug::{log_to, PREFIX};
use procscope_core::diagnostics::{self, DEBUG_ENV_VAR, TESTING_ENV_VAR};

#[test]
fn test_initialize_from_environment()
{
    std::env::remove_var(TESTING_ENV_VAR);
    std::env::set_var(DEBUG_ENV_VAR, "");

    diagnostics::initialize();
    assert!(diagnostics::is_debug_enabled(), "an empty value still counts as present");
    assert!(!diagnostics::is_testing_enabled());

    diagnostics::force_testing_mode();
    assert!(diagnostics::is_testing_enabled());

    // Removing the variables afterwards never lowers the flags.
    std::env::remove_var(DEBUG_ENV_VAR);
    diagnostics::initialize();
    assert!(diagnostics::is_debug_enabled());
    assert!(diagnostics::is_testing_enabled());

    let mut out = Vec::new();
    log_to(diagnostics::global(), &mut out, format_args!("checkpoint {}", 7));
    assert_eq!(out, format!("{PREFIX}checkpoint 7\n").into_bytes());
}
