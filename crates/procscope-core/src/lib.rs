//! # procscope-core
//!
//! Cross-platform support layer for the procscope process inspection library.
//!
//! This crate does not gather process data on its own terms. It provides the
//! glue every platform backend relies on:
//! - Translation of the two canonical OS failures (no such process, permission
//!   denied) into a uniform [`OsError`]
//! - Process-wide diagnostic state (debug tracing, testing mode)
//! - A best-effort debug logger writing to standard error
//! - A path codec turning native path bytes into paths without ever failing
//!
//! The [`platform`] module holds the backends that consume this contract.
//!
//! ## Platform Support
//!
//! - **Linux**: procfs backed collaborators
//! - **Other Unix**: `kill(2)` based liveness and access checks
//! - **Windows**: error translation and path codec only
//!
//! ## Why unsafe code is needed
//!
//! The OS error table (`strerror`) and `kill(2)` are only reachable through
//! `libc`. Every unsafe call is wrapped in a safe function next to it.

#![allow(unsafe_code)] // Required for libc calls (strerror_r, kill)

pub mod debug;
pub mod diagnostics;
pub mod error;
pub mod path;
pub mod platform;
pub mod prelude;
pub mod types;

pub use diagnostics::DiagnosticState;
pub use error::{access_denied_error, process_not_found_error, OsError, OsFailure, ProcscopeError, ProcscopeResult};
pub use types::ProcessId;
