//! # Platform Backends
//!
//! Platform-specific collaborators that gather process data and rely on the
//! support layer for everything else:
//!
//! - The two canonical failures are always produced by
//!   [`crate::error::process_not_found_error`] and
//!   [`crate::error::access_denied_error`]
//! - Checkpoints go through [`debug_log!`](crate::debug_log)
//! - Path bytes go through [`crate::path`]
//!
//! Backends:
//!
//! - **unix**: `strerror_r(3)` and `kill(2)` probes
//!   - See: [kill(2) man page](https://man7.org/linux/man-pages/man2/kill.2.html)
//! - **linux**: procfs readers
//!   - See: [proc(5) man page](https://man7.org/linux/man-pages/man5/proc.5.html)
//! - **windows**: CRT `strerror`
//!
//! Whatever a platform does not implement reports
//! [`ProcscopeError::Unsupported`](crate::error::ProcscopeError::Unsupported).

use std::path::PathBuf;

use crate::error::ProcscopeResult;
use crate::types::ProcessId;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(unix)]
mod unix;

#[cfg(target_os = "windows")]
mod windows;

mod sys
{
    #[cfg(target_os = "linux")]
    pub use crate::platform::linux::{cmdline, exe, pids};

    #[cfg(unix)]
    pub use crate::platform::unix::{check_access, pid_exists, strerror};

    #[cfg(target_os = "windows")]
    pub use crate::platform::windows::strerror;
}

/// Look up the OS description of error `code`
///
/// Never fails; unknown codes get a generic description.
pub fn strerror(code: i32) -> String
{
    #[cfg(any(unix, target_os = "windows"))]
    return self::sys::strerror(code);

    #[cfg(not(any(unix, target_os = "windows")))]
    return format!("Unknown error {code}");
}

/// Identifiers of all processes on the system, in ascending order
///
/// # Errors
///
/// Fails if the process table cannot be read. In testing mode the list is also
/// checked for duplicates and [`ProcscopeError::Inconsistent`](crate::error::ProcscopeError::Inconsistent) is returned if
/// one is found.
pub fn pids() -> ProcscopeResult<Vec<ProcessId>>
{
    #[cfg(target_os = "linux")]
    return self::sys::pids();

    #[cfg(not(target_os = "linux"))]
    return Err(crate::error::ProcscopeError::Unsupported("listing processes"));
}

/// Whether a process with the given identifier exists
///
/// A process we are not allowed to signal still exists.
///
/// # Errors
///
/// Fails on unexpected OS errors, never for a missing process.
pub fn pid_exists(pid: ProcessId) -> ProcscopeResult<bool>
{
    #[cfg(unix)]
    return self::sys::pid_exists(pid);

    #[cfg(not(unix))]
    return {
        let _ = pid;
        Err(crate::error::ProcscopeError::Unsupported("checking process existence"))
    };
}

/// Verify that the caller may inspect the process
///
/// # Errors
///
/// Returns the process-not-found error if the process is gone and the
/// access-denied error if the caller lacks the privileges.
pub fn check_access(pid: ProcessId) -> ProcscopeResult<()>
{
    #[cfg(unix)]
    return self::sys::check_access(pid);

    #[cfg(not(unix))]
    return {
        let _ = pid;
        Err(crate::error::ProcscopeError::Unsupported("checking process access"))
    };
}

/// Path of the executable a process runs
///
/// An empty path is returned for processes without one (kernel threads).
///
/// # Errors
///
/// Returns the process-not-found error if the process is gone and the
/// access-denied error if the caller lacks the privileges.
pub fn exe(pid: ProcessId) -> ProcscopeResult<PathBuf>
{
    #[cfg(target_os = "linux")]
    return self::sys::exe(pid);

    #[cfg(not(target_os = "linux"))]
    return {
        let _ = pid;
        Err(crate::error::ProcscopeError::Unsupported("reading the executable path"))
    };
}

/// Command line arguments of a process
///
/// # Errors
///
/// Returns the process-not-found error if the process is gone and the
/// access-denied error if the caller lacks the privileges.
pub fn cmdline(pid: ProcessId) -> ProcscopeResult<Vec<PathBuf>>
{
    #[cfg(target_os = "linux")]
    return self::sys::cmdline(pid);

    #[cfg(not(target_os = "linux"))]
    return {
        let _ = pid;
        Err(crate::error::ProcscopeError::Unsupported("reading the command line"))
    };
}
