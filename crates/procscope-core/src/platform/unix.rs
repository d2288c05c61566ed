//! Unix backend shared by all Unix-like systems.

use std::ffi::CStr;
use std::io;

use crate::debug_log;
use crate::error::{access_denied_error, process_not_found_error, ProcscopeError, ProcscopeResult};
use crate::types::ProcessId;

/// Size of the buffer handed to `strerror_r`. glibc never needs more than a
/// few dozen bytes for its messages.
const STRERROR_BUF_LEN: usize = 256;

/// Returns the description of `code` from the C library error table.
pub fn strerror(code: i32) -> String
{
    let mut buf = [0 as libc::c_char; STRERROR_BUF_LEN];

    // SAFETY: The buffer is valid for the entire call and its real length is
    // passed along, so `strerror_r` cannot write past it. Unlike `strerror`,
    // this variant does not touch shared static storage, so it is safe to call
    // from many threads at once.
    let ret = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };
    if ret != 0 {
        return format!("Unknown error {code}");
    }

    // SAFETY: On success `strerror_r` stores a null-terminated string in the
    // buffer, which outlives the borrow. We create an owned copy right away.
    unsafe { CStr::from_ptr(buf.as_ptr()) }.to_string_lossy().into_owned()
}

/// Sends the null signal to `pid`, which only runs the existence and
/// permission checks of `kill(2)`.
fn probe(pid: libc::pid_t) -> io::Result<()>
{
    // SAFETY: Signal 0 is never delivered. `pid` is always positive here, so
    // the call cannot target a process group either.
    let ret = unsafe { libc::kill(pid, 0) };
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

/// Converts `pid` into a positive `pid_t`. Zero and values that do not fit
/// would make `kill(2)` address process groups instead of a single process.
fn to_pid_t(pid: ProcessId) -> Option<libc::pid_t>
{
    libc::pid_t::try_from(pid.0).ok().filter(|&pid| pid > 0)
}

/// Returns whether a process with the given identifier exists.
pub fn pid_exists(pid: ProcessId) -> ProcscopeResult<bool>
{
    // PID 0 is the kernel scheduler on Linux and macOS; it always exists but
    // cannot be probed with `kill(2)`.
    if pid.0 == 0 {
        return Ok(true);
    }

    let Some(raw) = to_pid_t(pid) else {
        debug_log!("pid {} is out of the pid_t range", pid);
        return Ok(false);
    };

    match probe(raw) {
        Ok(()) => Ok(true),
        Err(error) => match error.raw_os_error() {
            Some(libc::ESRCH) => Ok(false),
            // The process exists, we are just not allowed to signal it.
            Some(libc::EPERM) => Ok(true),
            _ => Err(ProcscopeError::Io(error)),
        },
    }
}

/// Verifies that the caller is allowed to signal (and so inspect) `pid`.
pub fn check_access(pid: ProcessId) -> ProcscopeResult<()>
{
    if pid.0 == 0 {
        debug_log!("pid 0 cannot be probed, reporting access denied");
        return Err(access_denied_error().into());
    }

    let Some(raw) = to_pid_t(pid) else {
        return Err(process_not_found_error().into());
    };

    match probe(raw) {
        Ok(()) => Ok(()),
        Err(error) => match error.raw_os_error() {
            Some(libc::ESRCH) => {
                debug_log!("kill({}, 0) failed with ESRCH", pid);
                Err(process_not_found_error().into())
            }
            Some(libc::EPERM) => {
                debug_log!("kill({}, 0) failed with EPERM", pid);
                Err(access_denied_error().into())
            }
            _ => Err(ProcscopeError::Io(error)),
        },
    }
}
