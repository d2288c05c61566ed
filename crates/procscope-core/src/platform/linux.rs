//! Linux backend reading the procfs.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr as _;

use crate::debug_log;
use crate::diagnostics;
use crate::error::{access_denied_error, process_not_found_error, ProcscopeError, ProcscopeResult};
use crate::path::{decode_path_bytes_with_length, encode_path_bytes};
use crate::types::ProcessId;

/// Suffix the kernel appends to `/proc/<pid>/exe` once the binary is unlinked.
const DELETED_SUFFIX: &[u8] = b" (deleted)";

fn proc_dir(pid: ProcessId) -> PathBuf
{
    PathBuf::from(format!("/proc/{pid}"))
}

/// Translates an I/O error hit while reading `/proc/<pid>/...`.
///
/// A missing entry only means a vanished process if the process directory
/// itself is gone too; otherwise the error is left to the caller.
fn translate(pid: ProcessId, error: io::Error) -> ProcscopeError
{
    match error.kind() {
        io::ErrorKind::NotFound if !proc_dir(pid).exists() => {
            debug_log!("/proc/{} disappeared", pid);
            process_not_found_error().into()
        }
        io::ErrorKind::PermissionDenied => {
            debug_log!("access to /proc/{} denied", pid);
            access_denied_error().into()
        }
        _ => ProcscopeError::from(error),
    }
}

/// Returns the identifiers of all processes on the system, sorted.
pub fn pids() -> ProcscopeResult<Vec<ProcessId>>
{
    let mut pids = Vec::new();

    for entry in fs::read_dir("/proc")? {
        let entry = entry?;

        // Processes are represented by directories, everything else can be
        // skipped without parsing.
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => (),
            _ => continue,
        }

        // Non-Unicode names cannot be integers, so they are not PIDs either.
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };

        if let Ok(pid) = u32::from_str(file_name) {
            pids.push(ProcessId(pid));
        }
    }

    pids.sort_unstable();
    debug_log!("found {} processes in /proc", pids.len());

    if diagnostics::is_testing_enabled() {
        if let Some(pair) = pids.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ProcscopeError::Inconsistent(format!("PID {} listed twice in /proc", pair[0])));
        }
    }

    Ok(pids)
}

/// Returns the path of the executable `pid` runs.
pub fn exe(pid: ProcessId) -> ProcscopeResult<PathBuf>
{
    let link = proc_dir(pid).join("exe");

    let target = match fs::read_link(&link) {
        Ok(target) => target,
        // Kernel threads have no executable: the link exists but cannot be
        // resolved while the process directory is still there.
        Err(error) if error.kind() == io::ErrorKind::NotFound && proc_dir(pid).exists() => {
            debug_log!("{} has no target, assuming a kernel thread", link.display());
            return Ok(PathBuf::new());
        }
        Err(error) => return Err(translate(pid, error)),
    };

    match strip_deleted_suffix(&encode_path_bytes(&target)) {
        Some(stripped) if !target.exists() => {
            debug_log!("executable of pid {} was deleted", pid);
            Ok(stripped)
        }
        _ => Ok(target),
    }
}

/// Returns the command line arguments of `pid`.
pub fn cmdline(pid: ProcessId) -> ProcscopeResult<Vec<PathBuf>>
{
    let data = fs::read(proc_dir(pid).join("cmdline")).map_err(|error| translate(pid, error))?;

    if !data.ends_with(b"\0") && data.contains(&b' ') {
        debug_log!("cmdline of pid {} is not NUL-terminated, splitting on spaces", pid);
    }

    Ok(split_cmdline(&data))
}

/// Drops the ` (deleted)` marker from a link target, if there is one.
fn strip_deleted_suffix(bytes: &[u8]) -> Option<PathBuf>
{
    bytes
        .strip_suffix(DELETED_SUFFIX)
        .map(|stripped| decode_path_bytes_with_length(bytes, stripped.len()))
}

/// Splits the contents of `/proc/<pid>/cmdline` into arguments.
///
/// Arguments are NUL-separated. Processes that rewrite their own `argv` (e.g.
/// to set a title) often leave a single space-separated string without the
/// trailing NUL instead.
fn split_cmdline(data: &[u8]) -> Vec<PathBuf>
{
    let (separator, body) = match data.strip_suffix(b"\0") {
        Some(body) => (0, body),
        None if data.contains(&b' ') => (b' ', data),
        None => (0, data),
    };

    if body.is_empty() {
        return Vec::new();
    }

    body.split(|&byte| byte == separator)
        .map(|arg| decode_path_bytes_with_length(arg, arg.len()))
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::OsFailure;

    const DEAD_PID: ProcessId = ProcessId(i32::MAX as u32);

    #[test]
    fn test_exe_of_current_process()
    {
        let exe = exe(ProcessId::current()).unwrap();
        assert_eq!(exe, std::env::current_exe().unwrap());
    }

    #[test]
    fn test_cmdline_of_current_process()
    {
        let args = cmdline(ProcessId::current()).unwrap();
        let expected: Vec<PathBuf> = std::env::args_os().map(PathBuf::from).collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_strip_deleted_suffix()
    {
        assert_eq!(strip_deleted_suffix(b"/usr/bin/foo (deleted)"), Some(PathBuf::from("/usr/bin/foo")));
        assert_eq!(strip_deleted_suffix(b"/usr/bin/foo"), None);
        assert_eq!(strip_deleted_suffix(b"/tmp/a (deleted) b"), None);
    }

    #[test]
    fn test_split_cmdline_nul_separated()
    {
        let args = split_cmdline(b"/bin/sh\0-c\0echo hi\0");
        assert_eq!(args, vec![PathBuf::from("/bin/sh"), PathBuf::from("-c"), PathBuf::from("echo hi")]);
    }

    #[test]
    fn test_split_cmdline_keeps_empty_arguments()
    {
        let args = split_cmdline(b"prog\0\0last\0");
        assert_eq!(args, vec![PathBuf::from("prog"), PathBuf::new(), PathBuf::from("last")]);
    }

    #[test]
    fn test_split_cmdline_rewritten_title()
    {
        let args = split_cmdline(b"nginx: worker process");
        assert_eq!(args, vec![PathBuf::from("nginx:"), PathBuf::from("worker"), PathBuf::from("process")]);
    }

    #[test]
    fn test_split_cmdline_single_word_and_empty()
    {
        assert_eq!(split_cmdline(b"init"), vec![PathBuf::from("init")]);
        assert!(split_cmdline(b"").is_empty());
        assert!(split_cmdline(b"\0").is_empty());
    }

    #[test]
    fn test_exe_of_dead_process()
    {
        let error = exe(DEAD_PID).unwrap_err();
        assert_eq!(error.os_error().map(|e| e.failure()), Some(OsFailure::ProcessNotFound));
    }

    #[test]
    fn test_cmdline_of_dead_process()
    {
        let error = cmdline(DEAD_PID).unwrap_err();
        assert_eq!(error.os_error().map(|e| e.code()), Some(libc::ESRCH));
    }
}
