//! End-to-end tests of the `procscope` binary output streams

use std::process::{Command, Output};

fn procscope(args: &[&str]) -> Output
{
    Command::new(env!("CARGO_BIN_EXE_procscope"))
        .args(args)
        .env("RUST_LOG", "trace")
        .env_remove("PROCSCOPE_LOG_FILE")
        .env_remove("PROCSCOPE_LOG_FORMAT")
        .env_remove("PROCSCOPE_DEBUG")
        .output()
        .unwrap()
}

#[test]
fn test_errors_stdout_holds_only_results()
{
    let output = procscope(&["errors"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected stdout: {stdout:?}");
    assert!(lines[0].starts_with("ProcessNotFound\t"));
    assert!(lines[1].starts_with("AccessDenied\t"));

    // The translation events still went somewhere: standard error.
    assert!(!output.stderr.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_exe_stdout_holds_only_the_path()
{
    let pid = std::process::id().to_string();
    let output = procscope(&["exe", &pid]);
    assert!(output.status.success());

    let expected = format!("{}\n", std::env::current_exe().unwrap().display());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[cfg(target_os = "linux")]
#[test]
fn test_pids_stdout_holds_only_pids()
{
    let output = procscope(&["pids", "--log-level", "debug"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.is_empty());
    assert!(stdout.lines().all(|line| line.parse::<u32>().is_ok()), "unexpected stdout: {stdout:?}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_missing_process_exits_with_os_status()
{
    let output = procscope(&["exe", &i32::MAX.to_string()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
