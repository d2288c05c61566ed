use std::process;

use clap::{Parser, Subcommand};
use procscope_core::error::{access_denied_error, process_not_found_error, ProcscopeResult};
use procscope_core::types::ProcessId;
use procscope_core::{diagnostics, platform};
use procscope_utils::{
    debug, info, init_logging, init_logging_with_level, log_format_from_env, LogFormat, LogLevel, LoggingError,
};

/// Exit status for the two canonical OS failures, so scripts can tell them
/// apart from other errors.
const EXIT_OS_ERROR: i32 = 2;

/// Inspect processes through the procscope support layer.
#[derive(Parser, Debug)]
#[command(name = "procscope")]
#[command(version)]
#[command(about = "Inspect processes through the procscope support layer", long_about = None)]
struct Cli
{
    /// Enable testing mode (same effect as setting PROCSCOPE_TESTING)
    #[arg(long, global = true, default_value_t = false)]
    testing: bool,

    /// Log level for operational logs (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Log format for operational logs: pretty or json
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// List the identifiers of all processes
    Pids,
    /// Tell whether a process exists
    Exists
    {
        /// Process ID (PID) to look up
        pid: ProcessId,
    },
    /// Print the executable path of a process
    Exe
    {
        /// Process ID (PID) to inspect
        pid: ProcessId,
    },
    /// Print the command line of a process, one argument per line
    Cmdline
    {
        /// Process ID (PID) to inspect
        pid: ProcessId,
    },
    /// Show the code and message of the canonical OS errors
    Errors,
    /// Show the current diagnostic state
    Diagnostics,
}

fn main()
{
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.log_level, cli.log_format) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    diagnostics::initialize();
    if cli.testing {
        debug!("testing mode forced from the command line");
        diagnostics::force_testing_mode();
    }

    if let Err(e) = run_command(cli.command) {
        eprintln!("Error: {e}");
        let status = if e.os_error().is_some() { EXIT_OS_ERROR } else { 1 };
        process::exit(status);
    }
}

/// Command line flags take precedence; whatever is not given on the command
/// line comes from the environment.
fn setup_logging(level: Option<LogLevel>, format: Option<LogFormat>) -> Result<(), LoggingError>
{
    match (level, format) {
        (None, None) => init_logging(),
        (level, format) => {
            let format = resolve_log_format(format, log_format_from_env)?;
            init_logging_with_level(level.unwrap_or(LogLevel::Info), format)
        }
    }
}

fn resolve_log_format<F>(flag: Option<LogFormat>, from_env: F) -> Result<LogFormat, LoggingError>
where
    F: FnOnce() -> Result<LogFormat, LoggingError>,
{
    flag.map_or_else(from_env, Ok)
}

fn run_command(command: Commands) -> ProcscopeResult<()>
{
    match command {
        Commands::Pids => {
            let pids = platform::pids()?;
            info!("listing {} processes", pids.len());
            for pid in pids {
                println!("{pid}");
            }
        }
        Commands::Exists { pid } => {
            println!("{}", platform::pid_exists(pid)?);
        }
        Commands::Exe { pid } => {
            info!("reading executable of process {}", pid);
            println!("{}", platform::exe(pid)?.display());
        }
        Commands::Cmdline { pid } => {
            info!("reading command line of process {}", pid);
            for arg in platform::cmdline(pid)? {
                println!("{}", arg.display());
            }
        }
        Commands::Errors => {
            for error in [process_not_found_error(), access_denied_error()] {
                println!("{:?}\t{}\t{}", error.failure(), error.code(), error.message());
            }
        }
        Commands::Diagnostics => {
            println!("debug: {}", diagnostics::is_debug_enabled());
            println!("testing: {}", diagnostics::is_testing_enabled());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_cli_parses_global_flags()
    {
        let cli = Cli::try_parse_from(["procscope", "exe", "42", "--testing", "--log-level", "debug"]).unwrap();
        assert!(cli.testing);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Commands::Exe { pid } if pid == ProcessId(42)));
    }

    #[test]
    fn test_cli_rejects_invalid_pid()
    {
        assert!(Cli::try_parse_from(["procscope", "exists", "nope"]).is_err());
    }

    #[test]
    fn test_cli_rejects_invalid_log_format()
    {
        assert!(Cli::try_parse_from(["procscope", "--log-format", "xml", "pids"]).is_err());
    }

    #[test]
    fn test_log_format_flag_wins_over_environment()
    {
        let format = resolve_log_format(Some(LogFormat::Pretty), || Ok(LogFormat::Json)).unwrap();
        assert_eq!(format, LogFormat::Pretty);
    }

    #[test]
    fn test_log_format_falls_back_to_environment()
    {
        let cli = Cli::try_parse_from(["procscope", "--log-level", "debug", "pids"]).unwrap();
        let format = resolve_log_format(cli.log_format, || Ok(LogFormat::Json)).unwrap();
        assert_eq!(format, LogFormat::Json);

        let error = resolve_log_format(None, || "xml".parse()).unwrap_err();
        assert!(matches!(error, LoggingError::InvalidFormat(_)));
    }

    #[test]
    fn test_cli_definition_is_valid()
    {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
