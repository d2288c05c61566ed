//! # Error Types
//!
//! Error translation and general error handling for procscope.
//!
//! Platform backends never build raw OS error codes for the two conditions
//! this layer recognizes. They call [`process_not_found_error`] or
//! [`access_denied_error`] and propagate the resulting [`OsError`] with `?`.
//! Every other failure stays the responsibility of the backend.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use std::io;

use thiserror::Error;

/// The OS failure conditions recognized by this layer
///
/// Exactly two conditions are normalized here. Each maps to a fixed `errno`
/// value on the host:
///
/// - [`OsFailure::ProcessNotFound`]: `ESRCH` ("No such process")
/// - [`OsFailure::AccessDenied`]: `EACCES` ("Permission denied")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFailure
{
    /// The target process does not exist (anymore)
    ///
    /// Typically a race: the process exited between the moment its PID was
    /// discovered and the moment it was inspected.
    ProcessNotFound,

    /// The caller is not allowed to inspect the target process
    AccessDenied,
}

impl OsFailure
{
    /// The canonical `errno` value for this condition on the host OS
    pub fn code(self) -> i32
    {
        match self {
            OsFailure::ProcessNotFound => libc::ESRCH,
            OsFailure::AccessDenied => libc::EACCES,
        }
    }
}

/// Uniform error value produced by the translator
///
/// Carries the numeric OS error code and the description the OS itself
/// reports for it. The description is looked up in the OS error table when the
/// error is created, so it follows the OS version and locale.
///
/// ## Example
///
/// ```rust
/// use procscope_core::error::{process_not_found_error, OsFailure};
///
/// let error = process_not_found_error();
/// assert_eq!(error.failure(), OsFailure::ProcessNotFound);
/// assert_eq!(error.code(), libc::ESRCH);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (os error {code})")]
pub struct OsError
{
    failure: OsFailure,
    code: i32,
    message: String,
}

impl OsError
{
    /// Build the uniform error value for `failure`
    ///
    /// Never fails: if the OS has no description for the code, the message
    /// falls back to a generic one produced by the platform layer.
    pub fn new(failure: OsFailure) -> Self
    {
        let code = failure.code();
        let message = crate::platform::strerror(code);
        tracing::trace!(?failure, code, %message, "translated OS failure");

        OsError { failure, code, message }
    }

    /// Recognize one of the two canonical conditions in an I/O error
    ///
    /// - `ESRCH` maps to [`OsFailure::ProcessNotFound`]
    /// - `EACCES` and `EPERM` map to [`OsFailure::AccessDenied`]
    /// - An error of kind [`io::ErrorKind::PermissionDenied`] without a raw
    ///   code also maps to [`OsFailure::AccessDenied`]
    ///
    /// Returns `None` for anything else.
    pub fn from_io(error: &io::Error) -> Option<Self>
    {
        classify(error).map(OsError::new)
    }

    /// Which condition this error represents
    pub fn failure(&self) -> OsFailure
    {
        self.failure
    }

    /// Numeric OS error code (`errno`)
    pub fn code(&self) -> i32
    {
        self.code
    }

    /// Description reported by the OS for [`OsError::code`]
    pub fn message(&self) -> &str
    {
        &self.message
    }
}

#[cfg(unix)]
fn classify(error: &io::Error) -> Option<OsFailure>
{
    match error.raw_os_error() {
        Some(libc::ESRCH) => Some(OsFailure::ProcessNotFound),
        Some(libc::EACCES | libc::EPERM) => Some(OsFailure::AccessDenied),
        Some(_) => None,
        None if error.kind() == io::ErrorKind::PermissionDenied => Some(OsFailure::AccessDenied),
        None => None,
    }
}

// Raw codes on Windows are Win32 error codes, not `errno` values, so only the
// error kind can be trusted there.
#[cfg(not(unix))]
fn classify(error: &io::Error) -> Option<OsFailure>
{
    match error.kind() {
        io::ErrorKind::PermissionDenied => Some(OsFailure::AccessDenied),
        _ => None,
    }
}

/// Build the error for a process that does not exist
///
/// The returned value always carries `ESRCH` and the OS description for it.
pub fn process_not_found_error() -> OsError
{
    OsError::new(OsFailure::ProcessNotFound)
}

/// Build the error for a process the caller may not inspect
///
/// The returned value always carries `EACCES` and the OS description for it.
pub fn access_denied_error() -> OsError
{
    OsError::new(OsFailure::AccessDenied)
}

impl From<OsError> for io::Error
{
    #[cfg(unix)]
    fn from(error: OsError) -> Self
    {
        io::Error::from_raw_os_error(error.code)
    }

    // `from_raw_os_error` would read the code as a Win32 error, so the value
    // is kept as the inner error instead and stays reachable via `get_ref`.
    #[cfg(not(unix))]
    fn from(error: OsError) -> Self
    {
        let kind = match error.failure {
            OsFailure::ProcessNotFound => io::ErrorKind::NotFound,
            OsFailure::AccessDenied => io::ErrorKind::PermissionDenied,
        };
        io::Error::new(kind, error)
    }
}

/// Main error type for procscope operations
///
/// ## Error Categories
///
/// 1. **Canonical OS errors**: Os (process not found, access denied)
/// 2. **Caller errors**: InvalidArgument
/// 3. **Self checks**: Inconsistent (only raised in testing mode)
/// 4. **Platform gaps**: Unsupported
/// 5. **I/O errors**: Io (everything the translator does not recognize)
#[derive(Error, Debug)]
pub enum ProcscopeError
{
    /// One of the two canonical OS failures
    #[error(transparent)]
    Os(#[from] OsError),

    /// Invalid argument passed to a procscope function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Data gathered from the OS failed a testing-mode consistency check
    #[error("Inconsistent data: {0}")]
    Inconsistent(String),

    /// The operation is not implemented on this platform
    #[error("Unsupported on this platform: {0}")]
    Unsupported(&'static str),

    /// I/O error not recognized by the translator
    #[error("IO error: {0}")]
    Io(#[source] io::Error),
}

impl ProcscopeError
{
    /// The uniform OS error, if this is one
    pub fn os_error(&self) -> Option<&OsError>
    {
        match self {
            ProcscopeError::Os(error) => Some(error),
            _ => None,
        }
    }
}

/// Canonical conditions are lifted into [`ProcscopeError::Os`] so that callers
/// see the same shape no matter which primitive detected them.
impl From<io::Error> for ProcscopeError
{
    fn from(error: io::Error) -> Self
    {
        match OsError::from_io(&error) {
            Some(os_error) => ProcscopeError::Os(os_error),
            None => ProcscopeError::Io(error),
        }
    }
}

/// Convenience type alias for `Result<T, ProcscopeError>`
///
/// ```rust
/// use procscope_core::error::ProcscopeResult;
/// fn foo() -> ProcscopeResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type ProcscopeResult<T> = std::result::Result<T, ProcscopeError>;

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_failure_codes()
    {
        assert_eq!(OsFailure::ProcessNotFound.code(), libc::ESRCH);
        assert_eq!(OsFailure::AccessDenied.code(), libc::EACCES);
    }

    #[test]
    fn test_os_error_display_contains_code()
    {
        let error = access_denied_error();
        let message = format!("{error}");
        assert!(message.contains(error.message()));
        assert!(message.contains(&libc::EACCES.to_string()));
    }

    #[test]
    fn test_os_error_into_procscope_error()
    {
        let error: ProcscopeError = process_not_found_error().into();
        assert_eq!(error.os_error().map(OsError::failure), Some(OsFailure::ProcessNotFound));
    }

    #[test]
    fn test_unrelated_io_error_stays_io()
    {
        let error = ProcscopeError::from(io::Error::other("boom"));
        assert!(matches!(error, ProcscopeError::Io(_)));
        assert!(error.os_error().is_none());
    }

    #[test]
    fn test_permission_denied_kind_is_access_denied()
    {
        let error = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let os_error = OsError::from_io(&error).unwrap();
        assert_eq!(os_error.failure(), OsFailure::AccessDenied);
        assert_eq!(os_error.code(), libc::EACCES);
    }

    #[cfg(unix)]
    #[test]
    fn test_raw_codes_are_classified()
    {
        let esrch = io::Error::from_raw_os_error(libc::ESRCH);
        let eperm = io::Error::from_raw_os_error(libc::EPERM);
        let enoent = io::Error::from_raw_os_error(libc::ENOENT);

        assert_eq!(OsError::from_io(&esrch).map(|e| e.failure()), Some(OsFailure::ProcessNotFound));
        assert_eq!(OsError::from_io(&eperm).map(|e| e.failure()), Some(OsFailure::AccessDenied));
        assert!(OsError::from_io(&enoent).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_into_io_error_keeps_raw_code()
    {
        let error: io::Error = process_not_found_error().into();
        assert_eq!(error.raw_os_error(), Some(libc::ESRCH));
    }
}
