//! Process identifier type.

use std::fmt;
use std::str::FromStr;

use crate::error::ProcscopeError;

/// Process identifier (PID)
///
/// A PID is a number assigned to each running process by the operating system.
/// PIDs are reused once a process exits, which is why the backends report a
/// vanished process through [`crate::error::process_not_found_error`] instead
/// of guessing.
///
/// ## Example
///
/// ```rust
/// use procscope_core::types::ProcessId;
///
/// let pid: ProcessId = "1234".parse()?;
/// assert_eq!(pid, ProcessId::from(1234));
/// # Ok::<(), procscope_core::error::ProcscopeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessId(pub u32);

impl ProcessId
{
    /// The identifier of the calling process
    pub fn current() -> Self
    {
        ProcessId(std::process::id())
    }
}

impl From<u32> for ProcessId
{
    fn from(pid: u32) -> Self
    {
        ProcessId(pid)
    }
}

impl From<ProcessId> for u32
{
    fn from(pid: ProcessId) -> Self
    {
        pid.0
    }
}

impl fmt::Display for ProcessId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProcessId
{
    type Err = ProcscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        s.trim()
            .parse::<u32>()
            .map(ProcessId)
            .map_err(|e| ProcscopeError::InvalidArgument(format!("invalid PID '{s}': {e}")))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_parse_rejects_garbage()
    {
        assert!("abc".parse::<ProcessId>().is_err());
        assert!("-1".parse::<ProcessId>().is_err());
    }

    #[test]
    fn test_display()
    {
        assert_eq!(ProcessId(42).to_string(), "42");
    }
}
