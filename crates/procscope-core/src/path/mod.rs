//! # Path Codec
//!
//! Conversion of native filesystem path bytes into [`PathBuf`] values that
//! never fails, whatever the bytes are.
//!
//! Paths read from the OS (procfs links, `argv` buffers, ...) are arbitrary
//! byte sequences and need not be valid UTF-8. Decoding therefore substitutes
//! nothing and rejects nothing: [`encode_path_bytes`] gives back exactly the
//! bytes that were decoded.
//!
//! - **Unix**: paths are bytes, they are used as is.
//! - **Windows**: valid UTF-8 is decoded and every byte of an invalid sequence
//!   is escaped as a lone surrogate `U+DC00 | byte`, which Windows strings can
//!   hold and which valid UTF-8 can never produce.

#[cfg(any(target_os = "windows", test))]
mod surrogate;

use std::path::{Path, PathBuf};

/// Decode a C string path
///
/// The path ends at the first NUL byte, or at the end of the slice if there is
/// none.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// let path = procscope_core::path::decode_path_bytes(b"/usr/bin/env\0garbage");
/// assert_eq!(path, Path::new("/usr/bin/env"));
/// ```
pub fn decode_path_bytes(bytes: &[u8]) -> PathBuf
{
    let end = bytes.iter().position(|&byte| byte == 0).unwrap_or(bytes.len());
    decode_path_bytes_with_length(bytes, end)
}

/// Decode the first `length` bytes of `bytes` as a path
///
/// Embedded NUL bytes are kept. A `length` past the end of the slice is
/// clamped to it.
pub fn decode_path_bytes_with_length(bytes: &[u8], length: usize) -> PathBuf
{
    let length = length.min(bytes.len());
    from_bytes_impl(&bytes[..length])
}

/// Turn a path back into its native bytes
///
/// For every NUL-free `bytes`, `encode_path_bytes(&decode_path_bytes(bytes))`
/// equals `bytes`.
pub fn encode_path_bytes(path: &Path) -> Vec<u8>
{
    into_bytes_impl(path)
}

#[cfg(unix)]
fn from_bytes_impl(bytes: &[u8]) -> PathBuf
{
    use std::os::unix::ffi::OsStringExt as _;
    std::ffi::OsString::from_vec(bytes.to_vec()).into()
}

#[cfg(target_os = "windows")]
fn from_bytes_impl(bytes: &[u8]) -> PathBuf
{
    use std::os::windows::ffi::OsStringExt as _;
    std::ffi::OsString::from_wide(&surrogate::escape(bytes)).into()
}

#[cfg(unix)]
fn into_bytes_impl(path: &Path) -> Vec<u8>
{
    use std::os::unix::ffi::OsStrExt as _;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(target_os = "windows")]
fn into_bytes_impl(path: &Path) -> Vec<u8>
{
    use std::os::windows::ffi::OsStrExt as _;
    let units: Vec<u16> = path.as_os_str().encode_wide().collect();
    surrogate::unescape(&units)
}
