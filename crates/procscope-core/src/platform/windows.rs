//! Windows backend.
//!
//! Error codes used by the translator are CRT `errno` values, so their
//! descriptions come from the CRT error table rather than `FormatMessageW`.

use std::ffi::CStr;

/// Returns the description of `code` from the CRT error table.
pub fn strerror(code: i32) -> String
{
    // SAFETY: The CRT `strerror` returns a pointer to a thread-local buffer
    // holding a null-terminated string. It stays valid until the next call on
    // this thread, and we copy it before returning.
    let ptr = unsafe { libc::strerror(code) };
    if ptr.is_null() {
        return format!("Unknown error {code}");
    }

    // SAFETY: Checked for null above, see the comment on the call.
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}
