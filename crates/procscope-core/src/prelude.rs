//! Common module for library exports

pub use crate::debug_log;
pub use crate::diagnostics::{force_testing_mode, is_debug_enabled, is_testing_enabled};
pub use crate::error::{access_denied_error, process_not_found_error, OsError, OsFailure, ProcscopeError, ProcscopeResult};
pub use crate::path::{decode_path_bytes, decode_path_bytes_with_length, encode_path_bytes};
pub use crate::types::ProcessId;
