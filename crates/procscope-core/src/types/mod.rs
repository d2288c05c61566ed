//! # Types
//!
//! Platform-agnostic types shared by the platform backends.

pub mod process;

// Re-export all public types
pub use process::ProcessId;
