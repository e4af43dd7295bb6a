//! Navigate module
//!
//! Handles path splitting and folder resolution used by directory changes.

pub mod operations;
pub mod path;
pub mod results;

// Re-export public types and functions
pub use operations::{resolve_folder, resolve_segments};
pub use path::split_path;
pub use results::{CwdResult, PwdResult};
