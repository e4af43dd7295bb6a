//! Shell driver
//!
//! Line-oriented command loop over async readers and writers, plus the
//! built-in demonstration script.

pub mod core;
pub mod demo;

pub use self::core::Shell;
pub use demo::{DEMO_SCRIPT, run_demo};
