//! # Runtime Undo Core
//!
//! Undo/redo engine for editors running inside a live scene: a bounded
//! transaction history, grouped recording, suspended histories for modal
//! tools, and record builders for common host object edits.

pub mod math;
pub mod undo;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
