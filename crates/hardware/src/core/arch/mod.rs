//! Architectural state.
//!
//! Holds the register-level state that outlives a single operation.

/// Condition flags (ZF, CF, SF, OF).
pub mod flags;

pub use flags::Flags;
