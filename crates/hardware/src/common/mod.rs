//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Address Types:** The ADDR value and its bank/row/column decomposition.
//! 2. **Constants:** Memory geometry and instruction field layout.
//! 3. **Error Handling:** Fatal, non-fatal, and loader error kinds.

/// Address type definitions and chip decomposition.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{Address, ChipLocation};
pub use error::{AluError, LoadError, SimError};
