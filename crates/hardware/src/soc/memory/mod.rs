//! Main memory.
//!
//! The chip memory is the only main-memory model; the flat I/O buffer lives in
//! [`crate::soc::io`].

/// Bit-sliced chip memory (two banks of eight single-bit planes).
pub mod chip;

pub use chip::BitChipMemory;
