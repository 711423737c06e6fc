//! Functional units.

/// Accumulator ALU.
pub mod alu;

pub use alu::{Alu, AluOp};
