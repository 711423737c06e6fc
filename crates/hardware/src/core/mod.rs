//! CPU core: architectural state, functional units, and the control unit.

/// Architectural state (flags register).
pub mod arch;

/// Control unit and machine state container.
pub mod cpu;

/// Functional units (ALU).
pub mod units;

pub use cpu::{Cpu, CycleState, RegisterSnapshot, Registers};
