//! Accumulator machine simulator library.
//!
//! This crate simulates a small accumulator CPU built around a bit-sliced memory chip:
//! 1. **Core:** Control unit (fetch high, fetch low, decode, execute) and the accumulator ALU.
//! 2. **Memory:** 2 banks × 8 bit planes × 32 rows × 32 columns of chip memory plus a 32-byte I/O buffer.
//! 3. **ISA:** Fixed 5-bit opcode table, 16-bit instruction words, and a disassembler.
//! 4. **SoC:** Shared data bus, address lines, and the IOM/RW/OE control lines.
//! 5. **Simulation:** Loader, run loop with a cycle bound, observers, configuration, and statistics.

/// Common types and constants (addresses, geometry, errors).
pub mod common;
/// Simulator configuration (defaults, ALU width, decode policy).
pub mod config;
/// CPU core (flags, ALU, control unit).
pub mod core;
/// Instruction set (opcode table, instruction words, disassembly).
pub mod isa;
/// Simulation driver, loader, and trace observers.
pub mod sim;
/// System-on-chip (bus, chip memory, I/O buffer).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Machine state; holds the registers, ALU, bus, and stats.
pub use crate::core::Cpu;
/// Top-level run loop; construct with `Simulator::new` or `Simulator::with_program`.
pub use crate::sim::{RunOutcome, RunReport, Simulator};
