//! Storage and interconnect.
//!
//! This module provides everything on the far side of the bus. It includes:
//! 1. **Bus:** BUS, ADDR, and the memory-enable / read-write / output-enable lines.
//! 2. **Memory:** The bit-sliced chip memory.
//! 3. **I/O:** The flat I/O buffer reached when memory-enable is low.

/// Shared data/address bus and control lines.
pub mod bus;

/// I/O buffer device.
pub mod io;

/// Main memory (bit-sliced chips).
pub mod memory;

pub use bus::{Bus, ControlLines, Direction, TransferKind};
pub use io::IoBuffer;
pub use memory::BitChipMemory;
