//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the simulated machine. It includes:
//! 1. **Memory Geometry:** Banks, planes, rows, and columns of the chip memory.
//! 2. **Instruction Fields:** Widths, shifts, and masks of the 16-bit instruction word.
//! 3. **I/O Constants:** Size of the flat I/O buffer.

/// Number of chip banks (A and B), selected by address bit 10.
pub const BANK_COUNT: usize = 2;

/// Number of single-bit planes per bank; one plane per bit of a byte.
pub const PLANES_PER_BANK: usize = 8;

/// Number of rows in every plane.
pub const ROWS_PER_PLANE: usize = 32;

/// Number of addressable bit columns in every row element.
pub const COLUMNS_PER_ROW: usize = 32;

/// Total number of addressable bytes (2 banks × 32 rows × 32 columns).
pub const MEMORY_SIZE: usize = BANK_COUNT * ROWS_PER_PLANE * COLUMNS_PER_ROW;

/// Highest valid byte address.
pub const MAX_ADDRESS: u16 = (MEMORY_SIZE - 1) as u16;

/// Mask for the 5-bit column field (address bits 4-0).
pub const COLUMN_MASK: u16 = 0x1F;

/// Shift of the 5-bit row field (address bits 9-5).
pub const ROW_SHIFT: u16 = 5;

/// Mask for the row field after shifting.
pub const ROW_MASK: u16 = 0x1F;

/// Shift of the bank select bit (address bit 10).
pub const BANK_SHIFT: u16 = 10;

/// Mask for the bank select bit after shifting.
pub const BANK_MASK: u16 = 0x1;

/// Size of the I/O buffer in bytes.
pub const IO_BUFFER_SIZE: usize = 32;

/// Mask applied to ADDR when routing a transfer to the I/O buffer.
pub const IO_ADDRESS_MASK: u16 = (IO_BUFFER_SIZE - 1) as u16;

/// Shift of the 5-bit opcode field (bits 15-11 of the instruction word).
pub const OPCODE_SHIFT: u16 = 11;

/// Mask for the opcode field after shifting.
pub const OPCODE_MASK: u16 = 0x1F;

/// Mask for the 11-bit operand field (bits 10-0 of the instruction word).
pub const OPERAND_MASK: u16 = 0x07FF;

/// Mask of the 16-bit accumulator register.
pub const ACC_MASK: u32 = 0xFFFF;

/// Sign bit of the 16-bit accumulator register.
pub const ACC_SIGN_BIT: u32 = 0x8000;

/// Bytes occupied by one instruction word in memory.
pub const INSTRUCTION_SIZE: u16 = 2;

/// Largest program, in instruction words, that fits in memory.
pub const MAX_PROGRAM_WORDS: usize = MEMORY_SIZE / INSTRUCTION_SIZE as usize;

/// Default host bound on executed instructions before a run is declared runaway.
pub const DEFAULT_MAX_CYCLES: u64 = 10_000;
