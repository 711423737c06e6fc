//! Instruction Set Architecture.
//!
//! This module defines the 16-bit accumulator instruction set. It includes:
//! 1. **Opcodes:** The fixed 5-bit opcode table.
//! 2. **Instruction:** Word encoding/decoding and the typed `Opcode` enum.
//! 3. **Disassembly:** Mnemonic rendering for traces and listings.

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Instruction word layout and the typed opcode table.
pub mod instruction;

/// Raw opcode constants.
pub mod opcodes;

pub use instruction::{Family, Instruction, Opcode};
