//! Instruction set tests.


/// Opcode table and instruction word fields.
pub mod instruction;
