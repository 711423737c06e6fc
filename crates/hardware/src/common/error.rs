//! Error definitions.
//!
//! This module defines the error kinds raised by the simulated machine. It provides:
//! 1. **Fatal Errors:** `SimError` variants that abort a run (address faults, runaway programs, illegal opcodes).
//! 2. **Non-fatal Errors:** `AluError` for control signals the ALU does not recognize.
//! 3. **Loader Errors:** `LoadError` for programs that cannot be read, parsed, or placed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// An address does not map onto any chip, row, and column.
    #[error("address {address:#05x} is outside the chip memory")]
    AddressOutOfRange {
        /// The offending value on the ADDR lines.
        address: u16,
    },

    /// The host cycle bound was exhausted without reaching end-of-program.
    #[error("program did not reach EOP within {limit} cycles")]
    NonTerminatingProgram {
        /// The configured cycle bound.
        limit: u64,
    },

    /// An opcode outside the instruction table was decoded in strict mode.
    #[error("illegal opcode {opcode:#04x} at pc {pc:#05x}")]
    IllegalInstruction {
        /// The undecodable 5-bit opcode.
        opcode: u8,
        /// Address of the instruction's high byte.
        pc: u16,
    },
}

/// Non-fatal ALU errors. The operation is skipped and the run continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AluError {
    /// The CONTROL register holds a code the ALU does not implement.
    #[error("invalid control signal {0:#04x}")]
    InvalidControlSignal(u8),
}

/// Errors raised while reading or placing a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A program line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The program does not fit in memory.
    #[error("program of {words} words exceeds the {capacity}-word memory")]
    ProgramTooLarge {
        /// Number of words in the program.
        words: usize,
        /// Number of words memory can hold.
        capacity: usize,
    },
}
