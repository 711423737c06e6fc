//! Program Loader.
//!
//! This module places programs into chip memory. It performs:
//! 1. **Text parsing:** Reads one instruction per line, as a mnemonic with an optional
//!    operand (`WB 0x05`, `ADD`, `BRE 12`), a raw word (`0x3005`), or `.word 0x3005`.
//! 2. **File loading:** Reads and parses a program file from disk.
//! 3. **Placement:** Writes 16-bit words high byte first starting at address 0.
//!
//! `#` and `;` start a comment that runs to the end of the line.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::addr::Address;
use crate::common::constants::{INSTRUCTION_SIZE, MAX_PROGRAM_WORDS, OPERAND_MASK};
use crate::common::error::LoadError;
use crate::isa::{Instruction, Opcode};
use crate::soc::memory::BitChipMemory;

/// Writes `words` into memory, high byte first, from address 0.
///
/// # Errors
///
/// Returns [`LoadError::ProgramTooLarge`] if the program exceeds memory. Memory
/// is not modified in that case.
pub fn load_words(memory: &mut BitChipMemory, words: &[u16]) -> Result<(), LoadError> {
    if words.len() > MAX_PROGRAM_WORDS {
        return Err(LoadError::ProgramTooLarge {
            words: words.len(),
            capacity: MAX_PROGRAM_WORDS,
        });
    }
    let mut addr: u16 = 0;
    for &word in words {
        for byte in Instruction(word).to_bytes() {
            memory
                .write_byte(Address(addr), byte)
                .map_err(|_| LoadError::ProgramTooLarge {
                    words: words.len(),
                    capacity: MAX_PROGRAM_WORDS,
                })?;
            addr += 1;
        }
    }
    debug!(
        words = words.len(),
        bytes = words.len() * usize::from(INSTRUCTION_SIZE),
        "program loaded"
    );
    Ok(())
}

/// Parses a program from its text form.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] naming the first line that is not a valid
/// instruction.
pub fn parse_program(source: &str) -> Result<Vec<u16>, LoadError> {
    let mut words = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw
            .split(['#', ';'])
            .next()
            .unwrap_or_default()
            .trim();
        if line.is_empty() {
            continue;
        }
        let word = parse_line(line).map_err(|message| LoadError::Parse {
            line: index + 1,
            message,
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::Parse`] if its contents are malformed.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u16>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&source)
}

fn parse_line(line: &str) -> Result<u16, String> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Err("empty line".to_string());
    };
    let operand = tokens.next();
    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected token '{extra}'"));
    }

    if head.eq_ignore_ascii_case(".word") {
        let Some(value) = operand else {
            return Err(".word needs a value".to_string());
        };
        return parse_number(value).and_then(|v| {
            u16::try_from(v).map_err(|_| format!("word '{value}' does not fit in 16 bits"))
        });
    }

    if head.starts_with(|c: char| c.is_ascii_digit()) {
        if operand.is_some() {
            return Err(format!("raw word '{head}' takes no operand"));
        }
        return parse_number(head).and_then(|v| {
            u16::try_from(v).map_err(|_| format!("word '{head}' does not fit in 16 bits"))
        });
    }

    let opcode =
        Opcode::from_mnemonic(head).ok_or_else(|| format!("unknown mnemonic '{head}'"))?;
    let value = match (opcode.takes_operand(), operand) {
        (true, Some(text)) => {
            let v = parse_number(text)?;
            if v > u32::from(OPERAND_MASK) {
                return Err(format!("operand '{text}' does not fit in 11 bits"));
            }
            v as u16
        }
        (true, None) => return Err(format!("{opcode} needs an operand")),
        (false, Some(text)) => return Err(format!("{opcode} takes no operand, found '{text}'")),
        (false, None) => 0,
    };
    Ok(Instruction::encode(opcode, value).0)
}

fn parse_number(text: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        text.parse::<u32>()
    };
    parsed.map_err(|_| format!("invalid number '{text}'"))
}
