//! Instruction Disassembler.
//!
//! Converts a 16-bit instruction word into a mnemonic string for trace
//! records, the CLI listing, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use chipcpu_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x3005), "WB 0x005");
//! assert_eq!(disassemble(0xF000), "ADD");
//! ```

use super::instruction::Instruction;

/// Disassembles an instruction word.
///
/// Operand-less opcodes render as the bare mnemonic. Unassigned opcodes render
/// as `.word 0xNNNN` so the listing can be reassembled.
pub fn disassemble(word: u16) -> String {
    let inst = Instruction(word);
    match inst.opcode() {
        Some(op) if op.takes_operand() => format!("{} {:#05x}", op.mnemonic(), inst.operand()),
        Some(op) => op.mnemonic().to_string(),
        None => format!(".word {word:#06x}"),
    }
}

/// Disassembles a program, one line per word, prefixed with its byte address.
pub fn listing(words: &[u16]) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, &w)| format!("{:#05x}: {:04x}  {}", i * 2, w, disassemble(w)))
        .collect()
}
