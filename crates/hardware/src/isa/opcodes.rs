//! Instruction Opcodes.
//!
//! Defines the 5-bit opcodes (bits 15-11 of the instruction word). ALU opcodes
//! double as the control codes latched into CONTROL and decoded by the ALU.

/// Write MBR to main memory at the operand address (WM).
pub const OP_WM: u8 = 0x01;

/// Read main memory at the operand address into MBR (RM).
pub const OP_RM: u8 = 0x02;

/// Unconditional branch to the operand address (BR).
pub const OP_BR: u8 = 0x03;

/// Read the I/O buffer at the operand address into IOBR (RIO).
pub const OP_RIO: u8 = 0x04;

/// Write IOBR to the I/O buffer at the operand address (WIO).
pub const OP_WIO: u8 = 0x05;

/// Load the operand into MBR (WB).
pub const OP_WB: u8 = 0x06;

/// Load the operand into IOBR (WIB).
pub const OP_WIB: u8 = 0x07;

/// Load the accumulator from the bus (WACC).
pub const OP_WACC: u8 = 0x09;

/// Store the accumulator onto the bus (RACC).
pub const OP_RACC: u8 = 0x0B;

/// Exchange MBR and IOBR (SWAP).
pub const OP_SWAP: u8 = 0x0E;

/// Branch if ACC is less than MBR (BRLT).
pub const OP_BRLT: u8 = 0x11;

/// Branch if ACC is greater than MBR (BRGT).
pub const OP_BRGT: u8 = 0x12;

/// Branch if ACC differs from MBR (BRNE).
pub const OP_BRNE: u8 = 0x13;

/// Branch if ACC equals MBR (BRE).
pub const OP_BRE: u8 = 0x14;

/// Shift the accumulator right by one (SHR).
pub const OP_SHR: u8 = 0x15;

/// Shift the accumulator left by one (SHL).
pub const OP_SHL: u8 = 0x16;

/// Exclusive-or the bus into the accumulator (XOR).
pub const OP_XOR: u8 = 0x17;

/// Complement the accumulator (NOT).
pub const OP_NOT: u8 = 0x18;

/// Or the bus into the accumulator (OR).
pub const OP_OR: u8 = 0x19;

/// And the bus into the accumulator (AND).
pub const OP_AND: u8 = 0x1A;

/// Multiply the accumulator by the bus with Booth's algorithm (MUL).
pub const OP_MUL: u8 = 0x1B;

/// Subtract the bus from the accumulator (SUB).
pub const OP_SUB: u8 = 0x1D;

/// Add the bus to the accumulator (ADD).
pub const OP_ADD: u8 = 0x1E;

/// End of program (EOP).
pub const OP_EOP: u8 = 0x1F;
