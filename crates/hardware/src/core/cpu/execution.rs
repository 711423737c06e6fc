//! Main Execution Loop.
//!
//! This module implements the control unit's instruction cycle. It performs the following:
//! 1. **Fetch:** Two main-memory read cycles load the high then low byte of IR.
//! 2. **Decode:** IR is split into the 5-bit opcode and the 11-bit operand.
//! 3. **Execute:** The instruction is dispatched by family to the bus, the ALU, or PC.
//! 4. **Observability:** Each completed cycle produces a [`StepRecord`].

use tracing::{debug, info, warn};

use super::{CycleState, Cpu};
use crate::common::error::{AluError, SimError};
use crate::config::DecodeMode;
use crate::core::units::AluOp;
use crate::isa::disasm::disassemble;
use crate::isa::{Family, Instruction, Opcode};
use crate::sim::trace::{StepEvent, StepRecord};
use crate::soc::bus::ControlLines;

impl Cpu {
    /// Runs one complete instruction cycle and reports what it did.
    ///
    /// Once the machine has terminated, further calls return a
    /// [`StepEvent::Halted`] record without touching any state.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if PC runs past the end of
    /// memory, or [`SimError::IllegalInstruction`] for an unknown opcode
    /// under [`DecodeMode::Strict`].
    pub fn step(&mut self) -> Result<StepRecord, SimError> {
        let fetch_pc = self.regs.pc;
        loop {
            if let Some(event) = self.tick()? {
                return Ok(StepRecord {
                    fetch_pc,
                    opcode: Opcode::from_code(self.regs.opcode),
                    event,
                    snapshot: self.snapshot(),
                });
            }
        }
    }

    /// Advances the control unit by one state.
    ///
    /// # Returns
    ///
    /// `Some(event)` when the execute state completed an instruction cycle (or
    /// the machine is terminated), `None` after a fetch or decode state.
    ///
    /// # Errors
    ///
    /// See [`Cpu::step`].
    pub fn tick(&mut self) -> Result<Option<StepEvent>, SimError> {
        match self.state {
            CycleState::FetchHigh => {
                let high = self.fetch_byte()?;
                self.regs.ir = u16::from(high) << 8;
                self.state = CycleState::FetchLow;
                Ok(None)
            }
            CycleState::FetchLow => {
                let low = self.fetch_byte()?;
                self.regs.ir |= u16::from(low);
                self.state = CycleState::Decode;
                Ok(None)
            }
            CycleState::Decode => {
                let ir = Instruction(self.regs.ir);
                self.regs.opcode = ir.opcode_bits();
                self.regs.operand = ir.operand();
                self.state = CycleState::Execute;
                Ok(None)
            }
            CycleState::Execute => {
                let event = self.execute()?;
                if self.state == CycleState::Execute {
                    self.state = CycleState::FetchHigh;
                }
                Ok(Some(event))
            }
            CycleState::Terminate => Ok(Some(StepEvent::Halted)),
        }
    }

    fn fetch_byte(&mut self) -> Result<u8, SimError> {
        let addr = self.pc_addr();
        self.bus.drive(addr, ControlLines::MEMORY_READ);
        let _ = self.bus.transfer()?;
        self.stats.fetch_transfers += 1;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(self.bus.data)
    }

    fn execute(&mut self) -> Result<StepEvent, SimError> {
        self.stats.cycles += 1;
        let code = self.regs.opcode;
        let Some(opcode) = Opcode::from_code(code) else {
            return self.unknown_opcode(code);
        };
        self.regs.control = code;
        debug!(
            pc = self.regs.pc.wrapping_sub(2),
            "{}",
            disassemble(self.regs.ir)
        );

        let family = opcode.family();
        let event = match family {
            Family::MemoryAccess => self.exec_memory(opcode)?,
            Family::Alu => self.exec_alu(),
            Family::ControlFlow => self.exec_branch(opcode),
            Family::Termination => {
                self.state = CycleState::Terminate;
                info!(acc = self.alu.acc(), "end of program");
                StepEvent::Halted
            }
        };
        self.stats.record_family(family);
        Ok(event)
    }

    fn unknown_opcode(&mut self, code: u8) -> Result<StepEvent, SimError> {
        let pc = self.regs.pc.wrapping_sub(2);
        match self.decode_mode {
            DecodeMode::Strict => Err(SimError::IllegalInstruction { opcode: code, pc }),
            DecodeMode::Permissive => {
                warn!(opcode = code, pc, "unknown opcode, executing as NOP");
                self.stats.unknown_opcodes += 1;
                Ok(StepEvent::UnknownOpcode)
            }
        }
    }

    /// Register, memory, and I/O transfers.
    fn exec_memory(&mut self, opcode: Opcode) -> Result<StepEvent, SimError> {
        let operand = self.regs.operand;
        let lines = match opcode {
            Opcode::Wm => {
                self.regs.mar = operand;
                self.bus.data = self.regs.mbr;
                ControlLines::MEMORY_WRITE
            }
            Opcode::Rm => {
                self.regs.mar = operand;
                ControlLines::MEMORY_READ
            }
            Opcode::Wio => {
                self.regs.ioar = operand;
                self.bus.data = self.regs.iobr;
                ControlLines::IO_WRITE
            }
            Opcode::Rio => {
                self.regs.ioar = operand;
                ControlLines::IO_READ
            }
            Opcode::Wb => {
                self.regs.mbr = operand as u8;
                return Ok(StepEvent::Executed);
            }
            Opcode::Wib => {
                self.regs.iobr = operand as u8;
                return Ok(StepEvent::Executed);
            }
            Opcode::Swap => {
                std::mem::swap(&mut self.regs.mbr, &mut self.regs.iobr);
                return Ok(StepEvent::Executed);
            }
            _ => return Ok(StepEvent::Executed),
        };

        let addr = if lines.iom {
            self.regs.mar
        } else {
            self.regs.ioar
        };
        self.bus.drive(addr.into(), lines);
        let kind = self.bus.transfer()?;
        self.stats.record_transfer(kind);

        match opcode {
            Opcode::Rm => self.regs.mbr = self.bus.data,
            Opcode::Rio => self.regs.iobr = self.bus.data,
            _ => {}
        }
        Ok(StepEvent::Executed)
    }

    /// ALU operations. MBR feeds BUS except for RACC, whose result is
    /// latched back into MBR.
    fn exec_alu(&mut self) -> StepEvent {
        let control = self.regs.control;
        self.bus.control = ControlLines::DISCONNECTED;
        if AluOp::from_control(control) != Some(AluOp::Racc) {
            self.bus.data = self.regs.mbr;
        }

        match self.alu.execute(control, &mut self.bus.data) {
            Ok(AluOp::Racc) => {
                self.regs.mbr = self.bus.data;
                StepEvent::Executed
            }
            Ok(_) => StepEvent::Executed,
            Err(AluError::InvalidControlSignal(code)) => {
                self.stats.invalid_control_signals += 1;
                StepEvent::InvalidControlSignal(code)
            }
        }
    }

    /// BR jumps unconditionally. The conditional branches place MBR on BUS,
    /// compare it with ACC by subtraction, and test the fresh flags; ACC keeps
    /// its value.
    fn exec_branch(&mut self, opcode: Opcode) -> StepEvent {
        let taken = if opcode == Opcode::Br {
            true
        } else {
            self.regs.control = AluOp::Sub.control();
            self.bus.control = ControlLines::DISCONNECTED;
            self.bus.data = self.regs.mbr;
            let f = self.alu.compare(self.bus.data);
            match opcode {
                Opcode::Brlt => f.sf,
                Opcode::Brgt => !f.sf && !f.zf,
                Opcode::Brne => !f.zf,
                Opcode::Bre => f.zf,
                _ => false,
            }
        };
        if taken {
            self.regs.pc = self.regs.operand;
            self.stats.branches_taken += 1;
            StepEvent::BranchTaken
        } else {
            self.stats.branches_not_taken += 1;
            StepEvent::BranchNotTaken
        }
    }
}
