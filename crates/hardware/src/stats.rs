//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the accumulator machine. It provides:
//! 1. **Cycles:** Instruction cycles executed and instructions completed.
//! 2. **Instruction mix:** Counts by family (memory access, ALU, control flow, termination).
//! 3. **Bus traffic:** Fetch, memory, and I/O transfers.
//! 4. **Branches:** Taken and not-taken counts.
//! 5. **Diagnostics:** Unknown opcodes and invalid control signals.

use std::time::Instant;

use crate::isa::Family;
use crate::soc::bus::TransferKind;

/// Simulation statistics structure tracking execution metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Instruction cycles run (fetch through execute), including NOP cycles.
    pub cycles: u64,
    /// Instructions with a valid opcode that completed execution.
    pub instructions: u64,

    /// Count of memory-access family instructions (WM, RM, RIO, WIO, WB, WIB, SWAP).
    pub inst_memory: u64,
    /// Count of ALU family instructions.
    pub inst_alu: u64,
    /// Count of branch instructions.
    pub inst_branch: u64,
    /// Count of end-of-program instructions.
    pub inst_system: u64,

    /// Bus cycles spent fetching instruction bytes.
    pub fetch_transfers: u64,
    /// Main-memory data reads (RM).
    pub memory_reads: u64,
    /// Main-memory data writes (WM).
    pub memory_writes: u64,
    /// I/O buffer reads (RIO).
    pub io_reads: u64,
    /// I/O buffer writes (WIO).
    pub io_writes: u64,

    /// Branches that loaded PC.
    pub branches_taken: u64,
    /// Conditional branches whose condition was false.
    pub branches_not_taken: u64,

    /// Opcodes outside the instruction table executed as NOP.
    pub unknown_opcodes: u64,
    /// Control codes the ALU rejected.
    pub invalid_control_signals: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions: 0,
            inst_memory: 0,
            inst_alu: 0,
            inst_branch: 0,
            inst_system: 0,
            fetch_transfers: 0,
            memory_reads: 0,
            memory_writes: 0,
            io_reads: 0,
            io_writes: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            unknown_opcodes: 0,
            invalid_control_signals: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"bus"`, `"branch"`, `"diagnostics"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "bus", "branch", "diagnostics"];

impl SimStats {
    /// Counts one completed instruction of the given family.
    pub const fn record_family(&mut self, family: Family) {
        self.instructions += 1;
        match family {
            Family::MemoryAccess => self.inst_memory += 1,
            Family::Alu => self.inst_alu += 1,
            Family::ControlFlow => self.inst_branch += 1,
            Family::Termination => self.inst_system += 1,
        }
    }

    /// Counts a data transfer performed during the execute phase.
    pub const fn record_transfer(&mut self, kind: TransferKind) {
        match kind {
            TransferKind::MemoryRead => self.memory_reads += 1,
            TransferKind::MemoryWrite => self.memory_writes += 1,
            TransferKind::IoRead => self.io_reads += 1,
            TransferKind::IoWrite => self.io_writes += 1,
            TransferKind::Idle => {}
        }
    }

    /// Total bus transfers, including instruction fetches.
    pub const fn total_transfers(&self) -> u64 {
        self.fetch_transfers + self.memory_reads + self.memory_writes + self.io_reads + self.io_writes
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let instr = self.instructions.max(1) as f64;

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("ACCUMULATOR MACHINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("sim_insts                {}", self.instructions);
            println!(
                "sim_transfers_per_cycle  {:.4}",
                self.total_transfers() as f64 / cyc as f64
            );
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let pct = |n: u64| (n as f64 / instr) * 100.0;
            println!("INSTRUCTION MIX");
            println!("  op.memory              {} ({:.2}%)", self.inst_memory, pct(self.inst_memory));
            println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
            println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
            println!("  op.system              {} ({:.2}%)", self.inst_system, pct(self.inst_system));
            println!("----------------------------------------------------------");
        }
        if want("bus") {
            println!("BUS TRAFFIC");
            println!("  bus.fetch              {}", self.fetch_transfers);
            println!("  bus.mem_read           {}", self.memory_reads);
            println!("  bus.mem_write          {}", self.memory_writes);
            println!("  bus.io_read            {}", self.io_reads);
            println!("  bus.io_write           {}", self.io_writes);
            println!("----------------------------------------------------------");
        }
        if want("branch") {
            let total = self.branches_taken + self.branches_not_taken;
            let rate = if total > 0 {
                100.0 * (self.branches_taken as f64 / total as f64)
            } else {
                0.0
            };
            println!("BRANCHES");
            println!("  br.taken               {}", self.branches_taken);
            println!("  br.not_taken           {}", self.branches_not_taken);
            println!("  br.taken_rate          {rate:.2}%");
            println!("----------------------------------------------------------");
        }
        if want("diagnostics") {
            println!("DIAGNOSTICS");
            println!("  decode.unknown_opcode  {}", self.unknown_opcodes);
            println!("  alu.invalid_control    {}", self.invalid_control_signals);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
