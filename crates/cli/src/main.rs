//! Accumulator machine simulator CLI.
//!
//! This binary provides the host harness for the simulator. It performs:
//! 1. **Run:** Load a text program, execute it to end-of-program, and report the outcome.
//! 2. **Disassemble:** Print the decoded listing of a program without running it.
//!
//! The exit status is 0 only when the program reached end-of-program.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chipcpu_core::common::constants::{BANK_COUNT, PLANES_PER_BANK, ROWS_PER_PLANE};
use chipcpu_core::config::{Config, DecodeMode};
use chipcpu_core::isa::disasm;
use chipcpu_core::sim::loader;
use chipcpu_core::sim::trace::StepRecord;
use chipcpu_core::{RunOutcome, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "chipcpu",
    author,
    version,
    about = "Accumulator CPU simulator with bit-sliced chip memory",
    long_about = "Run or disassemble programs for the accumulator machine.\n\nPrograms are text files with one instruction per line, e.g. `WB 0x05`, `ADD`, `BRE 12`, or a raw word `0x3005`.\n\nExamples:\n  chipcpu run programs/countdown.txt --stats\n  chipcpu run prog.txt --trace --max-cycles 500\n  chipcpu disasm prog.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program at address 0 and run it.
    Run {
        /// Program text file.
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every instruction cycle.
        #[arg(long, default_value_t = false)]
        trace: bool,

        /// Instruction cycles allowed before the run is declared runaway.
        #[arg(long, value_name = "N")]
        max_cycles: Option<u64>,

        /// Abort on opcodes outside the instruction table.
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Wait for Enter after every instruction cycle.
        #[arg(long, default_value_t = false)]
        pause: bool,

        /// Print statistics when the run ends.
        #[arg(long, default_value_t = false)]
        stats: bool,

        /// Print every non-zero chip memory plane row when the run ends.
        #[arg(long, default_value_t = false)]
        dump_memory: bool,
    },

    /// Print the decoded listing of a program.
    Disasm {
        /// Program text file.
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            max_cycles,
            strict,
            pause,
            stats,
            dump_memory,
        } => {
            init_logging(trace);
            let mut cfg = load_config(config.as_deref());
            cfg.general.trace |= trace;
            if let Some(n) = max_cycles {
                cfg.general.max_cycles = n;
            }
            if strict {
                cfg.decode = DecodeMode::Strict;
            }
            let code = cmd_run(&program, &cfg, pause, stats, dump_memory);
            process::exit(code);
        }
        Commands::Disasm { program } => cmd_disasm(&program),
    }
}

fn init_logging(trace: bool) {
    let default = if trace { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Reads the JSON configuration, or returns the defaults when no path is given.
///
/// Exits the process with an error message if the file cannot be read or parsed.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path.display(), e);
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path.display(), e);
        process::exit(1);
    })
}

fn read_program(path: &Path) -> Vec<u16> {
    loader::load_file(path).unwrap_or_else(|e| {
        eprintln!("Error loading program: {e}");
        process::exit(1);
    })
}

/// Runs a program and returns the process exit status for its outcome.
fn cmd_run(path: &Path, config: &Config, pause: bool, stats: bool, dump_memory: bool) -> i32 {
    let words = read_program(path);
    debug!(path = %path.display(), words = words.len(), "program parsed");
    let mut sim = Simulator::with_program(config, &words).unwrap_or_else(|e| {
        eprintln!("Error loading program: {e}");
        process::exit(1);
    });

    println!(
        "[*] {}: {} words, width {:?}, decode {:?}, max {} cycles",
        path.display(),
        words.len(),
        config.alu.width,
        config.decode,
        config.general.max_cycles
    );

    if pause {
        sim.add_observer(|record: &StepRecord| {
            print!("{record}  -- press Enter ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
        });
    }

    let report = sim.run();
    println!("\n[*] Outcome: {}", report.outcome);
    println!("    {}", report.snapshot);
    println!("    cycles={}", report.cycles);

    if dump_memory {
        print_memory(&sim);
    }
    if stats {
        sim.cpu.stats.print();
    }

    match report.outcome {
        RunOutcome::Success => 0,
        RunOutcome::AddressFault { .. } => 2,
        RunOutcome::RunawayProgram { .. } => 3,
        RunOutcome::IllegalInstruction { .. } => 4,
    }
}

fn print_memory(sim: &Simulator) {
    println!("\nCHIP MEMORY (non-zero plane rows)");
    let memory = &sim.cpu.bus.memory;
    for bank in 0..BANK_COUNT {
        for plane in 0..PLANES_PER_BANK {
            for row in 0..ROWS_PER_PLANE {
                match memory.plane_row(bank, plane, row) {
                    Some(0) | None => {}
                    Some(bits) => println!("  bank {bank} plane {plane} row {row:>2}: {bits:032b}"),
                }
            }
        }
    }
    let io = sim.cpu.bus.io.as_bytes();
    if io.iter().any(|&b| b != 0) {
        println!("I/O BUFFER");
        for (i, chunk) in io.chunks(8).enumerate() {
            let bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
            println!("  {:#04x}: {}", i * 8, bytes.join(" "));
        }
    }
}

fn cmd_disasm(path: &Path) {
    for line in disasm::listing(&read_program(path)) {
        println!("{line}");
    }
}
