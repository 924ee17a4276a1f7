//! MIPS subset simulator CLI.
//!
//! Single entry point for running a program image. It performs:
//! 1. **Argument parsing:** image path plus output and interaction flags.
//! 2. **Configuration:** flags, optionally layered over a JSON config file.
//! 3. **Simulation loop:** step, disassemble, report; interactive stepping
//!    quits on an input line starting with `q`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use mipsim_core::config::Config;
use mipsim_core::core::{Machine, Step};
use mipsim_core::isa::disasm;
use mipsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    version,
    about = "Cycle-accurate functional simulator for a 32-bit MIPS subset",
    long_about = "Load a flat binary of big-endian MIPS instruction words and execute it one \
instruction at a time, printing a disassembly trace and machine-state report per step.\n\n\
Examples:\n  mipsim program.bin\n  mipsim -i -r program.bin\n  mipsim --config sim.json program.bin"
)]
struct Cli {
    /// Program image: flat binary of big-endian 32-bit instruction words.
    image: PathBuf,

    /// Print the full register file after every instruction.
    #[arg(short = 'r', long)]
    print_registers: bool,

    /// Print all nonzero data memory after every instruction.
    #[arg(short = 'm', long)]
    print_memory: bool,

    /// Prompt before each instruction; input starting with 'q' quits.
    #[arg(short, long)]
    interactive: bool,

    /// Enable debug logging (RUST_LOG overrides the default filter).
    #[arg(short, long)]
    debug: bool,

    /// JSON configuration file; command-line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let config = build_config(&cli);

    if config.debugging {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let image = loader::read_image(&cli.image).unwrap_or_else(|e| {
        eprintln!("mipsim: {e}");
        process::exit(1);
    });

    let mut machine = Machine::new();
    machine.load_image(&image);

    run(&mut machine, &config);
}

/// Builds the effective configuration: JSON file first, flags on top.
fn build_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("mipsim: failed to read config {}: {e}", path.display());
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("mipsim: invalid config {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    config.print_all_registers |= cli.print_registers;
    config.print_all_memory |= cli.print_memory;
    config.interactive |= cli.interactive;
    config.debugging |= cli.debug;
    config
}

/// Runs the simulation loop. Returns when the user quits; in
/// non-interactive mode the loop runs indefinitely.
fn run(machine: &mut Machine, config: &Config) {
    let stdin = io::stdin();
    loop {
        if config.interactive {
            print!("> ");
            io::stdout().flush().ok();
            let mut line = String::new();
            let n = stdin.lock().read_line(&mut line).unwrap_or(0);
            if n == 0 || line.starts_with('q') {
                return;
            }
        }

        let step = machine.step();
        println!(
            "Executing instruction at {:08x}: {:08x}",
            step.inst.pc, step.inst.raw
        );
        println!("{}", disasm::disassemble(&step.inst));
        report(machine, config, &step);
    }
}

/// Prints the post-instruction state report: the new PC, then the changed
/// register (or the full register file) and the changed memory word (or all
/// nonzero data memory), per configuration.
fn report(machine: &Machine, config: &Config, step: &Step) {
    println!("New pc = {:08x}", step.next_pc);

    if config.print_all_registers {
        machine.regs.dump();
    } else {
        match step.changed_reg {
            Some(reg) => println!("Updated r{:02} to {:08x}", reg, machine.regs.read(reg)),
            None => println!("No register was updated."),
        }
    }

    if config.print_all_memory {
        println!("Nonzero memory");
        println!("ADDR      CONTENTS");
        for (addr, val) in machine.memory.nonzero_data() {
            println!("{addr:08x}  {val:08x}");
        }
    } else {
        match step.changed_mem {
            Some(addr) => println!(
                "Updated memory at address {:08x} to {:08x}",
                addr,
                machine.fetch(addr)
            ),
            None => println!("No memory location was updated."),
        }
    }
}
