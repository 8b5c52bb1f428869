//! LS8 simulator CLI.
//!
//! This binary runs one program image. It performs:
//! 1. **Load:** Parse the image; a missing file or malformed literal exits non-zero before
//!    any instruction runs.
//! 2. **Run:** Execute until `HLT` (exit 0) or a fault (diagnostic, state dump, exit 1).
//! 3. **Report:** Optionally trace every instruction and print statistics.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS8 8-bit instruction-set simulator",
    long_about = "Run an LS8 program image: one binary byte literal per line, '#' starts a comment.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 programs/call.ls8 --trace\n  ls8 programs/sctest.ls8 --stats"
)]
struct Cli {
    /// Program image to execute.
    program: PathBuf,

    /// Print a trace line to stderr before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics to stderr after the run.
    #[arg(short, long)]
    stats: bool,

    /// JSON configuration file; command-line flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: {}: {e}", path.display());
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    config.stats.enabled |= cli.stats;
    tracing::debug!(?config, "configuration resolved");

    let mut sim = Simulator::new(&config);

    match sim.load_file(&cli.program) {
        Ok(bytes) => tracing::info!(program = %cli.program.display(), bytes, "program loaded"),
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }

    let result = sim.run();
    if config.stats.enabled {
        sim.cpu.stats.print();
    }

    if let Err(e) = result {
        eprintln!("\n[!] {e}");
        sim.cpu.dump_state();
        process::exit(1);
    }
}
