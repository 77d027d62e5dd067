//! MESI coherence simulator CLI.
//!
//! This binary is a thin wrapper around the `mesisim-core` library. It performs:
//! 1. **Argument parsing:** One instruction file per simulated core, plus options.
//! 2. **Configuration:** Built-in defaults or a JSON file via `--config`.
//! 3. **Trace output:** One line per executed instruction to stdout; diagnostics
//!    go to stderr so the trace stays clean.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mesisim_core::config::Config;
use mesisim_core::core::trace::{TraceRecord, TraceSink};
use mesisim_core::sim::dispatcher::Dispatcher;

#[derive(Parser, Debug)]
#[command(
    name = "mesisim",
    author,
    version,
    about = "Multi-core MESI cache coherence simulator",
    long_about = "Simulates one CPU core per instruction file against a shared byte memory.\n\nEach file is a newline-delimited list of instructions:\n  RD <address>          read one byte\n  WR <address> <value>  write one byte\n\nExamples:\n  mesisim core0.txt\n  mesisim core0.txt core1.txt --stats\n  mesisim --config sim.json core0.txt core1.txt"
)]
struct Cli {
    /// Instruction files, one per simulated core.
    files: Vec<PathBuf>,

    /// JSON configuration file (memory size, cache lines); defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print run statistics after the trace.
    #[arg(long)]
    stats: bool,
}

/// Trace sink that prints each record to stdout as one line.
struct StdoutTrace;

impl TraceSink for StdoutTrace {
    fn record(&self, record: &TraceRecord) {
        println!("{record}");
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    if cli.files.is_empty() {
        eprintln!("Usage: mesisim <input_file_0> [<input_file_1> ...]");
        eprintln!();
        eprintln!("  one instruction file per simulated core");
        eprintln!("  mesisim --help  for full options");
        process::exit(1);
    }

    let config = cli
        .config
        .as_deref()
        .map_or_else(Config::default, load_config);

    let dispatcher = Dispatcher::new(config);
    let summary = dispatcher.run(&cli.files, &StdoutTrace);

    for report in &summary.reports {
        if let Err(err) = &report.outcome {
            eprintln!("[!] core {}: {}", report.core, err);
        }
    }

    if cli.stats {
        summary.stats.print();
    }

    if !summary.all_sources_ran() {
        process::exit(1);
    }
}

/// Loads a `Config` from a JSON file, exiting with an error message on failure.
fn load_config(path: &Path) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Could not read config '{}': {}", path.display(), e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Invalid config '{}': {}", path.display(), e);
        process::exit(1);
    })
}
