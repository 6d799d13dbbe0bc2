//! LC-3b cycle-accurate simulator CLI.
//!
//! This binary loads a microprogram and one or more program images, then either:
//! 1. **Shell:** Reads debug commands (`go`, `run n`, `mdump`, `rdump`, `?`, `quit`) from
//!    stdin, copying every dump to a `dumpsim` file.
//! 2. **Batch:** With `--go`, runs to halt, prints the register dump and statistics, and
//!    exits.

mod shell;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lc3bsim_core::config::Config;
use lc3bsim_core::sim::dump::rdump;
use lc3bsim_core::sim::loader;
use lc3bsim_core::Simulator;

use crate::shell::{repl, report};

#[derive(Parser, Debug)]
#[command(
    name = "lc3bsim",
    author,
    version,
    about = "LC-3b cycle-accurate microarchitecture simulator",
    long_about = "Run LC-3b programs on a microprogrammed datapath.\n\nThe micro-code file holds 64 rows of 35 control bits. Each program file holds hex words; the first is the byte load address.\n\nExamples:\n  lc3bsim ucode3 add.hex\n  lc3bsim ucode3 main.hex vectors.hex --go --json\n  RUST_LOG=lc3bsim_core=debug lc3bsim ucode3 add.hex --trace"
)]
struct Cli {
    /// Micro-code file (64 rows of 35 control bits).
    ucode: PathBuf,

    /// Program image files, loaded in order.
    #[arg(required = true)]
    programs: Vec<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every cycle (state, bus, fetched instruction).
    #[arg(long)]
    trace: bool,

    /// Run to halt without entering the shell.
    #[arg(long)]
    go: bool,

    /// With `--go`, also print the final latches as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.trace {
        "warn,lc3bsim_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        error!("{err}");
        process::exit(1);
    }
}

/// Builds the simulator from the command line and hands it to the shell or batch runner.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_states = true;
    }

    println!("LC-3b Simulator\n");
    println!("Loading Control Store from file: {}\n", cli.ucode.display());
    let store = loader::load_control_store(&cli.ucode)?;

    let mut sim = Simulator::new(&config, store);
    for path in &cli.programs {
        let image = loader::load_program(path)?;
        sim.load_program(&image)?;
        println!("Read {} words from program into memory.\n", image.words.len());
    }

    if cli.go {
        return batch(&mut sim, cli.json);
    }

    let mut dumpsim = BufWriter::new(File::create("dumpsim")?);
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    repl(&mut sim, &mut stdin, &mut stdout, &mut dumpsim)?;
    sim.stats().print();
    Ok(())
}

/// Runs to halt and reports the final state.
fn batch(sim: &mut Simulator, json: bool) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Simulating...\n")?;
    let outcome = sim.go();
    info!(cycles = sim.cycle_count(), status = ?sim.status(), "batch run finished");
    report(outcome, &mut stdout)?;
    rdump(sim, &mut stdout)?;
    if json {
        println!("{}", serde_json::to_string_pretty(sim.latches())?);
    }
    sim.stats().print();
    Ok(())
}
