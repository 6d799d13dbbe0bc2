//! Interactive debug shell.
//!
//! Commands are read one line at a time and matched case-insensitively on their first
//! letter: `go`, `run n`, `mdump low high`, `rdump`, `?`, and `quit`. A token starting with
//! `rd` is `rdump`; any other token starting with `r` is `run`.

use std::io::{self, BufRead, Write};

use lc3bsim_core::Simulator;
use lc3bsim_core::common::SimError;
use lc3bsim_core::isa::disasm::disassemble;
use lc3bsim_core::sim::RunOutcome;
use lc3bsim_core::sim::dump::{mdump, rdump};

/// One parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run until halt.
    Go,
    /// Run for a number of cycles.
    Run(u64),
    /// Dump memory between two byte addresses, inclusive.
    Mdump {
        /// First byte address.
        low: u16,
        /// Last byte address.
        high: u16,
    },
    /// Dump registers and the bus.
    Rdump,
    /// Print the command list.
    Help,
    /// Leave the shell.
    Quit,
    /// Anything else.
    Invalid,
}

/// Parses a number the way the shell accepts them: decimal, or hex with a `0x` prefix.
fn parse_number<T: TryFrom<u64>>(token: &str) -> Option<T> {
    let value = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok()?,
        None => token.parse().ok()?,
    };
    T::try_from(value).ok()
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?.to_ascii_lowercase();
        let mut chars = name.chars();
        let (first, second) = (chars.next(), chars.next());

        let command = match first {
            Some('g') => Self::Go,
            Some('?') => Self::Help,
            Some('q') => Self::Quit,
            Some('m') => {
                let low = tokens.next().and_then(parse_number);
                let high = tokens.next().and_then(parse_number);
                match (low, high) {
                    (Some(low), Some(high)) => Self::Mdump { low, high },
                    _ => Self::Invalid,
                }
            }
            Some('r') if second == Some('d') => Self::Rdump,
            Some('r') => tokens
                .next()
                .and_then(parse_number)
                .map_or(Self::Invalid, Self::Run),
            _ => Self::Invalid,
        };
        Some(command)
    }
}

/// Whether the shell keeps reading commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Leave the shell.
    Quit,
}

/// Prints the command list.
pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "----------------LC-3bSIM Help-------------------------")?;
    writeln!(out, "go               -  run program to completion       ")?;
    writeln!(out, "run n            -  execute program for n cycles    ")?;
    writeln!(out, "mdump low high   -  dump memory from low to high    ")?;
    writeln!(out, "rdump            -  dump the register & bus values  ")?;
    writeln!(out, "?                -  display this help menu          ")?;
    writeln!(out, "quit             -  exit the program                ")?;
    writeln!(out)
}

/// Reports how a run ended.
pub fn report(outcome: Result<RunOutcome, SimError>, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        Ok(RunOutcome::Completed { .. }) => Ok(()),
        Ok(RunOutcome::Halted { .. }) => writeln!(out, "Simulator halted\n"),
        Ok(RunOutcome::AlreadyHalted) => writeln!(out, "Can't simulate, Simulator is halted\n"),
        Ok(RunOutcome::CycleLimit { cycles }) => {
            writeln!(out, "Stopped after {cycles} cycles (cycle limit reached)\n")
        }
        Err(err) => writeln!(out, "Error: {err}\n"),
    }
}

/// Executes one command.
///
/// # Arguments
///
/// * `sim`     - Simulator to drive.
/// * `command` - Parsed command.
/// * `out`     - Console output.
/// * `dumpsim` - Log that receives a copy of every dump.
pub fn execute(
    sim: &mut Simulator,
    command: &Command,
    out: &mut impl Write,
    dumpsim: &mut impl Write,
) -> io::Result<Flow> {
    match *command {
        Command::Go => {
            if sim.is_halted() {
                writeln!(out, "Can't simulate, Simulator is halted\n")?;
            } else {
                writeln!(out, "Simulating...\n")?;
                report(sim.go(), out)?;
            }
        }
        Command::Run(cycles) => {
            if sim.is_halted() {
                writeln!(out, "Can't simulate, Simulator is halted\n")?;
            } else {
                writeln!(out, "Simulating for {cycles} cycles...\n")?;
                report(sim.run(cycles), out)?;
            }
        }
        Command::Mdump { low, high } => {
            mdump(sim, low, high, out)?;
            mdump(sim, low, high, dumpsim)?;
        }
        Command::Rdump => {
            rdump(sim, out)?;
            writeln!(out, "Instruction : {}\n", disassemble(sim.latches().ir))?;
            rdump(sim, dumpsim)?;
        }
        Command::Help => help(out)?,
        Command::Quit => {
            writeln!(out, "Bye.")?;
            return Ok(Flow::Quit);
        }
        Command::Invalid => writeln!(out, "Invalid Command")?,
    }
    Ok(Flow::Continue)
}

/// Reads commands from `input` until `quit` or end of input.
pub fn repl(
    sim: &mut Simulator,
    input: &mut impl BufRead,
    out: &mut impl Write,
    dumpsim: &mut impl Write,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "LC-3b-SIM> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        writeln!(out)?;

        let Some(command) = Command::parse(&line) else {
            continue;
        };
        if execute(sim, &command, out, dumpsim)? == Flow::Quit {
            return Ok(());
        }
        dumpsim.flush()?;
    }
}
