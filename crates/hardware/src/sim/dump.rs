//! Register and memory dumps.
//!
//! Both dumps write to any [`Write`] sink so the shell can send the same text to stdout
//! and to its `dumpsim` log.

use std::io::{self, Write};

use crate::sim::simulator::Simulator;

/// Writes the register and bus dump.
pub fn rdump(sim: &Simulator, out: &mut impl Write) -> io::Result<()> {
    let latches = sim.latches();
    writeln!(out)?;
    writeln!(out, "Current register/bus values :")?;
    writeln!(out, "-------------------------------------")?;
    writeln!(out, "Cycle Count  : {}", sim.cycle_count())?;
    writeln!(out, "PC           : 0x{:04x}", latches.pc)?;
    writeln!(out, "IR           : 0x{:04x}", latches.ir)?;
    writeln!(out, "STATE_NUMBER : 0x{:04x}", latches.state_number)?;
    writeln!(out)?;
    writeln!(out, "BUS          : 0x{:04x}", sim.bus())?;
    writeln!(out, "MDR          : 0x{:04x}", latches.mdr)?;
    writeln!(out, "MAR          : 0x{:04x}", latches.mar)?;
    writeln!(
        out,
        "CCs: N = {}  Z = {}  P = {}",
        u8::from(latches.cc.n()),
        u8::from(latches.cc.z()),
        u8::from(latches.cc.p())
    )?;
    writeln!(out, "Registers:")?;
    for (idx, value) in latches.regs.iter() {
        writeln!(out, "{idx}: 0x{value:04x}")?;
    }
    writeln!(out)
}

/// Writes the words covering byte addresses `low..=high`.
///
/// Addresses are clamped to memory; a reversed range prints only the header.
pub fn mdump(sim: &Simulator, low: u16, high: u16, out: &mut impl Write) -> io::Result<()> {
    let memory = sim.memory();
    writeln!(out)?;
    writeln!(out, "Memory content [0x{low:04x}..0x{high:04x}] :")?;
    writeln!(out, "-------------------------------------")?;
    let first = usize::from(low >> 1);
    let last = usize::from(high >> 1).min(memory.len_words().saturating_sub(1));
    for word_addr in first..=last {
        let [lo, hi] = memory.lanes(word_addr);
        let addr = word_addr << 1;
        writeln!(out, "  0x{addr:04x} ({addr}) : 0x{hi:02x}{lo:02x}")?;
    }
    writeln!(out)
}
