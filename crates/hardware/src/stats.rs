//! Simulation statistics collection and reporting.
//!
//! This module tracks run metrics for the simulator. It provides:
//! 1. **Cycles and CPI:** Total cycles, instructions fetched, and cycles per instruction.
//! 2. **Memory:** Completed reads and writes, and cycles spent with `MIO.EN` asserted.
//! 3. **Control:** Visit counts per control store state.

use std::time::Instant;

use serde::Serialize;

use crate::common::constants::CONTROL_STORE_ROWS;

/// Simulation statistics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total cycles executed.
    pub cycles: u64,
    /// Instructions fetched (cycles that loaded IR).
    pub instructions: u64,
    /// Memory reads completed.
    pub memory_reads: u64,
    /// Memory writes completed.
    pub memory_writes: u64,
    /// Cycles with `MIO.EN` asserted, including the completing cycle.
    pub memory_busy_cycles: u64,
    /// Number of cycles spent in each state.
    pub state_visits: Vec<u64>,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions: 0,
            memory_reads: 0,
            memory_writes: 0,
            memory_busy_cycles: 0,
            state_visits: vec![0; CONTROL_STORE_ROWS],
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"memory"`, `"states"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "memory", "states"];

impl SimStats {
    /// Records one executed cycle in `state`.
    pub fn record_cycle(&mut self, state: u8) {
        self.cycles += 1;
        if let Some(visits) = self.state_visits.get_mut(usize::from(state)) {
            *visits += 1;
        }
    }

    /// Cycles per fetched instruction, or `None` before the first fetch.
    pub fn cpi(&self) -> Option<f64> {
        (self.instructions > 0).then(|| self.cycles as f64 / self.instructions as f64)
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

        println!("\n==========================================================");
        println!("LC-3b SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("sim_insts                {}", self.instructions);
            match self.cpi() {
                Some(cpi) => println!("sim_cpi                  {cpi:.4}"),
                None => println!("sim_cpi                  -"),
            }
            println!("----------------------------------------------------------");
        }
        if want("memory") {
            println!("MEMORY");
            println!("  mem.reads              {}", self.memory_reads);
            println!("  mem.writes             {}", self.memory_writes);
            println!(
                "  mem.busy_cycles        {} ({:.2}%)",
                self.memory_busy_cycles,
                (self.memory_busy_cycles as f64 / cyc as f64) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("states") {
            println!("STATE VISITS");
            for (state, visits) in self.state_visits.iter().enumerate() {
                if *visits > 0 {
                    println!("  state.{state:<2}               {visits}");
                }
            }
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
