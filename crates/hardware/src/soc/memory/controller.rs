//! Memory timing unit.
//!
//! Models a fixed-latency memory. While `MIO.EN` is asserted a tick counter advances once
//! per cycle:
//! 1. **Tick `latency - 1`:** memory raises ready. The signal is latched, so the
//!    micro-sequencer sees it on the following cycle.
//! 2. **Tick `latency`:** the access happens and the counter returns to zero.
//!
//! With the default latency of five, a read started at cycle `T` raises ready at `T + 3`
//! and delivers MDR at `T + 4`.
//!
//! Stepping is split in two so a cycle stays atomic: [`MemoryTimingUnit::step`] computes
//! the outcome from frozen state, and [`MemoryTimingUnit::commit`] applies it once the rest
//! of the cycle has succeeded.

use tracing::debug;

use crate::common::constants::MEM_CYCLES;
use crate::core::control::ControlWord;
use crate::core::control::signals::{DataSize, MemDirection};
use crate::soc::memory::Memory;

/// A write that will land in memory when the cycle commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingWrite {
    /// Byte address (MAR).
    pub addr: u16,
    /// Source data (MDR).
    pub data: u16,
    /// Access width.
    pub size: DataSize,
}

/// Outcome of one memory cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryStep {
    /// Counter value after this cycle.
    pub count: u32,
    /// Value of the ready latch for the next cycle.
    pub ready: bool,
    /// Data from a read that completed this cycle.
    pub read_data: Option<u16>,
    /// Write that completed this cycle.
    pub write: Option<PendingWrite>,
}

/// Fixed-latency memory access model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryTimingUnit {
    latency: u32,
    count: u32,
}

impl Default for MemoryTimingUnit {
    fn default() -> Self {
        Self::new(MEM_CYCLES)
    }
}

impl MemoryTimingUnit {
    /// Creates an idle timing unit.
    ///
    /// # Arguments
    ///
    /// * `latency` - Cycles per access; at least 2 so ready precedes completion.
    pub fn new(latency: u32) -> Self {
        Self {
            latency: latency.max(2),
            count: 0,
        }
    }

    /// Cycles per access.
    pub const fn latency(&self) -> u32 {
        self.latency
    }

    /// Ticks elapsed in the access in flight; zero when idle.
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Computes this cycle's memory behaviour without changing any state.
    ///
    /// # Arguments
    ///
    /// * `word`   - Microinstruction executing this cycle.
    /// * `mar`    - Current MAR.
    /// * `mdr`    - Current MDR, the write source.
    /// * `memory` - Memory to read from.
    pub fn step(&self, word: &ControlWord, mar: u16, mdr: u16, memory: &Memory) -> MemoryStep {
        if !word.mio_en {
            return MemoryStep::default();
        }

        let tick = self.count + 1;
        if tick == self.latency - 1 {
            return MemoryStep {
                count: tick,
                ready: true,
                ..MemoryStep::default()
            };
        }
        if tick < self.latency {
            return MemoryStep {
                count: tick,
                ..MemoryStep::default()
            };
        }

        match word.r_w {
            MemDirection::Read => MemoryStep {
                read_data: Some(memory.read(mar, word.data_size)),
                ..MemoryStep::default()
            },
            MemDirection::Write => MemoryStep {
                write: Some(PendingWrite {
                    addr: mar,
                    data: mdr,
                    size: word.data_size,
                }),
                ..MemoryStep::default()
            },
        }
    }

    /// Applies a step computed by [`step`](Self::step).
    pub fn commit(&mut self, step: &MemoryStep, memory: &mut Memory) {
        self.count = step.count;
        if let Some(data) = step.read_data {
            debug!("memory read complete: {data:#06x}");
        }
        if let Some(write) = step.write {
            debug!(
                "memory write complete: {:?} {:#06x} -> [{:#06x}]",
                write.size, write.data, write.addr
            );
            memory.write(write.addr, write.data, write.size);
        }
    }
}
