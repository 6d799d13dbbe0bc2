//! Simulator: owns both latch buffers, the control store, memory, and the timing unit.
//!
//! One [`Simulator::cycle`] is one double-buffered transaction. Every unit reads the frozen
//! `current` latches; results land in `next`, which replaces `current` only after the whole
//! cycle has been evaluated without error.

use std::mem;

use serde::Serialize;
use tracing::{debug, info};

use crate::common::constants::STATE_MASK;
use crate::common::{LoadError, SimError};
use crate::config::Config;
use crate::core::arch::Latches;
use crate::core::control::{ControlStore, MicroSequencer};
use crate::core::datapath::{BusArbiter, BusDrivers, LatchUpdate};
use crate::isa::disasm::disassemble;
use crate::sim::loader::ProgramImage;
use crate::soc::memory::{Memory, MemoryTimingUnit};
use crate::stats::SimStats;

/// Whether the machine can still execute cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    /// Cycles may be executed.
    #[default]
    Running,
    /// The PC reached the halt sentinel; nothing more will run.
    Halted,
}

/// How a [`Simulator::run`] or [`Simulator::go`] call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// All requested cycles executed.
    Completed {
        /// Cycles executed by this call.
        cycles: u64,
    },
    /// The PC reached the halt sentinel.
    Halted {
        /// Cycles executed by this call before halting.
        cycles: u64,
    },
    /// The simulator was already halted; nothing ran.
    AlreadyHalted,
    /// `go` reached the configured cycle limit; the simulator is still runnable.
    CycleLimit {
        /// Cycles executed by this call.
        cycles: u64,
    },
}

/// Top-level simulator context.
#[derive(Debug)]
pub struct Simulator {
    current: Latches,
    next: Latches,
    control_store: ControlStore,
    memory: Memory,
    timing: MemoryTimingUnit,
    bus: u16,
    status: RunStatus,
    halt_pc: u16,
    max_cycles: Option<u64>,
    trace: bool,
    stats: SimStats,
}

impl Simulator {
    /// Creates a machine with zeroed memory, sitting in the configured initial state with
    /// its control word latched and Z set.
    ///
    /// `config` is expected to have passed [`Config::validate`]; the initial state is masked
    /// to the control store either way.
    pub fn new(config: &Config, control_store: ControlStore) -> Self {
        let state = config.general.initial_state & STATE_MASK;
        let current = Latches::reset(state, *control_store.lookup(state));
        Self {
            next: current.clone(),
            current,
            control_store,
            memory: Memory::new(),
            timing: MemoryTimingUnit::new(config.memory.access_cycles),
            bus: 0,
            status: RunStatus::Running,
            halt_pc: config.general.halt_pc,
            max_cycles: config.general.max_cycles,
            trace: config.general.trace_states,
            stats: SimStats::default(),
        }
    }

    /// Places a program image in memory.
    ///
    /// The first image loaded while the PC is still zero sets the PC to its load address.
    pub fn load_program(&mut self, image: &ProgramImage) -> Result<(), LoadError> {
        self.memory.load_image(image)?;
        if self.current.pc == 0 {
            self.current.pc = image.load_address & !1;
            info!("PC set to {:#06x}", self.current.pc);
        }
        Ok(())
    }

    /// Executes one clock cycle.
    ///
    /// # Returns
    ///
    /// A [`SimError`] if the current microinstruction drives the bus illegally. Nothing is
    /// committed in that case: latches, memory, and the timing unit stay as they were.
    pub fn cycle(&mut self) -> Result<(), SimError> {
        let current = &self.current;
        let word = current.microinstruction;

        let next_state = MicroSequencer::next_state(&word, current.ir, current.ready, current.ben);
        let memory_step = self.timing.step(&word, current.mar, current.mdr, &self.memory);
        let drivers = BusDrivers::evaluate(current);
        let bus = BusArbiter::drive(current, &drivers)?;

        self.next.clone_from(current);
        self.next.state_number = next_state;
        self.next.microinstruction = *self.control_store.lookup(next_state);
        self.next.ready = memory_step.ready;
        LatchUpdate::commit(
            current,
            &mut self.next,
            bus,
            drivers.adder,
            memory_step.read_data,
        );
        self.timing.commit(&memory_step, &mut self.memory);

        self.stats.record_cycle(current.state_number);
        if word.ld_ir {
            self.stats.instructions += 1;
        }
        if word.mio_en {
            self.stats.memory_busy_cycles += 1;
        }
        if memory_step.read_data.is_some() {
            self.stats.memory_reads += 1;
        }
        if memory_step.write.is_some() {
            self.stats.memory_writes += 1;
        }

        if self.trace {
            debug!(
                "cycle {:>6}  state {:>2} -> {:>2}  bus {bus:#06x}",
                self.stats.cycles, current.state_number, next_state
            );
            if word.ld_ir {
                debug!("fetched {bus:#06x}  {}", disassemble(bus));
            }
        }

        self.bus = bus;
        mem::swap(&mut self.current, &mut self.next);
        Ok(())
    }

    /// Marks the machine halted if the PC holds the halt sentinel.
    fn check_halt(&mut self) -> bool {
        if self.current.pc == self.halt_pc {
            self.status = RunStatus::Halted;
            info!("simulator halted after {} cycles", self.stats.cycles);
            return true;
        }
        false
    }

    /// Executes up to `cycles` cycles, stopping early on halt.
    pub fn run(&mut self, cycles: u64) -> Result<RunOutcome, SimError> {
        if self.is_halted() {
            return Ok(RunOutcome::AlreadyHalted);
        }
        for executed in 0..cycles {
            if self.check_halt() {
                return Ok(RunOutcome::Halted { cycles: executed });
            }
            self.cycle()?;
        }
        Ok(RunOutcome::Completed { cycles })
    }

    /// Runs until the PC reaches the halt sentinel, or until the configured cycle limit.
    pub fn go(&mut self) -> Result<RunOutcome, SimError> {
        if self.is_halted() {
            return Ok(RunOutcome::AlreadyHalted);
        }
        let mut executed = 0;
        loop {
            if self.check_halt() {
                return Ok(RunOutcome::Halted { cycles: executed });
            }
            if self.max_cycles.is_some_and(|limit| executed >= limit) {
                return Ok(RunOutcome::CycleLimit { cycles: executed });
            }
            self.cycle()?;
            executed += 1;
        }
    }

    /// Frozen latches of the cycle about to execute.
    pub const fn latches(&self) -> &Latches {
        &self.current
    }

    /// Mutable access to the current latches, for tests and debuggers.
    pub const fn latches_mut(&mut self) -> &mut Latches {
        &mut self.current
    }

    /// Main memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to main memory.
    pub const fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Value driven on the bus in the last executed cycle, for display.
    pub const fn bus(&self) -> u16 {
        self.bus
    }

    /// Run status.
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    /// Returns `true` once the PC has reached the halt sentinel.
    pub const fn is_halted(&self) -> bool {
        matches!(self.status, RunStatus::Halted)
    }

    /// Cycles executed so far.
    pub const fn cycle_count(&self) -> u64 {
        self.stats.cycles
    }

    /// Installed microprogram.
    pub const fn control_store(&self) -> &ControlStore {
        &self.control_store
    }

    /// Memory timing unit.
    pub const fn timing(&self) -> &MemoryTimingUnit {
        &self.timing
    }

    /// Run statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}
