//! Bus arbitration.
//!
//! Exactly one unit may drive the shared bus per cycle. The arbiter reads the five gate
//! signals and selects the single asserted driver; two or more asserted gates are bus
//! contention. With no gate asserted the bus idles at zero, which is only legal if nothing
//! latches from it.

use serde::Serialize;
use tracing::trace;

use crate::common::SimError;
use crate::core::arch::Latches;
use crate::core::control::ControlWord;
use crate::core::datapath::drivers::BusDrivers;

/// A unit that can be gated onto the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BusDriver {
    /// `GateALU`.
    Alu,
    /// `GatePC`.
    Pc,
    /// `GateSHF`.
    Shifter,
    /// `GateMDR`.
    Mdr,
    /// `GateMARMUX`.
    MarMux,
}

/// Single-driver bus arbiter.
#[derive(Debug)]
pub struct BusArbiter;

impl BusArbiter {
    /// Lists every driver whose gate is asserted in `word`.
    pub fn gated(word: &ControlWord) -> Vec<BusDriver> {
        [
            (word.gate_alu, BusDriver::Alu),
            (word.gate_pc, BusDriver::Pc),
            (word.gate_shf, BusDriver::Shifter),
            (word.gate_mdr, BusDriver::Mdr),
            (word.gate_marmux, BusDriver::MarMux),
        ]
        .into_iter()
        .filter_map(|(on, driver)| on.then_some(driver))
        .collect()
    }

    /// Selects the bus driver for a microinstruction.
    ///
    /// # Arguments
    ///
    /// * `word`  - Microinstruction executing this cycle.
    /// * `state` - Its state number, for error reporting.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no gate is asserted, `Ok(Some(driver))` for exactly one, and
    /// [`SimError::BusContention`] for more.
    pub fn select(word: &ControlWord, state: u8) -> Result<Option<BusDriver>, SimError> {
        let drivers = Self::gated(word);
        match drivers.len() {
            0 => Ok(None),
            1 => Ok(drivers.first().copied()),
            _ => Err(SimError::BusContention { state, drivers }),
        }
    }

    /// Computes the bus value for the current cycle.
    pub fn drive(latches: &Latches, drivers: &BusDrivers) -> Result<u16, SimError> {
        let word = &latches.microinstruction;
        let state = latches.state_number;
        let selected = Self::select(word, state)?;
        trace!(state, ?selected, "bus select");

        match selected {
            Some(BusDriver::Alu) => Ok(drivers.alu),
            Some(BusDriver::Pc) => Ok(drivers.pc),
            Some(BusDriver::Shifter) => drivers.shifter.ok_or(SimError::ReservedShiftMode {
                state,
                ir: latches.ir,
            }),
            Some(BusDriver::Mdr) => Ok(drivers.mdr),
            Some(BusDriver::MarMux) => Ok(drivers.marmux),
            None if word.loads_from_bus() => Err(SimError::UndrivenBus { state }),
            None => Ok(0),
        }
    }
}
