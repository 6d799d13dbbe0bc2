//! Bus arbitration tests.

use lc3bsim_core::common::SimError;
use lc3bsim_core::core::control::signals::PcMux;
use lc3bsim_core::core::datapath::{BusArbiter, BusDriver, BusDrivers};
use pretty_assertions::assert_eq;

use crate::common::fixtures::{WordBuilder, latches};

#[test]
fn no_gate_selects_nothing() {
    let word = WordBuilder::new().build();
    assert_eq!(BusArbiter::select(&word, 0), Ok(None));
}

#[test]
fn single_gate_selects_its_driver() {
    let cases = [
        (WordBuilder::new().gate_pc().build(), BusDriver::Pc),
        (WordBuilder::new().gate_mdr().build(), BusDriver::Mdr),
        (WordBuilder::new().gate_alu().build(), BusDriver::Alu),
        (WordBuilder::new().gate_shf().build(), BusDriver::Shifter),
        (WordBuilder::new().gate_marmux().build(), BusDriver::MarMux),
    ];
    for (word, driver) in cases {
        assert_eq!(BusArbiter::select(&word, 7), Ok(Some(driver)));
    }
}

#[test]
fn two_gates_are_contention() {
    let word = WordBuilder::new().gate_pc().gate_alu().build();
    assert_eq!(
        BusArbiter::select(&word, 42),
        Err(SimError::BusContention {
            state: 42,
            drivers: vec![BusDriver::Alu, BusDriver::Pc],
        })
    );
}

#[test]
fn drives_the_gated_value() {
    let mut l = latches(WordBuilder::new().gate_pc().ld_mar().build(), 0);
    l.pc = 0x3000;
    let drivers = BusDrivers::evaluate(&l);
    assert_eq!(BusArbiter::drive(&l, &drivers), Ok(0x3000));
}

#[test]
fn idle_bus_is_zero_when_nothing_loads_from_it() {
    // State 32: LD.BEN and IRD, no gate.
    let l = latches(WordBuilder::new().ld_ben().ird().build(), 0x1283);
    let drivers = BusDrivers::evaluate(&l);
    assert_eq!(BusArbiter::drive(&l, &drivers), Ok(0));

    let l = latches(WordBuilder::new().ld_pc(PcMux::Increment).build(), 0);
    let drivers = BusDrivers::evaluate(&l);
    assert_eq!(BusArbiter::drive(&l, &drivers), Ok(0));
}

#[test]
fn loading_an_undriven_bus_is_an_error() {
    let mut l = latches(WordBuilder::new().ld_reg().build(), 0x1283);
    l.state_number = 9;
    let drivers = BusDrivers::evaluate(&l);
    assert_eq!(
        BusArbiter::drive(&l, &drivers),
        Err(SimError::UndrivenBus { state: 9 })
    );
}

#[test]
fn reserved_shift_mode_fails_only_when_gated() {
    let mut l = latches(WordBuilder::new().gate_shf().ld_reg().build(), 0xD4A1);
    l.state_number = 13;
    let drivers = BusDrivers::evaluate(&l);
    assert_eq!(drivers.shifter, None);
    assert_eq!(
        BusArbiter::drive(&l, &drivers),
        Err(SimError::ReservedShiftMode {
            state: 13,
            ir: 0xD4A1
        })
    );

    let l = latches(WordBuilder::new().gate_alu().ld_reg().build(), 0xD4A1);
    let drivers = BusDrivers::evaluate(&l);
    assert!(BusArbiter::drive(&l, &drivers).is_ok());
}
