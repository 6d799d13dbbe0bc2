//! Control unit: control store, microinstruction signals, and the micro-sequencer.

/// Named control signals and their decoding.
pub mod signals;

/// Control store ROM.
pub mod store;

/// Next-state logic.
pub mod sequencer;

pub use self::sequencer::MicroSequencer;
pub use self::signals::ControlWord;
pub use self::store::ControlStore;
