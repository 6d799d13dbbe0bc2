//! Microinstruction control signals.
//!
//! This module defines the named-field form of one control store row. It performs:
//! 1. **Selector Classification:** Every multi-way mux select is an enum, so datapath code
//!    matches exhaustively instead of indexing arrays.
//! 2. **Decoding:** Converts the 35 raw control bits into a [`ControlWord`], rejecting
//!    selector values the datapath does not define.
//! 3. **Bus Usage:** Reports whether a word latches anything from the bus.

use serde::Serialize;

use crate::common::constants::CONTROL_STORE_BITS;

/// Branch condition tested by the micro-sequencer (`COND1:COND0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Cond {
    /// Take `J` as is.
    #[default]
    Unconditional,
    /// Replace `J[1]` with the memory-ready latch.
    MemoryReady,
    /// Replace `J[2]` with the branch-enable latch.
    Branch,
    /// Replace `J[0]` with `IR[11]`.
    AddressingMode,
}

/// PC input select (`PCMUX1:PCMUX0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum PcMux {
    /// `PC + 2`.
    #[default]
    Increment,
    /// The value on the bus.
    Bus,
    /// The address adder output.
    Adder,
}

/// Destination register select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum DrMux {
    /// `IR[11:9]`.
    #[default]
    Ir11_9,
    /// Hardwired `R7`.
    R7,
}

/// First ALU source register select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Sr1Mux {
    /// `IR[11:9]`.
    #[default]
    Ir11_9,
    /// `IR[8:6]`.
    Ir8_6,
}

/// Address adder base operand select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Addr1Mux {
    /// The program counter.
    #[default]
    Pc,
    /// Base register `IR[8:6]`.
    BaseR,
}

/// Address adder offset operand select (`ADDR2MUX1:ADDR2MUX0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Addr2Mux {
    /// Constant zero.
    #[default]
    Zero,
    /// `SEXT(IR[5:0])`.
    Offset6,
    /// `SEXT(IR[8:0])`.
    PcOffset9,
    /// `SEXT(IR[10:0])`.
    PcOffset11,
}

/// MAR input select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MarMux {
    /// `ZEXT(IR[7:0]) << 1`, the trap vector address.
    #[default]
    TrapVector,
    /// The address adder output.
    Adder,
}

/// ALU operation (`ALUK1:ALUK0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluOp {
    /// `A + B`.
    #[default]
    Add,
    /// `A & B`.
    And,
    /// `A ^ B`.
    Xor,
    /// `A` unchanged.
    PassA,
}

/// Memory access direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MemDirection {
    /// Memory to MDR.
    #[default]
    Read,
    /// MDR to memory.
    Write,
}

/// Memory access width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum DataSize {
    /// One byte lane, selected by `MAR[0]`.
    #[default]
    Byte,
    /// Both byte lanes.
    Word,
}

/// One decoded microinstruction.
///
/// Field order follows the bit order of a microprogram row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlWord {
    /// Dispatch on the opcode instead of `J`.
    pub ird: bool,
    /// Condition used to modify `J`.
    pub cond: Cond,
    /// Base next-state field (6 bits).
    pub j: u8,

    /// Load MAR.
    pub ld_mar: bool,
    /// Load MDR.
    pub ld_mdr: bool,
    /// Load IR.
    pub ld_ir: bool,
    /// Load BEN.
    pub ld_ben: bool,
    /// Load the destination register.
    pub ld_reg: bool,
    /// Load the condition codes.
    pub ld_cc: bool,
    /// Load PC.
    pub ld_pc: bool,

    /// Gate PC onto the bus.
    pub gate_pc: bool,
    /// Gate MDR onto the bus.
    pub gate_mdr: bool,
    /// Gate the ALU onto the bus.
    pub gate_alu: bool,
    /// Gate the MAR mux onto the bus.
    pub gate_marmux: bool,
    /// Gate the shifter onto the bus.
    pub gate_shf: bool,

    /// PC input select.
    pub pcmux: PcMux,
    /// Destination register select.
    pub drmux: DrMux,
    /// First source register select.
    pub sr1mux: Sr1Mux,
    /// Address adder base select.
    pub addr1mux: Addr1Mux,
    /// Address adder offset select.
    pub addr2mux: Addr2Mux,
    /// MAR mux select.
    pub marmux: MarMux,
    /// ALU operation.
    pub aluk: AluOp,

    /// Memory enable.
    pub mio_en: bool,
    /// Memory direction.
    pub r_w: MemDirection,
    /// Memory width.
    pub data_size: DataSize,
    /// Shift the address adder offset left by one.
    pub lshf1: bool,
}

/// A selector decoded to a value the datapath does not define.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReservedField {
    /// Control field name.
    pub field: &'static str,
    /// Raw value.
    pub value: u8,
}

impl ControlWord {
    /// Decodes a row of raw control bits.
    ///
    /// # Arguments
    ///
    /// * `raw` - Control bits in microprogram order, `IRD` first, `LSHF1` last.
    ///
    /// # Returns
    ///
    /// The decoded word, or the first selector holding a reserved value.
    pub fn from_bits(raw: &[bool; CONTROL_STORE_BITS]) -> Result<Self, ReservedField> {
        let mut fields = Fields { raw, pos: 0 };

        let ird = fields.flag();
        let cond = match fields.take(2) {
            0 => Cond::Unconditional,
            1 => Cond::MemoryReady,
            2 => Cond::Branch,
            _ => Cond::AddressingMode,
        };
        let j = fields.take(6);

        let ld_mar = fields.flag();
        let ld_mdr = fields.flag();
        let ld_ir = fields.flag();
        let ld_ben = fields.flag();
        let ld_reg = fields.flag();
        let ld_cc = fields.flag();
        let ld_pc = fields.flag();

        let gate_pc = fields.flag();
        let gate_mdr = fields.flag();
        let gate_alu = fields.flag();
        let gate_marmux = fields.flag();
        let gate_shf = fields.flag();

        let pcmux = match fields.take(2) {
            0 => PcMux::Increment,
            1 => PcMux::Bus,
            2 => PcMux::Adder,
            value => {
                return Err(ReservedField {
                    field: "PCMUX",
                    value,
                });
            }
        };
        let drmux = if fields.flag() { DrMux::R7 } else { DrMux::Ir11_9 };
        let sr1mux = if fields.flag() {
            Sr1Mux::Ir8_6
        } else {
            Sr1Mux::Ir11_9
        };
        let addr1mux = if fields.flag() {
            Addr1Mux::BaseR
        } else {
            Addr1Mux::Pc
        };
        let addr2mux = match fields.take(2) {
            0 => Addr2Mux::Zero,
            1 => Addr2Mux::Offset6,
            2 => Addr2Mux::PcOffset9,
            _ => Addr2Mux::PcOffset11,
        };
        let marmux = if fields.flag() {
            MarMux::Adder
        } else {
            MarMux::TrapVector
        };
        let aluk = match fields.take(2) {
            0 => AluOp::Add,
            1 => AluOp::And,
            2 => AluOp::Xor,
            _ => AluOp::PassA,
        };

        let mio_en = fields.flag();
        let r_w = if fields.flag() {
            MemDirection::Write
        } else {
            MemDirection::Read
        };
        let data_size = if fields.flag() {
            DataSize::Word
        } else {
            DataSize::Byte
        };
        let lshf1 = fields.flag();

        Ok(Self {
            ird,
            cond,
            j,
            ld_mar,
            ld_mdr,
            ld_ir,
            ld_ben,
            ld_reg,
            ld_cc,
            ld_pc,
            gate_pc,
            gate_mdr,
            gate_alu,
            gate_marmux,
            gate_shf,
            pcmux,
            drmux,
            sr1mux,
            addr1mux,
            addr2mux,
            marmux,
            aluk,
            mio_en,
            r_w,
            data_size,
            lshf1,
        })
    }

    /// Returns true if any register latches the bus value this cycle.
    ///
    /// MDR only reads the bus when memory is disabled, and PC only when `PCMUX`
    /// selects the bus.
    pub const fn loads_from_bus(&self) -> bool {
        self.ld_mar
            || self.ld_ir
            || self.ld_cc
            || self.ld_reg
            || (self.ld_mdr && !self.mio_en)
            || (self.ld_pc && matches!(self.pcmux, PcMux::Bus))
    }
}

/// Sequential reader over a row of raw bits.
struct Fields<'a> {
    raw: &'a [bool; CONTROL_STORE_BITS],
    pos: usize,
}

impl Fields<'_> {
    fn flag(&mut self) -> bool {
        let bit = self.raw[self.pos];
        self.pos += 1;
        bit
    }

    /// Reads `width` bits, most significant first.
    fn take(&mut self, width: usize) -> u8 {
        (0..width).fold(0, |acc, _| (acc << 1) | u8::from(self.flag()))
    }
}
