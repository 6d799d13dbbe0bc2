//! Instruction disassembler for the LC-3b.
//!
//! Converts a 16-bit instruction into a mnemonic string for trace output and register
//! dumps.
//!
//! # Usage
//!
//! ```
//! use lc3bsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x1283), "add r1, r2, r3");
//! assert_eq!(disassemble(0x14BF), "add r2, r2, #-1");
//! assert_eq!(disassemble(0xF025), "trap x25");
//! ```

use crate::common::bits::{bit, bits, sext};
use crate::isa::opcode::Opcode;

/// Signed decimal rendering of a sign-extended field.
fn imm(value: u16, width: u32) -> i16 {
    sext(bits(value, width - 1, 0), width) as i16
}

/// Disassembles one instruction.
///
/// Unassigned opcodes render as `.fill 0xNNNN`.
pub fn disassemble(ir: u16) -> String {
    let dr = bits(ir, 11, 9);
    let sr1 = bits(ir, 8, 6);

    match Opcode::decode(ir) {
        Opcode::Br => {
            let mut cond = String::new();
            for (n, c) in [(11, 'n'), (10, 'z'), (9, 'p')] {
                if bit(ir, n) {
                    cond.push(c);
                }
            }
            if cond.is_empty() {
                "nop".to_string()
            } else {
                format!("br{cond} #{}", imm(ir, 9))
            }
        }
        op @ (Opcode::Add | Opcode::And | Opcode::Xor) => {
            let name = match op {
                Opcode::Add => "add",
                Opcode::And => "and",
                _ => "xor",
            };
            if !bit(ir, 5) {
                format!("{name} r{dr}, r{sr1}, r{}", bits(ir, 2, 0))
            } else if op == Opcode::Xor && bits(ir, 4, 0) == 0x1F {
                format!("not r{dr}, r{sr1}")
            } else {
                format!("{name} r{dr}, r{sr1}, #{}", imm(ir, 5))
            }
        }
        op @ (Opcode::Ldb | Opcode::Stb | Opcode::Ldw | Opcode::Stw) => {
            let name = match op {
                Opcode::Ldb => "ldb",
                Opcode::Stb => "stb",
                Opcode::Ldw => "ldw",
                _ => "stw",
            };
            format!("{name} r{dr}, r{sr1}, #{}", imm(ir, 6))
        }
        Opcode::Jsr => {
            if bit(ir, 11) {
                format!("jsr #{}", imm(ir, 11))
            } else {
                format!("jsrr r{sr1}")
            }
        }
        Opcode::Jmp if sr1 == 7 => "ret".to_string(),
        Opcode::Jmp => format!("jmp r{sr1}"),
        Opcode::Shf => {
            let amount = bits(ir, 3, 0);
            match bits(ir, 5, 4) {
                0b00 => format!("lshf r{dr}, r{sr1}, #{amount}"),
                0b01 => format!("rshfl r{dr}, r{sr1}, #{amount}"),
                0b11 => format!("rshfa r{dr}, r{sr1}, #{amount}"),
                _ => format!(".fill {ir:#06x}"),
            }
        }
        Opcode::Lea => format!("lea r{dr}, #{}", imm(ir, 9)),
        Opcode::Trap => format!("trap x{:02x}", bits(ir, 7, 0)),
        Opcode::Rti => "rti".to_string(),
        Opcode::Reserved10 | Opcode::Reserved11 => format!(".fill {ir:#06x}"),
    }
}
