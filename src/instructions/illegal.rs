//! # Undocumented Instructions
//!
//! The NMOS 6502 decodes every opcode byte. The 105 bytes outside the
//! documented set do real work and player routines use several of them, so
//! they are executed rather than rejected.
//!
//! ## Combined read-modify-write
//!
//! - SLO: ASL memory, then ORA
//! - RLA: ROL memory, then AND
//! - SRE: LSR memory, then EOR
//! - RRA: ROR memory, then ADC
//! - DCP: DEC memory, then CMP
//! - ISC: INC memory, then SBC
//!
//! ## Loads and stores
//!
//! - LAX: load A and X
//! - SAX: store A & X
//! - LAS: A, X and SP = memory & SP
//!
//! ## Immediate
//!
//! - ANC, ALR, ARR, SBX
//!
//! ## Unstable
//!
//! XAA and LXA mix the accumulator with an analog constant that varies
//! between chips; `0xEE` is used here. SHA, SHX, SHY and TAS store a value
//! ANDed with the high byte of the base address plus one, and when indexing
//! crosses a page the stored value replaces the high byte of the target.

use super::alu::{add_with_carry, compare, subtract_with_carry};
use super::shifts::{asl, lsr, rol, ror};
use super::Instruction;
use crate::{AddressingMode, Cpu, StepOutcome};

/// Chip-dependent constant ORed into A by XAA and LXA.
const UNSTABLE_MAGIC: u8 = 0xEE;

pub(crate) fn execute_slo(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.modify(ins, asl);
    cpu.a |= value;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_rla(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.modify(ins, rol);
    cpu.a &= value;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_sre(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.modify(ins, lsr);
    cpu.a ^= value;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_rra(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.modify(ins, ror);
    add_with_carry(cpu, value);
    StepOutcome::Continue
}

pub(crate) fn execute_dcp(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.modify(ins, |_, value| value.wrapping_sub(1));
    let register = cpu.a;
    compare(cpu, register, value);
    StepOutcome::Continue
}

pub(crate) fn execute_isc(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.modify(ins, |_, value| value.wrapping_add(1));
    subtract_with_carry(cpu, value);
    StepOutcome::Continue
}

pub(crate) fn execute_lax(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    cpu.a = value;
    cpu.x = value;
    cpu.status.set_nz(value);
    StepOutcome::Continue
}

pub(crate) fn execute_sax(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let addr = cpu.effective_address(ins);
    cpu.write(addr, cpu.a & cpu.x);
    StepOutcome::Continue
}

pub(crate) fn execute_las(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins) & cpu.sp;
    cpu.a = value;
    cpu.x = value;
    cpu.sp = value;
    cpu.status.set_nz(value);
    StepOutcome::Continue
}

/// ANC: AND immediate, then copy N into C.
pub(crate) fn execute_anc(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    cpu.a &= value;
    cpu.status.set_nz(cpu.a);
    let negative = cpu.status.negative();
    cpu.status.set_carry(negative);
    StepOutcome::Continue
}

/// ALR: AND immediate, then LSR A.
pub(crate) fn execute_alr(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins) & cpu.a;
    cpu.a = lsr(cpu, value);
    StepOutcome::Continue
}

/// ARR: AND immediate, then ROR A with ADC-like flag behaviour.
///
/// In binary mode C is bit 6 of the result and V is bit 6 XOR bit 5. In
/// decimal mode each nibble of the ANDed value gets a BCD fix-up.
pub(crate) fn execute_arr(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let and = cpu.read_operand(ins) & cpu.a;
    let carry_in = cpu.status.carry_bit();
    let mut result = (and >> 1) | (carry_in << 7);

    if !cpu.status.decimal() {
        cpu.status.set_nz(result);
        cpu.status.set_carry(result & 0x40 != 0);
        cpu.status
            .set_overflow(((result >> 6) ^ (result >> 5)) & 0x01 != 0);
        cpu.a = result;
        return StepOutcome::Continue;
    }

    cpu.status.set_negative(carry_in != 0);
    cpu.status.set_zero(result == 0);
    cpu.status.set_overflow((and ^ result) & 0x40 != 0);

    if (and & 0x0F) + (and & 0x01) > 0x05 {
        result = (result & 0xF0) | (result.wrapping_add(0x06) & 0x0F);
    }
    if (and as u16 & 0xF0) + (and as u16 & 0x10) > 0x50 {
        result = (result & 0x0F) | (result.wrapping_add(0x60) & 0xF0);
        cpu.status.set_carry(true);
    } else {
        cpu.status.set_carry(false);
    }
    cpu.a = result;
    StepOutcome::Continue
}

/// SBX: X = (A & X) - immediate, without borrow; C as for CMP.
pub(crate) fn execute_sbx(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    let and = cpu.a & cpu.x;
    cpu.status.set_carry(and >= value);
    cpu.x = and.wrapping_sub(value);
    cpu.status.set_nz(cpu.x);
    StepOutcome::Continue
}

pub(crate) fn execute_xaa(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    cpu.a = (cpu.a | UNSTABLE_MAGIC) & cpu.x & value;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_lxa(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = (cpu.a | UNSTABLE_MAGIC) & cpu.read_operand(ins);
    cpu.a = value;
    cpu.x = value;
    cpu.status.set_nz(value);
    StepOutcome::Continue
}

pub(crate) fn execute_sha(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.a & cpu.x;
    store_high_and(cpu, ins, value);
    StepOutcome::Continue
}

pub(crate) fn execute_shx(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.x;
    store_high_and(cpu, ins, value);
    StepOutcome::Continue
}

pub(crate) fn execute_shy(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.y;
    store_high_and(cpu, ins, value);
    StepOutcome::Continue
}

/// TAS: SP = A & X, then store like SHA.
pub(crate) fn execute_tas(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.sp = cpu.a & cpu.x;
    let value = cpu.sp;
    store_high_and(cpu, ins, value);
    StepOutcome::Continue
}

/// Stores `value & (H + 1)` where H is the high byte of the unindexed base.
fn store_high_and(cpu: &mut Cpu, ins: &Instruction, value: u8) {
    let operand = cpu.resolve(ins);
    let index = match ins.metadata.addressing_mode {
        AddressingMode::AbsoluteX => cpu.x,
        _ => cpu.y,
    };
    let base = operand.address.wrapping_sub(index as u16);
    let stored = value & ((base >> 8) as u8).wrapping_add(1);

    let addr = if operand.page_crossed {
        ((stored as u16) << 8) | (operand.address & 0x00FF)
    } else {
        operand.address
    };
    cpu.write(addr, stored);
}

#[cfg(test)]
mod tests {
    use crate::Cpu;

    fn run(program: &[u8], a: u8, x: u8, y: u8) -> Cpu {
        let mut cpu = Cpu::new();
        cpu.load(0x1000, program).unwrap();
        cpu.reset(0x1000, a, x, y);
        cpu.step();
        cpu
    }

    #[test]
    fn test_lax_loads_both_registers() {
        let mut cpu = Cpu::new();
        cpu.poke(0x0010, 0x80);
        cpu.load(0x1000, &[0xA7, 0x10]).unwrap();
        cpu.reset(0x1000, 0, 0, 0);
        cpu.step();
        assert_eq!(cpu.a(), 0x80);
        assert_eq!(cpu.x(), 0x80);
        assert!(cpu.flag_n());
        assert_eq!(cpu.cycles(), 3);
    }

    #[test]
    fn test_sax_stores_and_without_flags() {
        let cpu = run(&[0x87, 0x20], 0xF0, 0x3C, 0);
        assert_eq!(cpu.peek(0x0020), 0x30);
        assert!(!cpu.flag_z());
        assert!(!cpu.flag_n());
    }

    #[test]
    fn test_dcp_compares_decremented_value() {
        let mut cpu = Cpu::new();
        cpu.poke(0x0030, 0x11);
        cpu.load(0x1000, &[0xC7, 0x30]).unwrap();
        cpu.reset(0x1000, 0x10, 0, 0);
        cpu.step();
        assert_eq!(cpu.peek(0x0030), 0x10);
        assert!(cpu.flag_z());
        assert!(cpu.flag_c());
        assert_eq!(cpu.a(), 0x10);
    }

    #[test]
    fn test_isc_subtracts_incremented_value() {
        let mut cpu = Cpu::new();
        cpu.poke(0x0030, 0x0F);
        cpu.load(0x1000, &[0x38, 0xE7, 0x30]).unwrap();
        cpu.reset(0x1000, 0x20, 0, 0);
        cpu.step();
        cpu.step();
        assert_eq!(cpu.peek(0x0030), 0x10);
        assert_eq!(cpu.a(), 0x10);
        assert!(cpu.flag_c());
    }

    #[test]
    fn test_slo_shifts_then_ors() {
        let mut cpu = Cpu::new();
        cpu.poke(0x0040, 0x81);
        cpu.load(0x1000, &[0x07, 0x40]).unwrap();
        cpu.reset(0x1000, 0x01, 0, 0);
        cpu.step();
        assert_eq!(cpu.peek(0x0040), 0x02);
        assert_eq!(cpu.a(), 0x03);
        assert!(cpu.flag_c());
        assert_eq!(cpu.cycles(), 5);
    }

    #[test]
    fn test_anc_copies_negative_to_carry() {
        let cpu = run(&[0x0B, 0x80], 0xFF, 0, 0);
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.flag_n());
        assert!(cpu.flag_c());
    }

    #[test]
    fn test_alr_ands_then_shifts() {
        let cpu = run(&[0x4B, 0x03], 0xFF, 0, 0);
        assert_eq!(cpu.a(), 0x01);
        assert!(cpu.flag_c());
    }

    #[test]
    fn test_arr_binary_flags() {
        // (0xFF & 0xC0) >> 1 = 0x60: C from bit 6, V = bit 6 ^ bit 5 = 0
        let cpu = run(&[0x6B, 0xC0], 0xFF, 0, 0);
        assert_eq!(cpu.a(), 0x60);
        assert!(cpu.flag_c());
        assert!(!cpu.flag_v());
    }

    #[test]
    fn test_sbx_subtracts_from_a_and_x() {
        let cpu = run(&[0xCB, 0x02], 0x0F, 0x07, 0);
        assert_eq!(cpu.x(), 0x05);
        assert!(cpu.flag_c());
        assert_eq!(cpu.a(), 0x0F);
    }

    #[test]
    fn test_lxa_uses_magic_constant() {
        let cpu = run(&[0xAB, 0xFF], 0x00, 0x00, 0);
        assert_eq!(cpu.a(), 0xEE);
        assert_eq!(cpu.x(), 0xEE);
    }

    #[test]
    fn test_shx_masks_with_base_high_byte() {
        // SHX $1200,Y with X = $FF stores $FF & $13
        let cpu = run(&[0x9E, 0x00, 0x12], 0, 0xFF, 0x04);
        assert_eq!(cpu.peek(0x1204), 0x13);
        assert_eq!(cpu.cycles(), 5);
    }

    #[test]
    fn test_shy_page_cross_replaces_high_byte() {
        // SHY $12F0,X with X = $20, Y = $03: $03 & $13 = $03, target $0310
        let cpu = run(&[0x9C, 0xF0, 0x12], 0, 0x20, 0x03);
        assert_eq!(cpu.peek(0x0310), 0x03);
        assert_eq!(cpu.peek(0x1310), 0x00);
    }
}
