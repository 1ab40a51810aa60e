//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Logical operations
//! - CMP, CPX, CPY: Compare
//! - BIT: Bit test
//!
//! ADC and SBC honour the decimal flag with NMOS semantics. The flags are
//! derived from the binary computation first; the BCD correction only
//! changes the accumulator (and, for ADC, N/V from the half-corrected sum
//! and C from the corrected high digit).

use super::Instruction;
use crate::{Cpu, StepOutcome};

/// Adds `value` and the carry flag to the accumulator.
pub(crate) fn add_with_carry(cpu: &mut Cpu, value: u8) {
    let a = cpu.a as u16;
    let m = value as u16;
    let carry = cpu.status.carry_bit() as u16;
    let binary = a + m + carry;

    if !cpu.status.decimal() {
        let result = binary as u8;
        cpu.status.set_carry(binary > 0xFF);
        // Both operands share a sign the result does not
        cpu.status
            .set_overflow((cpu.a ^ result) & (value ^ result) & 0x80 != 0);
        cpu.status.set_nz(result);
        cpu.a = result;
        return;
    }

    let mut low = (a & 0x0F) + (m & 0x0F) + carry;
    if low > 0x09 {
        low += 0x06;
    }
    let mut result = (low & 0x0F) + (a & 0xF0) + (m & 0xF0);
    if low > 0x0F {
        result += 0x10;
    }

    cpu.status.set_zero(binary & 0xFF == 0);
    cpu.status.set_negative(result & 0x80 != 0);
    cpu.status
        .set_overflow((a ^ result) & 0x80 != 0 && (a ^ m) & 0x80 == 0);

    if (result & 0x1F0) > 0x90 {
        result += 0x60;
    }
    cpu.status.set_carry((result & 0xFF0) > 0xF0);
    cpu.a = result as u8;
}

/// Subtracts `value` and the inverted carry flag from the accumulator.
pub(crate) fn subtract_with_carry(cpu: &mut Cpu, value: u8) {
    let a = cpu.a as u16;
    let m = value as u16;
    let borrow = 1 - cpu.status.carry_bit() as u16;
    let binary = a.wrapping_sub(m).wrapping_sub(borrow);
    let binary_result = binary as u8;

    cpu.status.set_carry(binary < 0x100);
    cpu.status
        .set_overflow((cpu.a ^ binary_result) & (cpu.a ^ value) & 0x80 != 0);
    cpu.status.set_nz(binary_result);

    if !cpu.status.decimal() {
        cpu.a = binary_result;
        return;
    }

    let low = (a & 0x0F).wrapping_sub(m & 0x0F).wrapping_sub(borrow);
    let mut result = if low & 0x10 != 0 {
        (low.wrapping_sub(0x06) & 0x0F) | (a & 0xF0).wrapping_sub(m & 0xF0).wrapping_sub(0x10)
    } else {
        (low & 0x0F) | (a & 0xF0).wrapping_sub(m & 0xF0)
    };
    if result & 0x100 != 0 {
        result = result.wrapping_sub(0x60);
    }
    cpu.a = result as u8;
}

/// Compares `register` with `value`: C = register >= value, N/Z from the difference.
pub(crate) fn compare(cpu: &mut Cpu, register: u8, value: u8) {
    cpu.status.set_carry(register >= value);
    cpu.status.set_nz(register.wrapping_sub(value));
}

pub(crate) fn execute_adc(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    add_with_carry(cpu, value);
    StepOutcome::Continue
}

pub(crate) fn execute_sbc(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    subtract_with_carry(cpu, value);
    StepOutcome::Continue
}

pub(crate) fn execute_and(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    cpu.a &= value;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_ora(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    cpu.a |= value;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_eor(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    cpu.a ^= value;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_cmp(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    let register = cpu.a;
    compare(cpu, register, value);
    StepOutcome::Continue
}

pub(crate) fn execute_cpx(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    let register = cpu.x;
    compare(cpu, register, value);
    StepOutcome::Continue
}

pub(crate) fn execute_cpy(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    let register = cpu.y;
    compare(cpu, register, value);
    StepOutcome::Continue
}

/// BIT: Z from A & M, N and V copied from bits 7 and 6 of M.
pub(crate) fn execute_bit(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let value = cpu.read_operand(ins);
    cpu.status.set_zero(cpu.a & value == 0);
    cpu.status.set_negative(value & 0x80 != 0);
    cpu.status.set_overflow(value & 0x40 != 0);
    StepOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu_with(a: u8, carry: bool, decimal: bool) -> Cpu {
        let mut cpu = Cpu::new();
        cpu.set_a(a);
        cpu.set_flag_c(carry);
        cpu.set_flag_d(decimal);
        cpu
    }

    #[test]
    fn test_binary_add_overflow() {
        let mut cpu = cpu_with(0x50, false, false);
        add_with_carry(&mut cpu, 0x50);
        assert_eq!(cpu.a(), 0xA0);
        assert!(cpu.flag_v());
        assert!(cpu.flag_n());
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_decimal_add() {
        let mut cpu = cpu_with(0x58, false, true);
        add_with_carry(&mut cpu, 0x46);
        assert_eq!(cpu.a(), 0x04);
        assert!(cpu.flag_c());

        let mut cpu = cpu_with(0x99, true, true);
        add_with_carry(&mut cpu, 0x99);
        assert_eq!(cpu.a(), 0x99);
        assert!(cpu.flag_c());
    }

    #[test]
    fn test_decimal_add_zero_flag_from_binary_sum() {
        // 99 + 01 = 00 carry 1, but the binary sum is 0x9A so Z stays clear
        let mut cpu = cpu_with(0x99, false, true);
        add_with_carry(&mut cpu, 0x01);
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.flag_c());
        assert!(!cpu.flag_z());
    }

    #[test]
    fn test_decimal_subtract() {
        let mut cpu = cpu_with(0x50, true, true);
        subtract_with_carry(&mut cpu, 0x25);
        assert_eq!(cpu.a(), 0x25);
        assert!(cpu.flag_c());

        let mut cpu = cpu_with(0x00, true, true);
        subtract_with_carry(&mut cpu, 0x01);
        assert_eq!(cpu.a(), 0x99);
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_compare_does_not_write_back() {
        let mut cpu = cpu_with(0x40, false, false);
        compare(&mut cpu, 0x40, 0x40);
        assert_eq!(cpu.a(), 0x40);
        assert!(cpu.flag_c());
        assert!(cpu.flag_z());

        compare(&mut cpu, 0x10, 0x20);
        assert!(!cpu.flag_c());
        assert!(cpu.flag_n());
    }
}
