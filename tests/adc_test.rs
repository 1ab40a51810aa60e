//! Tests for ADC and SBC in binary and decimal mode.
//!
//! Tests cover:
//! - Every binary operand/accumulator/carry combination against a reference
//! - Flag updates (C, Z, V, N)
//! - NMOS decimal mode on valid BCD operands
//! - Cycle counts including page crossing penalties

use proptest::prelude::*;
use sid6502::Cpu;

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> Cpu {
    let mut cpu = Cpu::new();
    cpu.reset(0x8000, 0, 0, 0);
    cpu
}

/// Runs `opcode #operand` once with the given accumulator and carry.
fn run_immediate(cpu: &mut Cpu, opcode: u8, a: u8, operand: u8, carry: bool) {
    cpu.memory_mut().write(0x8000, opcode);
    cpu.memory_mut().write(0x8001, operand);
    cpu.set_pc(0x8000);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step();
}

fn to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

fn from_bcd(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();

    run_immediate(&mut cpu, 0x69, 0x10, 0x05, false);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_absolute_x_page_cross() {
    let mut cpu = setup_cpu();

    // ADC $20F0,X with X = 0x20 reads 0x2110
    cpu.memory_mut().write(0x8000, 0x7D);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2110, 0x01);
    cpu.set_a(0x7F);
    cpu.set_x(0x20);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 5);
}

// ========== Exhaustive Binary Mode ==========

#[test]
fn test_adc_binary_exhaustive() {
    let mut cpu = setup_cpu();

    for a in 0..=255u8 {
        for m in 0..=255u8 {
            for carry in [false, true] {
                run_immediate(&mut cpu, 0x69, a, m, carry);

                let sum = a as u16 + m as u16 + carry as u16;
                let result = sum as u8;
                let overflow = (!(a ^ m) & (a ^ result) & 0x80) != 0;

                assert_eq!(cpu.a(), result, "A {:02X} + {:02X} + {}", a, m, carry);
                assert_eq!(cpu.flag_c(), sum > 0xFF);
                assert_eq!(cpu.flag_v(), overflow);
                assert_eq!(cpu.flag_z(), result == 0);
                assert_eq!(cpu.flag_n(), result & 0x80 != 0);
            }
        }
    }
}

#[test]
fn test_sbc_binary_exhaustive() {
    let mut cpu = setup_cpu();

    for a in 0..=255u8 {
        for m in 0..=255u8 {
            for carry in [false, true] {
                run_immediate(&mut cpu, 0xE9, a, m, carry);

                let diff = a as i16 - m as i16 - (!carry) as i16;
                let result = diff as u8;
                let overflow = ((a ^ m) & (a ^ result) & 0x80) != 0;

                assert_eq!(cpu.a(), result, "A {:02X} - {:02X} carry {}", a, m, carry);
                assert_eq!(cpu.flag_c(), diff >= 0);
                assert_eq!(cpu.flag_v(), overflow);
                assert_eq!(cpu.flag_z(), result == 0);
                assert_eq!(cpu.flag_n(), result & 0x80 != 0);
            }
        }
    }
}

#[test]
fn test_undocumented_sbc_matches_sbc() {
    let mut cpu = setup_cpu();
    let mut reference = setup_cpu();

    for (a, m) in [(0x50, 0x20), (0x00, 0x01), (0x80, 0x7F)] {
        run_immediate(&mut cpu, 0xEB, a, m, true);
        run_immediate(&mut reference, 0xE9, a, m, true);
        assert_eq!(cpu.a(), reference.a());
        assert_eq!(cpu.status(), reference.status());
    }
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_examples() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);

    run_immediate(&mut cpu, 0x69, 0x09, 0x01, false);
    assert_eq!(cpu.a(), 0x10);
    assert!(!cpu.flag_c());

    run_immediate(&mut cpu, 0x69, 0x58, 0x46, true);
    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_examples() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);

    run_immediate(&mut cpu, 0xE9, 0x46, 0x12, true);
    assert_eq!(cpu.a(), 0x34);
    assert!(cpu.flag_c());

    run_immediate(&mut cpu, 0xE9, 0x12, 0x21, true);
    assert_eq!(cpu.a(), 0x91);
    assert!(!cpu.flag_c());
}

proptest! {
    #[test]
    fn prop_adc_decimal_valid_bcd(a in 0u8..100, m in 0u8..100, carry: bool) {
        let mut cpu = setup_cpu();
        cpu.set_flag_d(true);

        run_immediate(&mut cpu, 0x69, to_bcd(a), to_bcd(m), carry);

        let sum = a as u16 + m as u16 + carry as u16;
        prop_assert_eq!(from_bcd(cpu.a()), (sum % 100) as u8);
        prop_assert_eq!(cpu.flag_c(), sum >= 100);
    }

    #[test]
    fn prop_sbc_decimal_valid_bcd(a in 0u8..100, m in 0u8..100, carry: bool) {
        let mut cpu = setup_cpu();
        cpu.set_flag_d(true);

        run_immediate(&mut cpu, 0xE9, to_bcd(a), to_bcd(m), carry);

        let diff = a as i16 - m as i16 - (!carry) as i16;
        let expected = if diff < 0 { diff + 100 } else { diff };
        prop_assert_eq!(from_bcd(cpu.a()), expected as u8);
        prop_assert_eq!(cpu.flag_c(), diff >= 0);
    }
}
