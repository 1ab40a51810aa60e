//! Tests for SID register write capture and snapshots.
//!
//! Tests cover:
//! - Exactly one event per store inside `$D400-$D41C`, none outside
//! - Event frame, cycle, address and value
//! - Store order preserved with no coalescing
//! - Replaying a frame's events onto the previous snapshot

use sid6502::{CallOutcome, Cpu, FrameSnapshot, RegisterWrite, SENTINEL_RETURN, SID_BASE};

/// Helper function to create a CPU with code loaded at 0x1000
fn setup_cpu(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.load(0x1000, program).unwrap();
    cpu.reset(0x1000, 0, 0, 0);
    cpu
}

// ========== Single Store Scenario ==========

#[test]
fn test_minimal_program_emits_one_event() {
    // LDA #$00 / STA $D400 / RTS
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0x8D, 0x00, 0xD4, 0x60]);

    let outcome = cpu.run_subroutine();

    assert_eq!(outcome, CallOutcome::Returned { instructions: 3 });
    assert_eq!(cpu.pc(), SENTINEL_RETURN);
    assert_eq!(
        cpu.writes(),
        &[RegisterWrite {
            frame: 0,
            cycle: 2,
            address: 0xD400,
            value: 0x00
        }]
    );
    assert_eq!(cpu.cycles(), 2 + 4 + 6);
}

// ========== Window Edges ==========

#[test]
fn test_window_first_and_last_byte() {
    // LDA #$5A / STA $D400 / STA $D41C / RTS
    let mut cpu = setup_cpu(&[0xA9, 0x5A, 0x8D, 0x00, 0xD4, 0x8D, 0x1C, 0xD4, 0x60]);
    cpu.set_frame(3);

    assert!(cpu.run_subroutine().returned());

    let writes = cpu.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].address, 0xD400);
    assert_eq!(writes[0].register(), 0);
    assert_eq!(writes[1].address, 0xD41C);
    assert_eq!(writes[1].register(), 28);
    assert!(writes.iter().all(|w| w.frame == 3 && w.value == 0x5A));
    assert_eq!(writes[1].cycle, 6);
}

#[test]
fn test_just_outside_window_emits_nothing() {
    // LDA #$5A / STA $D3FF / STA $D41D / RTS
    let mut cpu = setup_cpu(&[0xA9, 0x5A, 0x8D, 0xFF, 0xD3, 0x8D, 0x1D, 0xD4, 0x60]);

    assert!(cpu.run_subroutine().returned());

    assert!(cpu.writes().is_empty());
    assert_eq!(cpu.peek(0xD3FF), 0x5A);
    assert_eq!(cpu.peek(0xD41D), 0x5A);
}

#[test]
fn test_indexed_and_indirect_stores_are_captured() {
    // LDX #$04 / LDY #$01 / LDA #$21 / STA $D400,X / STY $D40B
    // STA ($FB),Y with ($FB) = $D411 / RTS
    let mut cpu = setup_cpu(&[
        0xA2, 0x04, 0xA0, 0x01, 0xA9, 0x21, 0x9D, 0x00, 0xD4, 0x8C, 0x0B, 0xD4, 0x91, 0xFB,
        0x60,
    ]);
    cpu.poke(0x00FB, 0x11);
    cpu.poke(0x00FC, 0xD4);

    assert!(cpu.run_subroutine().returned());

    let addresses: Vec<u16> = cpu.writes().iter().map(|w| w.address).collect();
    assert_eq!(addresses, vec![0xD404, 0xD40B, 0xD412]);
}

#[test]
fn test_read_modify_write_emits_one_event() {
    // INC $D418 / RTS
    let mut cpu = setup_cpu(&[0xEE, 0x18, 0xD4, 0x60]);
    cpu.poke(0xD418, 0x0E);

    assert!(cpu.run_subroutine().returned());

    assert_eq!(cpu.writes().len(), 1);
    assert_eq!(cpu.writes()[0].value, 0x0F);
    assert_eq!(cpu.snapshot().filter.volume(), 0x0F);
}

// ========== Ordering ==========

#[test]
fn test_repeated_stores_are_not_coalesced() {
    // LDA #$40 / STA $D404 / LDA #$41 / STA $D404 / RTS
    let mut cpu = setup_cpu(&[0xA9, 0x40, 0x8D, 0x04, 0xD4, 0xA9, 0x41, 0x8D, 0x04, 0xD4, 0x60]);

    assert!(cpu.run_subroutine().returned());

    let values: Vec<u8> = cpu.writes().iter().map(|w| w.value).collect();
    assert_eq!(values, vec![0x40, 0x41]);
    assert!(cpu.writes()[0].cycle < cpu.writes()[1].cycle);
}

#[test]
fn test_take_writes_clears_log() {
    let mut cpu = setup_cpu(&[0x8D, 0x00, 0xD4, 0x60]);
    assert!(cpu.run_subroutine().returned());

    assert_eq!(cpu.take_writes().len(), 1);
    assert!(cpu.writes().is_empty());
}

// ========== Snapshots ==========

#[test]
fn test_snapshot_decodes_registers() {
    let mut cpu = Cpu::new();
    let registers = [
        (0xD400, 0x34),
        (0xD401, 0x12),
        (0xD402, 0xFF),
        (0xD403, 0xF8),
        (0xD404, 0x41),
        (0xD405, 0x09),
        (0xD406, 0xA0),
        (0xD415, 0x07),
        (0xD416, 0xFF),
        (0xD417, 0xF1),
        (0xD418, 0x1F),
    ];
    for (address, value) in registers {
        cpu.poke(address, value);
    }

    let snapshot = cpu.snapshot();
    let voice = snapshot.voices[0];
    assert_eq!(voice.frequency, 0x1234);
    assert_eq!(voice.pulse_width, 0x08FF);
    assert!(voice.gate());
    assert_eq!(voice.waveform(), 0x4);
    assert_eq!(voice.attack_decay, 0x09);
    assert_eq!(voice.sustain_release, 0xA0);
    assert_eq!(snapshot.filter.cutoff, 0x07FF);
    assert_eq!(snapshot.filter.resonance_routing, 0xF1);
    assert_eq!(snapshot.filter.volume(), 0x0F);
    assert_eq!(snapshot.registers()[0x18], 0x1F);
}

#[test]
fn test_replay_reproduces_post_frame_snapshot() {
    // Voice 3 frequency from a table indexed by the frame counter at $FB
    // LDX $FB / LDA $1100,X / STA $D40E / LDA #$21 / STA $D412
    // LDA #$20 / STA $D412 / INC $FB / RTS
    let mut cpu = setup_cpu(&[
        0xA6, 0xFB, 0xBD, 0x00, 0x11, 0x8D, 0x0E, 0xD4, 0xA9, 0x21, 0x8D, 0x12, 0xD4, 0xA9, 0x20,
        0x8D, 0x12, 0xD4, 0xE6, 0xFB, 0x60,
    ]);
    cpu.load(0x1100, &[0x10, 0x20, 0x30, 0x40]).unwrap();

    for frame in 0..4 {
        let before = cpu.snapshot();
        cpu.set_frame(frame);
        cpu.clear_writes();

        assert!(cpu.call(0x1000, 0, 0, 0).returned());

        let after = cpu.snapshot();
        assert_eq!(before.replay(cpu.writes()), after);
        assert_eq!(after.voices[2].frequency & 0x00FF, 0x10 * (frame as u16 + 1));
        assert_eq!(after.voices[2].control, 0x20);
    }
}

#[test]
fn test_default_snapshot_is_silent() {
    let snapshot = FrameSnapshot::default();
    assert_eq!(snapshot.filter.volume(), 0);
    assert!(snapshot.voices.iter().all(|v| !v.gate()));
    assert_eq!(snapshot, Cpu::new().snapshot());
}

#[test]
fn test_sid_base_constant() {
    assert_eq!(SID_BASE, 0xD400);
}
