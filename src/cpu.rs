//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 processor state,
//! the single store primitive that captures SID register writes, and the
//! execution driver.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: [`Status`] bitfield (NV-BDIZC)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Frame counter**: stamped onto every captured register write
//! - **Memory**: an owned 64KB [`Memory`]
//!
//! ## Execution Model
//!
//! - [`Cpu::step`]: execute one instruction
//! - [`Cpu::run_subroutine`]: call the routine at PC and run until it returns,
//!   halts, or exceeds the instruction ceiling
//!
//! Neither ever panics or returns an error for bad code: every stopping
//! condition is an inspectable value.

use log::{debug, trace};

use crate::instructions::{self, Instruction};
use crate::sid::{self, SID_BASE, SID_REGISTER_COUNT};
use crate::{
    Access, EmulatorConfig, Error, FrameSnapshot, Memory, RegisterWrite, Status, OPCODE_TABLE,
};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address a subroutine "returns" to when called by the driver.
///
/// `run_subroutine` pushes `SENTINEL_RETURN - 1` the way `JSR` would, so the
/// final `RTS` of the routine lands here.
pub const SENTINEL_RETURN: u16 = 0xFFFF;

const PROCESSOR_PORT: u16 = 0x0001;
const RASTER_CONTROL: u16 = 0xD011;
const RASTER_LINE: u16 = 0xD012;

/// KERNAL IRQ handler tails that interrupt-driven players jump to when done.
const KERNAL_IRQ_EXITS: [u16; 2] = [0xEA31, 0xEA81];

/// Why execution stopped without returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaltReason {
    /// One of the opcodes that lock up an NMOS 6502.
    Jam(u8),
    /// `BRK`: player code has no interrupt vectors to service it.
    Break,
}

impl std::fmt::Display for HaltReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HaltReason::Jam(opcode) => write!(f, "JAM opcode 0x{:02X}", opcode),
            HaltReason::Break => write!(f, "BRK"),
        }
    }
}

/// Result of executing a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction completed; execution can continue.
    Continue,
    /// An `RTS` (or a final `RTI`) popped the sentinel return address.
    Returned,
    /// The opcode halts the processor. PC is left on the halting opcode.
    Halted(HaltReason),
}

/// Result of running one subroutine call to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// The routine returned to the sentinel address.
    Returned {
        /// Instructions executed.
        instructions: u64,
    },
    /// The routine hit a halting opcode.
    Halted {
        /// Halting opcode class.
        reason: HaltReason,
        /// Instructions executed, including the halting one.
        instructions: u64,
    },
    /// The instruction ceiling tripped before the routine returned.
    TimedOut {
        /// Instructions executed (equal to the configured ceiling).
        instructions: u64,
    },
}

impl CallOutcome {
    /// True if the routine returned normally.
    pub fn returned(&self) -> bool {
        matches!(self, CallOutcome::Returned { .. })
    }

    /// Number of instructions executed during the call.
    pub fn instructions(&self) -> u64 {
        match *self {
            CallOutcome::Returned { instructions }
            | CallOutcome::Halted { instructions, .. }
            | CallOutcome::TimedOut { instructions } => instructions,
        }
    }
}

/// 6502 CPU state and execution context.
///
/// Each instance exclusively owns its registers, memory and write log.
///
/// # Examples
///
/// ```
/// use sid6502::{CallOutcome, Cpu, SENTINEL_RETURN};
///
/// let mut cpu = Cpu::new();
/// // INX / RTS
/// cpu.load(0x1000, &[0xE8, 0x60]).unwrap();
///
/// cpu.reset(0x1000, 0x00, 0x41, 0x00);
/// assert_eq!(cpu.run_subroutine(), CallOutcome::Returned { instructions: 2 });
/// assert_eq!(cpu.x(), 0x42);
/// assert_eq!(cpu.pc(), SENTINEL_RETURN);
/// assert_eq!(cpu.cycles(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: Status,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Cycle count at the start of the instruction being executed
    instruction_cycle: u64,

    /// Frame number stamped onto register writes
    frame: u32,

    /// Stack pointer the sentinel return pops back to, while a call is active
    pub(crate) sentinel_sp: Option<u8>,

    /// Captured SID register writes, in store order
    writes: Vec<RegisterWrite>,

    pub(crate) memory: Memory,

    config: EmulatorConfig,
}

impl Cpu {
    /// Creates a CPU with zeroed memory and the default configuration.
    pub fn new() -> Self {
        Self::with_config(EmulatorConfig::default())
    }

    /// Creates a CPU with zeroed memory and the given configuration.
    ///
    /// Registers start as after [`Cpu::reset`] with PC = 0.
    pub fn with_config(config: EmulatorConfig) -> Self {
        let mut memory = Memory::new();
        memory.set_tracking(config.track_access);

        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            status: Status::default(),
            cycles: 0,
            instruction_cycle: 0,
            frame: 0,
            sentinel_sp: None,
            writes: Vec::new(),
            memory,
            config,
        }
    }

    /// Returns the configuration this CPU was created with.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    // ========== Memory Access ==========

    /// Copies a program image into memory at `address`.
    pub fn load(&mut self, address: u16, bytes: &[u8]) -> Result<(), Error> {
        self.memory.load(address, bytes)?;
        debug!(
            "loaded {} bytes at ${:04X}-${:04X}",
            bytes.len(),
            address,
            address.wrapping_add(bytes.len().saturating_sub(1) as u16)
        );
        Ok(())
    }

    /// Reads a byte without recording an access.
    pub fn peek(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte directly into memory.
    ///
    /// This bypasses the store primitive: no register write event is captured
    /// and no access is recorded. Use it for pre-seeding memory.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Returns a reference to the memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Returns a mutable reference to the memory (raw access, no events).
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Returns the recorded access flags for `addr`.
    pub fn access(&self, addr: u16) -> Access {
        self.memory.access(addr)
    }

    /// Returns the per-address access map, if tracking is enabled.
    pub fn access_map(&self) -> Option<&[Access]> {
        self.memory.access_map()
    }

    /// Clears the access map.
    pub fn clear_access_map(&mut self) {
        self.memory.clear_access();
    }

    /// Fetches an opcode or operand byte.
    pub(crate) fn fetch(&mut self, addr: u16) -> u8 {
        self.memory.mark(addr, Access::EXECUTE);
        self.memory.read(addr)
    }

    /// Fetches a little-endian operand word.
    pub(crate) fn fetch_word(&mut self, addr: u16) -> u16 {
        let lo = self.fetch(addr) as u16;
        let hi = self.fetch(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a data byte.
    pub(crate) fn read(&mut self, addr: u16) -> u8 {
        self.memory.mark(addr, Access::READ);
        self.memory.read(addr)
    }

    /// Stores a byte. Every instruction store goes through here.
    ///
    /// Stores into the SID register window are persisted and also captured as
    /// a [`RegisterWrite`] stamped with the current frame and the cycle count
    /// at the start of the storing instruction.
    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        self.memory.mark(addr, Access::WRITE);
        self.memory.write(addr, value);

        if sid::is_sid_register(addr) {
            self.writes.push(RegisterWrite {
                frame: self.frame,
                cycle: self.instruction_cycle,
                address: addr,
                value,
            });
        }
    }

    // ========== Stack ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word high byte first, as `JSR` does.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a word low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Execution ==========

    /// Resets the registers for a subroutine call.
    ///
    /// PC is set to `pc`, A/X/Y to the given values (A carries the song number
    /// for init routines), SP to 0xFF and the status register to just the
    /// always-one bit. Memory, cycles and the write log are untouched.
    pub fn reset(&mut self, pc: u16, a: u8, x: u8, y: u8) {
        self.pc = pc;
        self.a = a;
        self.x = x;
        self.y = y;
        self.sp = 0xFF;
        self.status = Status::default();
        self.sentinel_sp = None;
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs fetch, decode through [`OPCODE_TABLE`], execute and cycle
    /// accounting (base cycles plus page-crossing and branch penalties), then
    /// advances the raster registers when raster simulation is enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use sid6502::{Cpu, HaltReason, StepOutcome};
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.load(0x1000, &[0xEA, 0x02]).unwrap(); // NOP / JAM
    /// cpu.reset(0x1000, 0, 0, 0);
    ///
    /// assert_eq!(cpu.step(), StepOutcome::Continue);
    /// assert_eq!(cpu.step(), StepOutcome::Halted(HaltReason::Jam(0x02)));
    /// assert_eq!(cpu.pc(), 0x1001);
    /// ```
    pub fn step(&mut self) -> StepOutcome {
        let address = self.pc;
        let opcode = self.fetch(address);
        let ins = Instruction {
            address,
            opcode,
            metadata: &OPCODE_TABLE[opcode as usize],
        };

        self.instruction_cycle = self.cycles;
        self.cycles += ins.metadata.base_cycles as u64;
        self.pc = ins.next_address();

        let outcome = instructions::execute(self, &ins);

        match outcome {
            StepOutcome::Halted(reason) => {
                self.pc = address;
                debug!("halted at ${:04X}: {}", address, reason);
            }
            StepOutcome::Continue | StepOutcome::Returned => {
                if self.config.simulate_raster {
                    self.advance_raster();
                }
            }
        }

        outcome
    }

    /// Calls the routine at the current PC and runs it to completion.
    ///
    /// Pushes the sentinel return address, then steps until the routine
    /// returns to it, halts, or `instruction_limit` instructions have run.
    /// With `kernal_irq_exits` enabled, reaching a KERNAL IRQ exit while the
    /// KERNAL is banked in also counts as a return (PC is left there).
    pub fn run_subroutine(&mut self) -> CallOutcome {
        let entry = self.pc;
        let base_sp = self.sp;
        let start_cycles = self.cycles;

        self.push_word(SENTINEL_RETURN.wrapping_sub(1));
        self.sentinel_sp = Some(base_sp);

        let limit = self.config.instruction_limit;
        let mut instructions = 0;
        let outcome = loop {
            if instructions >= limit {
                break CallOutcome::TimedOut { instructions };
            }
            if self.at_kernal_exit() {
                break CallOutcome::Returned { instructions };
            }

            let step = self.step();
            instructions += 1;
            match step {
                StepOutcome::Continue => {}
                StepOutcome::Returned => break CallOutcome::Returned { instructions },
                StepOutcome::Halted(reason) => {
                    break CallOutcome::Halted {
                        reason,
                        instructions,
                    }
                }
            }
        };
        self.sentinel_sp = None;

        match outcome {
            CallOutcome::Returned { .. } => trace!(
                "call ${:04X} returned after {} instructions, {} cycles",
                entry,
                instructions,
                self.cycles - start_cycles
            ),
            CallOutcome::Halted { reason, .. } => {
                debug!("call ${:04X} halted: {}", entry, reason)
            }
            CallOutcome::TimedOut { .. } => debug!(
                "call ${:04X} did not return within {} instructions (PC=${:04X})",
                entry, limit, self.pc
            ),
        }

        outcome
    }

    /// Resets the registers and calls `address` (see [`Cpu::reset`]).
    pub fn call(&mut self, address: u16, a: u8, x: u8, y: u8) -> CallOutcome {
        self.reset(address, a, x, y);
        self.run_subroutine()
    }

    /// True when an `RTS`/`RTI` has just unwound the driver's sentinel frame.
    pub(crate) fn returned_to_sentinel(&self) -> bool {
        self.sentinel_sp == Some(self.sp) && self.pc == SENTINEL_RETURN
    }

    fn at_kernal_exit(&self) -> bool {
        self.config.kernal_irq_exits
            && KERNAL_IRQ_EXITS.contains(&self.pc)
            && self.memory.read(PROCESSOR_PORT) & 0x07 != 0x05
    }

    /// Approximates the VIC raster counter: `$D012` counts up once per
    /// instruction and bit 7 of `$D011` is the ninth bit, giving 312 lines.
    fn advance_raster(&mut self) {
        let control = self.memory.read(RASTER_CONTROL);
        let line = self.memory.read(RASTER_LINE).wrapping_add(1);

        if line == 0 || (control & 0x80 != 0 && line >= 0x38) {
            self.memory.write(RASTER_CONTROL, control ^ 0x80);
            self.memory.write(RASTER_LINE, 0);
        } else {
            self.memory.write(RASTER_LINE, line);
        }
    }

    // ========== Register Write Capture ==========

    /// Returns the register writes captured since the log was last cleared.
    pub fn writes(&self) -> &[RegisterWrite] {
        &self.writes
    }

    /// Removes and returns the captured register writes.
    pub fn take_writes(&mut self) -> Vec<RegisterWrite> {
        std::mem::take(&mut self.writes)
    }

    /// Clears the register write log.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Returns the current frame number.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Sets the frame number stamped onto subsequent register writes.
    pub fn set_frame(&mut self, frame: u32) {
        self.frame = frame;
    }

    /// Returns the raw bytes of the SID register window.
    pub fn sid_registers(&self) -> [u8; SID_REGISTER_COUNT] {
        let mut registers = [0u8; SID_REGISTER_COUNT];
        for (offset, register) in registers.iter_mut().enumerate() {
            *register = self.memory.read(SID_BASE + offset as u16);
        }
        registers
    }

    /// Decodes the current SID register window.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::from_registers(self.sid_registers())
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status flags.
    pub fn flags(&self) -> Status {
        self.status
    }

    /// Returns the status register as a packed byte (bit 5 always set).
    pub fn status(&self) -> u8 {
        self.status.to_byte()
    }

    /// Returns the total number of CPU cycles executed.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.negative()
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.overflow()
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.decimal()
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.interrupt_disable()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.carry()
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the status register; bit 5 is forced on and B dropped.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::from_pulled(value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.status.set_carry(value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.status.set_decimal(value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.status.set_overflow(value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.status.set_zero(value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.status.set_negative(value);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
