//! # Player Session
//!
//! [`Player`] drives a loaded player routine the way the C64 does: the init
//! routine once with the song number in A, then the play routine once per
//! frame. Each frame yields a [`FrameTrace`] holding the register writes made
//! during that frame and the decoded register window afterwards.
//!
//! ```
//! use sid6502::{EmulatorConfig, Player};
//!
//! // init: RTS; play: INC $D400 / RTS
//! let program = [0x60, 0xEE, 0x00, 0xD4, 0x60];
//! let mut player =
//!     Player::new(EmulatorConfig::default(), &program, 0x1000, 0x1000, 0x1001).unwrap();
//!
//! assert!(player.init(0).returned());
//! let frames = player.run_frames(3);
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[2].frame, 2);
//! assert_eq!(frames[2].writes[0].value, 3);
//! ```

use log::{debug, info};

use crate::{CallOutcome, Cpu, EmulatorConfig, Error, FrameSnapshot, RegisterWrite};

const PROCESSOR_PORT: u16 = 0x0001;
const KERNAL_IRQ_VECTOR: u16 = 0x0314;
const HARDWARE_IRQ_VECTOR: u16 = 0xFFFE;

/// Everything one call of the play routine produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTrace {
    /// Frame number stamped onto `writes`.
    pub frame: u32,
    /// How the play routine finished.
    pub outcome: CallOutcome,
    /// Register writes in store order.
    pub writes: Vec<RegisterWrite>,
    /// Register window after the frame.
    pub snapshot: FrameSnapshot,
}

/// An init-once / play-per-frame session over a [`Cpu`].
#[derive(Debug, Clone)]
pub struct Player {
    cpu: Cpu,
    init_address: u16,
    /// Play address as given; zero means "read the IRQ vector after init"
    requested_play_address: u16,
    play_address: u16,
    frame: u32,
}

impl Player {
    /// Loads `program` at `load_address` and seeds the bank register.
    ///
    /// A `play_address` of zero means the init routine installs an interrupt
    /// handler; the play address is then taken from the IRQ vector after
    /// [`Player::init`].
    pub fn new(
        config: EmulatorConfig,
        program: &[u8],
        load_address: u16,
        init_address: u16,
        play_address: u16,
    ) -> Result<Self, Error> {
        let mut cpu = Cpu::with_config(config);
        cpu.load(load_address, program)?;
        if let Some(bank) = cpu.config().bank_config {
            cpu.poke(PROCESSOR_PORT, bank);
        }

        info!(
            "player loaded at ${:04X}, init ${:04X}, play ${:04X}",
            load_address, init_address, play_address
        );

        Ok(Self {
            cpu,
            init_address,
            requested_play_address: play_address,
            play_address,
            frame: 0,
        })
    }

    /// Runs the init routine for `song` (0-based, passed in A).
    ///
    /// Init writes are stamped with frame 0 and left in the CPU's write log.
    /// The frame counter restarts at 0. A zero play address is resolved again
    /// from the IRQ vector after every init, since each song may install its
    /// own handler.
    pub fn init(&mut self, song: u8) -> CallOutcome {
        self.frame = 0;
        self.cpu.set_frame(0);
        self.cpu.clear_writes();

        let outcome = self.cpu.call(self.init_address, song, 0, 0);

        if self.requested_play_address == 0 {
            self.play_address = self.irq_vector();
            debug!("play address taken from IRQ vector: ${:04X}", self.play_address);
        }

        outcome
    }

    /// Runs the play routine once and returns what it wrote.
    pub fn play_frame(&mut self) -> FrameTrace {
        let frame = self.frame;
        self.cpu.set_frame(frame);
        self.cpu.clear_writes();

        let outcome = self.cpu.call(self.play_address, 0, 0, 0);
        self.frame = self.frame.wrapping_add(1);

        FrameTrace {
            frame,
            outcome,
            writes: self.cpu.take_writes(),
            snapshot: self.cpu.snapshot(),
        }
    }

    /// Plays up to `count` frames, stopping after the first one whose play
    /// routine did not return.
    pub fn run_frames(&mut self, count: usize) -> Vec<FrameTrace> {
        let mut frames = Vec::with_capacity(count);
        for _ in 0..count {
            let trace = self.play_frame();
            let returned = trace.outcome.returned();
            frames.push(trace);
            if !returned {
                break;
            }
        }
        frames
    }

    /// Number of the next frame to be played.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn init_address(&self) -> u16 {
        self.init_address
    }

    pub fn play_address(&self) -> u16 {
        self.play_address
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Reads the IRQ vector that is visible with the current banking: the
    /// KERNAL's RAM vector when the KERNAL ROM is in, else the hardware one.
    fn irq_vector(&self) -> u16 {
        let vector = if self.cpu.peek(PROCESSOR_PORT) & 0x02 != 0 {
            KERNAL_IRQ_VECTOR
        } else {
            HARDWARE_IRQ_VECTOR
        };
        self.cpu.memory().read_word(vector)
    }
}
