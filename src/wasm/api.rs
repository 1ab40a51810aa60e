//! WASM API for the SID player emulator.
//!
//! Provides JavaScript-callable interfaces for loading a player routine,
//! running init and play, and observing SID register writes as they happen.

use crate::{EmulatorConfig, Player, SID_BASE};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Summary of one played frame
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct FrameResult {
    frame: u32,
    returned: bool,
    instructions: u32,
    write_count: u32,
}

#[wasm_bindgen]
impl FrameResult {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// False if the play routine halted or ran past the instruction limit
    #[wasm_bindgen(getter)]
    pub fn returned(&self) -> bool {
        self.returned
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> u32 {
        self.instructions
    }

    #[wasm_bindgen(getter)]
    pub fn write_count(&self) -> u32 {
        self.write_count
    }
}

/// A SID player session for JavaScript.
///
/// `on_write` is called as `on_write(frame, cycle, register, value)` for
/// every register write, in store order, where `register` is the offset into
/// the SID window (0-28).
#[wasm_bindgen]
pub struct SidEmulator {
    player: Player,
    on_write: js_sys::Function,
}

#[wasm_bindgen]
impl SidEmulator {
    /// Load a player routine
    #[wasm_bindgen(constructor)]
    pub fn new(
        program: &[u8],
        load_address: u16,
        init_address: u16,
        play_address: u16,
        on_write: js_sys::Function,
    ) -> Result<SidEmulator, JsError> {
        let player = Player::new(
            EmulatorConfig::default(),
            program,
            load_address,
            init_address,
            play_address,
        )
        .map_err(|e| JsError::new(&e.to_string()))?;

        Ok(SidEmulator { player, on_write })
    }

    /// Run the init routine for a song; returns false if it did not return
    pub fn init(&mut self, song: u8) -> bool {
        let outcome = self.player.init(song);
        let writes = self.player.cpu_mut().take_writes();
        for write in &writes {
            self.notify(write.frame, write.cycle, write.register() as u8, write.value);
        }
        outcome.returned()
    }

    /// Run the play routine once
    pub fn play_frame(&mut self) -> FrameResult {
        let trace = self.player.play_frame();
        for write in &trace.writes {
            self.notify(write.frame, write.cycle, write.register() as u8, write.value);
        }

        FrameResult {
            frame: trace.frame,
            returned: trace.outcome.returned(),
            instructions: trace.outcome.instructions() as u32,
            write_count: trace.writes.len() as u32,
        }
    }

    /// The 29 bytes of the SID register window
    pub fn registers(&self) -> Vec<u8> {
        self.player.cpu().sid_registers().to_vec()
    }

    /// Read a byte of emulated memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.player.cpu().peek(addr)
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 {
        self.player.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn play_address(&self) -> u16 {
        self.player.play_address()
    }

    /// Total CPU cycles executed (as f64 since JS numbers are 53-bit)
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.player.cpu().cycles() as f64
    }

    /// Base address of the SID register window
    #[wasm_bindgen(getter)]
    pub fn sid_base(&self) -> u16 {
        SID_BASE
    }
}

impl SidEmulator {
    fn notify(&self, frame: u32, cycle: u64, register: u8, value: u8) {
        let args = js_sys::Array::of4(
            &JsValue::from(frame),
            &JsValue::from(cycle as f64),
            &JsValue::from(register),
            &JsValue::from(value),
        );
        let _ = self.on_write.apply(&JsValue::NULL, &args);
    }
}
