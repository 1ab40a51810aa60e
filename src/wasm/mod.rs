//! WebAssembly bindings for the SID player emulator.
//!
//! This module provides JavaScript-callable interfaces to [`crate::Player`],
//! so player routines can be traced from a browser.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::{FrameResult, JsError, SidEmulator};
