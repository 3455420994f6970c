//! WebAssembly bindings for the Apple 1 emulator.
//!
//! This module provides JavaScript-callable interfaces to the Apple 1 machine,
//! enabling browser-based terminals driven by the host page's event loop.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Apple1Emulator;
