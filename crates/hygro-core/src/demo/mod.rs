//! The two demo scenes shipped with the device.
//!
//! A scene owns its widgets and data and exposes `handle_input`/`tick`
//! plus `render`; the forever-loops that drive them (touch dispatch,
//! render pacing, sensor polling) live in the firmware and simulator
//! frontends.

pub mod buttons;
pub mod graph;

pub use buttons::ButtonsDemo;
pub use graph::GraphDemo;

/// Target refresh rate for the UI render loop.
pub const PREFERRED_FPS: u32 = 16;
