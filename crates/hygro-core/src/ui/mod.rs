//! UI building blocks for the hygro touchscreen demos.
//!
//! This is deliberately not a general toolkit: it provides exactly the
//! interaction and rendering primitives the demos need -- a button with
//! a four-event lifecycle, cursor tracking for touch dispatch, and one
//! line-chart type.

pub mod button;
pub mod chart;
pub mod cursor;

pub use button::{Button, ButtonEvent, ButtonStyle};
pub use chart::{ChartColors, LineChart};
pub use cursor::{CursorFrame, CursorTracker, TouchReading};
