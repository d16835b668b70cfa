//! Hardware-independent core library for hygro-rs
//!
//! This crate contains all platform-agnostic logic for the hygro
//! touchscreen sensor device: the button widget and its event state
//! machine, cursor/input dispatch types, frame pacing, the bounded
//! sample dataset, the line-chart renderer, sensor traits and unit
//! conversion, and the two demo scenes.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets (ESP32-S3) and desktop hosts (for the simulator and
//! tests).

#![no_std]

extern crate alloc;

pub mod dataset;
pub mod demo;
pub mod frame;
pub mod geometry;
pub mod sample_cell;
pub mod sensors;
pub mod ui;
