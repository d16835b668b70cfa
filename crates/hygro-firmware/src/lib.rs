//! Hardware glue for the hygro-rs firmware: I2C bus sharing, sensor
//! driver wrappers, and the touch panel adapter. The demo logic itself
//! lives in `hygro-core`.

#![no_std]

pub mod i2c_bus;
pub mod sensors;
pub mod touch;
