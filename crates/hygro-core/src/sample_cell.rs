//! Single-slot cell carrying the latest sensor sample between tasks.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Single-producer/single-consumer cell for one `f32` sample.
///
/// The sensor task stores, the UI task loads. A load returns `None`
/// until the first store and afterwards the most recently stored value,
/// which may be stale by up to one sensor period but is never torn: the
/// value travels as one atomic `u32` bit pattern.
#[derive(Debug, Default)]
pub struct SampleCell {
    bits: AtomicU32,
    written: AtomicBool,
}

impl SampleCell {
    pub const fn new() -> Self {
        Self {
            bits: AtomicU32::new(0),
            written: AtomicBool::new(false),
        }
    }

    pub fn store(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
        self.written.store(true, Ordering::Release);
    }

    pub fn load(&self) -> Option<f32> {
        if self.written.load(Ordering::Acquire) {
            Some(f32::from_bits(self.bits.load(Ordering::Relaxed)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_until_first_store() {
        let cell = SampleCell::new();
        assert_eq!(cell.load(), None);
    }

    #[test]
    fn test_load_returns_latest_store() {
        let cell = SampleCell::new();
        cell.store(21.5);
        assert_eq!(cell.load(), Some(21.5));
        cell.store(-3.25);
        assert_eq!(cell.load(), Some(-3.25));
    }

    #[test]
    fn test_zero_is_a_legitimate_reading() {
        // Unlike a null sentinel, 0.0 stays distinguishable from "no data".
        let cell = SampleCell::new();
        cell.store(0.0);
        assert_eq!(cell.load(), Some(0.0));
    }
}
