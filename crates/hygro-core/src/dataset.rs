//! Bounded, oldest-evicted sample storage feeding the chart.

use heapless::Deque;

/// Ordered, append-at-the-tail sequence of sensor samples with a
/// compile-time capacity. Insertion order is significant: oldest first.
///
/// The length never exceeds `CAP`; appending to a full dataset evicts
/// from the front, so the retained elements are always the `CAP` most
/// recently appended.
#[derive(Debug, Default)]
pub struct Dataset<const CAP: usize> {
    samples: Deque<f32, CAP>,
}

impl<const CAP: usize> Dataset<CAP> {
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Appends a sample, evicting the oldest when at capacity.
    pub fn push(&mut self, sample: f32) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Cannot fail: a slot was just freed if the deque was full.
        let _ = self.samples.push_back(sample);
    }

    /// Smallest sample value, or `None` if the dataset is empty.
    ///
    /// Full linear scan; a single-element dataset returns that element.
    pub fn minimum(&self) -> Option<f32> {
        self.samples.iter().copied().reduce(f32::min)
    }

    /// Largest sample value, or `None` if the dataset is empty.
    pub fn maximum(&self) -> Option<f32> {
        self.samples.iter().copied().reduce(f32::max)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// Logs every retained sample at trace level.
    ///
    /// WARNING: with a large capacity this drastically slows the loop
    /// that calls it; it only runs when trace logging is enabled.
    pub fn trace_dump(&self) {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("==============");
            for (i, sample) in self.samples.iter().enumerate() {
                log::trace!("[{}]: {}", i, sample);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_minimum_and_maximum() {
        let mut dataset: Dataset<16> = Dataset::new();
        for sample in [3.0, 1.0, 4.0, 1.0, 5.0] {
            dataset.push(sample);
        }
        assert_eq!(dataset.minimum(), Some(1.0));
        assert_eq!(dataset.maximum(), Some(5.0));
    }

    #[test]
    fn test_single_element_extremes() {
        let mut dataset: Dataset<16> = Dataset::new();
        dataset.push(7.0);
        assert_eq!(dataset.minimum(), Some(7.0));
        assert_eq!(dataset.maximum(), Some(7.0));
    }

    #[test]
    fn test_empty_dataset_has_no_extremes() {
        let dataset: Dataset<16> = Dataset::new();
        assert_eq!(dataset.minimum(), None);
        assert_eq!(dataset.maximum(), None);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut dataset: Dataset<4> = Dataset::new();
        for i in 0..10 {
            dataset.push(i as f32);
            assert!(dataset.len() <= 4);
        }
        // Exactly the 4 most recently appended, oldest first.
        let retained: Vec<f32> = dataset.iter().collect();
        assert_eq!(retained, [6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_under_capacity_keeps_everything() {
        let mut dataset: Dataset<100> = Dataset::new();
        for i in 0..5 {
            dataset.push(i as f32);
        }
        let retained: Vec<f32> = dataset.iter().collect();
        assert_eq!(retained, [0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
