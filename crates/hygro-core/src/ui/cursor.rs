//! Cursor state for touch dispatch.
//!
//! The input loop reads one [`TouchReading`] per cycle from the touch
//! controller, runs it through a [`CursorTracker`] to pair it with the
//! previous cycle's coordinates, and feeds the resulting [`CursorFrame`]
//! to every registered widget.

/// One raw sample from the touch controller.
///
/// When no touch is detected the coordinates are zeroed, matching what
/// the dispatch loop would otherwise leave in its locals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchReading {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

impl TouchReading {
    /// A touch at the given coordinates.
    pub const fn pressed(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            pressed: true,
        }
    }

    /// No touch detected this cycle.
    pub const fn released() -> Self {
        Self {
            x: 0,
            y: 0,
            pressed: false,
        }
    }
}

/// Current and previous cursor coordinates plus the pressed flag,
/// passed by value into each widget's `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorFrame {
    pub x: i32,
    pub y: i32,
    pub prev_x: i32,
    pub prev_y: i32,
    pub pressed: bool,
}

/// Owns the previous-coordinate history for the input dispatch loop.
#[derive(Debug, Default)]
pub struct CursorTracker {
    prev_x: i32,
    prev_y: i32,
}

impl CursorTracker {
    pub const fn new() -> Self {
        Self {
            prev_x: 0,
            prev_y: 0,
        }
    }

    /// Combines the latest reading with the stored previous coordinates
    /// and stores the current coordinates for the next cycle.
    pub fn advance(&mut self, reading: TouchReading) -> CursorFrame {
        let frame = CursorFrame {
            x: reading.x,
            y: reading.y,
            prev_x: self.prev_x,
            prev_y: self.prev_y,
            pressed: reading.pressed,
        };
        self.prev_x = reading.x;
        self.prev_y = reading.y;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_starts_at_origin() {
        let mut tracker = CursorTracker::new();
        let frame = tracker.advance(TouchReading::pressed(12, 34));
        assert_eq!((frame.prev_x, frame.prev_y), (0, 0));
        assert_eq!((frame.x, frame.y), (12, 34));
        assert!(frame.pressed);
    }

    #[test]
    fn test_tracker_carries_previous_coordinates() {
        let mut tracker = CursorTracker::new();
        tracker.advance(TouchReading::pressed(12, 34));
        let frame = tracker.advance(TouchReading::released());
        assert_eq!((frame.prev_x, frame.prev_y), (12, 34));
        assert_eq!((frame.x, frame.y), (0, 0));
        assert!(!frame.pressed);
    }
}
