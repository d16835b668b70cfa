//! Button widget with a four-event touch lifecycle.
//!
//! The button is an event-driving component: every call to
//! [`Button::update`] evaluates the hit test against the current (or
//! previous) cursor position and fires at most one of the four
//! lifecycle events -- pressed, held, released, not-pressed.

use alloc::boxed::Box;

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::geometry::point_in_rect;

use super::cursor::CursorFrame;

/// Maximum button label length in characters.
pub const MAX_LABEL_LEN: usize = 32;

/// Fixed per-character width used to center the label horizontally.
/// Matches the advance of [`FONT_6X10`].
const LABEL_CHAR_WIDTH_PX: i32 = 6;

/// Lifecycle events a button can fire from `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Touch landed inside the button this cycle.
    Pressed,
    /// Touch is still inside the button; fires once per cycle while held.
    Held,
    /// Touch lifted after the previous cursor position was inside.
    Released,
    /// Idle; fires continuously while untouched and not newly released.
    NotPressed,
}

/// Callback invoked when a lifecycle event fires.
///
/// Listeners get mutable access to the button's visual style so they can
/// restyle or move the widget; the pressed flag and the callback slots
/// themselves stay out of reach, which keeps state transitions confined
/// to [`Button::update`].
pub type EventCallback = Box<dyn FnMut(&mut ButtonStyle)>;

/// The button's visual state: geometry, colors, and label.
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub text: heapless::String<MAX_LABEL_LEN>,
    pub text_color: Rgb565,
    pub background_color: Rgb565,
}

impl ButtonStyle {
    /// Inclusive hit test against this button's rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        point_in_rect(px, py, self.x, self.y, self.width, self.height)
    }
}

/// Interactive button widget.
pub struct Button {
    style: ButtonStyle,
    pressed: bool,
    on_pressed: Option<EventCallback>,
    on_held: Option<EventCallback>,
    on_released: Option<EventCallback>,
    on_not_pressed: Option<EventCallback>,
}

impl Button {
    /// Creates a button with the given geometry and default colors
    /// (black text on magenta, no label).
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            style: ButtonStyle {
                x,
                y,
                width,
                height,
                text: heapless::String::new(),
                text_color: Rgb565::BLACK,
                background_color: Rgb565::MAGENTA,
            },
            pressed: false,
            on_pressed: None,
            on_held: None,
            on_released: None,
            on_not_pressed: None,
        }
    }

    // -- Event listener registration ------------------------------------

    pub fn on_pressed(&mut self, callback: impl FnMut(&mut ButtonStyle) + 'static) {
        self.on_pressed = Some(Box::new(callback));
    }

    pub fn on_held(&mut self, callback: impl FnMut(&mut ButtonStyle) + 'static) {
        self.on_held = Some(Box::new(callback));
    }

    pub fn on_released(&mut self, callback: impl FnMut(&mut ButtonStyle) + 'static) {
        self.on_released = Some(Box::new(callback));
    }

    pub fn on_not_pressed(&mut self, callback: impl FnMut(&mut ButtonStyle) + 'static) {
        self.on_not_pressed = Some(Box::new(callback));
    }

    // -- Input handling -------------------------------------------------

    /// Evaluates one cursor frame and fires at most one lifecycle event.
    ///
    /// The pressed flag transitions only here.
    pub fn update(&mut self, frame: CursorFrame) {
        if frame.pressed {
            self.handle_touch(frame.x, frame.y);
        } else {
            self.handle_no_touch(frame.prev_x, frame.prev_y);
        }
    }

    fn handle_touch(&mut self, cursor_x: i32, cursor_y: i32) {
        if self.style.contains(cursor_x, cursor_y) {
            if !self.pressed {
                self.pressed = true;
                if let Some(callback) = self.on_pressed.as_mut() {
                    callback(&mut self.style);
                }
            } else if let Some(callback) = self.on_held.as_mut() {
                callback(&mut self.style);
            }
        }
    }

    fn handle_no_touch(&mut self, prev_cursor_x: i32, prev_cursor_y: i32) {
        if self.pressed && self.style.contains(prev_cursor_x, prev_cursor_y) {
            self.pressed = false;
            if let Some(callback) = self.on_released.as_mut() {
                callback(&mut self.style);
            }
        } else if let Some(callback) = self.on_not_pressed.as_mut() {
            callback(&mut self.style);
        }
    }

    // -- Rendering ------------------------------------------------------

    /// Fills the button rectangle and draws the label centered, if set.
    pub fn render<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let bounds = Rectangle::new(
            Point::new(self.style.x, self.style.y),
            Size::new(self.style.width.max(0) as u32, self.style.height.max(0) as u32),
        );
        bounds
            .into_styled(PrimitiveStyle::with_fill(self.style.background_color))
            .draw(display)?;

        if !self.style.text.is_empty() {
            let text_width = self.style.text.len() as i32 * LABEL_CHAR_WIDTH_PX;
            let text_x = self.style.x + (self.style.width - text_width) / 2;
            let text_y = self.style.y + self.style.height / 2;

            let text_style = MonoTextStyleBuilder::new()
                .font(&FONT_6X10)
                .text_color(self.style.text_color)
                .background_color(self.style.background_color)
                .build();
            Text::new(&self.style.text, Point::new(text_x, text_y), text_style).draw(display)?;
        }

        Ok(())
    }

    // -- Getters and setters --------------------------------------------

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.style.x = x;
        self.style.y = y;
    }

    pub fn position_x(&self) -> i32 {
        self.style.x
    }

    pub fn set_position_x(&mut self, x: i32) {
        self.style.x = x;
    }

    pub fn position_y(&self) -> i32 {
        self.style.y
    }

    pub fn set_position_y(&mut self, y: i32) {
        self.style.y = y;
    }

    pub fn width(&self) -> i32 {
        self.style.width
    }

    pub fn set_width(&mut self, width: i32) {
        self.style.width = width;
    }

    pub fn height(&self) -> i32 {
        self.style.height
    }

    pub fn set_height(&mut self, height: i32) {
        self.style.height = height;
    }

    pub fn text_color(&self) -> Rgb565 {
        self.style.text_color
    }

    pub fn set_text_color(&mut self, color: Rgb565) {
        self.style.text_color = color;
    }

    pub fn background_color(&self) -> Rgb565 {
        self.style.background_color
    }

    pub fn set_background_color(&mut self, color: Rgb565) {
        self.style.background_color = color;
    }

    pub fn text(&self) -> &str {
        &self.style.text
    }

    /// Sets the label, truncating past [`MAX_LABEL_LEN`] bytes.
    pub fn set_text(&mut self, text: &str) {
        self.style.text.clear();
        for ch in text.chars() {
            if self.style.text.push(ch).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cursor::{CursorTracker, TouchReading};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    /// Wires all four events to push into a shared event log.
    fn instrument(button: &mut Button) -> Rc<RefCell<Vec<ButtonEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        button.on_pressed(move |_| l.borrow_mut().push(ButtonEvent::Pressed));
        let l = log.clone();
        button.on_held(move |_| l.borrow_mut().push(ButtonEvent::Held));
        let l = log.clone();
        button.on_released(move |_| l.borrow_mut().push(ButtonEvent::Released));
        let l = log.clone();
        button.on_not_pressed(move |_| l.borrow_mut().push(ButtonEvent::NotPressed));
        log
    }

    fn drive(button: &mut Button, tracker: &mut CursorTracker, readings: &[TouchReading]) {
        for reading in readings {
            let frame = tracker.advance(*reading);
            button.update(frame);
        }
    }

    #[test]
    fn test_press_hold_release_sequence() {
        let mut button = Button::new(50, 50, 150, 150);
        let log = instrument(&mut button);
        let mut tracker = CursorTracker::new();

        drive(
            &mut button,
            &mut tracker,
            &[
                TouchReading::pressed(100, 100),
                TouchReading::pressed(110, 110),
                TouchReading::released(),
            ],
        );

        assert_eq!(
            *log.borrow(),
            [ButtonEvent::Pressed, ButtonEvent::Held, ButtonEvent::Released]
        );
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_pressed_flag_set_while_touched_inside() {
        let mut button = Button::new(0, 0, 20, 20);
        let mut tracker = CursorTracker::new();
        drive(&mut button, &mut tracker, &[TouchReading::pressed(10, 10)]);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_not_pressed_fires_every_idle_cycle() {
        let mut button = Button::new(0, 0, 20, 20);
        let log = instrument(&mut button);
        let mut tracker = CursorTracker::new();

        drive(
            &mut button,
            &mut tracker,
            &[TouchReading::released(), TouchReading::released(), TouchReading::released()],
        );

        assert_eq!(
            *log.borrow(),
            [ButtonEvent::NotPressed, ButtonEvent::NotPressed, ButtonEvent::NotPressed]
        );
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_touch_outside_fires_nothing() {
        let mut button = Button::new(0, 0, 20, 20);
        let log = instrument(&mut button);
        let mut tracker = CursorTracker::new();

        drive(&mut button, &mut tracker, &[TouchReading::pressed(100, 100)]);

        assert!(log.borrow().is_empty());
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_edge_touch_counts_as_inside() {
        let mut button = Button::new(0, 0, 20, 20);
        let log = instrument(&mut button);
        let mut tracker = CursorTracker::new();

        drive(&mut button, &mut tracker, &[TouchReading::pressed(20, 10)]);

        assert_eq!(*log.borrow(), [ButtonEvent::Pressed]);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_at_most_one_event_per_update() {
        let mut button = Button::new(0, 0, 20, 20);
        let log = instrument(&mut button);
        let mut tracker = CursorTracker::new();

        let readings = [
            TouchReading::pressed(5, 5),
            TouchReading::pressed(5, 5),
            TouchReading::pressed(100, 100),
            TouchReading::released(),
            TouchReading::released(),
        ];
        for reading in readings {
            let before = log.borrow().len();
            let frame = tracker.advance(reading);
            button.update(frame);
            assert!(log.borrow().len() - before <= 1);
        }
    }

    #[test]
    fn test_release_outside_previous_bounds_is_not_pressed() {
        // Press inside, drag outside, then lift: the previous cursor
        // position is outside the rectangle, so no "released" fires and
        // the button stays pressed.
        let mut button = Button::new(0, 0, 20, 20);
        let log = instrument(&mut button);
        let mut tracker = CursorTracker::new();

        drive(
            &mut button,
            &mut tracker,
            &[
                TouchReading::pressed(10, 10),
                TouchReading::pressed(100, 100),
                TouchReading::released(),
            ],
        );

        assert_eq!(*log.borrow(), [ButtonEvent::Pressed, ButtonEvent::NotPressed]);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_unset_callbacks_are_silent_noops() {
        let mut button = Button::new(0, 0, 20, 20);
        let mut tracker = CursorTracker::new();
        drive(
            &mut button,
            &mut tracker,
            &[
                TouchReading::pressed(10, 10),
                TouchReading::pressed(10, 10),
                TouchReading::released(),
                TouchReading::released(),
            ],
        );
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_callback_can_restyle_the_button() {
        let mut button = Button::new(0, 0, 20, 20);
        button.on_pressed(|style| style.background_color = Rgb565::GREEN);
        let mut tracker = CursorTracker::new();

        drive(&mut button, &mut tracker, &[TouchReading::pressed(10, 10)]);

        assert_eq!(button.background_color(), Rgb565::GREEN);
    }

    #[test]
    fn test_setter_getter_round_trip() {
        let mut button = Button::new(0, 0, 10, 10);
        button.set_position(17, -3);
        button.set_width(123);
        button.set_height(45);
        button.set_text("OK");
        button.set_text_color(Rgb565::WHITE);
        button.set_background_color(Rgb565::CSS_ORANGE);

        assert_eq!(button.position_x(), 17);
        assert_eq!(button.position_y(), -3);
        assert_eq!(button.width(), 123);
        assert_eq!(button.height(), 45);
        assert_eq!(button.text(), "OK");
        assert_eq!(button.text_color(), Rgb565::WHITE);
        assert_eq!(button.background_color(), Rgb565::CSS_ORANGE);
    }

    #[test]
    fn test_render_smoke() {
        use embedded_graphics::mock_display::MockDisplay;

        let mut button = Button::new(2, 2, 12, 10);
        button.set_text("A");
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        button.render(&mut display).unwrap();
    }
}
