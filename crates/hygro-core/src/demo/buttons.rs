//! Touch demo: two overlapping draggable buttons.
//!
//! Each button restyles itself per lifecycle event (pressed green,
//! released red, held yellow, idle cyan) and logs the event; while a
//! button is held it follows the cursor.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::{Button, CursorTracker, TouchReading};

/// Background color behind the buttons.
const BACKDROP: Rgb565 = Rgb565::CSS_DARK_BLUE;

fn wire_demo_events(button: &mut Button, name: &'static str) {
    button.on_pressed(move |style| {
        log::info!("{name} pressed");
        style.background_color = Rgb565::GREEN;
    });
    button.on_released(move |style| {
        log::info!("{name} released");
        style.background_color = Rgb565::RED;
    });
    button.on_held(move |style| {
        log::debug!("{name} held");
        style.background_color = Rgb565::YELLOW;
    });
    button.on_not_pressed(move |style| {
        style.background_color = Rgb565::CYAN;
    });
}

/// Scene state for the button demo.
pub struct ButtonsDemo {
    tracker: CursorTracker,
    buttons: [Button; 2],
}

impl ButtonsDemo {
    pub fn new() -> Self {
        let mut first = Button::new(50, 50, 150, 150);
        wire_demo_events(&mut first, "button#1");

        let mut second = Button::new(150, 150, 150, 150);
        second.set_text_color(Rgb565::CSS_ORANGE);
        wire_demo_events(&mut second, "button#2");

        Self {
            tracker: CursorTracker::new(),
            buttons: [first, second],
        }
    }

    /// One input dispatch cycle: feed the reading to every button, then
    /// drag any button that was already held under the cursor.
    pub fn handle_input(&mut self, reading: TouchReading) {
        let frame = self.tracker.advance(reading);

        for button in &mut self.buttons {
            let was_pressed = button.is_pressed();
            button.update(frame);

            // A held button follows the cursor, centered under it.
            if was_pressed
                && reading.pressed
                && button.is_pressed()
                && button.style().contains(reading.x, reading.y)
            {
                button.set_position(
                    reading.x - button.width() / 2,
                    reading.y - button.height() / 2,
                );
            }
        }
    }

    /// Clears the backdrop and draws both buttons.
    pub fn render<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        display.clear(BACKDROP)?;
        for button in &self.buttons {
            button.render(display)?;
        }
        Ok(())
    }
}

impl Default for ButtonsDemo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_restyles_button() {
        let mut demo = ButtonsDemo::new();
        demo.handle_input(TouchReading::pressed(100, 100));
        assert_eq!(demo.buttons[0].background_color(), Rgb565::GREEN);
        assert!(demo.buttons[0].is_pressed());
    }

    #[test]
    fn test_held_button_follows_cursor() {
        let mut demo = ButtonsDemo::new();
        demo.handle_input(TouchReading::pressed(100, 100));
        // Press does not drag; the button only follows once held.
        assert_eq!(demo.buttons[0].position_x(), 50);

        demo.handle_input(TouchReading::pressed(120, 110));
        assert_eq!(demo.buttons[0].background_color(), Rgb565::YELLOW);
        assert_eq!(demo.buttons[0].position_x(), 120 - 150 / 2);
        assert_eq!(demo.buttons[0].position_y(), 110 - 150 / 2);
    }

    #[test]
    fn test_release_restyles_button() {
        let mut demo = ButtonsDemo::new();
        demo.handle_input(TouchReading::pressed(100, 100));
        demo.handle_input(TouchReading::released());
        assert_eq!(demo.buttons[0].background_color(), Rgb565::RED);
        assert!(!demo.buttons[0].is_pressed());
    }

    #[test]
    fn test_idle_restyles_button() {
        let mut demo = ButtonsDemo::new();
        demo.handle_input(TouchReading::released());
        assert_eq!(demo.buttons[0].background_color(), Rgb565::CYAN);
    }
}
