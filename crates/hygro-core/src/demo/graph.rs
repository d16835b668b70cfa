//! Graph demo: rolling temperature chart across the whole screen.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::dataset::Dataset;
use crate::ui::LineChart;

/// Retained sample count; older samples are evicted.
pub const DATASET_CAPACITY: usize = 100;

/// Horizontal gridlines on the chart.
pub const INDICATOR_LINE_COUNT: usize = 5;

/// Delay between chart updates, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Scene state for the graph demo.
pub struct GraphDemo {
    dataset: Dataset<DATASET_CAPACITY>,
    chart: LineChart,
}

impl GraphDemo {
    /// Chart spanning the full screen of the given size.
    pub fn new(screen: Size) -> Self {
        let bounds = Rectangle::new(
            Point::zero(),
            Size::new(
                screen.width.saturating_sub(1),
                screen.height.saturating_sub(1),
            ),
        );
        Self {
            dataset: Dataset::new(),
            chart: LineChart::new(bounds, INDICATOR_LINE_COUNT),
        }
    }

    /// One update cycle: append the latest temperature sample, if the
    /// sensor has produced one yet.
    pub fn tick(&mut self, temperature: Option<f32>) {
        if let Some(sample) = temperature {
            self.dataset.push(sample);
        }
        self.dataset.trace_dump();
    }

    pub fn sample_count(&self) -> usize {
        self.dataset.len()
    }

    /// Clears the screen and draws the chart.
    pub fn render<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        display.clear(Rgb565::BLACK)?;
        self.chart.draw(&self.dataset, display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_without_reading_appends_nothing() {
        let mut demo = GraphDemo::new(Size::new(480, 272));
        demo.tick(None);
        assert_eq!(demo.sample_count(), 0);
    }

    #[test]
    fn test_tick_appends_and_caps() {
        let mut demo = GraphDemo::new(Size::new(480, 272));
        for i in 0..(DATASET_CAPACITY + 20) {
            demo.tick(Some(i as f32));
        }
        assert_eq!(demo.sample_count(), DATASET_CAPACITY);
    }

    #[test]
    fn test_render_with_no_samples_only_clears() {
        use embedded_graphics::mock_display::MockDisplay;

        let demo = GraphDemo::new(Size::new(48, 48));
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        demo.render(&mut display).unwrap();
    }
}
