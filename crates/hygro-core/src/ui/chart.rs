//! Line chart with labeled indicator gridlines and trend-colored data
//! segments.
//!
//! The chart maps a [`Dataset`] into the pixel rectangle it was given:
//! each sample's vertical offset is `height * (sample - min) / (max -
//! min)`, horizontal spacing is `width / sample_count`, and each segment
//! is colored by its trend against the previous sample. Every computed
//! coordinate passes through the non-negative clamp before it reaches
//! the display (see [`clamp_draw_coord`]).

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::dataset::Dataset;
use crate::geometry::clamp_draw_coord;

/// Height reserved for an indicator label, used to lift the topmost
/// label above its gridline so it is not clipped off the plot area.
const LABEL_HEIGHT_PX: f32 = 16.0;

/// Maximum formatted length of an indicator label.
const MAX_LABEL_LEN: usize = 16;

/// Segment and gridline colors.
#[derive(Debug, Clone, Copy)]
pub struct ChartColors {
    /// Segment color when the value increased.
    pub rising: Rgb565,
    /// Segment color when the value decreased.
    pub falling: Rgb565,
    /// Segment color when the value is unchanged.
    pub flat: Rgb565,
    /// Indicator gridline color.
    pub grid: Rgb565,
    /// Indicator label foreground.
    pub label: Rgb565,
    /// Indicator label background.
    pub label_background: Rgb565,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            rising: Rgb565::GREEN,
            falling: Rgb565::RED,
            flat: Rgb565::YELLOW,
            grid: Rgb565::WHITE,
            label: Rgb565::WHITE,
            label_background: Rgb565::BLACK,
        }
    }
}

/// Full-area line chart over one dataset.
pub struct LineChart {
    bounds: Rectangle,
    indicator_line_count: usize,
    colors: ChartColors,
}

impl LineChart {
    /// Chart covering `bounds` with `indicator_line_count` horizontal
    /// gridlines (minimum 2: one at each extreme).
    pub fn new(bounds: Rectangle, indicator_line_count: usize) -> Self {
        Self {
            bounds,
            indicator_line_count: indicator_line_count.max(2),
            colors: ChartColors::default(),
        }
    }

    pub fn with_colors(mut self, colors: ChartColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Draws the gridlines and the data polyline. No-op on an empty
    /// dataset.
    pub fn draw<const CAP: usize, D: DrawTarget<Color = Rgb565>>(
        &self,
        dataset: &Dataset<CAP>,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let (Some(minimum), Some(maximum)) = (dataset.minimum(), dataset.maximum()) else {
            return Ok(());
        };

        self.draw_indicator_lines(minimum, maximum, display)?;
        self.draw_samples(dataset, minimum, maximum, display)
    }

    /// Draws evenly spaced horizontal gridlines, each labeled with a
    /// value interpolated between `lowest` and `highest`.
    ///
    /// The topmost line's label is drawn above the line so it stays
    /// inside the plot area; all others sit at their line.
    fn draw_indicator_lines<D: DrawTarget<Color = Rgb565>>(
        &self,
        lowest: f32,
        highest: f32,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let x = self.bounds.top_left.x as f32;
        let y = self.bounds.top_left.y as f32;
        let width = self.bounds.size.width as f32;
        let height = self.bounds.size.height as f32;

        let intervals = (self.indicator_line_count - 1) as f32;
        let line_spacing = height / intervals;
        let value_delta = (highest - lowest) / intervals;

        let label_style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(self.colors.label)
            .background_color(self.colors.label_background)
            .build();
        let line_style = PrimitiveStyle::with_stroke(self.colors.grid, 1);

        for i in 0..self.indicator_line_count {
            let line_y = y + height - i as f32 * line_spacing;
            let is_topmost = i == self.indicator_line_count - 1;
            let label_y = if is_topmost {
                line_y - LABEL_HEIGHT_PX
            } else {
                line_y
            };

            let line_x = clamp_draw_coord(x as i32);
            let line_y = clamp_draw_coord(line_y as i32);
            let label_y = clamp_draw_coord(label_y as i32);

            Line::new(
                Point::new(line_x, line_y),
                Point::new(clamp_draw_coord((x + width) as i32), line_y),
            )
            .into_styled(line_style)
            .draw(display)?;

            let indicator_value = lowest + value_delta * i as f32;
            let mut label: heapless::String<MAX_LABEL_LEN> = heapless::String::new();
            // Formatting a short float into a 16-byte buffer cannot fail.
            let _ = write!(label, "{indicator_value:.1}");
            Text::with_baseline(
                &label,
                Point::new(line_x, label_y),
                label_style,
                Baseline::Top,
            )
            .draw(display)?;
        }

        Ok(())
    }

    /// Draws the samples as connected, trend-colored line segments.
    fn draw_samples<const CAP: usize, D: DrawTarget<Color = Rgb565>>(
        &self,
        dataset: &Dataset<CAP>,
        minimum: f32,
        maximum: f32,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let x = self.bounds.top_left.x as f32;
        let y = self.bounds.top_left.y as f32;
        let width = self.bounds.size.width as f32;
        let height = self.bounds.size.height as f32;

        let pole_width = width / dataset.len() as f32;
        let mut previous_pole_height = 0.0;

        for (i, sample) in dataset.iter().enumerate() {
            let current_pole_height = pole_height(sample, minimum, maximum, height);

            // There is no previous sample before the first one: seed it
            // from the current value, which renders the first segment
            // flat.
            if i == 0 {
                previous_pole_height = current_pole_height;
            }

            let color = trend_color(previous_pole_height, current_pole_height, &self.colors);

            let start = Point::new(
                clamp_draw_coord((x + i as f32 * pole_width) as i32),
                clamp_draw_coord((y + height - previous_pole_height) as i32),
            );
            let end = Point::new(
                clamp_draw_coord((x + (i + 1) as f32 * pole_width) as i32),
                clamp_draw_coord((y + height - current_pole_height) as i32),
            );
            Line::new(start, end)
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(display)?;

            previous_pole_height = current_pole_height;
        }

        Ok(())
    }
}

/// Vertical pixel offset of a sample within the plot height.
///
/// A degenerate range (all samples equal) maps everything to the
/// baseline instead of dividing by zero.
fn pole_height(sample: f32, minimum: f32, maximum: f32, height: f32) -> f32 {
    let range = maximum - minimum;
    if range == 0.0 {
        0.0
    } else {
        height * (sample - minimum) / range
    }
}

/// Segment color by trend between two pole heights.
fn trend_color(previous: f32, current: f32, colors: &ChartColors) -> Rgb565 {
    if current == previous {
        colors.flat
    } else if current > previous {
        colors.rising
    } else {
        colors.falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_pole_height_scaling() {
        assert_eq!(pole_height(1.0, 1.0, 5.0, 100.0), 0.0);
        assert_eq!(pole_height(5.0, 1.0, 5.0, 100.0), 100.0);
        assert_eq!(pole_height(3.0, 1.0, 5.0, 100.0), 50.0);
    }

    #[test]
    fn test_pole_height_degenerate_range() {
        assert_eq!(pole_height(7.0, 7.0, 7.0, 100.0), 0.0);
    }

    #[test]
    fn test_segment_trend_colors() {
        // Replays the segment loop over [2.0, 2.0, 5.0, 1.0]: the first
        // segment has no true previous sample and renders flat.
        let colors = ChartColors::default();
        let samples = [2.0, 2.0, 5.0, 1.0];
        let (minimum, maximum) = (1.0, 5.0);

        let mut previous = 0.0;
        let mut observed = Vec::new();
        for (i, sample) in samples.iter().enumerate() {
            let current = pole_height(*sample, minimum, maximum, 100.0);
            if i == 0 {
                previous = current;
            }
            observed.push(trend_color(previous, current, &colors));
            previous = current;
        }

        assert_eq!(
            observed,
            [colors.flat, colors.flat, colors.rising, colors.falling]
        );
    }

    #[test]
    fn test_draw_empty_dataset_is_noop() {
        use embedded_graphics::mock_display::MockDisplay;

        let dataset: Dataset<8> = Dataset::new();
        let chart = LineChart::new(
            Rectangle::new(Point::new(0, 16), Size::new(40, 30)),
            5,
        );
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        chart.draw(&dataset, &mut display).unwrap();
        // Nothing drawn: every pixel still untouched.
        assert_eq!(display.affected_area().size, Size::zero());
    }

    #[test]
    fn test_draw_smoke() {
        use embedded_graphics::mock_display::MockDisplay;

        let mut dataset: Dataset<8> = Dataset::new();
        for sample in [2.0, 2.0, 5.0, 1.0] {
            dataset.push(sample);
        }
        let chart = LineChart::new(
            Rectangle::new(Point::new(0, 16), Size::new(40, 30)),
            3,
        );
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        chart.draw(&dataset, &mut display).unwrap();
    }
}
