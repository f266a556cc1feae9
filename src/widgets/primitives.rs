//! Low-level drawing primitives shared across the faces.
//!
//! Everything here draws against any `DrawTarget<Color = BinaryColor>` so the
//! same code renders to the simulator window and to test displays. Draw
//! results are discarded with `.ok()`: the face has no recoverable error
//! path, and a dropped primitive only degrades the current frame.
//!
//! # Hollow Tick Marks
//!
//! An hour tick is a filled foreground disc with a smaller background disc
//! punched into its center, leaving a one-pixel ring. The punch must be drawn
//! after the outer disc, and before any marker that may cover the same spot.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::Text,
};

use crate::{
    colors::{BACKGROUND, FOREGROUND},
    config::DIVIDER_HALF_WIDTH,
    geometry::{MINUTE_STEPS, MINUTES_PER_HOUR_TICK, point_on_circle, sweep_points},
    styles::CENTERED_TOP,
};

/// Number of hour ticks on the ring.
pub const HOUR_TICK_COUNT: u32 = 12;

/// Radius of the filled part of an hour tick.
const TICK_OUTER_RADIUS: u32 = 3;

/// Radius of the background disc punched into an hour tick.
const TICK_PUNCH_RADIUS: u32 = 2;

/// Radius of the enlarged current-hour marker.
const HOUR_MARKER_RADIUS: u32 = 5;

/// Stroke style for the divider lines.
const DIVIDER_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(FOREGROUND, 1);

/// Draw a filled disc of the given radius centered on `center`.
fn draw_disc<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: BinaryColor,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(center, radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw the ring of twelve hollow hour ticks.
///
/// One tick per 5-minute position on the circle of the given radius. Each is
/// a foreground disc with a background disc punched into its center.
pub fn draw_tick_ring<D>(
    display: &mut D,
    center: Point,
    radius: i32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    for hour in 0..HOUR_TICK_COUNT {
        let p = point_on_circle(hour * MINUTES_PER_HOUR_TICK, MINUTE_STEPS, radius, center);
        draw_disc(display, p, TICK_OUTER_RADIUS, FOREGROUND);
        draw_disc(display, p, TICK_PUNCH_RADIUS, BACKGROUND);
    }
}

/// Draw the enlarged solid marker at the current hour's tick position.
///
/// Drawn after the tick ring so the solid disc covers the hollow tick.
pub fn draw_hour_marker<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    hour: u8,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let index = u32::from(hour % 12) * MINUTES_PER_HOUR_TICK;
    let p = point_on_circle(index, MINUTE_STEPS, radius, center);
    draw_disc(display, p, HOUR_MARKER_RADIUS, FOREGROUND);
}

/// Draw a sweep arc: one disc per index from 12 o'clock to `upto` inclusive.
pub fn draw_sweep_arc<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    upto: u8,
    disc_radius: u32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    for p in sweep_points(upto, radius, center) {
        draw_disc(display, p, disc_radius, FOREGROUND);
    }
}

/// Draw the two parallel divider lines between the hour and minute text.
///
/// Both lines span `center.x +/- DIVIDER_HALF_WIDTH`; the second sits one
/// pixel below the first, giving a 2px rule.
pub fn draw_divider_pair<D>(
    display: &mut D,
    center: Point,
    y_offset: i32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    for row in 0..2 {
        let y = center.y + y_offset + row;
        Line::new(
            Point::new(center.x - DIVIDER_HALF_WIDTH, y),
            Point::new(center.x + DIVIDER_HALF_WIDTH, y),
        )
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
    }
}

/// Draw horizontally centered text anchored at the top of its row.
pub fn draw_centered_text<D>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    style: MonoTextStyle<'static, BinaryColor>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_text_style(text, Point::new(x, y), style, CENTERED_TOP)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::styles::MINUTE_STYLE;

    const CENTER: Point = Point::new(32, 32);

    /// Mock display tolerant of the overdraw the punched ticks rely on.
    fn display() -> MockDisplay<BinaryColor> {
        let mut d = MockDisplay::new();
        d.set_allow_overdraw(true);
        d.set_allow_out_of_bounds_drawing(true);
        d
    }

    #[test]
    fn test_tick_ring_is_hollow() {
        let mut d = display();
        draw_tick_ring(&mut d, CENTER, 20);

        // Tick at 12 o'clock sits at (32, 12): punched center, solid rim
        assert_eq!(d.get_pixel(Point::new(32, 12)), Some(BinaryColor::Off));
        assert_eq!(d.get_pixel(Point::new(32, 9)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(32, 15)), Some(BinaryColor::On));
    }

    #[test]
    fn test_hour_marker_is_solid() {
        let mut d = display();
        draw_tick_ring(&mut d, CENTER, 20);
        draw_hour_marker(&mut d, CENTER, 20, 12);

        // Marker for hour 12 covers the punched tick at 12 o'clock
        assert_eq!(d.get_pixel(Point::new(32, 12)), Some(BinaryColor::On));
    }

    #[test]
    fn test_hour_marker_wraps_past_noon() {
        let mut a = display();
        let mut b = display();
        draw_hour_marker(&mut a, CENTER, 20, 3);
        draw_hour_marker(&mut b, CENTER, 20, 15);
        // Hour 15 must land on the 3 o'clock tick
        a.assert_eq(&b);
    }

    #[test]
    fn test_sweep_arc_covers_start_and_end() {
        let mut d = display();
        // Quarter sweep: indices 0..=15 on a radius-20 circle
        draw_sweep_arc(&mut d, CENTER, 20, 15, 2);

        // Disc at index 0 (top) and index 15 (right)
        assert_eq!(d.get_pixel(Point::new(32, 12)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(52, 32)), Some(BinaryColor::On));
        // Index 30 (bottom) is outside the sweep
        assert_ne!(d.get_pixel(Point::new(32, 52)), Some(BinaryColor::On));
    }

    #[test]
    fn test_divider_pair_is_two_rows() {
        let mut d = display();
        draw_divider_pair(&mut d, CENTER, 10);

        assert_eq!(d.get_pixel(Point::new(32, 42)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(32, 43)), Some(BinaryColor::On));
        assert_ne!(d.get_pixel(Point::new(32, 44)), Some(BinaryColor::On));
        // Horizontal extent
        assert_eq!(d.get_pixel(Point::new(32 - DIVIDER_HALF_WIDTH, 42)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(32 + DIVIDER_HALF_WIDTH, 42)), Some(BinaryColor::On));
    }

    #[test]
    fn test_centered_text_draws_pixels() {
        let mut d = display();
        draw_centered_text(&mut d, "05", 32, 10, MINUTE_STYLE);
        assert!(d.affected_area().size != Size::zero(), "text should mark pixels");
    }
}
