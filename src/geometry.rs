//! Angular index to screen point mapping for circular face elements.
//!
//! Every tick mark, hour marker, and sweep disc sits on a circle around the
//! face center. Positions are addressed by an index into an evenly divided
//! circle: 60 steps for minutes/seconds, with hours mapped onto the same
//! 60-step circle at every fifth position.
//!
//! Index 0 is straight up (12 o'clock) and indices increase clockwise:
//!
//! ```text
//! x = center.x + round(sin(angle) * radius)
//! y = center.y - round(cos(angle) * radius)
//! angle = 2*pi * index / steps
//! ```
//!
//! The mapping is pure and periodic: `index` is reduced modulo `steps` before
//! the angle is computed, so index 60 of 60 lands exactly on index 0.

use std::f32::consts::TAU;

use embedded_graphics::prelude::Point;

/// Number of positions on the minute/second circle.
pub const MINUTE_STEPS: u32 = 60;

/// Minute-circle step between two adjacent hour positions.
pub const MINUTES_PER_HOUR_TICK: u32 = 5;

/// Map an index on an evenly divided circle to a screen point.
///
/// # Parameters
/// - `index`: position on the circle, reduced modulo `steps`
/// - `steps`: number of divisions of the full circle (e.g. 60)
/// - `radius`: circle radius in pixels
/// - `center`: circle center in screen coordinates
pub fn point_on_circle(
    index: u32,
    steps: u32,
    radius: i32,
    center: Point,
) -> Point {
    let angle = TAU * (index % steps) as f32 / steps as f32;
    Point::new(
        center.x + (angle.sin() * radius as f32).round() as i32,
        center.y - (angle.cos() * radius as f32).round() as i32,
    )
}

/// Points of a sweep arc: one per index from 0 up to and including `upto`.
///
/// Drawing a disc at every returned point approximates an analog hand that
/// has swept from 12 o'clock to the current second or minute.
pub fn sweep_points(
    upto: u8,
    radius: i32,
    center: Point,
) -> impl Iterator<Item = Point> {
    (0..=u32::from(upto)).map(move |i| point_on_circle(i, MINUTE_STEPS, radius, center))
}
