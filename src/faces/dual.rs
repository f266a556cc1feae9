//! Dual face: concentric minute and second sweeps with full text.
//!
//! The minute sweep runs on the outer circle with large discs, the second
//! sweep on an inner circle with small discs. No hour ring; the hour is only
//! shown as digits.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::{
    app::DisplayStrings,
    clock::TimeSample,
    config::{CENTER, CENTER_X, OUTER_RADIUS, SCREEN_WIDTH},
    styles::{DATE_STYLE, HOUR_STYLE, MINUTE_STYLE},
    widgets::{draw_centered_text, draw_divider_pair, draw_sweep_arc},
};

// =============================================================================
// Dual Face Layout Constants
// =============================================================================

/// Radius of each minute sweep disc.
const MINUTE_DISC_RADIUS: u32 = 5;

/// Radius of the second sweep arc, inside the minute sweep.
const SECOND_ARC_RADIUS: i32 = (SCREEN_WIDTH / 3) as i32;

/// Radius of each second sweep disc.
const SECOND_DISC_RADIUS: u32 = 3;

/// Divider offset below the face center.
const DIVIDER_OFFSET: i32 = 17;

/// Top edge of the hour text row.
const HOUR_TEXT_Y: i32 = 37;

/// Top edge of the minute text row, below the divider.
const MINUTE_TEXT_Y: i32 = 103;

/// Top edge of the date text row at the bottom of the face.
const DATE_TEXT_Y: i32 = 149;

/// Draw the dual-sweep face for one tick.
pub fn draw<D>(
    display: &mut D,
    sample: &TimeSample,
    strings: &DisplayStrings,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_sweep_arc(display, CENTER, OUTER_RADIUS, sample.minute, MINUTE_DISC_RADIUS);
    draw_sweep_arc(display, CENTER, SECOND_ARC_RADIUS, sample.second, SECOND_DISC_RADIUS);
    draw_divider_pair(display, CENTER, DIVIDER_OFFSET);

    draw_centered_text(display, &strings.hour, CENTER_X, HOUR_TEXT_Y, HOUR_STYLE);
    draw_centered_text(display, &strings.minute, CENTER_X, MINUTE_TEXT_Y, MINUTE_STYLE);
    draw_centered_text(display, &strings.date, CENTER_X, DATE_TEXT_Y, DATE_STYLE);
}
