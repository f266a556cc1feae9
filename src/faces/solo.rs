//! Solo face: minute and second sweeps with hour digits only.
//!
//! The stripped-down variant. Same concentric sweeps as the dual face, but
//! the only text is the hour, set in the system-default font. Intentionally
//! no divider and no date line.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::{
    app::DisplayStrings,
    clock::TimeSample,
    config::{CENTER, CENTER_X, OUTER_RADIUS, SCREEN_WIDTH},
    styles::SYSTEM_STYLE,
    widgets::{draw_centered_text, draw_sweep_arc},
};

/// Radius of each minute sweep disc.
const MINUTE_DISC_RADIUS: u32 = 5;

/// Radius of the second sweep arc, inside the minute sweep.
const SECOND_ARC_RADIUS: i32 = (SCREEN_WIDTH / 3) as i32;

/// Radius of each second sweep disc.
const SECOND_DISC_RADIUS: u32 = 3;

/// Top edge of the hour text row, roughly centered on the face.
const HOUR_TEXT_Y: i32 = 55;

/// Draw the solo face for one tick.
pub fn draw<D>(
    display: &mut D,
    sample: &TimeSample,
    strings: &DisplayStrings,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_sweep_arc(display, CENTER, OUTER_RADIUS, sample.minute, MINUTE_DISC_RADIUS);
    draw_sweep_arc(display, CENTER, SECOND_ARC_RADIUS, sample.second, SECOND_DISC_RADIUS);

    draw_centered_text(display, &strings.hour, CENTER_X, HOUR_TEXT_Y, SYSTEM_STYLE);
}
