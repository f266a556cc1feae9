//! Ring face: hollow hour-tick ring with a second sweep.
//!
//! ```text
//!        o  .  o          o  hollow hour tick
//!     o    . .    o       .  second sweep disc
//!   o      ...      O     O  current hour marker
//!        ┌─────┐
//!   o    │ 14  │    o     large hour digits
//!        │ ──  │          divider pair
//!   o    │ 05  │    o     minute digits
//!     o  │Aug05│  o       date line
//!        └─────┘
//! ```

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::{
    app::DisplayStrings,
    clock::TimeSample,
    config::{CENTER, CENTER_X, OUTER_RADIUS, SCREEN_WIDTH},
    styles::{DATE_STYLE, HOUR_STYLE, MINUTE_STYLE},
    widgets::{draw_centered_text, draw_divider_pair, draw_hour_marker, draw_sweep_arc, draw_tick_ring},
};

// =============================================================================
// Ring Face Layout Constants
// =============================================================================

/// Radius of the second sweep arc, inside the hour ring.
const SECOND_ARC_RADIUS: i32 = (SCREEN_WIDTH / 3) as i32 - 1;

/// Radius of each second sweep disc.
const SECOND_DISC_RADIUS: u32 = 3;

/// Divider offset below the face center.
const DIVIDER_OFFSET: i32 = 16;

/// Top edge of the hour text row.
const HOUR_TEXT_Y: i32 = 36;

/// Top edge of the minute text row, below the divider.
const MINUTE_TEXT_Y: i32 = 102;

/// Top edge of the date text row at the bottom of the face.
const DATE_TEXT_Y: i32 = 149;

/// Draw the ring face for one tick.
pub fn draw<D>(
    display: &mut D,
    sample: &TimeSample,
    strings: &DisplayStrings,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_tick_ring(display, CENTER, OUTER_RADIUS);
    draw_hour_marker(display, CENTER, OUTER_RADIUS, sample.hour);
    draw_sweep_arc(display, CENTER, SECOND_ARC_RADIUS, sample.second, SECOND_DISC_RADIUS);
    draw_divider_pair(display, CENTER, DIVIDER_OFFSET);

    draw_centered_text(display, &strings.hour, CENTER_X, HOUR_TEXT_Y, HOUR_STYLE);
    draw_centered_text(display, &strings.minute, CENTER_X, MINUTE_TEXT_Y, MINUTE_STYLE);
    draw_centered_text(display, &strings.date, CENTER_X, DATE_TEXT_Y, DATE_STYLE);
}
