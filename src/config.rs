//! Application configuration constants.
//!
//! Layout values like the screen center are computed at compile time as
//! `const`, so per-tick rendering never recalculates positions. The screen
//! dimensions match the 144x168 two-color wearable display the faces were
//! designed for.

use std::time::Duration;

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Screen center X coordinate. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Face center point, shared by every arc and ring.
pub const CENTER: Point = Point::new(CENTER_X, CENTER_Y);

// =============================================================================
// Timing Configuration
// =============================================================================

/// Event poll interval for the host loop. Ticks are delivered once per
/// wall-clock second; polling faster keeps key handling responsive.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

// =============================================================================
// Shared Face Geometry
// =============================================================================

/// Radius of the outer ring used by the hour ticks (Ring face) and the
/// minute sweep (Dual and Solo faces): half the screen width minus a margin.
pub const OUTER_RADIUS: i32 = (SCREEN_WIDTH / 2) as i32 - 10;

/// Half-width of the divider lines separating the hour and minute text.
pub const DIVIDER_HALF_WIDTH: i32 = 22;
