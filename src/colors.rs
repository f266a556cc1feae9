//! Two-color palette for the monochrome face.

use embedded_graphics::pixelcolor::BinaryColor;

/// Face background (black on the target display).
pub const BACKGROUND: BinaryColor = BinaryColor::Off;

/// Everything drawn on the face: ticks, arcs, dividers, text.
pub const FOREGROUND: BinaryColor = BinaryColor::On;
