//! Pre-computed static text styles to avoid per-tick object construction.
//!
//! `MonoTextStyle` and `TextStyle` are built as `const`, so the compiler can
//! place them in read-only data and reference them directly every tick.
//!
//! Each face uses up to three font sizes: a large hour font, a medium minute
//! font, and a small date font. The Solo face renders its single hour line in
//! the builtin `FONT_10X20`, standing in for the host's default system font.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::BinaryColor,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_24_POINT};

use crate::colors::FOREGROUND;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Horizontally centered text anchored at the top of its row. Text rows span
/// the full screen width with their origin at the row's top edge.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Large hour digits (`ProFont` 24pt).
pub const HOUR_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_24_POINT, FOREGROUND);

/// Medium minute digits (`ProFont` 14pt).
pub const MINUTE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_14_POINT, FOREGROUND);

/// Small date line (`ProFont` 12pt).
pub const DATE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_12_POINT, FOREGROUND);

/// System-default font used by the Solo face for its hour digits.
pub const SYSTEM_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_10X20, FOREGROUND);
