//! The three watchface variants.
//!
//! All variants share the widgets and differ only in which elements they
//! draw and where the text rows sit:
//!
//! - [`FaceKind::Ring`]: hollow hour-tick ring, enlarged current-hour marker,
//!   second sweep arc, hour/minute/date text, divider.
//! - [`FaceKind::Dual`]: minute and second sweep arcs, hour/minute/date
//!   text, divider. No hour ring.
//! - [`FaceKind::Solo`]: minute and second sweep arcs with a single hour
//!   line in the system font. No divider, no date.
//!
//! Press `Y` in the simulator to cycle through the faces.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::{app::DisplayStrings, clock::TimeSample};

pub mod dual;
pub mod ring;
pub mod solo;

/// Available face variants.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum FaceKind {
    /// Hour-tick ring with a second sweep.
    #[default]
    Ring,

    /// Minute and second sweeps with full text.
    Dual,

    /// Minute and second sweeps with hour text only.
    Solo,
}

impl FaceKind {
    /// Advance to the next face (cycles Ring -> Dual -> Solo -> Ring).
    #[inline]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Ring => Self::Dual,
            Self::Dual => Self::Solo,
            Self::Solo => Self::Ring,
        }
    }
}

/// Draw the given face for one tick's time sample and display strings.
pub fn draw_face<D>(
    display: &mut D,
    face: FaceKind,
    sample: &TimeSample,
    strings: &DisplayStrings,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    match face {
        FaceKind::Ring => ring::draw(display, sample, strings),
        FaceKind::Dual => dual::draw(display, sample, strings),
        FaceKind::Solo => solo::draw(display, sample, strings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_default() {
        assert_eq!(FaceKind::default(), FaceKind::Ring);
    }

    #[test]
    fn test_face_cycle_order() {
        assert_eq!(FaceKind::Ring.cycle(), FaceKind::Dual);
        assert_eq!(FaceKind::Dual.cycle(), FaceKind::Solo);
        assert_eq!(FaceKind::Solo.cycle(), FaceKind::Ring);
    }

    #[test]
    fn test_face_cycle_is_three_cycle() {
        let face = FaceKind::default();
        let face = face.cycle().cycle().cycle();
        assert_eq!(face, FaceKind::default());
    }
}
