//! Reusable face drawing widgets.

pub mod primitives;

pub use primitives::{draw_centered_text, draw_divider_pair, draw_hour_marker, draw_sweep_arc, draw_tick_ring};
