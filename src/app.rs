//! Application state and tick lifecycle.
//!
//! [`WatchfaceApp`] is the single owner of everything that changes at
//! runtime: the lifecycle phase, the selected face, the clock host, and the
//! three display string buffers. There are no globals; the host loop owns the
//! app and the display and wires them together.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --init--> Running --shutdown--> Terminated
//! ```
//!
//! `init` performs one immediate render so the display is never blank while
//! waiting for the first tick. Once Terminated, tick delivery and rendering
//! stop permanently; there is no re-entry to Running.
//!
//! # Tick Handling
//!
//! The host loop delivers at most one tick per wall-clock second through the
//! [`TickHandler`] capability. A tick may carry an explicit [`TimeSample`];
//! without one the handler samples the clock host itself. Every element drawn
//! during a tick reflects that single sample.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use heapless::String;

use crate::{
    clock::{ClockHost, TimeSample},
    colors::BACKGROUND,
    faces::{FaceKind, draw_face},
    timefmt::{DATE_TEXT_CAP, HourStyle, TIME_TEXT_CAP, format_date, format_hour, format_minute},
};

/// Lifecycle phase of the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Created but not yet initialized; nothing rendered.
    Uninitialized,
    /// Subscribed to ticks and rendering.
    Running,
    /// Shut down; ticks are ignored permanently.
    Terminated,
}

/// Fixed-capacity text buffers updated in place every tick.
///
/// Owned by the app for its whole life; the faces borrow them read-only
/// while drawing.
#[derive(Default, Debug)]
pub struct DisplayStrings {
    /// Hour digits ("14", " 9", "12").
    pub hour: String<TIME_TEXT_CAP>,
    /// Minute digits, always two characters ("05").
    pub minute: String<TIME_TEXT_CAP>,
    /// Date line ("Aug 05").
    pub date: String<DATE_TEXT_CAP>,
}

/// Per-second tick capability, invoked by the host's event loop.
pub trait TickHandler {
    /// Handle one tick. `tick` carries the sample captured by the host;
    /// `None` asks the handler to sample the clock itself.
    fn on_tick<D>(
        &mut self,
        tick: Option<TimeSample>,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor>;
}

/// The watchface application state.
pub struct WatchfaceApp<C: ClockHost> {
    clock: C,
    face: FaceKind,
    phase: Phase,
    strings: DisplayStrings,
}

impl<C: ClockHost> WatchfaceApp<C> {
    /// Create an uninitialized app showing the given face.
    pub fn new(
        clock: C,
        face: FaceKind,
    ) -> Self {
        Self {
            clock,
            face,
            phase: Phase::Uninitialized,
            strings: DisplayStrings::default(),
        }
    }

    /// Transition Uninitialized -> Running and render the first frame.
    ///
    /// A no-op in any other phase; in particular a terminated app cannot be
    /// restarted.
    pub fn init<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        if self.phase != Phase::Uninitialized {
            return;
        }
        self.phase = Phase::Running;
        // Immediate render so the display is never blank
        self.handle_tick(None, display);
    }

    /// Transition to Terminated. Further ticks and draws are ignored.
    pub fn shutdown(&mut self) { self.phase = Phase::Terminated; }

    /// Handle one tick: refresh the display strings and redraw the face.
    ///
    /// Ignored unless Running. Without an explicit sample the clock host is
    /// queried, matching ticks synthesized by the app itself (first render,
    /// face switch, style switch).
    pub fn handle_tick<D>(
        &mut self,
        tick: Option<TimeSample>,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        if self.phase != Phase::Running {
            return;
        }

        let sample = tick.unwrap_or_else(|| self.clock.now());
        let style = HourStyle::from_24h_preference(self.clock.is_24h_style());

        format_hour(&mut self.strings.hour, sample.hour, style);
        format_minute(&mut self.strings.minute, sample.minute);
        format_date(&mut self.strings.date, &sample);

        display.clear(BACKGROUND).ok();
        draw_face(display, self.face, &sample, &self.strings);
    }

    /// Switch to the next face and redraw immediately.
    pub fn cycle_face<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.face = self.face.cycle();
        self.handle_tick(None, display);
    }

    pub const fn phase(&self) -> Phase { self.phase }

    pub const fn face(&self) -> FaceKind { self.face }

    pub const fn clock(&self) -> &C { &self.clock }

    /// Mutable clock access, used by the host loop to flip the 12h/24h
    /// preference from a key press.
    pub const fn clock_mut(&mut self) -> &mut C { &mut self.clock }

    pub fn hour_text(&self) -> &str { &self.strings.hour }

    pub fn minute_text(&self) -> &str { &self.strings.minute }

    pub fn date_text(&self) -> &str { &self.strings.date }
}

impl<C: ClockHost> TickHandler for WatchfaceApp<C> {
    fn on_tick<D>(
        &mut self,
        tick: Option<TimeSample>,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.handle_tick(tick, display);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
