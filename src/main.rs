// Crate-level lints: allow common graphics-math patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 and u32->u8 casts for pixel/time math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in angle calculations

//! Analog-style watchface simulator.
//!
//! Renders one of three clock face variants onto a 144x168 two-color display
//! in a simulator window, redrawing once per second. The faces share a common
//! skeleton: circular tick/sweep geometry around the screen center plus
//! centered digital text rows.
//!
//! ```text
//! ┌──────────────────────┐
//! │     o   .....  o     │  hour ticks / minute sweep (outer circle)
//! │   o     .....    o   │  second sweep (inner circle)
//! │  o       14       o  │  hour digits
//! │  o      ────      o  │  divider
//! │   o      05      o   │  minute digits
//! │     o  Aug 05  o     │  date line
//! └──────────────────────┘
//! ```
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `Y` | Cycle face variant (Ring -> Dual -> Solo) |
//! | `A` | Toggle 12h/24h hour display |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! # Tick Delivery
//!
//! The loop polls events every [`FRAME_TIME`] and delivers exactly one tick
//! to the app whenever the wall-clock second changes. The sample captured at
//! that moment is passed through to the renderer, so every element of a
//! frame reflects the same instant. Closing the window shuts the app down;
//! no ticks are delivered afterwards.

mod app;
mod clock;
mod colors;
mod config;
mod faces;
mod geometry;
mod styles;
mod timefmt;
mod widgets;

use std::thread;

use app::{TickHandler, WatchfaceApp};
use clock::{ClockHost, LocalClock};
use colors::BACKGROUND;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use faces::FaceKind;

fn main() {
    // Two-color display with an OLED-style theme, scaled up for desktop use
    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledWhite)
        .scale(2)
        .build();
    let mut window = Window::new("Arcdial", &output_settings);

    display.clear(BACKGROUND).ok();

    // Initialize the app: loads styles, subscribes to ticks, renders once
    // so the display is never blank
    let mut app = WatchfaceApp::new(LocalClock::new(), FaceKind::default());
    app.init(&mut display);
    window.update(&display);

    // Second of the most recently delivered tick
    let mut last_second: Option<u8> = None;

    loop {
        // Handle window events (close, button presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    app.shutdown();
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // Y button: switch to the next face variant
                        Keycode::Y => app.cycle_face(&mut display),
                        // A button: flip the 12h/24h display preference
                        Keycode::A => {
                            app.clock_mut().toggle_style();
                            app.handle_tick(None, &mut display);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Deliver one tick per wall-clock second, with the sample captured
        // at the moment the change was detected
        let sample = app.clock().now();
        if last_second != Some(sample.second) {
            last_second = Some(sample.second);
            app.on_tick(Some(sample), &mut display);
        }

        window.update(&display);
        thread::sleep(FRAME_TIME);
    }
}
