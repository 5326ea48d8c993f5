//! Terminal frontend
//!
//! Presentation glue only: a display line, the button grid, key and
//! mouse wiring. Every interaction funnels into the core event
//! interface and reads the display back.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::TuiApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, render, UiAreas};
