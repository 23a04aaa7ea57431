//! Terminal presentation surface for the keypad

mod app;
mod input;
mod keypad;
mod ui;

pub use app::KeypadApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, KeypadUI};
