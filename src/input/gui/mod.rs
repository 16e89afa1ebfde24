//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window and
//! keyboard handling and pixels for framebuffer presentation.

pub mod commands;
pub mod keyboard_input;

pub use commands::run_gui::{GuiError, RunGuiCommand};
pub use keyboard_input::KeyboardInput;
