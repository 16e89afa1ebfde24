use crate::controllers::interactive::ports::input_source::InputSource;
use crate::core::viewport::commands::{Command, CommandSet, InputSnapshot};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Key bindings for the viewport commands.
#[must_use]
pub fn command_for_key(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Equal => Some(Command::ZoomIn),
        KeyCode::Minus => Some(Command::ZoomOut),
        KeyCode::KeyA => Some(Command::PanLeft),
        KeyCode::KeyD => Some(Command::PanRight),
        KeyCode::KeyW => Some(Command::PanUp),
        KeyCode::KeyS => Some(Command::PanDown),
        KeyCode::ArrowUp => Some(Command::AccuracyUp),
        KeyCode::ArrowDown => Some(Command::AccuracyDown),
        _ => None,
    }
}

/// Tracks which bound keys are held between frames. Fed from winit window
/// events and polled once per frame by the interactive loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardInput {
    held: CommandSet,
    quit_requested: bool,
}

impl KeyboardInput {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        if key_code == KeyCode::Escape && pressed {
            self.quit_requested = true;
            return;
        }

        if let Some(command) = command_for_key(key_code) {
            self.held.set(command, pressed);
        }
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Drops every held key, e.g. when the window loses focus and release
    /// events would never arrive.
    pub fn release_all(&mut self) {
        self.held = CommandSet::default();
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> InputSnapshot {
        InputSnapshot {
            quit: self.quit_requested,
            commands: self.held,
        }
    }
}
