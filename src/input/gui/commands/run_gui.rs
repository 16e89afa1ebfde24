use log::{error, info, warn};
use thiserror::Error;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{
    ConfigurationError, ExplorerConfig, InteractiveLoop, LoopError, LoopState,
};
use crate::input::gui::keyboard_input::KeyboardInput;
use crate::presenters::pixels::presenter::PixelsSink;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create framebuffer: {0}")]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    Present(#[from] LoopError<pixels::Error>),
}

/// Opens a fixed-size window and drives the interactive loop from winit's
/// event loop, one frame per redraw.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Blocks until the window is closed or Escape is pressed.
    pub fn execute(&self) -> Result<(), GuiError> {
        // Fail before any window exists.
        let size = self.config.validate()?;

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Quartic Explorer")
                .with_inner_size(LogicalSize::new(
                    f64::from(size.width()),
                    f64::from(size.height()),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let sink = PixelsSink::new(window, size)?;
        let mut frame_loop = InteractiveLoop::new(&self.config, KeyboardInput::default(), sink)?;
        let mut failure: Option<GuiError> = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => frame_loop.input_mut().request_quit(),
                WindowEvent::KeyboardInput { event: key_event, .. } => {
                    if let PhysicalKey::Code(key_code) = key_event.physical_key {
                        frame_loop
                            .input_mut()
                            .handle_key_event(key_code, key_event.state);
                    }
                }
                WindowEvent::Focused(false) => frame_loop.input_mut().release_all(),
                WindowEvent::Resized(new_size) => {
                    if let Err(e) = frame_loop
                        .sink_mut()
                        .resize_surface(new_size.width, new_size.height)
                    {
                        warn!("Failed to resize surface: {e}");
                    }
                }
                WindowEvent::RedrawRequested => match frame_loop.step() {
                    Ok(LoopState::Running) => {}
                    Ok(LoopState::Quitting) => elwt.exit(),
                    Err(e) => {
                        error!("Render error: {e}");
                        failure = Some(e.into());
                        elwt.exit();
                    }
                },
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        info!("Window closed after {} frames", frame_loop.stats().frames);

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
