use crate::core::viewport::commands::{Command, CommandSet};
use crate::core::viewport::viewport::Viewport;

/// Applies every held command to the viewport, each with its full per-tick
/// step, in [`Command::ALL`] order. Steps are per frame, not per second.
///
/// Pan steps are scaled by the zoom the frame started with, so a pan held
/// together with a zoom moves the same distance as a pan on its own.
pub fn apply_commands(viewport: &mut Viewport, commands: CommandSet) {
    let frame_zoom = viewport.zoom();

    for command in commands.iter() {
        apply_command(viewport, command, frame_zoom);
    }
}

fn apply_command(viewport: &mut Viewport, command: Command, frame_zoom: f64) {
    let settings = *viewport.settings();
    let pan = settings.pan_step_pixels;

    match command {
        Command::ZoomIn => viewport.zoom_in(settings.zoom_factor),
        Command::ZoomOut => viewport.zoom_out(settings.zoom_factor),
        Command::PanLeft => viewport.pan_at_zoom(-pan, 0.0, frame_zoom),
        Command::PanRight => viewport.pan_at_zoom(pan, 0.0, frame_zoom),
        Command::PanUp => viewport.pan_at_zoom(0.0, -pan, frame_zoom),
        Command::PanDown => viewport.pan_at_zoom(0.0, pan, frame_zoom),
        // A smaller base grows the depth cap faster.
        Command::AccuracyUp => viewport.adjust_accuracy(-settings.accuracy_step),
        Command::AccuracyDown => viewport.adjust_accuracy(settings.accuracy_step),
    }
}
