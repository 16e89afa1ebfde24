use std::path::PathBuf;

use env_logger::Env;
use log::{error, info};
use quartic_explorer::{
    ExplorerConfig, InteractiveLoop, PpmFileSink, ScriptedInput, headless_frames_from_env,
};

const OUTPUT_ENV: &str = "QUARTIC_OUTPUT";
const DEFAULT_OUTPUT: &str = "output/quartic.ppm";

/// Renders a fixed number of idle frames without a window and leaves the
/// last one on disk as a PPM image.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e}");
        return Err(e);
    }

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ExplorerConfig::default().with_env_overrides()?;
    let frames = headless_frames_from_env()?;
    let output = std::env::var(OUTPUT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT));

    let mut frame_loop = InteractiveLoop::new(
        &config,
        ScriptedInput::idle(frames),
        PpmFileSink::new(&output),
    )?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let presented = frame_loop.run()?;
    info!("Rendered {} frames to {}", presented, output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_loop_writes_last_frame() {
        let output = std::env::temp_dir().join(format!("quartic_main_{}.ppm", std::process::id()));
        let config = ExplorerConfig { width: 64, height: 64, ..ExplorerConfig::default() };

        let mut frame_loop =
            InteractiveLoop::new(&config, ScriptedInput::idle(2), PpmFileSink::new(&output)).unwrap();
        let presented = frame_loop.run().unwrap();

        assert_eq!(presented, 2);
        assert_eq!(frame_loop.sink().frames_written(), 2);
        assert!(std::fs::read(&output).unwrap().starts_with(b"P6\n64 64\n255\n"));
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_headless_loop_rejects_tiny_grid() {
        let config = ExplorerConfig { width: 10, height: 10, ..ExplorerConfig::default() };

        let result = InteractiveLoop::new(&config, ScriptedInput::idle(1), PpmFileSink::new("unused.ppm"));

        assert!(result.is_err());
    }
}
