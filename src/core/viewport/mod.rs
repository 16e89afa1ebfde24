pub mod apply;
pub mod commands;
pub mod settings;
#[allow(clippy::module_inception)]
pub mod viewport;

pub use apply::apply_commands;
pub use commands::{Command, CommandSet, InputSnapshot};
pub use settings::ViewportSettings;
pub use viewport::Viewport;
