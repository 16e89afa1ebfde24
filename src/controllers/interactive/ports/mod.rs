//! Port definitions for the interactive loop.
//!
//! Contains the traits the loop uses to talk to the outside world: where
//! input comes from and where finished frames go.

pub mod input_source;
pub mod presentation_sink;

pub use input_source::InputSource;
pub use presentation_sink::PresentationSink;
