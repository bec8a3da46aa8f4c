//! activity-timeline: layout engine for a day of activity events.
//!
//! Turns a calendar day, raw time-stamped events and view options into a
//! presentation-ready [`Scene`]: visible window, strip height, hour and
//! quarter-hour grid, and positioned, colored event blocks. Drawing is left
//! to a [`render::SceneConsumer`] owned by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig, ViewOptions, render_scene};
pub use error::{TimelineError, TimelineResult};
pub use render::Scene;
