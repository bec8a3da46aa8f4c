mod engine;
pub mod event_layout;
pub mod grid_builder;
mod json_contract;
mod navigation;
mod render_coordinator;
mod view_options;

pub use engine::TimelineEngine;
pub use event_layout::{
    DropReason, EventLayout, MIN_BLOCK_HEIGHT_PCT, layout_events, layout_parsed_events,
};
pub use grid_builder::{build_grid_lines, build_hour_labels};
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
pub use navigation::{NavigationRequest, Navigator};
pub use render_coordinator::render_scene;
pub use view_options::{TimelineEngineConfig, ViewOptions};
