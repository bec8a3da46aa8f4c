mod null_consumer;
mod primitives;
mod scene;

pub use null_consumer::NullSceneConsumer;
pub use primitives::Color;
pub use scene::{EMPTY_STATE_NOTICE, EventBlock, GridMark, HourLabel, Scene};

use crate::error::TimelineResult;

/// Contract implemented by any presentation layer.
///
/// Consumers receive a fully computed `Scene`; they never see raw events or
/// take part in layout.
pub trait SceneConsumer {
    fn consume(&mut self, scene: &Scene) -> TimelineResult<()>;

    /// Immediate height hint sent before a slider-driven recompute.
    fn apply_height_px(&mut self, _height_px: u32) {}
}
