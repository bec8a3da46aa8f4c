use crate::error::TimelineResult;
use crate::render::{Scene, SceneConsumer};

/// Headless consumer for tests and batch use.
///
/// Validates every scene and remembers a few counts from the last one.
#[derive(Debug, Default)]
pub struct NullSceneConsumer {
    pub scenes_consumed: usize,
    pub last_block_count: usize,
    pub last_grid_mark_count: usize,
    pub last_height_px: Option<u32>,
    pub last_error: Option<String>,
}

impl SceneConsumer for NullSceneConsumer {
    fn consume(&mut self, scene: &Scene) -> TimelineResult<()> {
        scene.validate()?;
        self.scenes_consumed += 1;
        self.last_block_count = scene.event_blocks.len();
        self.last_grid_mark_count = scene.grid_marks.len();
        self.last_height_px = Some(scene.height_px);
        self.last_error = scene.error.clone();
        Ok(())
    }

    fn apply_height_px(&mut self, height_px: u32) {
        self.last_height_px = Some(height_px);
    }
}
