//! Demo scene
//!
//! A row of boxes in front of the player on a large floor.

use glam::Vec3;

use crate::world::{BoxObject, Floor, World};

/// Number of boxes in the row.
pub const BOX_COUNT: u32 = 30;

/// Distance between box centers along +X.
pub const BOX_SPACING: f32 = 30.0;

/// Box centers sit this high, resting on the floor.
const BOX_CENTER_Y: f32 = 10.0;

/// Depth of the box row.
const BOX_ROW_Z: f32 = -30.0;

/// Where the player's eye starts.
pub const START_EYE: Vec3 = Vec3::new(0.0, 10.0, 0.0);

/// Build the demo world and return it with the starting eye position.
pub fn populate_demo_world() -> (World, Vec3) {
    let mut world = World::with_floor(Floor::default());
    for i in 0..BOX_COUNT {
        world.add(BoxObject::new(Vec3::new(
            i as f32 * BOX_SPACING,
            BOX_CENTER_Y,
            BOX_ROW_Z,
        )));
    }
    log::info!(
        "demo world: {} boxes on a {}x{} floor",
        world.len(),
        world.floor.size,
        world.floor.size
    );
    (world, START_EYE)
}
