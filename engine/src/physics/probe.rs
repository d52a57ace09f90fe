//! Probe queries
//!
//! Casts a bounded [`Ray`] against a set of world objects. An empty result is
//! the normal "nothing in range" outcome, not an error.

use crate::camera::Pose;
use crate::world::{ObjectId, World};

use super::collision::Ray;

/// Nearest object a probe touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub object: ObjectId,
    /// Distance from the ray origin to the entry point
    pub distance: f32,
}

impl Ray {
    /// Nearest hit among `candidates`, skipping `exclude`.
    ///
    /// Camera-parented objects are tested at their current world placement
    /// (resolved through `camera`). Ids missing from `world` are ignored.
    pub fn nearest_hit(
        &self,
        world: &World,
        candidates: &[ObjectId],
        camera: &Pose,
        exclude: Option<ObjectId>,
    ) -> Option<ProbeHit> {
        candidates
            .iter()
            .copied()
            .filter(|id| Some(*id) != exclude)
            .filter_map(|id| {
                let object = world.get(id)?;
                let distance = self.hit_distance(&object.world_bounds(camera))?;
                Some(ProbeHit {
                    object: id,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Whether any candidate lies within range.
    pub fn is_blocked(
        &self,
        world: &World,
        candidates: &[ObjectId],
        camera: &Pose,
        exclude: Option<ObjectId>,
    ) -> bool {
        self.nearest_hit(world, candidates, camera, exclude).is_some()
    }
}
