//! Hover and Carry
//!
//! Tracks which object is under the pointer and which one the player is
//! carrying. At most one of each; they may be the same object.
//!
//! ```text
//! Idle ──pointer hit──> Hovering ──trigger──> Selected (carried)
//!   ^                      │                      │
//!   └──── pointer miss ────┘<─────── trigger ─────┘
//! ```
//!
//! Hover feedback (color and a slight grow) never touches the carried object;
//! its appearance and scale belong to the selection until it is dropped.

use glam::Vec3;

use crate::camera::Pose;
use crate::world::{Appearance, ObjectId, Parent, World};

use super::config::PlayerConfig;

/// The carried object and where it was picked up from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub object: ObjectId,
    /// World position at pickup, restored on drop
    pub original_position: Vec3,
}

/// What the trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Nothing hovered, or the hovered object is gone
    Ignored,
    Selected(ObjectId),
    Deselected(ObjectId),
}

/// Hover/selection bookkeeping. Holds handles only; objects live in the world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    hovered: Option<ObjectId>,
    selection: Option<Selection>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Handle of the carried object, if any.
    pub fn selected(&self) -> Option<ObjectId> {
        self.selection.map(|s| s.object)
    }

    pub fn is_carrying(&self) -> bool {
        self.selection.is_some()
    }

    fn is_selected(&self, id: ObjectId) -> bool {
        self.selected() == Some(id)
    }

    /// Feed this frame's pointer probe result.
    ///
    /// A new candidate swaps the hover highlight over; losing the candidate
    /// clears it; the same candidate as last frame changes nothing.
    pub fn update_hover(
        &mut self,
        candidate: Option<ObjectId>,
        world: &mut World,
        config: &PlayerConfig,
    ) {
        if candidate == self.hovered {
            return;
        }

        if let Some(previous) = self.hovered.take() {
            self.reset_hover_effect(previous, world);
        }

        if let Some(id) = candidate {
            if !self.is_selected(id) {
                match world.get_mut(id) {
                    Some(object) => {
                        let scale = object.rest_scale() * config.hover_scale;
                        object.set_appearance(Appearance::Hovering);
                        object.set_scale(scale);
                    }
                    None => {
                        log::warn!("hover candidate {id:?} is not in the world");
                        return;
                    }
                }
            }
            log::debug!("hovering {id:?}");
        }
        self.hovered = candidate;
    }

    fn reset_hover_effect(&self, id: ObjectId, world: &mut World) {
        if self.is_selected(id) {
            return;
        }
        if let Some(object) = world.get_mut(id) {
            let scale = object.rest_scale();
            object.set_appearance(Appearance::Default);
            object.set_scale(scale);
        }
    }

    /// Select trigger: pick up the hovered object, or drop the carried one.
    ///
    /// Only acts while something is hovered.
    pub fn trigger(
        &mut self,
        world: &mut World,
        config: &PlayerConfig,
        camera: &Pose,
    ) -> TriggerOutcome {
        let Some(hovered) = self.hovered else {
            return TriggerOutcome::Ignored;
        };

        if self.selection.is_some() {
            match self.deselect(world) {
                Some(id) => TriggerOutcome::Deselected(id),
                None => TriggerOutcome::Ignored,
            }
        } else if self.select(hovered, world, config, camera) {
            TriggerOutcome::Selected(hovered)
        } else {
            TriggerOutcome::Ignored
        }
    }

    /// Attach `id` to the camera as the carried object.
    ///
    /// Returns `false` (and changes nothing) if something is already carried
    /// or `id` is not in the world.
    pub fn select(
        &mut self,
        id: ObjectId,
        world: &mut World,
        config: &PlayerConfig,
        camera: &Pose,
    ) -> bool {
        if let Some(current) = self.selection {
            log::warn!("select {id:?} ignored, already carrying {:?}", current.object);
            return false;
        }
        let Some(object) = world.get_mut(id) else {
            log::warn!("select: object {id:?} is not in the world");
            return false;
        };

        let original_position = object.world_center(camera);
        let scale = object.rest_scale() * config.carry_scale;
        object.set_parent(Parent::Camera);
        object.set_position(config.carry_offset);
        object.set_scale(scale);
        object.set_appearance(Appearance::Selected);

        self.selection = Some(Selection {
            object: id,
            original_position,
        });
        log::debug!("picked up {id:?} from {original_position}");
        true
    }

    /// Put the carried object back where it was picked up.
    ///
    /// Returns the dropped handle, or `None` if nothing could be dropped.
    pub fn deselect(&mut self, world: &mut World) -> Option<ObjectId> {
        let Some(selection) = self.selection.take() else {
            log::warn!("deselect without a selection");
            return None;
        };
        let id = selection.object;

        let Some(object) = world.get_mut(id) else {
            log::warn!("deselect: carried object {id:?} is not in the world");
            return None;
        };
        let scale = object.rest_scale();
        object.set_parent(Parent::World);
        object.set_position(selection.original_position);
        object.set_scale(scale);
        object.set_appearance(Appearance::Default);

        // Let the next pointer probe re-highlight it
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        log::debug!("dropped {id:?} at {}", selection.original_position);
        Some(id)
    }
}
