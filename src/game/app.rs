//! Application context
//!
//! Everything the demo needs for a session, built once and passed to the
//! window loop. There is no global state: the window handler owns one
//! [`AppContext`] and drives it with input events and frame ticks.

use std::path::Path;

use glam::Vec3;

use crate::camera::{CameraControl, FpsCamera, LockAction, Pose};
use crate::error::ConfigError;
use crate::input::{InputEvent, KeyBindings, KeyCode};
use crate::player::{PlayerConfig, PlayerController};
use crate::world::{ObjectId, World};

use super::setup::populate_demo_world;

/// Placement of one object for the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectView {
    pub id: ObjectId,
    /// World-space center
    pub position: Vec3,
    pub scale: Vec3,
    /// 0xRRGGBB from the player palette
    pub color: u32,
}

/// The demo's world, player and key bindings.
#[derive(Debug)]
pub struct AppContext {
    pub world: World,
    pub player: PlayerController<FpsCamera>,
    pub bindings: KeyBindings,
}

impl AppContext {
    /// Build the demo scene with the player at the start position.
    pub fn new(config: PlayerConfig) -> Self {
        let (world, eye) = populate_demo_world();
        let mut player = PlayerController::new(FpsCamera::with_position(eye), config);
        player.set_collidables(world.ids());
        Self {
            world,
            player,
            bindings: KeyBindings::new(),
        }
    }

    /// Build the scene with config from `path`, or defaults when `None`.
    pub fn from_config_path(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let config = PlayerConfig::load(path)?;
                log::info!("loaded player config from {}", path.display());
                config
            }
            None => PlayerConfig::default(),
        };
        Ok(Self::new(config))
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.player.handle_input(event, &mut self.world);
    }

    /// Route a key edge through the bindings.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(event) = InputEvent::from_key(&self.bindings, key, pressed) {
            self.handle_input(event);
        }
    }

    /// Window focus change. Returns whether the cursor state needs applying.
    pub fn handle_focus(&mut self, focused: bool) -> bool {
        if focused {
            let action = self.player.camera_mut().pointer_mut().handle_focus_gained();
            return action == LockAction::Apply;
        }
        self.player.camera_mut().pointer_mut().handle_focus_lost();
        // Key-ups go to whichever window has focus now
        self.player.release_held_keys();
        true
    }

    pub fn update(&mut self, dt: f32) {
        self.player.update(dt, &mut self.world);
    }

    pub fn pose(&self) -> Pose {
        self.player.pose()
    }

    pub fn is_locked(&self) -> bool {
        self.player.camera().is_locked()
    }

    /// Per-object placement and color for this frame.
    pub fn object_views(&self) -> Vec<ObjectView> {
        let pose = self.pose();
        let palette = &self.player.config().palette;
        self.world
            .iter()
            .map(|(id, object)| ObjectView {
                id,
                position: object.world_center(&pose),
                scale: object.scale(),
                color: palette.color(object.appearance()),
            })
            .collect()
    }

    /// One-line summary for the window title.
    pub fn status_line(&self) -> String {
        if !self.is_locked() {
            return format!("walkabout - {}", self.player.camera().pointer().status_message());
        }
        let pose = self.pose();
        let interaction = self.player.interaction();
        let mut line = format!(
            "walkabout - pos ({:.1}, {:.1}, {:.1})",
            pose.position.x, pose.position.y, pose.position.z
        );
        if let Some(ObjectId(id)) = interaction.hovered() {
            line.push_str(&format!(" | hover #{id}"));
        }
        if let Some(ObjectId(id)) = interaction.selected() {
            line.push_str(&format!(" | carrying #{id}"));
        }
        line
    }
}
