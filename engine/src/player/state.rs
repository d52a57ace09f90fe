//! Player kinematic state
//!
//! Velocity is kept in the camera-local frame: `x` along the camera's right
//! axis, `z` along its back axis (holding forward drives `z` negative) and `y`
//! along world up.

use glam::Vec3;

use crate::input::InputAction;

/// Which movement keys are currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementIntent {
    /// Record a key-down or key-up for a movement action. Returns `false` for
    /// actions that are not movement directions.
    pub fn set(&mut self, action: InputAction, pressed: bool) -> bool {
        match action {
            InputAction::MoveForward => self.forward = pressed,
            InputAction::MoveBackward => self.backward = pressed,
            InputAction::MoveLeft => self.left = pressed,
            InputAction::MoveRight => self.right = pressed,
            InputAction::Jump => return false,
        }
        true
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Unit intent vector: `z = forward - backward`, `x = right - left`.
    ///
    /// Opposing keys cancel; no keys (or only cancelling keys) yields zero.
    pub fn direction(&self) -> Vec3 {
        let z = self.forward as i32 - self.backward as i32;
        let x = self.right as i32 - self.left as i32;
        Vec3::new(x as f32, 0.0, z as f32).normalize_or_zero()
    }
}

/// Mutable per-frame state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerState {
    /// Eye position, mirrored from the camera after every frame
    pub position: Vec3,
    /// Camera-local velocity
    pub velocity: Vec3,
    pub movement_intent: MovementIntent,
    /// Set only while grounded in gravity mode
    pub can_jump: bool,
}

impl PlayerState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Horizontal speed in the camera-local frame.
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}
