//! Camera Module
//!
//! Provides the first-person camera capability the player controller drives.
//! This module is window-system agnostic - it only deals with camera state and math.
//!
//! The controller never owns a concrete camera type. It holds anything that
//! implements [`CameraControl`]: lock state, a position, a yaw/pitch
//! orientation and the "move relative to facing" primitives.

pub mod fps_controller;
pub mod pointer_lock;

pub use fps_controller::FpsCamera;
pub use pointer_lock::{LockAction, PointerLock};

use glam::{Quat, Vec3};

/// Read-only snapshot of the camera for the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Camera position in world space
    pub position: Vec3,
    /// Camera orientation (yaw about +Y, then pitch about the local X axis)
    pub orientation: Quat,
    /// Horizontal angle in radians (0 looks toward -Z)
    pub yaw: f32,
    /// Vertical angle in radians (positive looks up)
    pub pitch: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Pose {
    /// Build a pose from position and yaw/pitch angles.
    pub fn from_angles(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            orientation: orientation_from_angles(yaw, pitch),
            yaw,
            pitch,
        }
    }

    /// Full look direction (includes pitch).
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Transform a point from camera-local space into world space.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation * local
    }
}

/// Orientation quaternion for a yaw/pitch pair.
///
/// Yaw 0 / pitch 0 looks down -Z. Positive yaw turns right (toward +X).
pub fn orientation_from_angles(yaw: f32, pitch: f32) -> Quat {
    Quat::from_rotation_y(-yaw) * Quat::from_rotation_x(pitch)
}

/// Camera-control capability consumed by the player controller.
///
/// Implementors supply lock state, position and angles. Direction vectors and
/// the move primitives are derived from those.
pub trait CameraControl {
    /// Whether input is currently captured (pointer lock engaged).
    fn is_locked(&self) -> bool;

    /// Engage pointer lock.
    fn lock(&mut self);

    /// Release pointer lock.
    fn unlock(&mut self);

    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// Horizontal angle in radians.
    fn yaw(&self) -> f32;

    /// Vertical angle in radians.
    fn pitch(&self) -> f32;

    /// Rotate the camera from a mouse delta in pixels.
    fn look(&mut self, dx: f32, dy: f32);

    fn orientation(&self) -> Quat {
        orientation_from_angles(self.yaw(), self.pitch())
    }

    /// Full look direction including pitch.
    fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Forward direction flattened onto the XZ plane.
    fn horizontal_forward(&self) -> Vec3 {
        let yaw = self.yaw();
        Vec3::new(yaw.sin(), 0.0, -yaw.cos())
    }

    /// Right direction on the XZ plane.
    fn horizontal_right(&self) -> Vec3 {
        let yaw = self.yaw();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// Move along the horizontal facing direction. Height is unchanged.
    fn move_forward(&mut self, distance: f32) {
        let position = self.position() + self.horizontal_forward() * distance;
        self.set_position(position);
    }

    /// Strafe along the horizontal right direction. Height is unchanged.
    fn move_right(&mut self, distance: f32) {
        let position = self.position() + self.horizontal_right() * distance;
        self.set_position(position);
    }

    fn pose(&self) -> Pose {
        Pose {
            position: self.position(),
            orientation: self.orientation(),
            yaw: self.yaw(),
            pitch: self.pitch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_orientation_looks_down_neg_z() {
        let pose = Pose::from_angles(Vec3::ZERO, 0.0, 0.0);
        let forward = pose.forward();
        assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn test_positive_yaw_turns_right() {
        let pose = Pose::from_angles(Vec3::ZERO, std::f32::consts::FRAC_PI_2, 0.0);
        let forward = pose.forward();
        assert!(forward.abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn test_positive_pitch_looks_up() {
        let pose = Pose::from_angles(Vec3::ZERO, 0.0, 0.3);
        assert!(pose.forward().y > 0.0);
        assert!((pose.forward().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_local_to_world_follows_yaw() {
        let pose = Pose::from_angles(Vec3::new(1.0, 2.0, 3.0), std::f32::consts::FRAC_PI_2, 0.0);
        let world = pose.local_to_world(Vec3::new(0.0, 0.0, -5.0));
        assert!(world.abs_diff_eq(Vec3::new(6.0, 2.0, 3.0), 1e-4));
    }
}
