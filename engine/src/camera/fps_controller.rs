//! FPS Camera Module
//!
//! First-person camera where mouse movement directly rotates the view while
//! the pointer is locked. Movement primitives come from [`CameraControl`].
//!
//! Key features:
//! - Direct mouse input → camera rotation (no button required)
//! - Configurable sensitivity (default: 0.002 rad/pixel)
//! - Pitch clamped to ±89 degrees to prevent gimbal lock
//! - Look input is ignored while the pointer is released

use glam::Vec3;

use super::pointer_lock::PointerLock;
use super::CameraControl;

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// FPS camera with an attached pointer-lock state.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = FpsCamera::with_position(Vec3::new(0.0, 10.0, 0.0));
/// camera.lock();
///
/// // In your input loop, pass raw mouse delta (in pixels)
/// camera.look(mouse_dx, mouse_dy);
///
/// // Walk relative to facing
/// camera.move_forward(1.5);
/// ```
#[derive(Clone, Debug)]
pub struct FpsCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to pitch_limits
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel (default: 0.002)
    pub sensitivity: f32,
    /// Pitch limits (min, max) in radians
    pitch_limits: (f32, f32),
    pointer: PointerLock,
}

impl Default for FpsCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.002,
            pitch_limits: (PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
            pointer: PointerLock::new(),
        }
    }
}

impl FpsCamera {
    /// Create a new camera at the origin with the pointer released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera at a custom position
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the pitch angle directly (in radians, will be clamped to limits)
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Pointer lock state, for the platform layer to mirror onto the window.
    pub fn pointer(&self) -> &PointerLock {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerLock {
        &mut self.pointer
    }
}

impl CameraControl for FpsCamera {
    fn is_locked(&self) -> bool {
        self.pointer.is_locked()
    }

    fn lock(&mut self) {
        self.pointer.lock();
    }

    fn unlock(&mut self) {
        self.pointer.unlock();
    }

    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline]
    fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a mouse movement delta (pixels).
    ///
    /// - Positive dx = mouse moved right = look right (increase yaw)
    /// - Positive dy = mouse moved down = look down (decrease pitch)
    fn look(&mut self, dx: f32, dy: f32) {
        if !self.pointer.is_locked() {
            return;
        }
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked_camera() -> FpsCamera {
        let mut camera = FpsCamera::new();
        camera.lock();
        camera
    }

    #[test]
    fn test_default_values() {
        let camera = FpsCamera::new();
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.sensitivity, 0.002);
        assert!(!camera.is_locked());
    }

    #[test]
    fn test_look_ignored_while_released() {
        let mut camera = FpsCamera::new();
        camera.look(100.0, 100.0);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_look_yaw() {
        let mut camera = locked_camera();
        camera.look(100.0, 0.0);

        // Yaw should increase by 100 * 0.002 = 0.2 radians
        assert!((camera.yaw - 0.2).abs() < 0.001);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_look_pitch() {
        let mut camera = locked_camera();
        camera.look(0.0, 100.0);
        assert!((camera.pitch - (-0.2)).abs() < 0.001);
    }

    #[test]
    fn test_pitch_clamping() {
        let mut camera = locked_camera();
        camera.look(0.0, -100000.0);
        let max_pitch = 89.0 * std::f32::consts::PI / 180.0;
        assert!((camera.pitch - max_pitch).abs() < 0.001);

        camera.look(0.0, 200000.0);
        assert!((camera.pitch + max_pitch).abs() < 0.001);
    }

    #[test]
    fn test_set_pitch_clamped() {
        let mut camera = FpsCamera::new();
        camera.set_pitch(10.0);
        let max_pitch = 89.0 * std::f32::consts::PI / 180.0;
        assert!((camera.pitch - max_pitch).abs() < 0.001);
    }

    #[test]
    fn test_move_forward_ignores_pitch() {
        let mut camera = locked_camera();
        camera.position = Vec3::new(0.0, 10.0, 0.0);
        camera.look(0.0, -300.0); // looking up

        camera.move_forward(5.0);

        assert!((camera.position.y - 10.0).abs() < 1e-6);
        assert!((camera.position.z - (-5.0)).abs() < 1e-5);
    }

    #[test]
    fn test_move_right_follows_yaw() {
        let mut camera = FpsCamera::new();
        camera.yaw = std::f32::consts::FRAC_PI_2; // facing +X, right is +Z

        camera.move_right(2.0);

        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5));
    }

    #[test]
    fn test_horizontal_axes_perpendicular() {
        let mut camera = FpsCamera::new();
        camera.yaw = 0.7;
        let forward = camera.horizontal_forward();
        let right = camera.horizontal_right();
        assert!(forward.dot(right).abs() < 1e-6);
        assert!((forward.length() - 1.0).abs() < 1e-6);
        assert!((right.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_forward_matches_horizontal_when_level() {
        let mut camera = FpsCamera::new();
        camera.yaw = 1.2;
        assert!(camera.forward().abs_diff_eq(camera.horizontal_forward(), 1e-5));
    }
}
