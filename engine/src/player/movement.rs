//! Player Movement
//!
//! One frame of movement is a fixed pipeline over camera-local velocity:
//!
//! 1. Drag bleeds off horizontal velocity
//! 2. Gravity accumulates on `v.y` (gravity mode only)
//! 3. Held keys accelerate along the intent direction
//! 4. Directional probes report nearby boxes
//! 5. Blocked directions lose the velocity component heading into them
//! 6. The camera moves by the remaining velocity
//!
//! The helpers here are free functions over plain values so each stage can be
//! tested on its own; [`PlayerController`](super::PlayerController) strings
//! them together.

use glam::Vec3;

use crate::camera::{CameraControl, Pose};
use crate::physics::Ray;
use crate::world::{ObjectId, World};

use super::config::PlayerConfig;
use super::state::MovementIntent;

/// Direction a collision probe is cast in, relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeDirection {
    Front,
    Back,
    Left,
    Right,
    /// Straight down; gravity mode only
    Bottom,
}

/// Which probes touched something this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    pub front: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

impl CollisionFlags {
    pub fn set(&mut self, direction: ProbeDirection, blocked: bool) {
        match direction {
            ProbeDirection::Front => self.front = blocked,
            ProbeDirection::Back => self.back = blocked,
            ProbeDirection::Left => self.left = blocked,
            ProbeDirection::Right => self.right = blocked,
            ProbeDirection::Bottom => self.bottom = blocked,
        }
    }

    pub fn any(&self) -> bool {
        self.front || self.back || self.left || self.right || self.bottom
    }
}

/// Exponential drag on the horizontal components.
#[inline]
pub fn apply_drag(velocity: &mut Vec3, drag: f32, dt: f32) {
    velocity.x -= velocity.x * drag * dt;
    velocity.z -= velocity.z * drag * dt;
}

/// Constant downward acceleration.
#[inline]
pub fn apply_gravity(velocity: &mut Vec3, acceleration: f32, dt: f32) {
    velocity.y -= acceleration * dt;
}

/// Accelerate along the held directions.
///
/// Forward intent drives `v.z` negative and right intent drives `v.x`
/// negative; the translate step negates both again.
pub fn apply_intent(velocity: &mut Vec3, intent: &MovementIntent, speed: f32, dt: f32) {
    let direction = intent.direction();
    if intent.forward || intent.backward {
        velocity.z -= direction.z * speed * dt;
    }
    if intent.left || intent.right {
        velocity.x -= direction.x * speed * dt;
    }
}

/// Drop the velocity components that would push into a blocked side.
pub fn clamp_velocity(velocity: &mut Vec3, flags: &CollisionFlags) {
    if flags.front {
        velocity.z = velocity.z.max(0.0);
    }
    if flags.back {
        velocity.z = velocity.z.min(0.0);
    }
    if flags.left {
        velocity.x = velocity.x.min(0.0);
    }
    if flags.right {
        velocity.x = velocity.x.max(0.0);
    }
    if flags.bottom {
        velocity.y = velocity.y.max(0.0);
    }
}

/// Collision probes for the current camera placement.
///
/// Horizontal probes follow the camera yaw only, so looking up or down does
/// not tilt them into the floor or sky.
pub fn collision_probes<C: CameraControl + ?Sized>(
    camera: &C,
    config: &PlayerConfig,
    with_ground: bool,
) -> Vec<(ProbeDirection, Ray)> {
    let position = camera.position();
    let forward = camera.horizontal_forward();
    let right = camera.horizontal_right();
    let origin = position - Vec3::Y * config.probe_height_offset;
    let range = config.collision_distance;

    let mut probes = vec![
        (ProbeDirection::Front, Ray::new(origin, forward, range)),
        (ProbeDirection::Back, Ray::new(origin, -forward, range)),
        (ProbeDirection::Left, Ray::new(origin, -right, range)),
        (ProbeDirection::Right, Ray::new(origin, right, range)),
    ];
    if with_ground {
        probes.push((
            ProbeDirection::Bottom,
            Ray::new(
                position - Vec3::Y * config.ground_probe_offset,
                Vec3::NEG_Y,
                config.ground_probe_distance,
            ),
        ));
    }
    probes
}

/// Cast every collision probe and collect which ones hit.
pub fn sense_collisions<C: CameraControl + ?Sized>(
    camera: &C,
    config: &PlayerConfig,
    world: &World,
    candidates: &[ObjectId],
    exclude: Option<ObjectId>,
    with_ground: bool,
) -> CollisionFlags {
    let pose: Pose = camera.pose();
    let mut flags = CollisionFlags::default();
    for (direction, ray) in collision_probes(camera, config, with_ground) {
        flags.set(direction, ray.is_blocked(world, candidates, &pose, exclude));
    }
    flags
}

/// Move the camera by camera-local velocity.
pub fn translate<C: CameraControl + ?Sized>(camera: &mut C, velocity: Vec3, dt: f32) {
    camera.move_right(-velocity.x * dt);
    camera.move_forward(-velocity.z * dt);
}

/// Usable frame step, or `None` when the frame should not move anything.
pub fn effective_delta(dt: f32, max_frame_delta: f32) -> Option<f32> {
    if !dt.is_finite() || dt <= 0.0 {
        return None;
    }
    Some(dt.min(max_frame_delta))
}
