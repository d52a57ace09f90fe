//! Collision detection module
//!
//! Ray-AABB intersection for the player's probes. Boxes are axis-aligned; the
//! slab method finds entry and exit times along each axis.
//!
//! # Example
//!
//! ```ignore
//! use walkabout_engine::physics::collision::{Aabb, Ray};
//! use glam::Vec3;
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 10.0);
//! let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
//!
//! if let Some(t) = ray.hit_distance(&aabb) {
//!     println!("Hit at distance {}", t);
//! }
//! ```

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Inclusive point containment.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Distance along a ray to where it enters an AABB, using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized for the result to be a distance)
/// * `aabb` - The box to test
///
/// # Returns
///
/// * `Some(t)` - Entry distance (t >= 0)
/// * `None` - The ray misses, the box is behind the origin, or the origin is
///   inside the box. Only outward-facing surfaces are pickable, so a ray that
///   starts inside a box does not see it.
pub fn ray_aabb_entry(ray_origin: Vec3, ray_dir: Vec3, aabb: &Aabb) -> Option<f32> {
    // Handle near-zero directions by using large values
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    // YZ planes
    let t1 = (aabb.min.x - ray_origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray_origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    // XZ planes
    let t3 = (aabb.min.y - ray_origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray_origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    // XY planes
    let t5 = (aabb.min.z - ray_origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray_origin.z) * inv_dir.z;

    t_min = t_min.max(t5.min(t6));
    t_max = t_max.min(t5.max(t6));

    if t_max >= t_min && t_min >= 0.0 {
        Some(t_min)
    } else {
        None
    }
}

/// A bounded ray. Hits count when `near <= distance <= far`; both ends are
/// inclusive for every probe the player casts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction (zero if constructed from a zero vector)
    pub direction: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here) reaching `far`.
    pub fn new(origin: Vec3, direction: Vec3, far: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            near: 0.0,
            far,
        }
    }

    /// Entry distance into `aabb` if it lies within `[near, far]`.
    pub fn hit_distance(&self, aabb: &Aabb) -> Option<f32> {
        if self.direction == Vec3::ZERO {
            return None;
        }
        ray_aabb_entry(self.origin, self.direction, aabb)
            .filter(|t| *t >= self.near && *t <= self.far)
    }
}
