//! Physics module
//!
//! Just enough geometry for probe-based collision: boxes, bounded rays and
//! nearest-hit queries over the world. There is no rigid-body simulation.
//!
//! # Unit System
//!
//! World units follow the scene (boxes are 20 units wide, the eye sits 10
//! units above the floor). Velocities are units per second.
//!
//! # Submodules
//!
//! - [`collision`] - `Aabb`, slab-method ray entry, bounded `Ray`
//! - [`probe`] - nearest-hit queries against world objects

pub mod collision;
pub mod probe;

pub use collision::{Aabb, Ray, ray_aabb_entry};
pub use probe::ProbeHit;
