//! World Objects
//!
//! The player controller only ever touches objects through the
//! [`CollidableObject`] capability: position, scale, appearance, parent and
//! bounds. Rendering state (meshes, materials) stays with the render layer,
//! which reads the appearance and picks a color from an [`AppearancePalette`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::Pose;
use crate::physics::Aabb;

/// Stable handle into the [`World`](super::World) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Interaction feedback state of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Appearance {
    #[default]
    Default,
    Hovering,
    Selected,
}

/// What an object's position is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parent {
    /// Position is a world-space position.
    #[default]
    World,
    /// Position is an offset in camera space; the object follows the camera.
    Camera,
}

/// RGB colors (0xRRGGBB) for each appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearancePalette {
    pub default: u32,
    pub hovering: u32,
    pub selected: u32,
}

impl Default for AppearancePalette {
    fn default() -> Self {
        Self {
            default: 0x00ff00,
            hovering: 0xffab2e,
            selected: 0xe63131,
        }
    }
}

impl AppearancePalette {
    pub fn color(&self, appearance: Appearance) -> u32 {
        match appearance {
            Appearance::Default => self.default,
            Appearance::Hovering => self.hovering,
            Appearance::Selected => self.selected,
        }
    }
}

/// Anything the player can bump into, hover and carry.
pub trait CollidableObject: std::fmt::Debug {
    /// Position relative to [`parent`](Self::parent).
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    fn scale(&self) -> Vec3;

    fn set_scale(&mut self, scale: Vec3);

    /// Scale the object has when nothing is interacting with it.
    fn rest_scale(&self) -> Vec3;

    fn appearance(&self) -> Appearance;

    fn set_appearance(&mut self, appearance: Appearance);

    fn parent(&self) -> Parent;

    fn set_parent(&mut self, parent: Parent);

    /// Unscaled half extents of the object's box around its origin.
    fn half_extents(&self) -> Vec3;

    /// World-space position of the object's origin.
    fn world_center(&self, camera: &Pose) -> Vec3 {
        match self.parent() {
            Parent::World => self.position(),
            Parent::Camera => camera.local_to_world(self.position()),
        }
    }

    /// World-space bounds used by probes.
    ///
    /// Camera-parented objects keep an axis-aligned box around their rotated
    /// center; their orientation is not applied to the extents.
    fn world_bounds(&self, camera: &Pose) -> Aabb {
        Aabb::from_center_half_extents(
            self.world_center(camera),
            self.half_extents() * self.scale(),
        )
    }
}

/// Edge length of the demo boxes.
pub const BOX_SIZE: f32 = 20.0;

/// An axis-aligned box sitting in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxObject {
    position: Vec3,
    scale: Vec3,
    rest_scale: Vec3,
    size: Vec3,
    appearance: Appearance,
    parent: Parent,
}

impl BoxObject {
    /// A `BOX_SIZE` cube centered at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::ONE,
            rest_scale: Vec3::ONE,
            size: Vec3::splat(BOX_SIZE),
            appearance: Appearance::Default,
            parent: Parent::World,
        }
    }
}

impl CollidableObject for BoxObject {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    fn rest_scale(&self) -> Vec3 {
        self.rest_scale
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    fn parent(&self) -> Parent {
        self.parent
    }

    fn set_parent(&mut self, parent: Parent) {
        self.parent = parent;
    }

    fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }
}

/// The ground plane. Purely visual: the controller keeps the player above it
/// with a floor height, not with probes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    /// Width and depth of the plane
    pub size: f32,
    /// Y coordinate of the plane
    pub height: f32,
    pub color: u32,
}

impl Default for Floor {
    fn default() -> Self {
        Self {
            size: 2000.0,
            height: 0.0,
            color: 0x999999,
        }
    }
}
