//! World Module
//!
//! World geometry the player walks among: collidable objects behind a
//! capability trait, the floor, and the arena that owns them.

pub mod object;
pub mod scene;

pub use object::{
    Appearance, AppearancePalette, BOX_SIZE, BoxObject, CollidableObject, Floor, ObjectId, Parent,
};
pub use scene::World;
