//! World arena
//!
//! Owns every collidable object for the session. Objects are added at setup
//! and never removed, so an [`ObjectId`] stays valid for the life of the world.

use glam::Vec3;

use super::object::{CollidableObject, Floor, ObjectId};
use crate::camera::Pose;

/// All world geometry the player interacts with.
#[derive(Debug, Default)]
pub struct World {
    objects: Vec<Box<dyn CollidableObject>>,
    pub floor: Floor,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floor(floor: Floor) -> Self {
        Self {
            objects: Vec::new(),
            floor,
        }
    }

    /// Add an object and return its handle.
    pub fn add(&mut self, object: impl CollidableObject + 'static) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(Box::new(object));
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&dyn CollidableObject> {
        self.objects.get(id.0 as usize).map(|o| o.as_ref())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut (dyn CollidableObject + 'static)> {
        self.objects.get_mut(id.0 as usize).map(|o| o.as_mut())
    }

    /// Handles of every object, in insertion order.
    pub fn ids(&self) -> Vec<ObjectId> {
        (0..self.objects.len() as u32).map(ObjectId).collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &dyn CollidableObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i as u32), o.as_ref()))
    }

    /// World-space position of an object, resolving camera parenting.
    pub fn world_center(&self, id: ObjectId, camera: &Pose) -> Option<Vec3> {
        self.get(id).map(|o| o.world_center(camera))
    }
}
