//! Walkabout Engine Library
//!
//! A first-person walking controller: pointer-lock camera, probe-based
//! collision against a field of boxes, and hover/carry interaction with world
//! objects. Rendering is left to the caller, which reads the camera pose and
//! object placements each frame.
//!
//! # Modules
//!
//! - [`camera`] - Camera capability trait, yaw/pitch camera, pointer lock
//! - [`input`] - Platform-agnostic keys, bindings and input events
//! - [`physics`] - AABBs, bounded rays and nearest-hit probes
//! - [`world`] - Collidable objects and the world arena
//! - [`player`] - Movement and interaction controller
//!
//! # Example
//!
//! ```ignore
//! use walkabout_engine::camera::FpsCamera;
//! use walkabout_engine::input::InputEvent;
//! use walkabout_engine::player::{PlayerConfig, PlayerController};
//! use walkabout_engine::game::setup::populate_demo_world;
//!
//! let (mut world, eye) = populate_demo_world();
//! let mut player = PlayerController::new(FpsCamera::with_position(eye), PlayerConfig::default());
//! player.set_collidables(world.ids());
//!
//! player.handle_input(InputEvent::Lock, &mut world);
//! player.update(1.0 / 60.0, &mut world);
//! println!("{:?}", player.pose());
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::{CameraControl, FpsCamera, Pose};
pub use error::ConfigError;
pub use input::{InputAction, InputEvent, KeyBindings, KeyCode};
pub use player::{PlayerConfig, PlayerController, VerticalMode};
pub use world::{CollidableObject, ObjectId, World};
