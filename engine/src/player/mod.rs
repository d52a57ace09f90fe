//! Player Module
//!
//! First-person walking and object interaction.
//!
//! # Components
//!
//! - [`PlayerController`] - Frame loop over a [`CameraControl`](crate::camera::CameraControl)
//!   - Drag-damped, camera-relative movement with probe-based collision
//!   - Optional gravity and jumping ([`VerticalMode::Gravity`])
//! - [`InteractionState`] - Hover highlight and carry/drop of a single object
//! - [`PlayerConfig`] - Tuning, loadable from JSON

pub mod config;
pub mod controller;
pub mod interaction;
pub mod movement;
pub mod state;

pub use config::{
    DRAG, FLOOR_HEIGHT, GRAVITY, JUMP_IMPULSE, MASS, PlayerConfig, SPEED, VerticalMode,
};
pub use controller::PlayerController;
pub use interaction::{InteractionState, Selection, TriggerOutcome};
pub use movement::{CollisionFlags, ProbeDirection};
pub use state::{MovementIntent, PlayerState};
