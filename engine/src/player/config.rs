//! Player Tuning
//!
//! Every constant the controller uses lives here so it can be tuned from a
//! JSON file. Missing fields fall back to the defaults below.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkabout_engine::player::PlayerConfig;
//!
//! let config = PlayerConfig::from_json_str(r#"{ "speed": 250.0, "vertical_mode": "Gravity" }"#)?;
//! assert_eq!(config.drag, 10.0);
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::world::AppearancePalette;

/// Velocity drag factor (per second)
pub const DRAG: f32 = 10.0;

/// Movement acceleration from input (units/s^2)
pub const SPEED: f32 = 400.0;

/// Gravitational acceleration before mass scaling
pub const GRAVITY: f32 = 9.8;

/// Gravity multiplier
pub const MASS: f32 = 100.0;

/// Upward velocity applied on jump (units/s)
pub const JUMP_IMPULSE: f32 = 350.0;

/// Lowest eye height the player can reach
pub const FLOOR_HEIGHT: f32 = 10.0;

/// How the player's height evolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalMode {
    /// No gravity, no jumping. Height only changes through the floor clamp.
    #[default]
    HeightLocked,
    /// Gravity pulls the player down; a ground probe enables jumping.
    Gravity,
}

/// Tuning for movement, collision probes and interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Fraction of horizontal velocity removed per second.
    pub drag: f32,
    /// Acceleration applied along held movement directions.
    pub speed: f32,
    pub gravity: f32,
    pub mass: f32,
    pub jump_impulse: f32,

    /// Range of the four horizontal collision probes.
    pub collision_distance: f32,
    /// How far below the eye the horizontal probes start.
    pub probe_height_offset: f32,
    /// How far below the eye the ground probe starts.
    pub ground_probe_offset: f32,
    /// Range of the ground probe.
    pub ground_probe_distance: f32,
    pub floor_height: f32,

    /// Range of the pointer probe used for hovering.
    pub interactivity_distance: f32,
    /// Scale multiplier for the hovered object.
    pub hover_scale: f32,
    /// Scale multiplier for the carried object.
    pub carry_scale: f32,
    /// Camera-space offset of the carried object.
    pub carry_offset: Vec3,

    pub vertical_mode: VerticalMode,
    /// Whether the pointer probe can hover the object being carried.
    pub carried_object_hoverable: bool,
    /// Longest frame step integrated in one update (seconds).
    pub max_frame_delta: f32,

    pub palette: AppearancePalette,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            drag: DRAG,
            speed: SPEED,
            gravity: GRAVITY,
            mass: MASS,
            jump_impulse: JUMP_IMPULSE,
            collision_distance: 10.0,
            probe_height_offset: 5.0,
            ground_probe_offset: 10.0,
            ground_probe_distance: 10.0,
            floor_height: FLOOR_HEIGHT,
            interactivity_distance: 100.0,
            hover_scale: 1.1,
            carry_scale: 0.1,
            carry_offset: Vec3::new(0.0, 0.0, -5.0),
            vertical_mode: VerticalMode::HeightLocked,
            carried_object_hoverable: true,
            max_frame_delta: 0.1,
            palette: AppearancePalette::default(),
        }
    }
}

impl PlayerConfig {
    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Downward acceleration in gravity mode.
    #[inline]
    pub fn gravity_acceleration(&self) -> f32 {
        self.gravity * self.mass
    }

    pub fn with_vertical_mode(mut self, mode: VerticalMode) -> Self {
        self.vertical_mode = mode;
        self
    }

    /// Reject values the integrator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("drag", self.drag),
            ("speed", self.speed),
            ("gravity", self.gravity),
            ("mass", self.mass),
            ("jump_impulse", self.jump_impulse),
            ("collision_distance", self.collision_distance),
            ("probe_height_offset", self.probe_height_offset),
            ("ground_probe_offset", self.ground_probe_offset),
            ("ground_probe_distance", self.ground_probe_distance),
            ("interactivity_distance", self.interactivity_distance),
            ("hover_scale", self.hover_scale),
            ("carry_scale", self.carry_scale),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
            if value < 0.0 {
                return Err(invalid(field, "must not be negative"));
            }
        }

        if !self.floor_height.is_finite() {
            return Err(invalid("floor_height", "must be finite"));
        }
        if !self.carry_offset.is_finite() {
            return Err(invalid("carry_offset", "must be finite"));
        }
        if !(self.max_frame_delta.is_finite() && self.max_frame_delta > 0.0) {
            return Err(invalid("max_frame_delta", "must be a positive number of seconds"));
        }
        // Drag above 1/dt would flip the velocity sign within a single step.
        if self.drag * self.max_frame_delta > 1.0 {
            return Err(invalid("drag", "drag * max_frame_delta must not exceed 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
