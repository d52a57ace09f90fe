//! Game Module
//!
//! Demo-specific wiring on top of the engine: the box-field scene and the
//! application context the binary drives.

pub mod app;
pub mod setup;

pub use app::{AppContext, ObjectView};
pub use setup::{BOX_COUNT, BOX_SPACING, START_EYE, populate_demo_world};
