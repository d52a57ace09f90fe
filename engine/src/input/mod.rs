//! Input Module
//!
//! Platform-agnostic input for the walking controls. The platform layer turns
//! window events into [`InputEvent`]s and hands them to the player controller.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkabout_engine::input::{InputEvent, KeyBindings, KeyCode};
//!
//! let bindings = KeyBindings::new();
//!
//! if let Some(event) = InputEvent::from_key(&bindings, KeyCode::W, true) {
//!     controller.handle_input(event, &mut world);
//! }
//! ```

pub mod bindings;
pub mod keyboard;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::KeyCode;

/// Discrete input delivered to the player controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A bound key went down (`pressed = true`) or up.
    Action { action: InputAction, pressed: bool },
    /// Select/carry trigger (primary mouse button press).
    Trigger,
    /// Mouse motion in pixels.
    Look { dx: f32, dy: f32 },
    /// Request pointer capture.
    Lock,
    /// Release pointer capture.
    Unlock,
}

impl InputEvent {
    /// Translate a key edge through `bindings`.
    ///
    /// Escape always maps to [`InputEvent::Unlock`] on press. Unbound keys and
    /// Escape releases produce nothing.
    pub fn from_key(bindings: &KeyBindings, key: KeyCode, pressed: bool) -> Option<Self> {
        if key == KeyCode::Escape {
            return pressed.then_some(InputEvent::Unlock);
        }
        bindings
            .action_for(key)
            .map(|action| InputEvent::Action { action, pressed })
    }
}
