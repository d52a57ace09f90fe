//! Input Bindings Module
//!
//! Maps physical keys to logical walking actions. Several keys may drive the
//! same action (WASD and the arrow keys both move).

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions for the walking controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    MoveForward,
    /// Move backward (default: S, ArrowDown)
    MoveBackward,
    /// Strafe left (default: A, ArrowLeft)
    MoveLeft,
    /// Strafe right (default: D, ArrowRight)
    MoveRight,
    /// Jump, only meaningful in gravity mode (default: Space)
    Jump,
}

/// Key-to-action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default layout.
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);

        bindings
    }

    /// Create bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
        }
    }

    /// Bind a key to an action, replacing whatever that key did before.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if key == KeyCode::Unknown {
            return;
        }
        self.key_to_action.insert(key, action);
    }

    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wasd_and_arrows() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(
            bindings.action_for(KeyCode::ArrowUp),
            Some(InputAction::MoveForward)
        );
        assert_eq!(bindings.action_for(KeyCode::A), Some(InputAction::MoveLeft));
        assert_eq!(
            bindings.action_for(KeyCode::ArrowRight),
            Some(InputAction::MoveRight)
        );
        assert_eq!(bindings.action_for(KeyCode::Space), Some(InputAction::Jump));
    }

    #[test]
    fn test_escape_unbound() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for(KeyCode::Escape), None);
        assert_eq!(bindings.action_for(KeyCode::Unknown), None);
    }

    #[test]
    fn test_rebind_replaces_action() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::Space, InputAction::MoveForward);
        assert_eq!(
            bindings.action_for(KeyCode::Space),
            Some(InputAction::MoveForward)
        );
        assert_eq!(
            bindings.action_for(KeyCode::W),
            Some(InputAction::MoveForward)
        );
    }

    #[test]
    fn test_unknown_cannot_be_bound() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(KeyCode::Unknown, InputAction::Jump);
        assert_eq!(bindings.action_for(KeyCode::Unknown), None);
    }
}
