//! Pointer Lock Module
//!
//! Tracks whether the pointer is captured for first-person control. This is the
//! controller's only externally visible mode switch: while released, the
//! player does not move and look input is dropped.
//!
//! The platform layer (window cursor grab, browser pointer lock) mirrors this
//! state whenever a handler returns [`LockAction::Apply`].
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut pointer = PointerLock::new();
//!
//! // Click on the canvas: capture
//! if pointer.handle_click() == LockAction::Apply {
//!     apply_grab(&window, pointer.should_grab_cursor());
//! }
//!
//! // ESC pressed: release
//! pointer.handle_escape();
//! ```

/// What the platform layer should do after a pointer-lock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    /// No change
    None,
    /// Re-apply cursor grab/visibility to the window
    Apply,
}

/// Pointer capture state.
#[derive(Debug, Clone)]
pub struct PointerLock {
    /// Whether the user asked for the pointer to be captured
    locked: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// State changed and the window has not been updated yet
    dirty: bool,
}

impl Default for PointerLock {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerLock {
    /// Create a released pointer lock. The demo starts behind a "click to play"
    /// prompt, so nothing is captured until the first click.
    pub fn new() -> Self {
        Self {
            locked: false,
            has_focus: true,
            dirty: true,
        }
    }

    /// Locked and focused. Input only drives the player in this state.
    pub fn is_locked(&self) -> bool {
        self.locked && self.has_focus
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after applying state to the window.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn lock(&mut self) {
        if !self.locked {
            self.locked = true;
            self.dirty = true;
            log::debug!("pointer locked");
        }
    }

    pub fn unlock(&mut self) {
        if self.locked {
            self.locked = false;
            self.dirty = true;
            log::debug!("pointer released");
        }
    }

    /// Click while released re-captures the pointer.
    pub fn handle_click(&mut self) -> LockAction {
        if !self.locked {
            self.lock();
            LockAction::Apply
        } else {
            LockAction::None
        }
    }

    /// ESC releases the pointer.
    pub fn handle_escape(&mut self) -> LockAction {
        if self.locked {
            self.unlock();
            LockAction::Apply
        } else {
            LockAction::None
        }
    }

    /// Focus loss suspends the lock without forgetting it.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
    }

    pub fn handle_focus_gained(&mut self) -> LockAction {
        self.has_focus = true;
        self.dirty = true;
        LockAction::Apply
    }

    /// Whether the window should grab and hide the cursor.
    pub fn should_grab_cursor(&self) -> bool {
        self.is_locked()
    }

    /// Human-readable status for the window title / overlay.
    pub fn status_message(&self) -> &'static str {
        if self.is_locked() {
            "Pointer locked. ESC to release."
        } else {
            "Click to play"
        }
    }
}
