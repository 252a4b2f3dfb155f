//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit, TogglePause, etc.
//! Pointer movement is NOT mapped here - it goes to the PointerTracker.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Stop or restart the animation (Space)
    TogglePause,
    /// New random layout with the same particle count (R key)
    Reseed,
}

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Space => Some(InputAction::TogglePause),
            KeyCode::KeyR => Some(InputAction::Reseed),
            _ => None,
        }
    }
}
