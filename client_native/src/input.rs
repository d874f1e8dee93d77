//! Window event to intent mapping
//!
//! Space, any pointer button, and touch all produce the same activate
//! action, so flapping feels identical across input devices.

use winit::event::{ElementState, TouchPhase};
use winit::keyboard::KeyCode;

/// A shell-level intent decoded from raw window events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Activate,
    Quit,
}

/// Handle a keyboard event. Repeats are ignored so the activate action
/// stays edge-triggered even with the key held down.
pub fn handle_key(code: KeyCode, state: ElementState, repeat: bool) -> Option<Intent> {
    if state != ElementState::Pressed || repeat {
        return None;
    }
    match code {
        KeyCode::Space => Some(Intent::Activate),
        KeyCode::Escape => Some(Intent::Quit),
        _ => None,
    }
}

/// Handle a mouse button event. Any button press activates.
pub fn handle_mouse(state: ElementState) -> Option<Intent> {
    match state {
        ElementState::Pressed => Some(Intent::Activate),
        ElementState::Released => None,
    }
}

/// Handle a touch event. Only the start of a touch activates.
pub fn handle_touch(phase: TouchPhase) -> Option<Intent> {
    match phase {
        TouchPhase::Started => Some(Intent::Activate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_press_activates() {
        assert_eq!(
            handle_key(KeyCode::Space, ElementState::Pressed, false),
            Some(Intent::Activate)
        );
    }

    #[test]
    fn test_space_release_is_ignored() {
        assert_eq!(handle_key(KeyCode::Space, ElementState::Released, false), None);
    }

    #[test]
    fn test_space_repeat_is_ignored() {
        assert_eq!(
            handle_key(KeyCode::Space, ElementState::Pressed, true),
            None,
            "Held keys must not auto-flap"
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(handle_key(KeyCode::KeyW, ElementState::Pressed, false), None);
        assert_eq!(handle_key(KeyCode::Enter, ElementState::Pressed, false), None);
    }

    #[test]
    fn test_escape_quits() {
        assert_eq!(
            handle_key(KeyCode::Escape, ElementState::Pressed, false),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn test_mouse_press_activates() {
        assert_eq!(handle_mouse(ElementState::Pressed), Some(Intent::Activate));
        assert_eq!(handle_mouse(ElementState::Released), None);
    }

    #[test]
    fn test_touch_start_activates() {
        assert_eq!(handle_touch(TouchPhase::Started), Some(Intent::Activate));
        assert_eq!(handle_touch(TouchPhase::Moved), None);
        assert_eq!(handle_touch(TouchPhase::Ended), None);
        assert_eq!(handle_touch(TouchPhase::Cancelled), None);
    }
}
