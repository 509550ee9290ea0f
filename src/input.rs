//! Input handling
//!
//! Maps keyboard and touch state onto the game's actions. Scenes only see the
//! `Input` trait, so tests can script presses.

use macroquad::prelude::*;

/// Every action a scene can react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Space, or a tap on mobile
    PlaySound,
    /// Escape
    Exit,
}

impl Action {
    /// Keys bound to this action
    pub fn keys(&self) -> &'static [KeyCode] {
        match self {
            Action::PlaySound => &[KeyCode::Space],
            Action::Exit => &[KeyCode::Escape],
        }
    }

    /// Whether a new touch triggers this action
    pub fn on_tap(&self) -> bool {
        matches!(self, Action::PlaySound)
    }
}

/// Edge-triggered action queries for the current frame
pub trait Input {
    /// Check if action was just pressed this frame
    fn action_pressed(&self, action: Action) -> bool;
}

/// Live keyboard + touch input from macroquad
#[derive(Debug, Default)]
pub struct InputState {
    tapped: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.tapped = touches().iter().any(|t| t.phase == TouchPhase::Started);
    }
}

impl Input for InputState {
    fn action_pressed(&self, action: Action) -> bool {
        let key = action.keys().iter().any(|&k| is_key_pressed(k));
        key || (action.on_tap() && self.tapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(Action::PlaySound.keys(), &[KeyCode::Space]);
        assert_eq!(Action::Exit.keys(), &[KeyCode::Escape]);
    }

    #[test]
    fn test_only_play_sound_reacts_to_taps() {
        assert!(Action::PlaySound.on_tap());
        assert!(!Action::Exit.on_tap());
    }
}
