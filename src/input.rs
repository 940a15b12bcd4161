//! Keyboard input handling
//!
//! Discrete key presses become [`Command`]s; held arrow keys are sampled once
//! per frame into a [`TickInput`]. Keys are matched on their logical value, so
//! spawn follows the letter R on any keyboard layout.

use winit::keyboard::{Key, NamedKey};

use crate::sim::TickInput;

/// One-shot actions triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the loop after the current frame
    Quit,
    /// Add one ball to the session
    Spawn,
}

/// Held-key tracker
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    left: bool,
    right: bool,
}

impl InputState {
    /// Record a key transition. Auto-repeat presses only refresh held state.
    pub fn key_changed(&mut self, key: &Key, pressed: bool, repeat: bool) -> Option<Command> {
        match key {
            Key::Named(NamedKey::ArrowLeft) => self.left = pressed,
            Key::Named(NamedKey::ArrowRight) => self.right = pressed,
            Key::Named(NamedKey::Escape) if pressed => return Some(Command::Quit),
            Key::Character(c) if pressed && !repeat && c.eq_ignore_ascii_case("r") => {
                return Some(Command::Spawn);
            }
            _ => {}
        }
        None
    }

    /// Release everything (window lost focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for this frame's tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}
