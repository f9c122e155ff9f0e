//! Keyboard input adapter
//!
//! Key events arrive whenever the host delivers them; the game loop samples
//! the result once per tick. Movement keys are level-triggered (held or not),
//! the launch key is edge-triggered: one press, one action, consumed by the
//! next sample. Auto-repeat while the key is held produces nothing.

use crate::sim::TickInput;

/// What a key code means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Left,
    Right,
    Launch,
    ToggleIdle,
}

/// Map a `KeyboardEvent.code` value to an action
pub fn map_key(code: &str) -> Option<KeyAction> {
    match code {
        "ArrowLeft" | "KeyA" => Some(KeyAction::Left),
        "ArrowRight" | "KeyD" => Some(KeyAction::Right),
        "Space" => Some(KeyAction::Launch),
        "KeyI" => Some(KeyAction::ToggleIdle),
        _ => None,
    }
}

/// Intent flags shared between key handlers and the tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    launch_held: bool,
    launch_pending: bool,
    idle_mode: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press; returns true if the key is one the game uses
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(action) = map_key(code) else {
            return false;
        };
        match action {
            KeyAction::Left => self.left = true,
            KeyAction::Right => self.right = true,
            KeyAction::Launch => {
                if !self.launch_held {
                    self.launch_pending = true;
                }
                self.launch_held = true;
            }
            KeyAction::ToggleIdle => {
                self.idle_mode = !self.idle_mode;
                log::info!("Idle mode: {}", self.idle_mode);
            }
        }
        true
    }

    /// Handle a key release; returns true if the key is one the game uses
    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(action) = map_key(code) else {
            return false;
        };
        match action {
            KeyAction::Left => self.left = false,
            KeyAction::Right => self.right = false,
            KeyAction::Launch => self.launch_held = false,
            KeyAction::ToggleIdle => {}
        }
        true
    }

    /// Read the flags for this tick and consume the pending launch
    pub fn sample(&mut self) -> TickInput {
        TickInput {
            move_left: self.left,
            move_right: self.right,
            launch: std::mem::take(&mut self.launch_pending),
            idle_mode: self.idle_mode,
        }
    }
}
