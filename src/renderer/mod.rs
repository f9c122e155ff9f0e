//! Rendering module
//!
//! The simulation never draws. A renderer is handed a shared borrow of the
//! state after each tick and turns it into pixels (or characters).

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

pub use ascii::AsciiRenderer;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCmd, Sprite, build_scene};

use crate::sim::GameState;

/// Draws the current game state; must not affect the simulation
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}
