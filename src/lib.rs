//! Breakout - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Scene building and the canvas 2D backend
//! - `platform`: Keyboard input adapter
//! - `persistence`: Best-score storage backends
//! - `highscores`: Best-score bridge between the simulation and a store
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use persistence::{MemoryStore, ScoreStore};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Brick grid layout
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 45.0;
    pub const BRICK_HEIGHT: f32 = 15.0;
    pub const BRICK_PADDING_X: f32 = 30.0;
    pub const BRICK_PADDING_Y: f32 = 15.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 4.0;
    /// Distance from the paddle's top edge to the bottom of the field
    pub const PADDLE_BOTTOM_OFFSET: f32 = 60.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 2.0;
    /// Gap between a resting ball and the paddle top
    pub const BALL_REST_GAP: f32 = 5.0;

    /// Horizontal deflection per pixel of paddle impact offset
    pub const PADDLE_STEERING: f32 = 0.05;
    /// Speed boost on the reflected axis when a brick is hit (multiplicative)
    pub const BRICK_SPEEDUP: f32 = 1.05;

    /// Storage key for the persisted best score
    pub const BEST_SCORE_KEY: &str = "highestScore";
}
