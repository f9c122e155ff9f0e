//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only (one tick per frame, no delta time)
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ImpactSide, rects_overlap, resolve_impact_side};
pub use rect::Rect;
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, Score, build_bricks};
pub use tick::{TickInput, tick};
