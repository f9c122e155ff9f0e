//! Platform abstraction layer
//!
//! Turns host events into simulation input. Storage lives in `persistence`,
//! drawing in `renderer`.

pub mod input;

pub use input::{InputState, KeyAction, map_key};
