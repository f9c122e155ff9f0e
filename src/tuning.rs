//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a round can be replayed or
//! tweaked from a JSON file without recompiling.

use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Horizontal gap between bricks in a row
    pub brick_padding_x: f32,
    /// Vertical gap between rows
    pub brick_padding_y: f32,
    /// Y of the first row
    pub brick_offset_top: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per tick
    pub paddle_speed: f32,
    /// Distance from the paddle top to the field bottom
    pub paddle_bottom_offset: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Launch speed per axis, pixels per tick
    pub ball_start_speed: f32,
    pub ball_rest_gap: f32,

    // === Response ===
    pub paddle_steering: f32,
    pub brick_speedup: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding_x: BRICK_PADDING_X,
            brick_padding_y: BRICK_PADDING_Y,
            brick_offset_top: BRICK_OFFSET_TOP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            ball_size: BALL_SIZE,
            ball_start_speed: BALL_START_SPEED,
            ball_rest_gap: BALL_REST_GAP,

            paddle_steering: PADDLE_STEERING,
            brick_speedup: BRICK_SPEEDUP,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.field_width > 0.0 && self.field_height > 0.0,
            "field must have a positive size, got {}x{}",
            self.field_width,
            self.field_height
        );
        ensure!(
            self.brick_rows > 0 && self.brick_cols > 0,
            "brick grid must have at least one brick"
        );
        ensure!(
            self.brick_rows.checked_mul(self.brick_cols).is_some(),
            "brick grid {}x{} has too many bricks",
            self.brick_rows,
            self.brick_cols
        );
        ensure!(
            self.brick_width > 0.0 && self.brick_height > 0.0,
            "bricks must have a positive size"
        );
        ensure!(
            self.grid_width() <= self.field_width,
            "brick grid ({}px) is wider than the field ({}px)",
            self.grid_width(),
            self.field_width
        );
        ensure!(
            self.brick_offset_top + self.grid_height() <= self.paddle_y(),
            "brick grid reaches y={} but the paddle sits at y={}",
            self.brick_offset_top + self.grid_height(),
            self.paddle_y()
        );
        ensure!(
            self.paddle_width > 0.0 && self.paddle_width <= self.field_width,
            "paddle width {} does not fit the field",
            self.paddle_width
        );
        ensure!(self.paddle_speed > 0.0, "paddle speed must be positive");
        ensure!(
            self.ball_size > 0.0 && self.ball_start_speed > 0.0,
            "ball size and start speed must be positive"
        );
        ensure!(
            self.ball_rest_y() >= 0.0,
            "paddle sits too high for the ball to rest on it"
        );
        ensure!(
            self.brick_speedup >= 1.0,
            "brick speed-up {} would slow the ball down",
            self.brick_speedup
        );
        Ok(())
    }

    /// Number of bricks in a full grid
    pub fn total_bricks(&self) -> u32 {
        self.brick_rows.saturating_mul(self.brick_cols)
    }

    /// Width of the brick grid including gaps
    pub fn grid_width(&self) -> f32 {
        let cols = self.brick_cols as f32;
        cols * self.brick_width + (cols - 1.0).max(0.0) * self.brick_padding_x
    }

    /// Height of the brick grid including gaps
    pub fn grid_height(&self) -> f32 {
        let rows = self.brick_rows as f32;
        rows * self.brick_height + (rows - 1.0).max(0.0) * self.brick_padding_y
    }

    /// X of the first column (grid is horizontally centered)
    pub fn grid_origin_x(&self) -> f32 {
        (self.field_width - self.grid_width()) / 2.0
    }

    /// Fixed Y of the paddle's top edge
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_bottom_offset
    }

    /// Centered paddle X
    pub fn paddle_start_x(&self) -> f32 {
        (self.field_width - self.paddle_width) / 2.0
    }

    /// Largest X the paddle may reach
    pub fn paddle_max_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Y of a ball resting on the paddle
    pub fn ball_rest_y(&self) -> f32 {
        self.paddle_y() - self.ball_size - self.ball_rest_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let t = Tuning::default();
        assert_eq!(t.total_bricks(), 50);
        // 10 * 45 + 9 * 30
        assert_eq!(t.grid_width(), 720.0);
        assert_eq!(t.grid_origin_x(), 40.0);
        assert_eq!(t.paddle_y(), 540.0);
        assert_eq!(t.paddle_start_x(), 350.0);
        assert_eq!(t.ball_rest_y(), 525.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let t = Tuning::from_json(r#"{ "brick_rows": 2, "brick_speedup": 1.02 }"#).unwrap();
        assert_eq!(t.brick_rows, 2);
        assert_eq!(t.brick_speedup, 1.02);
        assert_eq!(t.brick_cols, BRICK_COLS);
        assert_eq!(t.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_json_roundtrip() {
        let t = Tuning {
            paddle_speed: 6.0,
            ..Default::default()
        };
        let back = Tuning::from_json(&t.to_json().unwrap()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let slow = Tuning {
            brick_speedup: 0.9,
            ..Default::default()
        };
        assert!(slow.validate().is_err());

        let too_wide = Tuning {
            brick_cols: 20,
            ..Default::default()
        };
        assert!(too_wide.validate().is_err());

        let empty = Tuning {
            brick_rows: 0,
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let flat = Tuning {
            brick_height: 0.0,
            ..Default::default()
        };
        assert!(flat.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_brick_count_overflow() {
        let huge = Tuning {
            brick_rows: 2_147_483_648,
            brick_cols: 2,
            ..Default::default()
        };
        assert!(huge.validate().is_err());
        assert_eq!(huge.total_bricks(), u32::MAX);
    }

    #[test]
    fn test_validate_rejects_grid_below_paddle() {
        // 60 + 30 * 15 + 29 * 15 = 945, far past the paddle at 540
        let tall = Tuning {
            brick_rows: 30,
            ..Default::default()
        };
        assert!(tall.validate().is_err());

        // 60 + 16 * 15 + 15 * 15 = 525 still fits above it
        let snug = Tuning {
            brick_rows: 16,
            ..Default::default()
        };
        assert_eq!(snug.grid_height(), 465.0);
        assert!(snug.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }
}
