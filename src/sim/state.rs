//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`]; the simulation owns it
//! exclusively and the renderer only ever borrows it.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::ImpactSide;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for launch
    Start,
    /// Active gameplay
    Playing,
    /// Ball fell below the field
    GameOver,
    /// Every brick destroyed
    Win,
}

impl GamePhase {
    /// Terminal phases only leave through a round reset
    pub fn is_round_over(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// Something that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball left the paddle
    Launched,
    /// Ball bounced off the left, right or top wall
    WallBounce,
    /// Ball bounced off the paddle
    PaddleHit,
    /// A brick was hit and removed
    BrickDestroyed { row: u32, col: u32, side: ImpactSide },
    /// Ball fell out of the field
    RoundLost { score: u32 },
    /// Last brick destroyed
    RoundWon { score: u32 },
    /// Round ended with a score above the previous best
    NewBest { score: u32 },
    /// Field rebuilt for a new round
    RoundReset,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.paddle_start_x(),
            y: tuning.paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Apply one tick of movement intent
    ///
    /// Each direction checks its own bound, so holding both keys cancels out
    /// anywhere except at a wall. The result is clamped to the field.
    pub fn apply_intent(&mut self, left: bool, right: bool, field_width: f32) {
        let max_x = (field_width - self.width).max(0.0);
        if right && self.x < max_x {
            self.x += self.speed;
        }
        if left && self.x > 0.0 {
            self.x -= self.speed;
        }
        self.x = self.x.clamp(0.0, max_x);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Side length (the ball is a square)
    pub size: f32,
    /// False while resting on the paddle
    pub launched: bool,
}

impl Ball {
    pub fn new(tuning: &Tuning, paddle: &Paddle, launch_dx_sign: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(
                tuning.ball_start_speed * launch_dx_sign,
                -tuning.ball_start_speed,
            ),
            size: tuning.ball_size,
            launched: false,
        };
        ball.rest_on(paddle, tuning.ball_rest_gap);
        ball
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    /// Snap to the resting spot centered on top of the paddle
    pub fn rest_on(&mut self, paddle: &Paddle, gap: f32) {
        self.pos = Vec2::new(
            paddle.x + paddle.width / 2.0 - self.size / 2.0,
            paddle.y - self.size - gap,
        );
    }
}

/// A brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Row index, also the color index
    pub row: u32,
    pub col: u32,
    pub visible: bool,
}

/// Build a full grid of visible bricks in row-major order
pub fn build_bricks(tuning: &Tuning) -> Vec<Brick> {
    let origin_x = tuning.grid_origin_x();
    let mut bricks = Vec::with_capacity(tuning.total_bricks() as usize);

    for row in 0..tuning.brick_rows {
        for col in 0..tuning.brick_cols {
            let x = origin_x + col as f32 * (tuning.brick_width + tuning.brick_padding_x);
            let y = tuning.brick_offset_top
                + row as f32 * (tuning.brick_height + tuning.brick_padding_y);
            bricks.push(Brick {
                rect: Rect::new(x, y, tuning.brick_width, tuning.brick_height),
                row,
                col,
                visible: true,
            });
        }
    }

    bricks
}

/// Round score and persisted best
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Bricks destroyed this round
    pub current: u32,
    /// Best round ever, never decreases
    pub best: u32,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the current stream; each round uses its own stream
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance constants this session runs with
    pub tuning: Tuning,
    /// RNG state
    pub rng_state: RngState,
    /// Rounds started so far (1-based)
    pub round: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major brick grid
    pub bricks: Vec<Brick>,
    pub score: Score,
    /// Events since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let paddle = Paddle::new(&tuning);
        let ball = Ball::new(&tuning, &paddle, launch_dx_sign(&rng_state));
        let bricks = build_bricks(&tuning);

        Self {
            tuning,
            rng_state,
            round: 1,
            time_ticks: 0,
            phase: GamePhase::Start,
            paddle,
            ball,
            bricks,
            score: Score::default(),
            events: Vec::new(),
        }
    }

    /// Start a fresh round: score, bricks, paddle and ball back to canonical
    /// positions. The best score is kept.
    pub fn reset_round(&mut self) {
        self.rng_state.stream = self.rng_state.stream.wrapping_add(1);
        self.round += 1;

        self.paddle = Paddle::new(&self.tuning);
        self.ball = Ball::new(&self.tuning, &self.paddle, launch_dx_sign(&self.rng_state));
        self.bricks = build_bricks(&self.tuning);
        self.score.current = 0;
        self.phase = GamePhase::Start;
        self.events.push(GameEvent::RoundReset);

        log::info!("Round {} ready (best {})", self.round, self.score.best);
    }

    /// Number of bricks a round starts with
    pub fn total_bricks(&self) -> u32 {
        self.bricks.len() as u32
    }

    /// Bricks still standing
    pub fn remaining_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Coin flip for the horizontal launch direction of a round
fn launch_dx_sign(rng_state: &RngState) -> f32 {
    if rng_state.to_rng().random_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_canonical() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.bricks.len(), 50);
        assert!(state.bricks.iter().all(|b| b.visible));
        assert_eq!(state.paddle.x, 350.0);
        assert_eq!(state.ball.pos, Vec2::new(395.0, 525.0));
        assert!(!state.ball.launched);
        assert_eq!(state.ball.vel.x.abs(), 2.0);
        assert_eq!(state.ball.vel.y, -2.0);
    }

    #[test]
    fn test_bricks_row_major_and_colored_by_row() {
        let bricks = build_bricks(&Tuning::default());
        assert_eq!(bricks[0].rect, Rect::new(40.0, 60.0, 45.0, 15.0));
        assert_eq!((bricks[1].row, bricks[1].col), (0, 1));
        assert_eq!(bricks[1].rect.pos.x, 115.0);
        assert_eq!((bricks[10].row, bricks[10].col), (1, 0));
        assert_eq!(bricks[10].rect.pos.y, 90.0);
        let last = bricks.last().unwrap();
        assert_eq!((last.row, last.col), (4, 9));
        assert_eq!(last.rect.right(), 760.0);
    }

    #[test]
    fn test_paddle_clamps_to_field() {
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(&tuning);
        for _ in 0..500 {
            paddle.apply_intent(false, true, tuning.field_width);
        }
        assert_eq!(paddle.x, 700.0);
        for _ in 0..500 {
            paddle.apply_intent(true, false, tuning.field_width);
        }
        assert_eq!(paddle.x, 0.0);
    }

    #[test]
    fn test_paddle_both_keys_cancel() {
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(&tuning);
        paddle.apply_intent(true, true, tuning.field_width);
        assert_eq!(paddle.x, 350.0);
    }

    #[test]
    fn test_reset_round_keeps_best() {
        let mut state = GameState::new(7);
        state.score = Score { current: 12, best: 20 };
        state.bricks[3].visible = false;
        state.phase = GamePhase::GameOver;
        state.ball.launched = true;
        state.ball.vel *= 3.0;
        state.paddle.x = 10.0;

        state.reset_round();

        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, Score { current: 0, best: 20 });
        assert!(state.bricks.iter().all(|b| b.visible));
        assert_eq!(state.paddle.x, 350.0);
        assert!(!state.ball.launched);
        assert_eq!(state.ball.vel.y, -2.0);
        assert_eq!(state.round, 2);
        assert_eq!(state.drain_events(), vec![GameEvent::RoundReset]);
    }

    #[test]
    fn test_same_seed_same_launch_direction() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        assert_eq!(a.ball.vel, b.ball.vel);
    }
}
