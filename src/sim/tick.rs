//! Fixed-step simulation tick
//!
//! One call advances the game by one frame. There is no delta time: every
//! tick moves the paddle and ball by their per-tick speeds regardless of how
//! long the frame took.

use super::autopilot;
use super::collision::{
    ball_paddle_contact, paddle_steering, rects_overlap, reflect_off_side, resolve_impact_side,
};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left key held
    pub move_left: bool,
    /// Move-right key held
    pub move_right: bool,
    /// Launch in Start, reset in GameOver/Win (one-shot)
    pub launch: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    let mut input = input.clone();
    if input.idle_mode {
        autopilot::steer(state, &mut input);
    }
    let input = &input;

    match state.phase {
        GamePhase::Start => {
            // Keep the ball glued to the paddle until launch
            let gap = state.tuning.ball_rest_gap;
            state.ball.rest_on(&state.paddle, gap);

            if input.launch {
                state.ball.launched = true;
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Launched);
                log::info!(
                    "Round {} launched (dx {:+.1})",
                    state.round,
                    state.ball.vel.x
                );
            }
        }

        GamePhase::Playing => {
            let field_width = state.tuning.field_width;
            state
                .paddle
                .apply_intent(input.move_left, input.move_right, field_width);

            if update_ball(state) {
                collide_bricks(state);
            }
        }

        GamePhase::GameOver | GamePhase::Win => {
            if input.launch {
                state.reset_round();
            }
        }
    }
}

/// Move the ball and resolve walls and paddle
///
/// Returns false if the ball left the field and the round ended.
fn update_ball(state: &mut GameState) -> bool {
    let tuning = &state.tuning;
    let ball = &mut state.ball;

    if !ball.launched {
        ball.rest_on(&state.paddle, tuning.ball_rest_gap);
        return true;
    }

    ball.pos += ball.vel;

    // Side walls
    if ball.pos.x < 0.0 {
        ball.pos.x = 0.0;
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    } else if ball.pos.x + ball.size > tuning.field_width {
        ball.pos.x = tuning.field_width - ball.size;
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }

    // Ceiling
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    // Paddle: vertical flip, horizontal speed replaced by steering
    let paddle_rect = state.paddle.rect();
    let ball_rect = ball.rect();
    if ball_paddle_contact(&ball_rect, &paddle_rect) {
        ball.vel.y = -ball.vel.y;
        ball.vel.x = paddle_steering(&ball_rect, &paddle_rect, tuning.paddle_steering);
        state.events.push(GameEvent::PaddleHit);
    }

    // Floor: no bounce, the round is lost
    if ball.pos.y + ball.size > tuning.field_height {
        end_round(state, GamePhase::GameOver);
        return false;
    }

    true
}

/// Resolve at most one brick hit per tick, scanning in row-major order
fn collide_bricks(state: &mut GameState) {
    let ball_rect = state.ball.rect();

    let Some(brick) = state
        .bricks
        .iter_mut()
        .find(|b| b.visible && rects_overlap(&ball_rect, &b.rect))
    else {
        return;
    };

    let side = resolve_impact_side(&ball_rect, &brick.rect);
    state.ball.vel = reflect_off_side(state.ball.vel, side, state.tuning.brick_speedup);
    brick.visible = false;
    state.score.current += 1;

    log::debug!(
        "Brick ({}, {}) hit from {:?}, score {}",
        brick.row,
        brick.col,
        side,
        state.score.current
    );
    state.events.push(GameEvent::BrickDestroyed {
        row: brick.row,
        col: brick.col,
        side,
    });

    if state.score.current == state.total_bricks() {
        end_round(state, GamePhase::Win);
    }
}

/// Enter a terminal phase
///
/// Runs only on the transition, so the best score is raised at most once per
/// round no matter how many frames are spent in GameOver/Win.
fn end_round(state: &mut GameState, phase: GamePhase) {
    state.phase = phase;
    let score = state.score.current;

    match phase {
        GamePhase::Win => {
            log::info!("Round {} won with {} bricks", state.round, score);
            state.events.push(GameEvent::RoundWon { score });
        }
        _ => {
            log::info!("Round {} lost with score {}", state.round, score);
            state.events.push(GameEvent::RoundLost { score });
        }
    }

    if score > state.score.best {
        log::info!("New best score: {} (was {})", score, state.score.best);
        state.score.best = score;
        state.events.push(GameEvent::NewBest { score });
    }
}
