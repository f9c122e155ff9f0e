//! Idle/demo mode - the paddle plays by itself
//!
//! Rewrites the tick input before the simulation sees it, so the game runs
//! exactly the same rules as with a human at the keys.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Fill in movement and launch intents for the current tick
pub fn steer(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver | GamePhase::Win => {
            input.launch = true;
            input.move_left = false;
            input.move_right = false;
        }
        GamePhase::Playing => {
            let paddle = &state.paddle;
            let ball = &state.ball;

            // Oscillating aim offset so the ball doesn't loop straight up
            // and down off the paddle center
            let time_factor = state.time_ticks as f32 * 0.01;
            let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.1) * paddle.width;

            let target = ball.pos.x + ball.size / 2.0 + offset;
            let center = paddle.x + paddle.width / 2.0;
            let delta = target - center;

            input.move_right = delta > paddle.speed;
            input.move_left = delta < -paddle.speed;
            input.launch = false;
        }
    }
}
