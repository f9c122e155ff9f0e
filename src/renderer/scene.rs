//! Scene generation for 2D primitives
//!
//! Turns a [`GameState`] into a flat list of draw commands. Backends only
//! have to know how to fill a rectangle and print a line of text, and the
//! scene itself can be inspected without a drawing surface.

use glam::Vec2;

use crate::sim::{GamePhase, GameState, Rect};

/// RGBA color, components in 0..1
pub type Color = [f32; 4];

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Brick colors, indexed by row (wraps for taller grids)
pub const BRICK_COLORS: [Color; 5] = [
    rgb(153, 51, 0),
    rgb(255, 0, 0),
    rgb(255, 153, 204),
    rgb(0, 255, 0),
    rgb(255, 255, 153),
];
pub const PADDLE_COLOR: Color = rgb(143, 142, 142);
pub const BALL_COLOR: Color = rgb(255, 255, 255);
pub const TEXT_COLOR: Color = rgb(255, 255, 255);
pub const BANNER_COLOR: Color = rgb(255, 255, 0);

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Font weight/style for a text command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    BoldItalic,
}

/// What a filled rectangle stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Brick,
    Paddle,
    Ball,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        rect: Rect,
        color: Color,
        sprite: Sprite,
    },
    Text {
        text: String,
        /// Anchor point; vertical position is the text's middle
        pos: Vec2,
        size: f32,
        align: Align,
        style: FontStyle,
        color: Color,
    },
}

/// CSS color string for a color
pub fn css_color(color: Color) -> String {
    let [r, g, b, a] = color.map(|c| c.clamp(0.0, 1.0));
    format!(
        "rgba({}, {}, {}, {})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

/// Build the draw list for the current frame
pub fn build_scene(state: &GameState) -> Vec<DrawCmd> {
    let width = state.tuning.field_width;
    let height = state.tuning.field_height;
    let middle = Vec2::new(width / 2.0, height / 2.0);
    let mut cmds = Vec::with_capacity(state.bricks.len() + 8);

    match state.phase {
        GamePhase::Start => {
            cmds.push(text("BREAKOUT", middle, 36.0, Align::Center, FontStyle::Bold, TEXT_COLOR));
            cmds.push(text(
                "Press SPACE to begin",
                middle + Vec2::new(0.0, 37.0),
                18.0,
                Align::Center,
                FontStyle::BoldItalic,
                TEXT_COLOR,
            ));
            push_field(&mut cmds, state);
        }
        GamePhase::Playing => {
            push_field(&mut cmds, state);
            push_score(&mut cmds, state);
        }
        GamePhase::GameOver => {
            cmds.push(text(
                "GAME OVER",
                middle,
                40.0,
                Align::Center,
                FontStyle::Bold,
                BANNER_COLOR,
            ));
            push_score(&mut cmds, state);
        }
        GamePhase::Win => {
            cmds.push(text(
                "YOU WIN!",
                middle,
                40.0,
                Align::Center,
                FontStyle::Bold,
                BANNER_COLOR,
            ));
            push_score(&mut cmds, state);
        }
    }

    cmds
}

/// Visible bricks, then paddle, then ball
fn push_field(cmds: &mut Vec<DrawCmd>, state: &GameState) {
    for brick in state.bricks.iter().filter(|b| b.visible) {
        cmds.push(DrawCmd::FillRect {
            rect: brick.rect,
            color: BRICK_COLORS[brick.row as usize % BRICK_COLORS.len()],
            sprite: Sprite::Brick,
        });
    }
    cmds.push(DrawCmd::FillRect {
        rect: state.paddle.rect(),
        color: PADDLE_COLOR,
        sprite: Sprite::Paddle,
    });
    cmds.push(DrawCmd::FillRect {
        rect: state.ball.rect(),
        color: BALL_COLOR,
        sprite: Sprite::Ball,
    });
}

fn push_score(cmds: &mut Vec<DrawCmd>, state: &GameState) {
    let width = state.tuning.field_width;
    cmds.push(text(
        &format!("Score: {}", state.score.current),
        Vec2::new(20.0, 30.0),
        20.0,
        Align::Left,
        FontStyle::Regular,
        TEXT_COLOR,
    ));
    cmds.push(text(
        &format!("High score: {}", state.score.best),
        Vec2::new(width - 100.0, 30.0),
        20.0,
        Align::Right,
        FontStyle::Regular,
        TEXT_COLOR,
    ));
}

fn text(s: &str, pos: Vec2, size: f32, align: Align, style: FontStyle, color: Color) -> DrawCmd {
    DrawCmd::Text {
        text: s.to_string(),
        pos,
        size,
        align,
        style,
        color,
    }
}
