//! Character-cell renderer for headless runs
//!
//! Rasterizes the scene's rectangles into a coarse text grid. Used by the
//! native runner to show the field in the log.

use super::Renderer;
use super::scene::{DrawCmd, Sprite, build_scene};
use crate::sim::GameState;

/// Renders into an in-memory character grid
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    frame: String,
}

impl AsciiRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            frame: String::new(),
        }
    }

    /// The last rendered frame, one line per row
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl Renderer for AsciiRenderer {
    fn render(&mut self, state: &GameState) {
        let sx = self.cols as f32 / state.tuning.field_width;
        let sy = self.rows as f32 / state.tuning.field_height;
        let mut grid = vec![vec![' '; self.cols]; self.rows];
        let mut captions = Vec::new();

        for cmd in build_scene(state) {
            match cmd {
                DrawCmd::FillRect { rect, sprite, .. } => {
                    let glyph = match sprite {
                        Sprite::Brick => '#',
                        Sprite::Paddle => '=',
                        Sprite::Ball => 'o',
                    };
                    let c0 = ((rect.left() * sx).floor().max(0.0) as usize).min(self.cols - 1);
                    let c1 = ((rect.right() * sx).ceil() as usize).clamp(c0 + 1, self.cols);
                    let r0 = ((rect.top() * sy).floor().max(0.0) as usize).min(self.rows - 1);
                    let r1 = ((rect.bottom() * sy).ceil() as usize).clamp(r0 + 1, self.rows);
                    for row in &mut grid[r0..r1] {
                        for cell in &mut row[c0..c1] {
                            *cell = glyph;
                        }
                    }
                }
                DrawCmd::Text { text, .. } => captions.push(text),
            }
        }

        let border = format!("+{}+", "-".repeat(self.cols));
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 3));
        out.push_str(&border);
        out.push('\n');
        for row in grid {
            out.push('|');
            out.extend(row);
            out.push_str("|\n");
        }
        out.push_str(&border);
        if !captions.is_empty() {
            out.push('\n');
            out.push_str(&captions.join("  "));
        }
        self.frame = out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_frame_has_field() {
        let state = GameState::new(5);
        let mut r = AsciiRenderer::new(80, 30);
        r.render(&state);

        let frame = r.frame();
        assert!(frame.contains('#'));
        assert!(frame.contains('='));
        assert!(frame.contains('o'));
        assert!(frame.contains("BREAKOUT"));
        // Border + 30 rows + border + caption line
        assert_eq!(frame.lines().count(), 33);
    }

    #[test]
    fn test_glyphs_land_on_their_sprites() {
        let state = GameState::new(5);
        let mut r = AsciiRenderer::new(80, 30);
        r.render(&state);

        // 10px per column, 20px per row; line 0 is the border
        let lines: Vec<Vec<char>> = r.frame().lines().map(|l| l.chars().collect()).collect();
        // Ball at (395, 525) covers columns 39..41 of row 26
        assert_eq!(lines[27][40], 'o');
        // Paddle at (350, 540) covers columns 35..45 of row 27
        assert_eq!(lines[28][36], '=');
        // First brick at (40, 60) covers columns 4..9 of row 3
        assert_eq!(lines[4][5], '#');
    }

    #[test]
    fn test_game_over_frame_is_empty_field() {
        let mut state = GameState::new(5);
        state.phase = crate::sim::GamePhase::GameOver;
        let mut r = AsciiRenderer::new(40, 10);
        r.render(&state);
        assert!(!r.frame().contains('#'));
        assert!(r.frame().contains("GAME OVER"));
    }
}
