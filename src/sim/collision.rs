//! Collision detection and response for axis-aligned rectangles
//!
//! Everything in the playfield is a box, so a collision is an interval overlap
//! on both axes. Response is decided by which side the ball came through:
//! the side with the smallest penetration depth.

use glam::Vec2;

use super::rect::Rect;

/// Edge of a brick that a collision is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl ImpactSide {
    /// Whether the side reflects horizontal motion (Left/Right)
    pub fn is_horizontal(self) -> bool {
        matches!(self, ImpactSide::Left | ImpactSide::Right)
    }
}

/// Check if two rectangles overlap
///
/// Strict comparisons: rectangles that only share an edge do not overlap.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Determine which side of `brick` the `ball` entered through
///
/// Assumes the rectangles overlap. Penetration depth is measured per side and
/// the shallowest wins; ties go to the first of Left, Right, Top, Bottom.
pub fn resolve_impact_side(ball: &Rect, brick: &Rect) -> ImpactSide {
    let depths = [
        (ImpactSide::Left, ball.right() - brick.left()),
        (ImpactSide::Right, brick.right() - ball.left()),
        (ImpactSide::Top, ball.bottom() - brick.top()),
        (ImpactSide::Bottom, brick.bottom() - ball.top()),
    ];

    let mut best = depths[0];
    for &candidate in &depths[1..] {
        // Strict less-than keeps the earliest side on ties
        if candidate.1 < best.1 {
            best = candidate;
        }
    }
    best.0
}

/// Reflect velocity away from a brick side
///
/// The component perpendicular to the side is forced to point away from the
/// brick, then scaled by `speedup`. The other component is untouched.
pub fn reflect_off_side(velocity: Vec2, side: ImpactSide, speedup: f32) -> Vec2 {
    match side {
        ImpactSide::Left => Vec2::new(-velocity.x.abs() * speedup, velocity.y),
        ImpactSide::Right => Vec2::new(velocity.x.abs() * speedup, velocity.y),
        ImpactSide::Top => Vec2::new(velocity.x, -velocity.y.abs() * speedup),
        ImpactSide::Bottom => Vec2::new(velocity.x, velocity.y.abs() * speedup),
    }
}

/// Check if the ball touches the paddle from above
///
/// The ball's bottom edge is at or below the paddle top and the horizontal
/// ranges overlap. There is no lower bound: a ball that has sunk past the
/// paddle top still counts while it is over the paddle.
pub fn ball_paddle_contact(ball: &Rect, paddle: &Rect) -> bool {
    ball.bottom() >= paddle.top() && ball.right() > paddle.left() && ball.left() < paddle.right()
}

/// Horizontal velocity after a paddle hit
///
/// Proportional to how far from the paddle center the ball struck.
#[inline]
pub fn paddle_steering(ball: &Rect, paddle: &Rect, steering: f32) -> f32 {
    (ball.center().x - paddle.center().x) * steering
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &right));
        assert!(!rects_overlap(&a, &below));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Horizontal overlap, vertical gap
        let b = Rect::new(2.0, 30.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_impact_from_left() {
        let brick = Rect::new(100.0, 100.0, 45.0, 15.0);
        // Ball poked 2px into the brick's left edge, well inside vertically
        let ball = Rect::new(92.0, 102.0, 10.0, 10.0);
        assert_eq!(resolve_impact_side(&ball, &brick), ImpactSide::Left);
    }

    #[test]
    fn test_impact_from_right() {
        let brick = Rect::new(100.0, 100.0, 45.0, 15.0);
        let ball = Rect::new(143.0, 102.0, 10.0, 10.0);
        assert_eq!(resolve_impact_side(&ball, &brick), ImpactSide::Right);
    }

    #[test]
    fn test_impact_from_top() {
        let brick = Rect::new(100.0, 100.0, 45.0, 15.0);
        let ball = Rect::new(115.0, 91.0, 10.0, 10.0);
        assert_eq!(resolve_impact_side(&ball, &brick), ImpactSide::Top);
    }

    #[test]
    fn test_impact_from_bottom() {
        let brick = Rect::new(100.0, 100.0, 45.0, 15.0);
        let ball = Rect::new(115.0, 113.0, 10.0, 10.0);
        assert_eq!(resolve_impact_side(&ball, &brick), ImpactSide::Bottom);
    }

    #[test]
    fn test_impact_tie_prefers_left_then_top() {
        let brick = Rect::new(100.0, 100.0, 45.0, 15.0);
        // Corner hit: 1px deep on both the left and the top
        let ball = Rect::new(91.0, 91.0, 10.0, 10.0);
        assert_eq!(resolve_impact_side(&ball, &brick), ImpactSide::Left);

        // Right and Bottom tied at 1px
        let ball = Rect::new(144.0, 114.0, 10.0, 10.0);
        assert_eq!(resolve_impact_side(&ball, &brick), ImpactSide::Right);
    }

    #[test]
    fn test_impact_tie_order_covers_every_pair() {
        // Ball exactly as wide as a tall brick: Left and Right both 20px deep
        let tall = Rect::new(100.0, 100.0, 20.0, 80.0);
        let ball = Rect::new(100.0, 110.0, 20.0, 20.0);
        assert_eq!(resolve_impact_side(&ball, &tall), ImpactSide::Left);

        // Right and Top tied at 1px, Left and Bottom deeper
        let brick = Rect::new(100.0, 100.0, 45.0, 15.0);
        let ball = Rect::new(144.0, 91.0, 10.0, 10.0);
        assert_eq!(resolve_impact_side(&ball, &brick), ImpactSide::Right);

        // Ball exactly as tall as a wide brick: Top and Bottom both 20px deep
        let wide = Rect::new(100.0, 100.0, 80.0, 20.0);
        let ball = Rect::new(120.0, 100.0, 20.0, 20.0);
        assert_eq!(resolve_impact_side(&ball, &wide), ImpactSide::Top);
    }

    #[test]
    fn test_reflect_off_side_points_away() {
        let v = Vec2::new(2.0, -2.0);

        let r = reflect_off_side(v, ImpactSide::Bottom, 1.05);
        assert!((r.y - 2.1).abs() < 1e-5);
        assert_eq!(r.x, 2.0);

        // Already moving away: sign kept, magnitude still scaled
        let r = reflect_off_side(v, ImpactSide::Top, 1.05);
        assert!((r.y - (-2.1)).abs() < 1e-5);

        let r = reflect_off_side(v, ImpactSide::Left, 1.0);
        assert_eq!(r, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn test_paddle_contact() {
        let paddle = Rect::new(350.0, 540.0, 100.0, 15.0);
        assert!(ball_paddle_contact(&Rect::new(400.0, 531.0, 10.0, 10.0), &paddle));
        // Exactly resting on the top edge counts
        assert!(ball_paddle_contact(&Rect::new(400.0, 530.0, 10.0, 10.0), &paddle));
        // Above the paddle
        assert!(!ball_paddle_contact(&Rect::new(400.0, 520.0, 10.0, 10.0), &paddle));
        // Beside the paddle
        assert!(!ball_paddle_contact(&Rect::new(340.0, 535.0, 10.0, 10.0), &paddle));
    }

    #[test]
    fn test_paddle_steering() {
        let paddle = Rect::new(350.0, 540.0, 100.0, 15.0);
        // Dead center: straight up
        let ball = Rect::new(395.0, 531.0, 10.0, 10.0);
        assert_eq!(paddle_steering(&ball, &paddle, 0.05), 0.0);
        // 40px right of center
        let ball = Rect::new(435.0, 531.0, 10.0, 10.0);
        assert!((paddle_steering(&ball, &paddle, 0.05) - 2.0).abs() < 1e-5);
    }
}
