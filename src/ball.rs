use crate::court::{BALL_SIZE, BALL_SPEED, COURT_HEIGHT, COURT_WIDTH, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::paddle::{Paddle, Side};
use crate::rng::GameRng;

/// The ball, in court units. `dx` keeps its magnitude between collisions
/// (only the sign flips on paddle contact or reset); `dy` is recomputed on
/// paddle contact and sign-flipped on wall contact.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Ball {
    pub fn serve(rng: &mut GameRng) -> Self {
        let mut ball = Self {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
        };
        ball.reset(rng);
        ball
    }

    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    /// Flip dy at the top and bottom walls. No positional clamp: a slight
    /// overshoot past the edge is tolerated and corrects itself next tick.
    pub fn reflect_off_walls(&mut self) {
        if self.y <= 0.0 || self.y >= COURT_HEIGHT {
            self.dy = -self.dy;
        }
    }

    /// Bounce off a paddle if the ball is at its face and within its span.
    /// The predicate is evaluated for both paddles every tick; in degenerate
    /// overlaps the last paddle checked wins.
    pub fn resolve_paddle_collision(&mut self, paddle: &Paddle) {
        let at_face = match paddle.side {
            Side::Left => self.x <= paddle.x + PADDLE_WIDTH,
            Side::Right => self.x >= paddle.x - BALL_SIZE,
        };
        if at_face && self.y >= paddle.y && self.y <= paddle.y + PADDLE_HEIGHT {
            self.dx = -self.dx;
            self.adjust_angle(paddle);
        }
    }

    /// Linear deflection law: contact near the paddle top returns a steep
    /// upward dy, center returns flat, bottom steep downward. Magnitude is
    /// bounded by the base ball speed.
    fn adjust_angle(&mut self, paddle: &Paddle) {
        let impact = (self.y - paddle.y) / PADDLE_HEIGHT;
        self.dy = BALL_SPEED * (impact - 0.5) * 2.0;
    }

    /// Recenter and serve in a random direction: dx is full speed toward a
    /// random side, dy uniform in [-speed, speed].
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.x = COURT_WIDTH / 2.0;
        self.y = COURT_HEIGHT / 2.0;
        self.dx = if rng.coin() { BALL_SPEED } else { -BALL_SPEED };
        self.dy = BALL_SPEED * (rng.unit() * 2.0 - 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball { x, y, dx, dy }
    }

    #[test]
    fn advance_applies_velocity() {
        let mut b = ball(100.0, 200.0, 5.0, -3.0);
        b.advance();
        assert_eq!((b.x, b.y), (105.0, 197.0));
    }

    #[test]
    fn top_wall_flips_dy_sign_only() {
        let mut b = ball(400.0, -2.0, 5.0, -3.0);
        b.reflect_off_walls();
        assert_eq!(b.dy, 3.0);
        assert_eq!(b.dx, 5.0);
    }

    #[test]
    fn bottom_wall_flips_dy_sign_only() {
        let mut b = ball(400.0, 601.0, 5.0, 3.0);
        b.reflect_off_walls();
        assert_eq!(b.dy, -3.0);
        assert_eq!(b.dy.abs(), 3.0);
    }

    #[test]
    fn no_wall_reflection_in_open_court() {
        let mut b = ball(400.0, 300.0, 5.0, 3.0);
        b.reflect_off_walls();
        assert_eq!(b.dy, 3.0);
    }

    #[test]
    fn center_hit_returns_flat() {
        let paddle = Paddle::new(Side::Left);
        let mut b = ball(55.0, paddle.y + PADDLE_HEIGHT / 2.0, -5.0, 3.0);
        b.resolve_paddle_collision(&paddle);
        assert_eq!(b.dx, 5.0);
        assert_eq!(b.dy, 0.0);
    }

    #[test]
    fn top_edge_hit_returns_full_speed_up() {
        let paddle = Paddle::new(Side::Left);
        let mut b = ball(55.0, paddle.y, -5.0, 3.0);
        b.resolve_paddle_collision(&paddle);
        assert_eq!(b.dy, -BALL_SPEED);
    }

    #[test]
    fn bottom_edge_hit_returns_full_speed_down() {
        let paddle = Paddle::new(Side::Left);
        let mut b = ball(55.0, paddle.y + PADDLE_HEIGHT, -5.0, -3.0);
        b.resolve_paddle_collision(&paddle);
        assert_eq!(b.dy, BALL_SPEED);
    }

    #[test]
    fn right_paddle_face_check_uses_ball_size() {
        let paddle = Paddle::new(Side::Right);
        let mut b = ball(paddle.x - BALL_SIZE, paddle.y + 25.0, 5.0, 0.0);
        b.resolve_paddle_collision(&paddle);
        assert_eq!(b.dx, -5.0);

        // One unit short of the face: no contact.
        let mut miss = ball(paddle.x - BALL_SIZE - 1.0, paddle.y + 25.0, 5.0, 0.0);
        miss.resolve_paddle_collision(&paddle);
        assert_eq!(miss.dx, 5.0);
    }

    #[test]
    fn ball_outside_paddle_span_passes_through() {
        let paddle = Paddle::new(Side::Left);
        let mut b = ball(55.0, paddle.y - 1.0, -5.0, 0.0);
        b.resolve_paddle_collision(&paddle);
        assert_eq!(b.dx, -5.0);
    }

    #[test]
    fn collision_preserves_dx_magnitude() {
        let paddle = Paddle::new(Side::Left);
        let mut b = ball(55.0, paddle.y + 30.0, -5.0, 2.0);
        b.resolve_paddle_collision(&paddle);
        assert_eq!(b.dx.abs(), 5.0);
    }

    #[test]
    fn reset_centers_ball_with_bounded_serve() {
        let mut rng = GameRng::seeded(7);
        for _ in 0..50 {
            let mut b = ball(10.0, 10.0, -5.0, 4.0);
            b.reset(&mut rng);
            assert_eq!((b.x, b.y), (COURT_WIDTH / 2.0, COURT_HEIGHT / 2.0));
            assert_eq!(b.dx.abs(), BALL_SPEED);
            assert!(b.dy.abs() <= BALL_SPEED);
        }
    }

    #[test]
    fn serve_hits_both_directions_eventually() {
        let mut rng = GameRng::seeded(42);
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..100 {
            let b = Ball::serve(&mut rng);
            seen_left |= b.dx < 0.0;
            seen_right |= b.dx > 0.0;
        }
        assert!(seen_left && seen_right);
    }
}
