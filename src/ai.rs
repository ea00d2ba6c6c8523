use crate::ball::Ball;
use crate::court::{COURT_HEIGHT, PADDLE_HEIGHT, PADDLE_SPEED};
use crate::paddle::Paddle;
use crate::rng::GameRng;

/// Each reflection strictly shrinks the overshoot, so any finite projection
/// settles in a handful of folds. The cap only guards misuse.
const MAX_FOLDS: u32 = 64;

/// Heuristic paddle driver: projects the ball's straight-line trajectory to
/// the paddle's x, folds wall bounces analytically, then drifts toward the
/// predicted intercept with a difficulty-scaled aim error.
#[derive(Debug, Clone, Copy)]
pub struct AiController {
    difficulty: f32,
    target_y: f32,
}

impl AiController {
    /// Difficulty is in [0, 1]: 1 is perfect aim at full paddle speed,
    /// 0 is aim error up to half a paddle height at zero speed.
    pub fn new(difficulty: f32) -> Self {
        Self {
            difficulty: difficulty.clamp(0.0, 1.0),
            target_y: COURT_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
        }
    }

    /// Retarget (only while the ball approaches) and step the paddle toward
    /// the target. The step is a fixed increment per tick, not a snap; when
    /// the ball moves away the paddle keeps drifting toward the last target.
    pub fn tick(&mut self, ball: &Ball, paddle: &mut Paddle, rng: &mut GameRng) {
        if ball.dx > 0.0 {
            let slope = ball.dy / ball.dx;
            let intersect_y = ball.y + slope * (paddle.x - ball.x);
            let error = (rng.unit() - 0.5) * PADDLE_HEIGHT * (1.0 - self.difficulty);
            self.target_y = fold_into_court(intersect_y) - PADDLE_HEIGHT / 2.0 + error;
        }

        let move_speed = PADDLE_SPEED * self.difficulty;
        if paddle.center_y() < self.target_y {
            paddle.y += move_speed;
        } else if paddle.center_y() > self.target_y {
            paddle.y -= move_speed;
        }
        paddle.clamp_to_court();
    }
}

/// Map a projected y back into [0, H] by mirroring at the walls, modeling
/// successive bounces analytically instead of simulating each one.
pub fn fold_into_court(y: f32) -> f32 {
    debug_assert!(y.is_finite(), "trajectory projection must be finite");
    let mut folded = y;
    for _ in 0..MAX_FOLDS {
        if (0.0..=COURT_HEIGHT).contains(&folded) {
            return folded;
        }
        if folded < 0.0 {
            folded = -folded;
        }
        if folded > COURT_HEIGHT {
            folded = 2.0 * COURT_HEIGHT - folded;
        }
    }
    folded.clamp(0.0, COURT_HEIGHT)
}
