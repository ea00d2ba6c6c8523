use crate::ai::AiController;
use crate::court::{COURT_HEIGHT, LEFT_PADDLE_X, PADDLE_HEIGHT, PADDLE_SPEED, RIGHT_PADDLE_X};
use crate::input::GameKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A vertical bar restricted to one side of the court.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        Self {
            side,
            x,
            y: COURT_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
            score: 0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Apply held-key movement. Both branches run every tick, so holding
    /// up and down together cancels out to no net movement.
    pub fn move_human(&mut self, up: bool, down: bool) {
        if up && self.y > 0.0 {
            self.y -= PADDLE_SPEED;
        }
        if down && self.y < COURT_HEIGHT - PADDLE_HEIGHT {
            self.y += PADDLE_SPEED;
        }
        self.clamp_to_court();
    }

    pub fn clamp_to_court(&mut self) {
        self.y = self.y.clamp(0.0, COURT_HEIGHT - PADDLE_HEIGHT);
    }
}

/// How a paddle is driven each tick.
#[derive(Debug)]
pub enum PaddleControl {
    Human { up: GameKey, down: GameKey },
    Ai(AiController),
}
