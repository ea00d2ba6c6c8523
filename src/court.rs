//! Court geometry and tuning constants.
//!
//! The simulation runs in a fixed 800x600 court-unit space; the renderer
//! scales these units onto whatever terminal area is available.

pub const COURT_WIDTH: f32 = 800.0;
pub const COURT_HEIGHT: f32 = 600.0;

pub const PADDLE_HEIGHT: f32 = 100.0;
pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_SPEED: f32 = 8.0;

pub const LEFT_PADDLE_X: f32 = 50.0;
pub const RIGHT_PADDLE_X: f32 = COURT_WIDTH - 50.0 - PADDLE_WIDTH;

pub const BALL_SIZE: f32 = 10.0;
pub const BALL_SPEED: f32 = 5.0;

pub const DEFAULT_AI_DIFFICULTY: f32 = 0.8;
