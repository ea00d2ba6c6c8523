use crate::ai::AiController;
use crate::ball::Ball;
use crate::court::{BALL_SIZE, COURT_HEIGHT, COURT_WIDTH};
use crate::input::{GameKey, InputState};
use crate::paddle::{Paddle, PaddleControl, Side};
use crate::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SinglePlayer,
    TwoPlayer,
}

/// Read-only view of one paddle for the renderer.
#[derive(Debug, Clone, Copy)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub score: u32,
}

/// Read-only per-tick view of the whole session for the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_size: f32,
    pub left: PaddleView,
    pub right: PaddleView,
    pub court_width: f32,
    pub court_height: f32,
    pub mode: Mode,
}

/// One running game: the ball, both paddles, their control strategies and
/// the injected RNG. One call to [`GameSession::tick`] is one frame; the
/// caller's scheduler sets the pace, so game speed follows the frame rate.
#[derive(Debug)]
pub struct GameSession {
    mode: Mode,
    difficulty: f32,
    ball: Ball,
    left: Paddle,
    right: Paddle,
    left_control: PaddleControl,
    right_control: PaddleControl,
    rng: GameRng,
}

impl GameSession {
    pub fn new(mode: Mode, difficulty: f32, mut rng: GameRng) -> Self {
        let ball = Ball::serve(&mut rng);
        Self {
            mode,
            difficulty,
            ball,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            left_control: PaddleControl::Human {
                up: GameKey::W,
                down: GameKey::S,
            },
            right_control: Self::right_control_for(mode, difficulty),
            rng,
        }
    }

    fn right_control_for(mode: Mode, difficulty: f32) -> PaddleControl {
        match mode {
            Mode::SinglePlayer => PaddleControl::Ai(AiController::new(difficulty)),
            Mode::TwoPlayer => PaddleControl::Human {
                up: GameKey::ArrowUp,
                down: GameKey::ArrowDown,
            },
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch control mode. Always resets both scores and the ball, never
    /// the paddle positions.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.right_control = Self::right_control_for(mode, self.difficulty);
        self.left.score = 0;
        self.right.score = 0;
        self.ball.reset(&mut self.rng);
    }

    /// Advance the simulation by one frame: paddles, ball, walls, paddle
    /// collisions (left then right), scoring.
    pub fn tick(&mut self, input: &InputState) {
        drive_paddle(
            &mut self.left_control,
            &mut self.left,
            &self.ball,
            input,
            &mut self.rng,
        );
        drive_paddle(
            &mut self.right_control,
            &mut self.right,
            &self.ball,
            input,
            &mut self.rng,
        );

        self.ball.advance();
        self.ball.reflect_off_walls();
        self.ball.resolve_paddle_collision(&self.left);
        self.ball.resolve_paddle_collision(&self.right);

        self.resolve_scoring();
    }

    fn resolve_scoring(&mut self) {
        if self.ball.x <= 0.0 {
            self.right.score += 1;
            self.ball.reset(&mut self.rng);
        } else if self.ball.x >= COURT_WIDTH {
            self.left.score += 1;
            self.ball.reset(&mut self.rng);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_x: self.ball.x,
            ball_y: self.ball.y,
            ball_size: BALL_SIZE,
            left: PaddleView {
                x: self.left.x,
                y: self.left.y,
                score: self.left.score,
            },
            right: PaddleView {
                x: self.right.x,
                y: self.right.y,
                score: self.right.score,
            },
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,
            mode: self.mode,
        }
    }
}

fn drive_paddle(
    control: &mut PaddleControl,
    paddle: &mut Paddle,
    ball: &Ball,
    input: &InputState,
    rng: &mut GameRng,
) {
    match control {
        PaddleControl::Human { up, down } => {
            paddle.move_human(input.is_held(*up), input.is_held(*down));
        }
        PaddleControl::Ai(ai) => ai.tick(ball, paddle, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::{BALL_SPEED, PADDLE_HEIGHT, PADDLE_SPEED};

    fn two_player_session() -> GameSession {
        GameSession::new(Mode::TwoPlayer, 1.0, GameRng::seeded(99))
    }

    fn idle_input() -> InputState {
        InputState::new(true)
    }

    #[test]
    fn ball_exiting_left_scores_for_right_and_resets() {
        let mut session = two_player_session();
        session.ball = Ball {
            x: 5.0,
            y: 300.0,
            dx: -5.0,
            dy: 0.0,
        };

        session.tick(&idle_input());

        let snap = session.snapshot();
        assert_eq!(snap.right.score, 1);
        assert_eq!(snap.left.score, 0);
        assert_eq!((snap.ball_x, snap.ball_y), (400.0, 300.0));
        assert_eq!(session.ball.dx.abs(), BALL_SPEED);
    }

    #[test]
    fn ball_exiting_right_scores_for_left() {
        let mut session = two_player_session();
        session.right.y = 0.0; // out of the ball's path
        session.ball = Ball {
            x: 797.0,
            y: 500.0,
            dx: 5.0,
            dy: 0.0,
        };

        session.tick(&idle_input());

        assert_eq!(session.left.score, 1);
        assert_eq!(session.right.score, 0);
    }

    #[test]
    fn at_most_one_score_per_tick() {
        let mut session = two_player_session();
        for _ in 0..500 {
            let before = session.left.score + session.right.score;
            session.tick(&idle_input());
            let after = session.left.score + session.right.score;
            assert!(after - before <= 1);
        }
    }

    #[test]
    fn scores_are_monotonic() {
        let mut session = GameSession::new(Mode::SinglePlayer, 0.8, GameRng::seeded(3));
        let mut prev = (0, 0);
        for _ in 0..500 {
            session.tick(&idle_input());
            let now = (session.left.score, session.right.score);
            assert!(now.0 >= prev.0 && now.1 >= prev.1);
            prev = now;
        }
    }

    #[test]
    fn paddles_stay_in_bounds_over_long_runs() {
        let mut session = GameSession::new(Mode::SinglePlayer, 0.8, GameRng::seeded(11));
        let mut input = InputState::new(true);
        input.press(GameKey::W);
        for _ in 0..1000 {
            session.tick(&input);
            for paddle in [&session.left, &session.right] {
                assert!(paddle.y >= 0.0);
                assert!(paddle.y <= COURT_HEIGHT - PADDLE_HEIGHT);
            }
        }
    }

    #[test]
    fn left_paddle_follows_held_keys() {
        let mut session = two_player_session();
        let start = session.left.y;

        let mut input = InputState::new(true);
        input.press(GameKey::W);
        session.tick(&input);
        assert_eq!(session.left.y, start - PADDLE_SPEED);

        input.release(GameKey::W);
        input.press(GameKey::S);
        session.tick(&input);
        assert_eq!(session.left.y, start);
    }

    #[test]
    fn right_paddle_is_human_in_two_player_mode() {
        let mut session = two_player_session();
        let start = session.right.y;

        let mut input = InputState::new(true);
        input.press(GameKey::ArrowUp);
        session.tick(&input);
        assert_eq!(session.right.y, start - PADDLE_SPEED);
    }

    #[test]
    fn arrow_keys_do_not_move_ai_paddle() {
        let mut session = GameSession::new(Mode::SinglePlayer, 0.0, GameRng::seeded(5));
        // Difficulty 0 gives the AI zero move speed; arrow keys must not
        // leak into its paddle.
        session.ball.dx = -BALL_SPEED;
        let start = session.right.y;

        let mut input = InputState::new(true);
        input.press(GameKey::ArrowUp);
        session.tick(&input);
        assert_eq!(session.right.y, start);
    }

    #[test]
    fn set_mode_resets_scores_and_ball_but_not_paddles() {
        let mut session = two_player_session();
        session.left.score = 3;
        session.right.score = 7;
        session.left.y = 42.0;
        session.right.y = 400.0;
        session.ball.x = 123.0;
        session.ball.y = 456.0;

        session.set_mode(Mode::SinglePlayer);

        assert_eq!(session.mode(), Mode::SinglePlayer);
        assert_eq!(session.left.score, 0);
        assert_eq!(session.right.score, 0);
        assert_eq!((session.ball.x, session.ball.y), (400.0, 300.0));
        assert_eq!(session.left.y, 42.0);
        assert_eq!(session.right.y, 400.0);
        assert!(matches!(session.right_control, PaddleControl::Ai(_)));
    }

    #[test]
    fn set_mode_to_same_mode_still_resets() {
        let mut session = two_player_session();
        session.left.score = 2;
        session.set_mode(Mode::TwoPlayer);
        assert_eq!(session.left.score, 0);
        assert!(matches!(
            session.right_control,
            PaddleControl::Human { .. }
        ));
    }

    #[test]
    fn wall_bounce_keeps_dy_magnitude_through_tick() {
        let mut session = two_player_session();
        session.ball = Ball {
            x: 400.0,
            y: 3.0,
            dx: 5.0,
            dy: -4.0,
        };

        session.tick(&idle_input());

        assert_eq!(session.ball.dy, 4.0);
        assert_eq!(session.ball.dx, 5.0);
    }

    #[test]
    fn center_paddle_return_is_flat_through_tick() {
        let mut session = two_player_session();
        // One advance left of the paddle face, dead center of the paddle.
        session.ball = Ball {
            x: 63.0,
            y: session.left.center_y(),
            dx: -5.0,
            dy: 0.0,
        };

        session.tick(&idle_input());

        assert_eq!(session.ball.dx, 5.0);
        assert_eq!(session.ball.dy, 0.0);
        assert_eq!(session.left.score + session.right.score, 0);
    }

    #[test]
    fn snapshot_reports_court_and_ball_geometry() {
        let session = two_player_session();
        let snap = session.snapshot();
        assert_eq!(snap.court_width, COURT_WIDTH);
        assert_eq!(snap.court_height, COURT_HEIGHT);
        assert_eq!(snap.ball_size, BALL_SIZE);
        assert_eq!(snap.mode, Mode::TwoPlayer);
        assert_eq!(snap.left.x, session.left.x);
        assert_eq!(snap.right.x, session.right.x);
    }
}
