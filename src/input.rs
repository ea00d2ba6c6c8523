use std::time::{Duration, Instant};

/// How long a pressed key counts as held when the terminal cannot report
/// key-release events. Terminal auto-repeat re-arms the timer on each
/// repeated press, so a held key stays held across repeat gaps.
pub const HOLD_DECAY: Duration = Duration::from_millis(250);

/// The only keys the simulation consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    W,
    S,
    ArrowUp,
    ArrowDown,
}

impl GameKey {
    fn index(self) -> usize {
        match self {
            GameKey::W => 0,
            GameKey::S => 1,
            GameKey::ArrowUp => 2,
            GameKey::ArrowDown => 3,
        }
    }
}

/// Boolean held-state map for the paddle movement keys.
///
/// With keyboard-enhancement support the terminal delivers real release
/// events and `held` tracks them exactly. Without it, only presses (and
/// auto-repeats) arrive, so a press decays after [`HOLD_DECAY`].
#[derive(Debug)]
pub struct InputState {
    held: [Option<Instant>; 4],
    release_events: bool,
}

impl InputState {
    pub fn new(release_events: bool) -> Self {
        Self {
            held: [None; 4],
            release_events,
        }
    }

    pub fn press(&mut self, key: GameKey) {
        self.held[key.index()] = Some(Instant::now());
    }

    pub fn release(&mut self, key: GameKey) {
        self.held[key.index()] = None;
    }

    pub fn clear(&mut self) {
        self.held = [None; 4];
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        match self.held[key.index()] {
            Some(pressed_at) => self.release_events || pressed_at.elapsed() <= HOLD_DECAY,
            None => false,
        }
    }
}
