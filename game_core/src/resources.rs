use crate::{Config, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    /// The side whose score equals the win threshold, if any
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player == win_score {
            Some(Side::Player)
        } else if self.ai == win_score {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Whether the match has finished. Only ever goes from running to over.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchState {
    over: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn end(&mut self) {
        self.over = true;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source (`crypto.getRandomValues` in the browser)
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub game_ended: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Player => self.player_scored = true,
            Side::Ai => self.ai_scored = true,
        }
    }
}

/// Latest pointer position over the drawing surface.
///
/// Pointer events overwrite the pending value; the simulation takes it once
/// per tick, so only the last move before a frame has any effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    pending_y: Option<f32>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move given in viewport coordinates
    pub fn record(&mut self, client_y: f32, surface_top: f32) {
        self.pending_y = Some(client_y - surface_top);
    }

    /// Take the pending surface-relative y, leaving nothing behind
    pub fn take(&mut self) -> Option<f32> {
        self.pending_y.take()
    }

    /// Paddle top edge that centres a paddle on a surface-relative pointer y
    pub fn paddle_target(pointer_y: f32, config: &Config) -> f32 {
        config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0)
    }
}
