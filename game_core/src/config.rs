use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y_min: f32,
    pub serve_speed_y_max: f32,
    pub return_spin: f32,
    pub ai_step: f32,
    pub ai_dead_zone: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y_min: Params::SERVE_SPEED_Y_MIN,
            serve_speed_y_max: Params::SERVE_SPEED_Y_MAX,
            return_spin: Params::RETURN_SPIN,
            ai_step: Params::AI_STEP,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for a host drawing surface of the given size
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Ai => self.arena_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Top edge that vertically centres a paddle
    pub fn paddle_start_y(&self) -> f32 {
        self.clamp_paddle_y((self.arena_height - self.paddle_height) / 2.0)
    }

    /// Clamp a paddle's top edge to the arena. An arena shorter than a paddle pins it to the top.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.arena_height - self.paddle_height).max(0.0)
    }

    /// Top-left corner that centres the ball on the surface
    pub fn ball_serve_pos(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 20.0, "Player paddle X position");
        assert_eq!(config.paddle_x(Side::Ai), 770.0, "AI paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-40.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(120.0), 120.0);
    }

    #[test]
    fn test_clamp_paddle_y_in_arena_shorter_than_paddle() {
        let config = Config::with_arena(300.0, 80.0);
        assert_eq!(config.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(config.clamp_paddle_y(0.0), 0.0);
        assert_eq!(config.clamp_paddle_y(50.0), 0.0);
        assert_eq!(config.paddle_start_y(), 0.0);
    }

    #[test]
    fn test_config_with_arena_keeps_tuning() {
        let config = Config::with_arena(640.0, 480.0);
        assert_eq!(config.arena_width, 640.0);
        assert_eq!(config.arena_height, 480.0);
        assert_eq!(config.paddle_x(Side::Ai), 610.0);
        assert_eq!(config.win_score, Params::WIN_SCORE);
        assert_eq!(config.paddle_start_y(), 190.0);
    }

    #[test]
    fn test_ball_serve_pos_is_centred() {
        let config = Config::new();
        assert_eq!(config.ball_serve_pos(), Vec2::new(394.0, 244.0));
    }
}
