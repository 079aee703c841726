use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player, // Left, mouse controlled
    Ai,     // Right, computer controlled
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to arena
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// True when a ball whose top edge is at `ball_y` overlaps this paddle vertically
    pub fn spans(&self, ball_y: f32, config: &Config) -> bool {
        ball_y + config.ball_size >= self.y && ball_y <= self.y + config.paddle_height
    }
}

/// Ball component - a square, `pos` is its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball placed at the centre with a fresh serve velocity
    pub fn served(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to centre with a random serve
    ///
    /// Horizontal speed is fixed, vertical speed is drawn from the serve range,
    /// and each axis gets an independent random sign.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_serve_pos();

        let vx = config.serve_speed_x * random_sign(rng);
        let vy = rng
            .0
            .gen_range(config.serve_speed_y_min..config.serve_speed_y_max)
            * random_sign(rng);
        self.vel = Vec2::new(vx, vy);
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }
}

fn random_sign(rng: &mut GameRng) -> f32 {
    if rng.0.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_centres_ball_regardless_of_prior_state() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-50.0, 999.0), Vec2::new(100.0, -100.0));

        for _ in 0..20 {
            ball.reset(&config, &mut rng);
            assert_eq!(ball.pos, config.ball_serve_pos());
            ball.pos = Vec2::new(3.0, 4.0);
        }
    }

    #[test]
    fn test_serve_velocity_ranges() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut saw_left = false;
        let mut saw_right = false;
        let mut saw_up = false;
        let mut saw_down = false;

        for _ in 0..200 {
            let ball = Ball::served(&config, &mut rng);
            assert_eq!(ball.vel.x.abs(), config.serve_speed_x);
            let vy = ball.vel.y.abs();
            assert!(
                (config.serve_speed_y_min..config.serve_speed_y_max).contains(&vy),
                "vertical serve speed {vy} out of range"
            );
            saw_left |= ball.vel.x < 0.0;
            saw_right |= ball.vel.x > 0.0;
            saw_up |= ball.vel.y < 0.0;
            saw_down |= ball.vel.y > 0.0;
        }

        assert!(saw_left && saw_right, "Serve should go both ways horizontally");
        assert!(saw_up && saw_down, "Serve should go both ways vertically");
    }

    #[test]
    fn test_paddle_spans_inclusive_edges() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Player, 100.0);

        // Ball bottom touching paddle top
        assert!(paddle.spans(100.0 - config.ball_size, &config));
        // Ball top touching paddle bottom
        assert!(paddle.spans(200.0, &config));
        assert!(!paddle.spans(200.1, &config));
        assert!(!paddle.spans(100.0 - config.ball_size - 0.1, &config));
    }
}
