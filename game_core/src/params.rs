/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 20.0; // Gap between side wall and paddle

    // Ball
    pub const BALL_SIZE: f32 = 12.0;
    pub const SERVE_SPEED_X: f32 = 6.0;
    pub const SERVE_SPEED_Y_MIN: f32 = 2.0;
    pub const SERVE_SPEED_Y_MAX: f32 = 6.0;
    pub const RETURN_SPIN: f32 = 2.0; // vy perturbation drawn from [-2, 2)

    // AI
    pub const AI_STEP: f32 = 5.0;
    pub const AI_DEAD_ZONE: f32 = 15.0;

    // Score
    pub const WIN_SCORE: u8 = 7;
}

/// Colours, fonts and layout for the canvas renderer
pub mod style {
    pub const PADDLE_COLOR: &str = "#fff";
    pub const BALL_COLOR: &str = "#fff";
    pub const MIDLINE_COLOR: &str = "#666";
    pub const TEXT_COLOR: &str = "#fff";

    pub const MIDLINE_WIDTH: f32 = 4.0;
    pub const MIDLINE_DASH: [f32; 2] = [18.0, 16.0];

    pub const SCORE_FONT: &str = "32px Arial";
    pub const SCORE_Y: f32 = 50.0;

    pub const BANNER_FONT: &str = "48px Arial";
    pub const BANNER_OFFSET_X: f32 = 120.0;
    pub const HINT_FONT: &str = "24px Arial";
    pub const HINT_OFFSET_X: f32 = 140.0;
    pub const HINT_OFFSET_Y: f32 = 40.0;
    pub const HINT_TEXT: &str = "Refresh page to play again";

    pub const PLAYER_WINS_TEXT: &str = "You Win!";
    pub const AI_WINS_TEXT: &str = "AI Wins!";
}
