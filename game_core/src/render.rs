//! Canvas rendering
//!
//! Drawing is a pure function of the [`Game`]: every frame clears the surface
//! and redraws everything through the [`Canvas`] seam.

use crate::params::style;
use crate::{Game, Side};
use glam::Vec2;

/// The 2D drawing operations the renderer needs from a host surface
pub trait Canvas {
    type Error;

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str)
        -> Result<(), Self::Error>;

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        color: &str,
    ) -> Result<(), Self::Error>;

    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: &[f32],
        color: &str,
    ) -> Result<(), Self::Error>;
}

/// Draw one frame of the game
pub fn render<C: Canvas>(game: &Game, canvas: &mut C) -> Result<(), C::Error> {
    let config = &game.config;
    let (width, height) = (config.arena_width, config.arena_height);

    canvas.clear_rect(0.0, 0.0, width, height)?;

    // Midline
    canvas.stroke_dashed_line(
        Vec2::new(width / 2.0, 0.0),
        Vec2::new(width / 2.0, height),
        style::MIDLINE_WIDTH,
        &style::MIDLINE_DASH,
        style::MIDLINE_COLOR,
    )?;

    for side in [Side::Player, Side::Ai] {
        if let Some(y) = game.paddle_y(side) {
            canvas.fill_rect(
                config.paddle_x(side),
                y,
                config.paddle_width,
                config.paddle_height,
                style::PADDLE_COLOR,
            )?;
        }
    }

    if let Some(ball) = game.ball() {
        canvas.fill_rect(
            ball.pos.x,
            ball.pos.y,
            config.ball_size,
            config.ball_size,
            style::BALL_COLOR,
        )?;
    }

    canvas.fill_text(
        &game.score.player.to_string(),
        width / 4.0,
        style::SCORE_Y,
        style::SCORE_FONT,
        style::TEXT_COLOR,
    )?;
    canvas.fill_text(
        &game.score.ai.to_string(),
        3.0 * width / 4.0,
        style::SCORE_Y,
        style::SCORE_FONT,
        style::TEXT_COLOR,
    )?;

    if game.is_over() {
        draw_game_over(game, canvas)?;
    }

    Ok(())
}

fn draw_game_over<C: Canvas>(game: &Game, canvas: &mut C) -> Result<(), C::Error> {
    let config = &game.config;
    let banner = if game.score.player == config.win_score {
        style::PLAYER_WINS_TEXT
    } else {
        style::AI_WINS_TEXT
    };

    canvas.fill_text(
        banner,
        config.arena_width / 2.0 - style::BANNER_OFFSET_X,
        config.arena_height / 2.0,
        style::BANNER_FONT,
        style::TEXT_COLOR,
    )?;
    canvas.fill_text(
        style::HINT_TEXT,
        config.arena_width / 2.0 - style::HINT_OFFSET_X,
        config.arena_height / 2.0 + style::HINT_OFFSET_Y,
        style::HINT_FONT,
        style::TEXT_COLOR,
    )
}

/// A draw call captured by [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: Vec<f32>,
        color: String,
    },
}

/// Canvas that records draw calls instead of drawing, for headless runs and tests.
///
/// Holds the calls of the latest frame only: `clear_rect` starts a new frame.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// All text drawn this frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    type Error = std::convert::Infallible;

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), Self::Error> {
        self.calls.clear();
        self.calls.push(DrawCall::Clear { x, y, w, h });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &str,
    ) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        color: &str,
    ) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
        Ok(())
    }

    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: &[f32],
        color: &str,
    ) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::DashedLine {
            from,
            to,
            width,
            dash: dash.to_vec(),
            color: color.to_string(),
        });
        Ok(())
    }
}
