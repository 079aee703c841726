//! Loop driver
//!
//! Each frame is update-then-render. The host decides when frames happen: the
//! browser from `requestAnimationFrame`, tests and headless runs from a
//! [`FrameSource`] such as [`FixedFrames`].

use crate::{render, Canvas, Game};

/// Grants frames to [`LoopDriver::run`]
pub trait FrameSource {
    /// Whether another frame should run
    fn next_frame(&mut self) -> bool;
}

/// Exactly `n` frames, then stop
#[derive(Debug, Clone, Copy)]
pub struct FixedFrames(pub u64);

impl FrameSource for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

/// Owns the game state and the surface it is drawn on
pub struct LoopDriver<C: Canvas> {
    game: Game,
    canvas: C,
}

impl<C: Canvas> LoopDriver<C> {
    pub fn new(game: Game, canvas: C) -> Self {
        Self { game, canvas }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Pointer moved over the surface; `surface_top` is the surface's top in viewport coordinates
    pub fn pointer_moved(&mut self, client_y: f32, surface_top: f32) {
        self.game.pointer.record(client_y, surface_top);
    }

    /// Run one frame: update, then render
    pub fn frame(&mut self) -> Result<(), C::Error> {
        let was_over = self.game.is_over();
        self.game.step();

        if !was_over && self.game.is_over() {
            tracing::info!(tick = self.game.tick, "match finished, end screen shown");
        }

        render(&self.game, &mut self.canvas)
    }

    /// Run frames for as long as the source grants them
    pub fn run<S: FrameSource>(&mut self, source: &mut S) -> Result<(), C::Error> {
        while source.next_frame() {
            self.frame()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCall, RecordingCanvas};

    #[test]
    fn test_fixed_frames_counts_down() {
        let mut source = FixedFrames(3);
        assert!(source.next_frame());
        assert!(source.next_frame());
        assert!(source.next_frame());
        assert!(!source.next_frame());
        assert!(!source.next_frame());
    }

    #[test]
    fn test_run_steps_and_renders_each_frame() {
        let mut driver = LoopDriver::new(Game::with_seed(3), RecordingCanvas::new());

        driver.run(&mut FixedFrames(10)).unwrap();

        assert_eq!(driver.game().tick, 10);
        assert!(matches!(driver.canvas().calls[0], DrawCall::Clear { .. }));
    }

    #[test]
    fn test_recording_canvas_keeps_only_latest_frame() {
        let mut driver = LoopDriver::new(Game::with_seed(3), RecordingCanvas::new());

        driver.run(&mut FixedFrames(1000)).unwrap();

        let calls = &driver.canvas().calls;
        assert_eq!(calls.len(), 7, "clear, midline, 2 paddles, ball, 2 scores");
        let clears = calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear { .. }))
            .count();
        assert_eq!(clears, 1, "Each clear starts a fresh frame");
    }

    #[test]
    fn test_pointer_applies_on_next_frame() {
        let mut driver = LoopDriver::new(Game::with_seed(3), RecordingCanvas::new());
        let start = driver.game().paddle_y(crate::Side::Player);

        driver.pointer_moved(180.0, 30.0);
        assert_eq!(
            driver.game().paddle_y(crate::Side::Player),
            start,
            "Pointer moves wait for the next frame"
        );

        driver.frame().unwrap();
        assert_eq!(driver.game().paddle_y(crate::Side::Player), Some(100.0));
    }
}
