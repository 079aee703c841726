//! Browser client for Pong
//!
//! Draws on a 2D canvas, steers the player paddle with the mouse and runs the
//! simulation from `requestAnimationFrame`.
//! Note: only builds for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod frame;
mod input;
mod logging;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::WebCanvas;
use game_core::{Config, Game, GameRng, LoopDriver};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Start a game on the given canvas. Runs until the page is closed or reloaded.
#[wasm_bindgen]
pub fn init_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    logging::init();

    let window = web_sys::window().ok_or_else(|| js_error("no global window"))?;

    // Arena matches the canvas
    let config = Config::with_arena(canvas.width() as f32, canvas.height() as f32);
    let surface = WebCanvas::from_element(&canvas)?;
    let game = Game::new(config, GameRng::from_entropy());
    let driver = Rc::new(RefCell::new(LoopDriver::new(game, surface)));

    input::listen_pointer(&canvas, driver.clone())?;
    frame::run_forever(window, driver)?;

    tracing::info!(
        width = canvas.width(),
        height = canvas.height(),
        "game started"
    );
    Ok(())
}

pub(crate) fn js_error<E: Into<String>>(msg: E) -> JsValue {
    JsValue::from_str(&msg.into())
}
