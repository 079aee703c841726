//! requestAnimationFrame loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::LoopDriver;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::canvas::WebCanvas;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Run a frame on every display refresh until the page goes away
pub fn run_forever(
    window: Window,
    driver: Rc<RefCell<LoopDriver<WebCanvas>>>,
) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let raf_window = window.clone();

    // The closure owns a handle to itself, which keeps it alive for the page's lifetime
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = driver.borrow_mut().frame() {
            tracing::error!(error = ?e, "frame render failed");
        }

        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = request_frame(&raf_window, cb) {
                tracing::error!(error = ?e, "requestAnimationFrame failed, loop stopped");
            }
        }
    }) as Box<dyn FnMut()>));

    let first = callback.borrow();
    let cb = first
        .as_ref()
        .ok_or_else(|| crate::js_error("frame callback missing"))?;
    request_frame(&window, cb)?;
    Ok(())
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(cb.as_ref().unchecked_ref())
}
