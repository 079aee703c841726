//! Mouse input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::LoopDriver;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::canvas::WebCanvas;

/// Forward `mousemove` over the canvas to the game, for the lifetime of the page
pub fn listen_pointer(
    canvas: &HtmlCanvasElement,
    driver: Rc<RefCell<LoopDriver<WebCanvas>>>,
) -> Result<(), JsValue> {
    let surface = canvas.clone();
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        let rect = surface.get_bounding_client_rect();
        driver
            .borrow_mut()
            .pointer_moved(e.client_y() as f32, rect.top() as f32);
    }) as Box<dyn FnMut(MouseEvent)>);

    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}
