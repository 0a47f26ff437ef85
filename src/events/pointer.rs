use crate::input;
use glam::Vec2;
use pixelnet_core::PixelNetwork;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub network: Rc<RefCell<PixelNetwork>>,
    /// Decorative element that follows the pointer, if the page has one.
    pub cursor: Option<web::HtmlElement>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousemove(&w);
    wire_mouseleave(&w);
}

fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    let target = w.document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if let Some(cursor) = &w.cursor {
            let (left, top) = input::cursor_offsets(client);
            let style = cursor.style();
            let _ = style.set_property("left", &left);
            let _ = style.set_property("top", &top);
        }
        if let Some(pos) = input::mouse_canvas_px(&ev, &w.canvas) {
            w.network.borrow_mut().set_pointer(pos);
        }
    }) as Box<dyn FnMut(_)>);

    let _ = target.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &PointerWiring) {
    let network = w.network.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        network.borrow_mut().clear_pointer();
    }) as Box<dyn FnMut(_)>);

    let _ = w
        .document
        .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
