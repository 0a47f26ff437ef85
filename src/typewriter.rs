use crate::dom;
use pixelnet_core::constants::{
    REVEAL_DELAY_MS, TERMINAL_TEXT_SELECTOR, TEXT_DATA_ATTR, TYPED_CLASS, TYPED_TEXT_SELECTOR,
};
use pixelnet_core::{Segment, TextReveal};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start an independent reveal timer for every terminal text container.
pub fn start_all(document: &web::Document) {
    let containers = dom::query_all(document, TERMINAL_TEXT_SELECTOR);
    let mut started = 0usize;
    for container in containers {
        let Some(text) = container.get_attribute(TEXT_DATA_ATTR) else {
            log::warn!("[typewriter] container without {}", TEXT_DATA_ATTR);
            continue;
        };
        let Ok(Some(target)) = container.query_selector(TYPED_TEXT_SELECTOR) else {
            log::warn!("[typewriter] container without {}", TYPED_TEXT_SELECTOR);
            continue;
        };
        start(document.clone(), target, TextReveal::new(&text));
        started += 1;
    }
    log::info!("[typewriter] started {} reveal(s)", started);
}

fn start(document: web::Document, target: web::Element, reveal: TextReveal) {
    target.set_text_content(Some(""));
    let reveal = Rc::new(RefCell::new(reveal));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let done = {
            let mut r = reveal.borrow_mut();
            for seg in r.tick() {
                write_segment(&document, &target, seg);
            }
            r.is_revealed()
        };
        if done {
            let _ = target.class_list().add_1(TYPED_CLASS);
            // Release the closure outside of its own invocation.
            let tick_drop = tick_clone.clone();
            let cleanup = Closure::once_into_js(move || {
                tick_drop.borrow_mut().take();
            });
            if let Some(w) = web::window() {
                let _ = w.set_timeout_with_callback(cleanup.unchecked_ref());
            }
            return;
        }
        schedule(&tick_clone);
    }) as Box<dyn FnMut()>));

    // The first character appears immediately, like every later one after a delay.
    let first = tick.borrow().as_ref().map(|cb| {
        let f: &js_sys::Function = cb.as_ref().unchecked_ref();
        f.clone()
    });
    if let Some(f) = first {
        let _ = f.call0(&wasm_bindgen::JsValue::NULL);
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            REVEAL_DELAY_MS,
        );
    }
}

fn write_segment(document: &web::Document, target: &web::Element, seg: Segment) {
    match seg {
        Segment::Char(c) => {
            let mut buf = [0u8; 4];
            let _ = target.append_with_str_1(c.encode_utf8(&mut buf));
        }
        Segment::LineBreak => {
            if let Ok(br) = document.create_element("br") {
                let _ = target.append_with_node_1(&br);
            }
        }
    }
}
