use crate::dom::{self, LocalStorage};
use pixelnet_core::constants::{MODE_ICON_SELECTOR, MODE_SWITCH_ID};
use pixelnet_core::{load_mode, toggle_mode, ColorMode, PixelNetwork};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Reflect `mode` in the body class list and the toggle icon.
pub fn apply_mode(document: &web::Document, mode: ColorMode) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        let _ = cl.remove_1(mode.toggle().as_class());
        let _ = cl.add_1(mode.as_class());
    }
    if let Some(icon) = document
        .get_element_by_id(MODE_SWITCH_ID)
        .and_then(|s| s.query_selector(MODE_ICON_SELECTOR).ok().flatten())
    {
        icon.set_text_content(Some(mode.icon()));
    }
}

/// Apply the persisted mode and wire the toggle control, if present.
///
/// `network` is absent when the canvas could not be set up; the page still
/// gets its mode class.
pub fn wire_mode_switch(
    document: &web::Document,
    network: Option<Rc<RefCell<PixelNetwork>>>,
) {
    let mut store = LocalStorage::open();
    let initial = load_mode(&mut store);
    apply_mode(document, initial);
    if let Some(net) = &network {
        net.borrow_mut().set_mode(initial);
    }
    log::info!("[mode] starting in {}", initial.as_class());

    let Some(switch) = document.get_element_by_id(MODE_SWITCH_ID) else {
        log::warn!("[mode] #{} not found; toggle disabled", MODE_SWITCH_ID);
        return;
    };

    let mut current = initial;
    let doc = document.clone();
    dom::add_click_listener(&switch, move || {
        let next = toggle_mode(&mut store, current);
        current = next;
        apply_mode(&doc, next);
        if let Some(net) = &network {
            net.borrow_mut().set_mode(next);
        }
        log::info!("[mode] switched to {}", next.as_class());
    });
}
