use crate::dom;
use pixelnet_core::{emphasis_style, ColorMode, HoverEffect, HOVER_GROUPS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach enter/leave handlers to every element in the hover selector groups.
pub fn wire_hover_effects(document: &web::Document) {
    for (selector, effect) in HOVER_GROUPS {
        let elements = dom::query_all(document, selector);
        log::info!("[hover] {} element(s) for {:?}", elements.len(), selector);
        for el in elements {
            wire_element(document, &el, effect, true);
            wire_element(document, &el, effect, false);
        }
    }
}

fn wire_element(document: &web::Document, el: &web::Element, effect: HoverEffect, enter: bool) {
    let target = el.clone();
    let document = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        apply(&document, &target, effect, enter);
    }) as Box<dyn FnMut()>);
    let event = if enter { "mouseenter" } else { "mouseleave" };
    let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn apply(document: &web::Document, el: &web::Element, effect: HoverEffect, hovered: bool) {
    match effect {
        HoverEffect::Class(class) => {
            let cl = el.class_list();
            let _ = if hovered {
                cl.add_1(class)
            } else {
                cl.remove_1(class)
            };
        }
        HoverEffect::Emphasis => {
            let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
                return;
            };
            let (transform, text_shadow) = emphasis_style(hovered, body_mode(document));
            let style = html.style();
            let _ = style.set_property("transform", transform);
            let _ = style.set_property("text-shadow", text_shadow);
        }
    }
}

/// Mode as currently shown on `<body>`; anything but light counts as dark.
fn body_mode(document: &web::Document) -> ColorMode {
    match document.body() {
        Some(body) if body.class_list().contains(ColorMode::Light.as_class()) => ColorMode::Light,
        _ => ColorMode::Dark,
    }
}
