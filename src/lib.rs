#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use pixelnet_core::constants::{CANVAS_ID, CUSTOM_CURSOR_SELECTOR};
use pixelnet_core::{NetworkConfig, PixelNetwork};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;
mod typewriter;

/// Resize the canvas to the window and rebuild the network, now and on every
/// `resize` event.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, network: &Rc<RefCell<PixelNetwork>>) {
    let (w, h) = dom::sync_canvas_to_window(canvas);
    network.borrow_mut().rebuild(w as f32, h as f32);

    let canvas_resize = canvas.clone();
    let network_resize = network.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_window(&canvas_resize);
        network_resize.borrow_mut().rebuild(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn read_config(canvas: &web::HtmlCanvasElement) -> NetworkConfig {
    let attrs = NetworkConfig::ATTRS
        .iter()
        .filter_map(|key| canvas.get_attribute(key).map(|v| (*key, v)));
    NetworkConfig::default().with_attrs(attrs)
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

/// Canvas, network and painter; fails only the animation, not the page.
fn init_network(
    document: &web::Document,
) -> anyhow::Result<(web::HtmlCanvasElement, Rc<RefCell<PixelNetwork>>, render::CanvasPainter)>
{
    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let painter = render::CanvasPainter::new(&canvas)?;
    let config = read_config(&canvas);
    log::info!(
        "[network] cell={} cables={} timing={:?}",
        config.cell_size,
        config.cable_count,
        config.timing
    );
    let network = Rc::new(RefCell::new(PixelNetwork::new(config, random_seed())));
    Ok((canvas, network, painter))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pixelnet-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    typewriter::start_all(&document);
    events::wire_hover_effects(&document);

    let parts = match init_network(&document) {
        Ok(parts) => Some(parts),
        Err(e) => {
            log::warn!("[network] animation disabled: {:?}", e);
            None
        }
    };

    events::wire_mode_switch(&document, parts.as_ref().map(|(_, net, _)| net.clone()));

    let Some((canvas, network, painter)) = parts else {
        return Ok(());
    };

    wire_canvas_resize(&canvas, &network);

    let cursor = document
        .query_selector(CUSTOM_CURSOR_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    events::wire_pointer_handlers(events::PointerWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        network: network.clone(),
        cursor,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        network.clone(),
        painter,
        canvas.clone(),
    )));
    {
        let net = network.borrow();
        let Vec2 { x, y } = net.viewport();
        log::info!(
            "[network] {}x{} viewport, {} points, {} cables",
            x,
            y,
            net.points().len(),
            net.cables().len()
        );
    }
    frame::start_loop(frame_ctx);
    Ok(())
}
