use crate::render::CanvasPainter;
use instant::Instant;
use pixelnet_core::PixelNetwork;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub network: Rc<RefCell<PixelNetwork>>,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        network: Rc<RefCell<PixelNetwork>>,
        painter: CanvasPainter,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            network,
            painter,
            canvas,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut net = self.network.borrow_mut();
        let scene = net.frame(dt_sec);
        self.painter.paint(&scene);
    }

    /// The loop ends once the canvas has been removed from the document.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.canvas.is_connected()
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until the canvas is detached.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().is_live() {
            log::info!("[frame] canvas detached; stopping animation loop");
            // Dropping the closure here would free it while it runs; defer.
            let tick_drop = tick_clone.clone();
            let cleanup = Closure::once_into_js(move || {
                tick_drop.borrow_mut().take();
            });
            if let Some(w) = web::window() {
                let _ = w.set_timeout_with_callback(cleanup.unchecked_ref());
            }
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
