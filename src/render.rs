use pixelnet_core::constants::{
    CABLE_LINE_WIDTH, DOT_RADIUS, POINTER_LINE_WIDTH, PULSE_RADIUS, PULSE_SHADOW_BLUR,
};
use pixelnet_core::Scene;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Paints a [`Scene`] onto a Canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    pub fn paint(&self, scene: &Scene<'_>) {
        let ctx = &self.ctx;
        let palette = scene.palette;
        ctx.clear_rect(0.0, 0.0, scene.width as f64, scene.height as f64);

        // Grid dots
        ctx.set_shadow_blur(0.0);
        ctx.set_fill_style_str(palette.dot_fill);
        for p in scene.dots {
            ctx.begin_path();
            let _ = ctx.arc(p.x as f64, p.y as f64, DOT_RADIUS, 0.0, TAU);
            ctx.fill();
        }

        // Cables and their pulses
        for c in &scene.cables {
            ctx.set_shadow_blur(0.0);
            ctx.begin_path();
            ctx.move_to(c.from.x as f64, c.from.y as f64);
            ctx.line_to(c.to.x as f64, c.to.y as f64);
            ctx.set_stroke_style_str(palette.cable_stroke);
            ctx.set_line_width(CABLE_LINE_WIDTH);
            ctx.stroke();

            ctx.begin_path();
            let _ = ctx.arc(c.pulse.x as f64, c.pulse.y as f64, PULSE_RADIUS, 0.0, TAU);
            ctx.set_fill_style_str(palette.pulse_fill);
            ctx.set_shadow_blur(PULSE_SHADOW_BLUR);
            ctx.set_shadow_color(palette.pulse_glow);
            ctx.fill();
        }
        ctx.set_shadow_blur(0.0);

        // Pointer connector
        if let Some((from, to)) = scene.pointer_link {
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.set_stroke_style_str(palette.pointer_stroke);
            ctx.set_line_width(POINTER_LINE_WIDTH);
            ctx.stroke();
        }
    }
}
