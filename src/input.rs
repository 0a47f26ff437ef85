use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let css = client - rect_origin;
    // Canvas sized to its CSS box: keep coordinates exact so grid ties resolve
    // by construction order.
    if rect_size == canvas_size {
        return (css.x.is_finite() && css.y.is_finite()).then_some(css);
    }
    let sx = canvas_size.x as f64 / rect_size.x as f64;
    let sy = canvas_size.y as f64 / rect_size.y as f64;
    let px = Vec2::new((css.x as f64 * sx) as f32, (css.y as f64 * sy) as f32);
    (px.x.is_finite() && px.y.is_finite()).then_some(px)
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// CSS `left`/`top` values for an element that tracks the pointer.
#[inline]
pub fn cursor_offsets(client: Vec2) -> (String, String) {
    (format!("{}px", client.x), format!("{}px", client.y))
}
