// Host-side tests for pure pointer helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn full_viewport_canvas_maps_one_to_one() {
    let size = Vec2::new(1280.0, 720.0);
    let p = client_to_canvas_px(Vec2::new(300.0, 200.0), Vec2::ZERO, size, size);
    assert_eq!(p, Some(Vec2::new(300.0, 200.0)));
}

#[test]
fn offset_and_scaled_canvas() {
    // Canvas shown at half its backing size, 10px from the top-left.
    let p = client_to_canvas_px(
        Vec2::new(60.0, 35.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(400.0, 200.0),
    );
    assert_eq!(p, Some(Vec2::new(100.0, 50.0)));
}

#[test]
fn collapsed_canvas_has_no_mapping() {
    let p = client_to_canvas_px(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);
    assert_eq!(p, None);
}

#[test]
fn cursor_offsets_are_css_pixels() {
    let (left, top) = cursor_offsets(Vec2::new(12.0, 340.5));
    assert_eq!(left, "12px");
    assert_eq!(top, "340.5px");
}

#[test]
fn midpoint_between_grid_rows_resolves_to_earlier_point() {
    let viewport = Vec2::new(1280.0, 720.0);
    let p = client_to_canvas_px(Vec2::new(0.0, 100.0), Vec2::ZERO, viewport, viewport).unwrap();
    assert_eq!(p, Vec2::new(0.0, 100.0));

    let grid = pixelnet_core::build_grid(viewport.x, viewport.y, 40.0);
    // (0, 80) is index 64, (0, 120) is index 96.
    assert_eq!(pixelnet_core::nearest_index(&grid, p), Some(64));
}

#[test]
fn every_cell_midpoint_tie_survives_mapping() {
    let viewport = Vec2::new(1280.0, 720.0);
    let grid = pixelnet_core::build_grid(viewport.x, viewport.y, 40.0);
    for point in &grid {
        let mid = *point + Vec2::new(0.0, 20.0);
        let mapped = client_to_canvas_px(mid, Vec2::ZERO, viewport, viewport).unwrap();
        assert_eq!(
            pixelnet_core::nearest_index(&grid, mapped),
            pixelnet_core::nearest_index(&grid, mid),
            "tie at {mid:?} moved after mapping to {mapped:?}"
        );
    }
}
