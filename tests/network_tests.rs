// Host-side tests for the pixel network context and the scenes it produces.

use glam::Vec2;
use pixelnet_core::{ColorMode, NetworkConfig, PixelNetwork, DARK_PALETTE, LIGHT_PALETTE};

fn network(w: f32, h: f32) -> PixelNetwork {
    let mut net = PixelNetwork::new(NetworkConfig::default(), 1234);
    net.rebuild(w, h);
    net
}

#[test]
fn empty_grid_redraw_cycle_is_harmless() {
    let mut net = network(30.0, 30.0);
    net.set_pointer(Vec2::new(5.0, 5.0));
    for _ in 0..5 {
        let scene = net.frame(1.0 / 60.0);
        assert!(scene.dots.is_empty());
        assert!(scene.cables.is_empty());
        assert!(scene.pointer_link.is_none());
    }
    assert_eq!(net.nearest_point(Vec2::ZERO), None);
}

#[test]
fn scene_lists_every_point_and_cable() {
    let mut net = network(400.0, 200.0);
    let scene = net.frame(1.0 / 60.0);
    assert_eq!(scene.dots.len(), 10 * 5);
    assert_eq!(scene.cables.len(), 10);
    assert_eq!(scene.width, 400.0);
    assert_eq!(scene.height, 200.0);
}

#[test]
fn scene_pulses_match_cable_state() {
    let mut net = network(400.0, 400.0);
    for _ in 0..17 {
        net.advance(1.0 / 60.0);
    }
    let scene = net.scene();
    for (i, sprite) in scene.cables.iter().enumerate() {
        assert_eq!(Some(sprite.pulse), net.pulse_position(i));
        let c = net.cables()[i];
        assert_eq!(sprite.from, net.points()[c.start]);
        assert_eq!(sprite.to, net.points()[c.end]);
    }
}

#[test]
fn pointer_link_targets_nearest_point() {
    let mut net = network(400.0, 400.0);
    assert!(net.scene().pointer_link.is_none());

    net.set_pointer(Vec2::new(95.0, 43.0));
    let (from, to) = net.scene().pointer_link.unwrap();
    assert_eq!(from, Vec2::new(95.0, 43.0));
    assert_eq!(to, Vec2::new(80.0, 40.0));

    net.clear_pointer();
    assert!(net.scene().pointer_link.is_none());
}

#[test]
fn pointer_survives_resize() {
    let mut net = network(400.0, 400.0);
    net.set_pointer(Vec2::new(300.0, 300.0));
    net.rebuild(200.0, 200.0);
    let (_, to) = net.scene().pointer_link.unwrap();
    assert_eq!(to, Vec2::new(160.0, 160.0));
}

#[test]
fn mode_selects_palette() {
    let mut net = network(200.0, 200.0);
    assert_eq!(net.mode(), ColorMode::Dark);
    assert!(std::ptr::eq(net.scene().palette, &DARK_PALETTE));
    net.set_mode(ColorMode::Light);
    assert!(std::ptr::eq(net.scene().palette, &LIGHT_PALETTE));
}

#[test]
fn rebuild_reseeds_cables() {
    let mut net = network(1920.0, 1080.0);
    let before: Vec<_> = net.cables().iter().map(|c| (c.start, c.end)).collect();
    net.rebuild(1920.0, 1080.0);
    let after: Vec<_> = net.cables().iter().map(|c| (c.start, c.end)).collect();
    assert_eq!(before.len(), after.len());
    assert_ne!(before, after);
}

#[test]
fn same_seed_same_layout() {
    let a = network(800.0, 600.0);
    let b = network(800.0, 600.0);
    assert_eq!(a.cables(), b.cables());
    assert_eq!(a.points(), b.points());
}

#[test]
fn single_point_grid_only_has_self_loops() {
    let mut net = network(40.0, 40.0);
    assert_eq!(net.points(), &[Vec2::ZERO]);
    let scene = net.frame(1.0 / 60.0);
    for sprite in &scene.cables {
        assert_eq!(sprite.from, sprite.to);
        assert_eq!(sprite.pulse, Vec2::ZERO);
    }
}
