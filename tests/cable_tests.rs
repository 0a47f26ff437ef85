// Host-side tests for signal cable progress and endpoints.

use glam::Vec2;
use pixelnet_core::{NetworkConfig, PixelNetwork, PulseTiming, SignalCable};

fn circular_gap(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

#[test]
fn progress_stays_in_unit_interval() {
    let mut c = SignalCable::new(0, 1);
    for _ in 0..10_000 {
        c.advance(0.01);
        assert!((0.0..1.0).contains(&c.progress()), "{}", c.progress());
    }
}

#[test]
fn progress_after_n_steps_is_n_times_speed_mod_one() {
    for speed in [0.01_f32, 0.037, 0.25, 0.6] {
        for n in [1usize, 7, 50, 133, 999] {
            let mut c = SignalCable::new(0, 0);
            for _ in 0..n {
                c.advance(speed);
            }
            let expected = (n as f64 * speed as f64).rem_euclid(1.0) as f32;
            assert!(
                circular_gap(c.progress(), expected) < 1e-3,
                "speed={speed} n={n}: got {} expected {expected}",
                c.progress()
            );
        }
    }
}

#[test]
fn pulse_interpolates_linearly() {
    let pts = [Vec2::new(0.0, 0.0), Vec2::new(80.0, 40.0)];
    let mut c = SignalCable::new(0, 1);
    assert_eq!(c.pulse_position(&pts), Some(Vec2::new(0.0, 0.0)));
    c.advance(0.25);
    assert_eq!(c.pulse_position(&pts), Some(Vec2::new(20.0, 10.0)));
}

#[test]
fn stale_indices_yield_no_pulse() {
    let pts = [Vec2::ZERO];
    assert_eq!(SignalCable::new(0, 3).pulse_position(&pts), None);
}

#[test]
fn cable_indices_valid_after_every_resize() {
    let mut net = PixelNetwork::new(NetworkConfig::default(), 99);
    let sizes = [
        (1920.0, 1080.0),
        (400.0, 300.0),
        (81.0, 41.0),
        (40.0, 40.0),
        (1280.0, 720.0),
        (10.0, 10.0),
        (640.0, 480.0),
    ];
    for (w, h) in sizes {
        net.rebuild(w, h);
        let n = net.points().len();
        for c in net.cables() {
            assert!(c.start < n && c.end < n, "dangling cable after {w}x{h}");
            assert_eq!(c.progress(), 0.0);
        }
        if n > 0 {
            assert_eq!(net.cables().len(), 10);
        } else {
            assert!(net.cables().is_empty());
        }
    }
}

#[test]
fn elapsed_time_timing_follows_dt() {
    let cfg = NetworkConfig {
        timing: PulseTiming::PerSecond(0.5),
        ..NetworkConfig::default()
    };
    let mut net = PixelNetwork::new(cfg, 3);
    net.rebuild(400.0, 400.0);
    net.advance(0.1);
    net.advance(0.1);
    for c in net.cables() {
        assert!((c.progress() - 0.1).abs() < 1e-5);
    }
}

#[test]
fn long_stalls_are_clamped() {
    let cfg = NetworkConfig {
        timing: PulseTiming::PerSecond(1.0),
        ..NetworkConfig::default()
    };
    let mut net = PixelNetwork::new(cfg, 3);
    net.rebuild(400.0, 400.0);
    net.advance(30.0);
    for c in net.cables() {
        assert!((c.progress() - 0.25).abs() < 1e-5);
    }
}
