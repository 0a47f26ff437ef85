//! The pixel network: grid points, signal cables, pointer and color mode.
//!
//! `PixelNetwork` owns all animation state. The front-end feeds it viewport
//! sizes, pointer positions and frame times, and paints the [`Scene`] it
//! produces; nothing in here touches the DOM.

use crate::cable::SignalCable;
use crate::config::NetworkConfig;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::grid::{build_grid, grid_dims, nearest_index};
use crate::palette::{ColorMode, Palette};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// One cable as drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CableSprite {
    pub from: Vec2,
    pub to: Vec2,
    pub pulse: Vec2,
}

/// Plain-data description of a frame, in draw order.
#[derive(Debug)]
pub struct Scene<'a> {
    pub width: f32,
    pub height: f32,
    pub dots: &'a [Vec2],
    pub cables: SmallVec<[CableSprite; 16]>,
    /// Pointer position and its nearest grid point.
    pub pointer_link: Option<(Vec2, Vec2)>,
    pub palette: &'static Palette,
}

pub struct PixelNetwork {
    config: NetworkConfig,
    viewport: Vec2,
    points: Vec<Vec2>,
    cables: Vec<SignalCable>,
    pointer: Option<Vec2>,
    mode: ColorMode,
    rng: StdRng,
}

impl PixelNetwork {
    pub fn new(config: NetworkConfig, seed: u64) -> Self {
        Self {
            config,
            viewport: Vec2::ZERO,
            points: Vec::new(),
            cables: Vec::new(),
            pointer: None,
            mode: ColorMode::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Regenerate the grid for a new viewport and re-seed every cable.
    pub fn rebuild(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.points = build_grid(width, height, self.config.cell_size);
        let count = self.points.len();
        let rng = &mut self.rng;
        self.cables = (0..self.config.cable_count)
            .filter_map(|_| SignalCable::random(&mut *rng, count))
            .collect();
        let (rows, cols) = grid_dims(width, height, self.config.cell_size);
        log::debug!(
            "[network] rebuilt {}x{} viewport: rows={} cols={} cables={}",
            width,
            height,
            rows,
            cols,
            self.cables.len()
        );
    }

    /// Advance every pulse for a frame that took `dt_sec` seconds.
    pub fn advance(&mut self, dt_sec: f32) {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        let inc = self.config.timing.increment(dt);
        for c in &mut self.cables {
            c.advance(inc);
        }
    }

    /// Advance one frame and describe what to draw.
    pub fn frame(&mut self, dt_sec: f32) -> Scene<'_> {
        self.advance(dt_sec);
        self.scene()
    }

    pub fn scene(&self) -> Scene<'_> {
        let cables = self
            .cables
            .iter()
            .filter_map(|c| {
                let (from, to) = c.endpoints(&self.points)?;
                Some(CableSprite {
                    from,
                    to,
                    pulse: from.lerp(to, c.progress()),
                })
            })
            .collect();
        let pointer_link = self
            .pointer
            .and_then(|p| self.nearest_point(p).map(|n| (p, n)));
        Scene {
            width: self.viewport.x,
            height: self.viewport.y,
            dots: &self.points,
            cables,
            pointer_link,
            palette: self.mode.palette(),
        }
    }

    #[inline]
    pub fn nearest_point(&self, target: Vec2) -> Option<Vec2> {
        nearest_index(&self.points, target).map(|i| self.points[i])
    }

    #[inline]
    pub fn pulse_position(&self, cable_index: usize) -> Option<Vec2> {
        self.cables.get(cable_index)?.pulse_position(&self.points)
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn cables(&self) -> &[SignalCable] {
        &self.cables
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}
