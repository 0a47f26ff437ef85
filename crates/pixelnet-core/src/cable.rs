use glam::Vec2;
use rand::Rng;

/// A connector between two grid points carrying one travelling pulse.
///
/// Endpoints are indices into the point set the cable was seeded from; a
/// cable is only valid alongside that set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalCable {
    pub start: usize,
    pub end: usize,
    progress: f32,
}

impl SignalCable {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            progress: 0.0,
        }
    }

    /// Pick both endpoints uniformly from `0..point_count`. Self-loops are allowed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, point_count: usize) -> Option<Self> {
        if point_count == 0 {
            return None;
        }
        let start = rng.gen_range(0..point_count);
        let end = rng.gen_range(0..point_count);
        Some(Self::new(start, end))
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Move the pulse forward, wrapping into `[0, 1)`.
    #[inline]
    pub fn advance(&mut self, increment: f32) {
        let next = (self.progress + increment).rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        self.progress = if next >= 1.0 || !next.is_finite() {
            0.0
        } else {
            next
        };
    }

    /// Pulse position between the endpoints, or `None` if the indices are stale.
    #[inline]
    pub fn pulse_position(&self, points: &[Vec2]) -> Option<Vec2> {
        let (a, b) = self.endpoints(points)?;
        Some(a.lerp(b, self.progress))
    }

    #[inline]
    pub fn endpoints(&self, points: &[Vec2]) -> Option<(Vec2, Vec2)> {
        Some((*points.get(self.start)?, *points.get(self.end)?))
    }
}
