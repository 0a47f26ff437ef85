use glam::Vec2;

/// Row/column counts for a viewport tiled at `cell_size`.
#[inline]
pub fn grid_dims(width: f32, height: f32, cell_size: f32) -> (usize, usize) {
    if !(cell_size > 0.0) {
        return (0, 0);
    }
    let rows = (height.max(0.0) / cell_size).floor() as usize;
    let cols = (width.max(0.0) / cell_size).floor() as usize;
    (rows, cols)
}

/// Lattice points for a viewport, row-major: all columns of row 0 first.
pub fn build_grid(width: f32, height: f32, cell_size: f32) -> Vec<Vec2> {
    let (rows, cols) = grid_dims(width, height, cell_size);
    let Some(count) = rows.checked_mul(cols) else {
        log::warn!("[grid] {}x{} cells overflow; leaving grid empty", rows, cols);
        return Vec::new();
    };
    let mut points = Vec::with_capacity(count);
    for r in 0..rows {
        for c in 0..cols {
            points.push(Vec2::new(c as f32 * cell_size, r as f32 * cell_size));
        }
    }
    points
}

/// Index of the point closest to `target`. Ties go to the lowest index.
#[inline]
pub fn nearest_index(points: &[Vec2], target: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = p.distance_squared(target);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
