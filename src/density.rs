//! 2D kernel density estimation on a regular grid.
//!
//! This is the statistical routine the renderer delegates density overlays
//! to. Chart composers never call it directly; they only carry the clip
//! bounds, threshold, and level count in a [`crate::canvas::DensitySpec`].

/// Densities evaluated at the centers of an `nx` × `ny` grid of cells.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    pub nx: usize,
    pub ny: usize,
    pub x0: f64,
    pub y0: f64,
    pub dx: f64,
    pub dy: f64,
    /// Row-major values, `ny` rows of `nx` cells.
    pub values: Vec<f64>,
    /// Peak density over the grid.
    pub max: f64,
}

impl DensityGrid {
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.nx + ix]
    }

    /// Lower-left and upper-right corners of cell (`ix`, `iy`).
    pub fn cell(&self, ix: usize, iy: usize) -> ((f64, f64), (f64, f64)) {
        let min = (self.x0 + ix as f64 * self.dx, self.y0 + iy as f64 * self.dy);
        (min, (min.0 + self.dx, min.1 + self.dy))
    }
}

/// Gaussian product-kernel density of `points`, evaluated over the clipped
/// support. Bandwidth follows Scott's rule per dimension, floored so a
/// degenerate spread still yields a finite estimate. Zero points yield an
/// all-zero grid.
pub fn kde_grid(
    points: &[(f64, f64)],
    clip_x: (f64, f64),
    clip_y: (f64, f64),
    nx: usize,
    ny: usize,
) -> DensityGrid {
    let dx = (clip_x.1 - clip_x.0) / nx as f64;
    let dy = (clip_y.1 - clip_y.0) / ny as f64;
    let mut grid = DensityGrid {
        nx,
        ny,
        x0: clip_x.0,
        y0: clip_y.0,
        dx,
        dy,
        values: vec![0.0; nx * ny],
        max: 0.0,
    };
    let n = points.len();
    if n == 0 {
        return grid;
    }

    let factor = (n as f64).powf(-1.0 / 6.0);
    let bx = (std_dev(points.iter().map(|p| p.0)) * factor).max(1e-2);
    let by = (std_dev(points.iter().map(|p| p.1)) * factor).max(1e-2);
    let norm = 1.0 / (n as f64 * 2.0 * std::f64::consts::PI * bx * by);

    for iy in 0..ny {
        let cy = clip_y.0 + (iy as f64 + 0.5) * dy;
        for ix in 0..nx {
            let cx = clip_x.0 + (ix as f64 + 0.5) * dx;
            let mut acc = 0.0;
            for &(px, py) in points {
                let ux = (cx - px) / bx;
                let uy = (cy - py) / by;
                acc += (-0.5 * (ux * ux + uy * uy)).exp();
            }
            let v = norm * acc;
            grid.values[iy * nx + ix] = v;
            if v > grid.max {
                grid.max = v;
            }
        }
    }
    grid
}

fn std_dev(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let n = values.clone().count() as f64;
    let mean = values.clone().sum::<f64>() / n;
    (values.map(|v| (v - mean) * (v - mean)).sum::<f64>() / n).sqrt()
}
