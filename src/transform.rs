//! Statcast hit-coordinate transform.
//!
//! Statcast `hc_x`/`hc_y` are screen-style coordinates: home plate sits near
//! (125.42, 198.27) and y grows downward. The transformed system has home
//! plate at the origin, y pointing toward center field, and units of feet.

use crate::dataset::{Dataset, DatasetError};

/// Feet per raw Statcast unit.
pub const SCALE: f64 = 2.5;
/// Raw x coordinate of home plate.
pub const ORIGIN_X: f64 = 125.42;
/// Raw y coordinate of home plate.
pub const ORIGIN_Y: f64 = 198.27;

/// Add `x`/`y` columns in field-centered feet derived from `hc_x`/`hc_y`.
///
/// Returns a copy; the input dataset and all its columns are left untouched.
/// Missing raw cells yield missing transformed cells. A dataset without
/// `hc_x` or `hc_y` fails with [`DatasetError::MissingColumn`].
pub fn transform_coords(ds: &Dataset) -> Result<Dataset, DatasetError> {
    let x: Vec<Option<f64>> = ds
        .num("hc_x")?
        .iter()
        .map(|c| c.map(|v| SCALE * (v - ORIGIN_X)))
        .collect();
    let y: Vec<Option<f64>> = ds
        .num("hc_y")?
        .iter()
        .map(|c| c.map(|v| SCALE * (ORIGIN_Y - v)))
        .collect();

    let mut out = ds.clone();
    out.insert_num("x", x)?;
    out.insert_num("y", y)?;
    Ok(out)
}
