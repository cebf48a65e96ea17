//! Pitch-location chart: density of plate crossings with a strike-zone
//! overlay, optionally split into per-category scatter layers.
//!
//! Coordinates are Statcast `plate_x`/`plate_z`: horizontal and vertical
//! position in feet as the pitch crosses home plate, catcher's view.

use anyhow::Result;

use crate::canvas::{Canvas, DensityLayer, DensitySpec, ScatterSet};
use crate::dataset::Dataset;
use crate::style::{BLACK, GRAY, palette_color};

/// Half of the 17-inch home plate, in feet.
pub const PLATE_HALF_WIDTH: f64 = 17.0 / 24.0;
/// League-average top of the strike zone.
pub const DEFAULT_SZ_TOP: f64 = 3.5;
/// League-average bottom of the strike zone.
pub const DEFAULT_SZ_BOT: f64 = 1.5;

/// Fixed plate-relative viewing window.
pub const X_LIMITS: (f64, f64) = (-2.5, 2.5);
pub const Y_LIMITS: (f64, f64) = (0.0, 5.5);

const DENSITY_SPEC: DensitySpec = DensitySpec {
    clip_x: (-2.0, 2.0),
    clip_y: (0.3, 5.2),
    thresh: 0.05,
    levels: 6,
};

/// Draw the strike zone with league-average bounds.
pub fn draw_strike_zone(canvas: &mut Canvas) -> &mut Canvas {
    draw_strike_zone_with(canvas, DEFAULT_SZ_TOP, DEFAULT_SZ_BOT)
}

/// Draw the strike zone between explicit vertical bounds.
///
/// Outline only, centered on home plate, half-width [`PLATE_HALF_WIDTH`].
pub fn draw_strike_zone_with(canvas: &mut Canvas, sz_top: f64, sz_bot: f64) -> &mut Canvas {
    canvas.rect(
        (-PLATE_HALF_WIDTH, sz_bot),
        (PLATE_HALF_WIDTH, sz_top),
        BLACK,
        2.0,
        None,
    )
}

/// Options for [`pitch_zone_chart`].
#[derive(Debug, Clone)]
pub struct PitchZoneOptions {
    /// Column to split scatter layers by; when absent from the dataset the
    /// chart falls back to a density-only rendering.
    pub group_by: String,
    /// Explicit strike-zone top, overriding any per-row data.
    pub sz_top: Option<f64>,
    /// Explicit strike-zone bottom, overriding any per-row data.
    pub sz_bot: Option<f64>,
    pub title: Option<String>,
}

impl Default for PitchZoneOptions {
    fn default() -> Self {
        Self {
            group_by: "pitch_type".into(),
            sz_top: None,
            sz_bot: None,
            title: None,
        }
    }
}

/// Compose a pitch-location chart onto `canvas`.
///
/// Rows missing `plate_x` or `plate_z` are dropped (absent columns are an
/// error). Zone bounds come from the options, else the mean of per-row
/// `sz_top`/`sz_bot` columns when any value is present, else league
/// averages. When the grouping column exists, a neutral low-opacity density
/// background is layered under one scatter per sorted category with a
/// legend titled by the column name; otherwise only the density is drawn,
/// at higher opacity. The strike zone is overlaid last so it stays visible.
pub fn pitch_zone_chart<'a>(
    canvas: &'a mut Canvas,
    ds: &Dataset,
    opts: &PitchZoneOptions,
) -> Result<&'a mut Canvas> {
    let mask: Vec<bool> = ds
        .num("plate_x")?
        .iter()
        .zip(ds.num("plate_z")?)
        .map(|(x, z)| x.is_some() && z.is_some())
        .collect();
    let ds = ds.filter(&mask)?;

    let sz_top = opts
        .sz_top
        .or_else(|| column_mean(&ds, "sz_top"))
        .unwrap_or(DEFAULT_SZ_TOP);
    let sz_bot = opts
        .sz_bot
        .or_else(|| column_mean(&ds, "sz_bot"))
        .unwrap_or(DEFAULT_SZ_BOT);

    let points = plate_points(&ds)?;

    if ds.has_column(&opts.group_by) {
        if !points.is_empty() {
            canvas.density(DensityLayer {
                points: points.clone(),
                spec: DENSITY_SPEC,
                color: GRAY,
                opacity: 0.3,
            });
        }
        for (i, category) in ds.categories(&opts.group_by)?.iter().enumerate() {
            let sub = ds.filter(&ds.category_mask(&opts.group_by, category)?)?;
            canvas.scatter(
                ScatterSet::new(plate_points(&sub)?, palette_color(i))
                    .with_size(4)
                    .with_opacity(0.7)
                    .with_label(category.clone()),
            );
        }
        canvas.set_legend_title(&opts.group_by);
    } else if !points.is_empty() {
        canvas.density(DensityLayer {
            points,
            spec: DENSITY_SPEC,
            color: GRAY,
            opacity: 0.6,
        });
    }

    draw_strike_zone_with(canvas, sz_top, sz_bot);

    canvas
        .set_xlim(X_LIMITS.0, X_LIMITS.1)
        .set_ylim(Y_LIMITS.0, Y_LIMITS.1)
        .set_equal_aspect()
        .set_axis_labels("plate_x (ft)", "plate_z (ft)");
    if let Some(title) = &opts.title {
        canvas.set_title(title);
    }
    Ok(canvas)
}

/// Mean of a numeric column, `None` when the column is absent, non-numeric,
/// or entirely missing. Optional zone data never errors.
fn column_mean(ds: &Dataset, name: &str) -> Option<f64> {
    let vals: Vec<f64> = ds.num(name).ok()?.iter().flatten().copied().collect();
    if vals.is_empty() {
        return None;
    }
    Some(vals.iter().sum::<f64>() / vals.len() as f64)
}

/// Paired plate-crossing coordinates of rows where both are present.
fn plate_points(ds: &Dataset) -> Result<Vec<(f64, f64)>> {
    Ok(ds
        .num("plate_x")?
        .iter()
        .zip(ds.num("plate_z")?)
        .filter_map(|(x, z)| Some(((*x)?, (*z)?)))
        .collect())
}
