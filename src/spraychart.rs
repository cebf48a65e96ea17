//! Spray chart: batted-ball landing points over the field diagram.

use anyhow::Result;

use crate::canvas::{Canvas, ScatterSet};
use crate::dataset::Dataset;
use crate::field::draw_field;
use crate::style::{EVENT_COLORS, GRAY, palette_color};
use crate::transform::transform_coords;

/// Fixed field-relative viewing window.
pub const X_LIMITS: (f64, f64) = (-350.0, 350.0);
pub const Y_LIMITS: (f64, f64) = (-50.0, 420.0);

/// Options for [`spraychart`].
#[derive(Debug, Clone)]
pub struct SprayChartOptions {
    /// Column to color points by. The default `events` column gets preset
    /// outcome colors with per-subset counts; any other existing column
    /// gets categorical palette coloring; an absent column falls back to a
    /// single undifferentiated scatter.
    pub color_by: String,
    pub title: Option<String>,
}

impl Default for SprayChartOptions {
    fn default() -> Self {
        Self {
            color_by: "events".into(),
            title: None,
        }
    }
}

/// Compose a spray chart onto `canvas`.
///
/// Rows missing `hc_x` or `hc_y` are dropped (absent columns are an
/// error), coordinates are transformed to field-centered feet, and the
/// field diagram is drawn first so markers layer above it.
pub fn spraychart<'a>(
    canvas: &'a mut Canvas,
    ds: &Dataset,
    opts: &SprayChartOptions,
) -> Result<&'a mut Canvas> {
    let mask: Vec<bool> = ds
        .num("hc_x")?
        .iter()
        .zip(ds.num("hc_y")?)
        .map(|(x, y)| x.is_some() && y.is_some())
        .collect();
    let ds = transform_coords(&ds.filter(&mask)?)?;

    draw_field(canvas);

    if opts.color_by == "events" && ds.has_column("events") {
        draw_event_subsets(canvas, &ds)?;
    } else if ds.has_column(&opts.color_by) {
        for (i, category) in ds.categories(&opts.color_by)?.iter().enumerate() {
            let sub = ds.filter(&ds.category_mask(&opts.color_by, category)?)?;
            canvas.scatter(
                ScatterSet::new(field_points(&sub)?, palette_color(i))
                    .with_size(6)
                    .with_opacity(0.7)
                    .with_label(category.clone()),
            );
        }
    } else {
        canvas.scatter(
            ScatterSet::new(field_points(&ds)?, palette_color(0))
                .with_size(6)
                .with_opacity(0.7),
        );
    }

    canvas
        .set_xlim(X_LIMITS.0, X_LIMITS.1)
        .set_ylim(Y_LIMITS.0, Y_LIMITS.1)
        .set_axis_labels("X (feet)", "Y (feet)");
    if let Some(title) = &opts.title {
        canvas.set_title(title);
    }
    Ok(canvas)
}

/// One labeled subset per known outcome, then everything else (including
/// rows with a missing outcome) as a fainter, smaller "other" subset.
fn draw_event_subsets(canvas: &mut Canvas, ds: &Dataset) -> Result<()> {
    for (event, color) in EVENT_COLORS {
        let sub = ds.filter(&ds.category_mask("events", event)?)?;
        if !sub.is_empty() {
            canvas.scatter(
                ScatterSet::new(field_points(&sub)?, color)
                    .with_size(6)
                    .with_opacity(0.7)
                    .with_label(format!("{event} ({})", sub.len())),
            );
        }
    }

    let other_mask: Vec<bool> = ds
        .reprs("events")?
        .into_iter()
        .map(|r| !matches!(r.as_deref(), Some(e) if EVENT_COLORS.iter().any(|(k, _)| *k == e)))
        .collect();
    let other = ds.filter(&other_mask)?;
    if !other.is_empty() {
        canvas.scatter(
            ScatterSet::new(field_points(&other)?, GRAY)
                .with_size(4)
                .with_opacity(0.4)
                .with_label(format!("other ({})", other.len())),
        );
    }
    Ok(())
}

/// Paired transformed coordinates of rows where both are present.
fn field_points(ds: &Dataset) -> Result<Vec<(f64, f64)>> {
    Ok(ds
        .num("x")?
        .iter()
        .zip(ds.num("y")?)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect())
}
