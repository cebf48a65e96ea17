//! Materialize a [`Canvas`] to **SVG** or **PNG** via plotters.
//!
//! The backend is chosen by file extension. Equal-aspect canvases get the
//! narrower axis range widened so one foot maps to the same number of
//! pixels on both axes.

use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::{Color as _, FontFamily};
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use crate::canvas::{Canvas, DensityLayer, MarkerShape, Primitive, ScatterSet};
use crate::density::kde_grid;
use crate::style::Color;

const MARGIN: u32 = 16;
const LEFT_LABEL_PX: u32 = 56;
const BOTTOM_LABEL_PX: u32 = 48;
const CAPTION_PX: u32 = 26;
const DENSITY_GRID: (usize, usize) = (120, 120);

/// One-time registration of a bundled "sans-serif" font for the `ab_glyph`
/// text path, which does not discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render `canvas` to `out_path` (`.svg` gets the SVG backend, anything
/// else the bitmap backend).
pub fn save_chart<P: AsRef<Path>>(
    canvas: &Canvas,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_canvas(root, canvas)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_canvas(root, canvas)?;
    }
    Ok(())
}

fn rgb(c: Color) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn draw_canvas<DB>(root: DrawingArea<DB, Shift>, canvas: &Canvas) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let (root_w, root_h) = root.dim_in_pixel();
    let ((x0, x1), (y0, y1)) = resolve_ranges(canvas, root_w, root_h);

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, LEFT_LABEL_PX)
        .set_label_area_size(LabelAreaPosition::Bottom, BOTTOM_LABEL_PX);
    if let Some(title) = canvas.title() {
        builder.caption(title, (FontFamily::SansSerif, 20));
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(|e| anyhow!("{:?}", e))?;

    if let Some(bg) = canvas.background() {
        chart
            .plotting_area()
            .fill(&rgb(bg))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    chart
        .configure_mesh()
        .x_desc(canvas.x_label().unwrap_or(""))
        .y_desc(canvas.y_label().unwrap_or(""))
        .x_labels(10)
        .y_labels(10)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for primitive in canvas.primitives() {
        match primitive {
            Primitive::Polyline {
                points,
                color,
                width,
                opacity,
            } => {
                let style = rgb(*color)
                    .mix(*opacity)
                    .stroke_width(width.round().max(1.0) as u32);
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), style))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            Primitive::Rect {
                min,
                max,
                stroke,
                width,
                fill,
            } => {
                if let Some(fill) = fill {
                    chart
                        .draw_series(std::iter::once(Rectangle::new(
                            [*min, *max],
                            rgb(*fill).filled(),
                        )))
                        .map_err(|e| anyhow!("{:?}", e))?;
                }
                let border = rgb(*stroke).stroke_width(width.round().max(1.0) as u32);
                chart
                    .draw_series(std::iter::once(Rectangle::new([*min, *max], border)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            Primitive::Scatter(set) => draw_scatter(&mut chart, set)?,
            Primitive::Density(layer) => draw_density(&mut chart, layer)?,
        }
    }

    if !canvas.legend().is_empty() {
        draw_inside_legend(&root, &chart, canvas)?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Axis ranges to plot: canvas limits when set, else padded data bounds.
/// Equal-aspect canvases get the narrower range widened around its center
/// to match the plot area's pixel aspect.
fn resolve_ranges(canvas: &Canvas, root_w: u32, root_h: u32) -> ((f64, f64), (f64, f64)) {
    let (mut x, mut y) = match (canvas.x_limits(), canvas.y_limits()) {
        (Some(x), Some(y)) => (x, y),
        (x, y) => {
            let (dx, dy) = data_bounds(canvas);
            (x.unwrap_or(dx), y.unwrap_or(dy))
        }
    };
    if x.1 - x.0 < f64::EPSILON {
        x = (x.0 - 1.0, x.1 + 1.0);
    }
    if y.1 - y.0 < f64::EPSILON {
        y = (y.0 - 1.0, y.1 + 1.0);
    }

    if canvas.equal_aspect() {
        let caption = if canvas.title().is_some() { CAPTION_PX } else { 0 };
        let plot_w = root_w.saturating_sub(2 * MARGIN + LEFT_LABEL_PX).max(1) as f64;
        let plot_h = root_h
            .saturating_sub(2 * MARGIN + BOTTOM_LABEL_PX + caption)
            .max(1) as f64;
        let px_per_x = plot_w / (x.1 - x.0);
        let px_per_y = plot_h / (y.1 - y.0);
        if px_per_x > px_per_y {
            let span = plot_w / px_per_y;
            let cx = (x.0 + x.1) / 2.0;
            x = (cx - span / 2.0, cx + span / 2.0);
        } else {
            let span = plot_h / px_per_x;
            let cy = (y.0 + y.1) / 2.0;
            y = (cy - span / 2.0, cy + span / 2.0);
        }
    }
    (x, y)
}

/// Extent of all primitive coordinates, padded 5%, (0,1) ranges when the
/// canvas is empty.
fn data_bounds(canvas: &Canvas) -> ((f64, f64), (f64, f64)) {
    let mut xs = (f64::INFINITY, f64::NEG_INFINITY);
    let mut ys = (f64::INFINITY, f64::NEG_INFINITY);
    let mut grow = |p: (f64, f64)| {
        xs = (xs.0.min(p.0), xs.1.max(p.0));
        ys = (ys.0.min(p.1), ys.1.max(p.1));
    };
    for primitive in canvas.primitives() {
        match primitive {
            Primitive::Polyline { points, .. } => points.iter().copied().for_each(&mut grow),
            Primitive::Rect { min, max, .. } => {
                grow(*min);
                grow(*max);
            }
            Primitive::Scatter(set) => set.points.iter().copied().for_each(&mut grow),
            Primitive::Density(layer) => {
                grow((layer.spec.clip_x.0, layer.spec.clip_y.0));
                grow((layer.spec.clip_x.1, layer.spec.clip_y.1));
            }
        }
    }
    if !xs.0.is_finite() {
        return ((0.0, 1.0), (0.0, 1.0));
    }
    let pad_x = (xs.1 - xs.0).max(1.0) * 0.05;
    let pad_y = (ys.1 - ys.0).max(1.0) * 0.05;
    ((xs.0 - pad_x, xs.1 + pad_x), (ys.0 - pad_y, ys.1 + pad_y))
}

fn draw_scatter<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    set: &ScatterSet,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let fill = rgb(set.color).mix(set.opacity).filled();
    let s = set.size as i32;
    match set.marker {
        MarkerShape::Circle => {
            chart
                .draw_series(
                    set.points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), s, fill)),
                )
                .map_err(|e| anyhow!("{:?}", e))?;
            if let Some(edge) = set.edge {
                let border = rgb(edge).mix(set.opacity).stroke_width(1);
                chart
                    .draw_series(
                        set.points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), s, border)),
                    )
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
        MarkerShape::Square => {
            chart
                .draw_series(set.points.iter().map(|&(x, y)| {
                    EmptyElement::at((x, y)) + Rectangle::new([(-s, -s), (s, s)], fill)
                }))
                .map_err(|e| anyhow!("{:?}", e))?;
            if let Some(edge) = set.edge {
                let border = rgb(edge).mix(set.opacity).stroke_width(1);
                chart
                    .draw_series(set.points.iter().map(|&(x, y)| {
                        EmptyElement::at((x, y)) + Rectangle::new([(-s, -s), (s, s)], border)
                    }))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
        MarkerShape::Pentagon => {
            let vertices = pentagon_vertices(s);
            chart
                .draw_series(set.points.iter().map(|&(x, y)| {
                    EmptyElement::at((x, y)) + Polygon::new(vertices.clone(), fill)
                }))
                .map_err(|e| anyhow!("{:?}", e))?;
            if let Some(edge) = set.edge {
                let border = rgb(edge).mix(set.opacity).stroke_width(1);
                let mut outline = vertices.clone();
                outline.push(vertices[0]);
                chart
                    .draw_series(set.points.iter().map(|&(x, y)| {
                        EmptyElement::at((x, y)) + PathElement::new(outline.clone(), border)
                    }))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }
    Ok(())
}

/// Pixel offsets of a point-up pentagon of radius `s` (screen y grows
/// downward).
fn pentagon_vertices(s: i32) -> Vec<(i32, i32)> {
    (0..5)
        .map(|k| {
            let angle = (-90.0 + 72.0 * k as f64).to_radians();
            (
                (s as f64 * angle.cos()).round() as i32,
                (s as f64 * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Delegate to the KDE collaborator and fill grid cells at or above the
/// display threshold, in `levels` opacity bands up to the layer opacity.
fn draw_density<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    layer: &DensityLayer,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let spec = &layer.spec;
    let grid = kde_grid(
        &layer.points,
        spec.clip_x,
        spec.clip_y,
        DENSITY_GRID.0,
        DENSITY_GRID.1,
    );
    if grid.max <= 0.0 {
        return Ok(());
    }
    let floor = spec.thresh * grid.max;
    let levels = spec.levels.max(1);
    let base = rgb(layer.color);

    let mut cells = Vec::new();
    for iy in 0..grid.ny {
        for ix in 0..grid.nx {
            let v = grid.value(ix, iy);
            if v < floor {
                continue;
            }
            let t = (v - floor) / (grid.max - floor).max(f64::EPSILON);
            let band = ((t * levels as f64) as usize).min(levels - 1);
            let alpha = layer.opacity * (band + 1) as f64 / levels as f64;
            let (min, max) = grid.cell(ix, iy);
            cells.push(Rectangle::new([min, max], base.mix(alpha).filled()));
        }
    }
    chart.draw_series(cells).map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Upper-right legend panel drawn in pixel coordinates: optional title row,
/// then one marker-and-label row per entry, over a translucent white box.
fn draw_inside_legend<DB>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    canvas: &Canvas,
) -> Result<()>
where
    DB: DrawingBackend,
{
    const FONT_PX: u32 = 13;
    const ROW_H: i32 = 18;
    const PAD: i32 = 8;
    const MARKER_R: i32 = 4;
    const TEXT_X: i32 = 24;

    let (px, py) = chart.plotting_area().get_pixel_range();
    let panel_cap = ((px.end - px.start) / 2).max(80);

    let mut texts: Vec<&str> = canvas.legend().iter().map(|e| e.label.as_str()).collect();
    if let Some(title) = canvas.legend_title() {
        texts.push(title);
    }
    let text_w = texts
        .iter()
        .map(|t| estimate_text_width_px(t, FONT_PX) as i32)
        .max()
        .unwrap_or(0);
    let panel_w = (TEXT_X + text_w + PAD).min(panel_cap);
    let max_text_px = (panel_w - TEXT_X - PAD).max(20) as u32;

    let title_rows = canvas.legend_title().is_some() as i32;
    let rows = canvas.legend().len() as i32 + title_rows;
    let panel_h = rows * ROW_H + 2 * PAD;

    let x1 = px.end - PAD;
    let x0 = x1 - panel_w;
    let y0 = py.start + PAD;
    let y1 = y0 + panel_h;

    root.draw(&Rectangle::new(
        [(x0, y0), (x1, y1)],
        WHITE.mix(0.85).filled(),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    root.draw(&Rectangle::new(
        [(x0, y0), (x1, y1)],
        BLACK.stroke_width(1),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    let text_style = TextStyle::from((FontFamily::SansSerif, FONT_PX as i32).into_font())
        .pos(Pos::new(HPos::Left, VPos::Center));

    let mut cy = y0 + PAD + ROW_H / 2;
    if let Some(title) = canvas.legend_title() {
        root.draw(&Text::new(
            truncate_to_width(title, FONT_PX, max_text_px),
            (x0 + PAD, cy),
            text_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        cy += ROW_H;
    }
    for entry in canvas.legend() {
        root.draw(&Circle::new(
            (x0 + PAD + MARKER_R, cy),
            MARKER_R,
            rgb(entry.color).filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        root.draw(&Text::new(
            truncate_to_width(&entry.label, FONT_PX, max_text_px),
            (x0 + TEXT_X, cy),
            text_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        cy += ROW_H;
    }
    Ok(())
}

/// Rough pixel width of text; plotters has no built-in measuring.
fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Cut text down to `max_px`, appending an ellipsis when something was cut.
fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if estimate_text_width_px(&format!("{out}{ch}…"), font_px) > max_px {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
