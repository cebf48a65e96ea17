//! Static field geometry: foul lines, infield arc, outfield fence, base
//! paths, bases, and pitcher's mound, with home plate at the origin and y
//! pointing toward center field. All distances are in feet.

use std::f64::consts::FRAC_PI_4;

use crate::canvas::{Canvas, MarkerShape, ScatterSet};
use crate::style::{BLACK, BROWN, GREEN, LIGHT_GREEN, SADDLE_BROWN, WHITE};

/// Default foul-line length.
pub const DEFAULT_FOUL_DISTANCE: f64 = 330.0;
/// Default distance to the outfield fence.
pub const DEFAULT_OUTFIELD_DISTANCE: f64 = 340.0;
/// Radius of the infield dirt arc.
pub const INFIELD_RADIUS: f64 = 95.0;
/// Distance from home plate to first/third base along the axes of the
/// diamond: 90 ft base path projected onto the diagonal, 90/sqrt(2).
pub const BASE_DIAGONAL: f64 = 63.64;
/// Distance from home plate to the pitcher's mound.
pub const MOUND_DISTANCE: f64 = 60.5;

const ARC_SAMPLES: usize = 100;

/// Draw the field with default foul-line and fence distances.
pub fn draw_field(canvas: &mut Canvas) -> &mut Canvas {
    draw_field_with(canvas, DEFAULT_FOUL_DISTANCE, DEFAULT_OUTFIELD_DISTANCE)
}

/// Draw the field with explicit foul-line and fence distances.
///
/// Appends primitives only; prior canvas content is kept underneath. Sets
/// equal aspect and a turf background.
pub fn draw_field_with(
    canvas: &mut Canvas,
    foul_distance: f64,
    outfield_distance: f64,
) -> &mut Canvas {
    let reach = foul_distance * FRAC_PI_4.cos();

    // Foul lines at ±45°.
    canvas.polyline(vec![(0.0, 0.0), (-reach, reach)], BLACK, 2.0, 1.0);
    canvas.polyline(vec![(0.0, 0.0), (reach, reach)], BLACK, 2.0, 1.0);

    // Infield arc and outfield fence span −45°..+45° from the y axis.
    canvas.polyline(arc_points(INFIELD_RADIUS), GREEN, 2.0, 0.7);
    canvas.polyline(arc_points(outfield_distance), SADDLE_BROWN, 3.0, 0.7);

    // Base-path diamond, home to home.
    canvas.polyline(
        vec![
            (0.0, 0.0),
            (BASE_DIAGONAL, BASE_DIAGONAL),
            (0.0, 2.0 * BASE_DIAGONAL),
            (-BASE_DIAGONAL, BASE_DIAGONAL),
            (0.0, 0.0),
        ],
        BLACK,
        1.5,
        1.0,
    );

    // Home plate, the three bases, and the mound.
    canvas.scatter(
        ScatterSet::new(vec![(0.0, 0.0)], WHITE)
            .with_marker(MarkerShape::Pentagon)
            .with_size(9)
            .with_edge(BLACK),
    );
    canvas.scatter(
        ScatterSet::new(
            vec![
                (BASE_DIAGONAL, BASE_DIAGONAL),
                (0.0, 2.0 * BASE_DIAGONAL),
                (-BASE_DIAGONAL, BASE_DIAGONAL),
            ],
            WHITE,
        )
        .with_marker(MarkerShape::Square)
        .with_size(7)
        .with_edge(BLACK),
    );
    canvas.scatter(ScatterSet::new(vec![(0.0, MOUND_DISTANCE)], BROWN).with_size(6));

    canvas.set_equal_aspect().set_background(LIGHT_GREEN)
}

/// Sample an arc of `radius` from −45° to +45° off the y axis.
fn arc_points(radius: f64) -> Vec<(f64, f64)> {
    (0..ARC_SAMPLES)
        .map(|i| {
            let theta = -FRAC_PI_4 + (i as f64 / (ARC_SAMPLES - 1) as f64) * 2.0 * FRAC_PI_4;
            (radius * theta.sin(), radius * theta.cos())
        })
        .collect()
}
