use fieldviz::canvas::{Canvas, Primitive};
use fieldviz::dataset::Dataset;
use fieldviz::pitchzone::{
    PLATE_HALF_WIDTH, PitchZoneOptions, draw_strike_zone, draw_strike_zone_with, pitch_zone_chart,
};

fn pitches(n: usize) -> Dataset {
    let mut ds = Dataset::new();
    ds.insert_num(
        "plate_x",
        (0..n).map(|i| Some(-0.8 + i as f64 * 0.2)).collect(),
    )
    .unwrap();
    ds.insert_num(
        "plate_z",
        (0..n).map(|i| Some(1.8 + i as f64 * 0.15)).collect(),
    )
    .unwrap();
    ds
}

fn zone_rect(canvas: &Canvas) -> ((f64, f64), (f64, f64)) {
    canvas
        .primitives()
        .iter()
        .rev()
        .find_map(|p| match p {
            Primitive::Rect { min, max, fill: None, .. } => Some((*min, *max)),
            _ => None,
        })
        .expect("strike zone rectangle")
}

#[test]
fn zone_height_equals_top_minus_bottom() {
    for (top, bot) in [(3.5, 1.5), (3.9, 1.7), (2.0, 0.5)] {
        let mut canvas = Canvas::new();
        draw_strike_zone_with(&mut canvas, top, bot);
        let (min, max) = zone_rect(&canvas);
        assert_eq!(max.1 - min.1, top - bot);
        assert_eq!(min.0, -PLATE_HALF_WIDTH);
        assert_eq!(max.0, PLATE_HALF_WIDTH);
    }
}

#[test]
fn default_zone_uses_league_averages() {
    let mut canvas = Canvas::new();
    draw_strike_zone(&mut canvas);
    let (min, max) = zone_rect(&canvas);
    assert_eq!(min.1, 1.5);
    assert_eq!(max.1, 3.5);
}

#[test]
fn axis_limits_are_fixed_regardless_of_data() {
    let mut canvas = Canvas::new();
    let mut ds = Dataset::new();
    ds.insert_num("plate_x", vec![Some(-40.0), Some(40.0)]).unwrap();
    ds.insert_num("plate_z", vec![Some(-40.0), Some(40.0)]).unwrap();
    pitch_zone_chart(&mut canvas, &ds, &PitchZoneOptions::default()).unwrap();
    assert_eq!(canvas.x_limits(), Some((-2.5, 2.5)));
    assert_eq!(canvas.y_limits(), Some((0.0, 5.5)));
    assert!(canvas.equal_aspect());
    assert_eq!(canvas.x_label(), Some("plate_x (ft)"));
}

#[test]
fn zone_bounds_come_from_per_row_columns_when_present() {
    let mut ds = pitches(3);
    ds.insert_num("sz_top", vec![Some(3.2), Some(3.6), None]).unwrap();
    ds.insert_num("sz_bot", vec![Some(1.4), None, Some(1.8)]).unwrap();
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &ds, &PitchZoneOptions::default()).unwrap();
    let (min, max) = zone_rect(&canvas);
    assert!((max.1 - 3.4).abs() < 1e-9);
    assert!((min.1 - 1.6).abs() < 1e-9);
}

#[test]
fn explicit_bounds_override_column_data() {
    let mut ds = pitches(2);
    ds.insert_num("sz_top", vec![Some(3.2), Some(3.6)]).unwrap();
    let opts = PitchZoneOptions {
        sz_top: Some(4.0),
        sz_bot: Some(1.0),
        ..PitchZoneOptions::default()
    };
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &ds, &opts).unwrap();
    let (min, max) = zone_rect(&canvas);
    assert_eq!(max.1, 4.0);
    assert_eq!(min.1, 1.0);
}

#[test]
fn bounds_fall_back_to_league_averages() {
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &pitches(4), &PitchZoneOptions::default()).unwrap();
    let (min, max) = zone_rect(&canvas);
    assert_eq!(max.1, 3.5);
    assert_eq!(min.1, 1.5);
}

#[test]
fn grouped_chart_layers_density_scatters_and_legend() {
    let mut ds = pitches(4);
    ds.insert_cat(
        "pitch_type",
        vec![
            Some("SL".into()),
            Some("FF".into()),
            Some("FF".into()),
            None,
        ],
    )
    .unwrap();
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &ds, &PitchZoneOptions::default()).unwrap();

    assert!(matches!(canvas.primitives()[0], Primitive::Density(_)));
    let labels: Vec<&str> = canvas.legend().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["FF", "SL"]);
    assert_eq!(canvas.legend_title(), Some("pitch_type"));

    // The strike zone stays on top of every density/scatter layer.
    let zone_idx = canvas
        .primitives()
        .iter()
        .position(|p| matches!(p, Primitive::Rect { .. }))
        .unwrap();
    assert_eq!(zone_idx, canvas.primitives().len() - 1);
}

#[test]
fn ungrouped_chart_draws_density_only() {
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &pitches(5), &PitchZoneOptions::default()).unwrap();
    let densities: Vec<_> = canvas
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Density(d) => Some(d),
            _ => None,
        })
        .collect();
    assert_eq!(densities.len(), 1);
    assert!(densities[0].opacity > 0.5);
    assert!(canvas.legend().is_empty());
    assert!(
        !canvas
            .primitives()
            .iter()
            .any(|p| matches!(p, Primitive::Scatter(_)))
    );
}

#[test]
fn density_clipping_parameters_are_passed_through() {
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &pitches(5), &PitchZoneOptions::default()).unwrap();
    let Primitive::Density(layer) = &canvas.primitives()[0] else {
        panic!("expected density first");
    };
    assert_eq!(layer.spec.clip_x, (-2.0, 2.0));
    assert_eq!(layer.spec.clip_y, (0.3, 5.2));
    assert_eq!(layer.spec.thresh, 0.05);
    assert_eq!(layer.spec.levels, 6);
}

#[test]
fn rows_missing_coordinates_are_dropped_silently() {
    let mut ds = pitches(3);
    ds.insert_num("plate_x", vec![Some(0.1), None, Some(-0.3)])
        .unwrap();
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &ds, &PitchZoneOptions::default()).unwrap();
    let Primitive::Density(layer) = &canvas.primitives()[0] else {
        panic!("expected density first");
    };
    assert_eq!(layer.points.len(), 2);
}

#[test]
fn empty_dataset_still_draws_the_zone() {
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &pitches(0), &PitchZoneOptions::default()).unwrap();
    assert!(
        !canvas
            .primitives()
            .iter()
            .any(|p| matches!(p, Primitive::Density(_)))
    );
    let (min, max) = zone_rect(&canvas);
    assert_eq!(max.1 - min.1, 2.0);
    assert_eq!(canvas.x_limits(), Some((-2.5, 2.5)));
}
