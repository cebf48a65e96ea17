use std::fs;
use std::path::Path;

use fieldviz::canvas::Canvas;
use fieldviz::dataset::Dataset;
use fieldviz::pitchzone::{PitchZoneOptions, pitch_zone_chart};
use fieldviz::render::save_chart;
use fieldviz::spraychart::{SprayChartOptions, spraychart};

fn check_written(path: &Path) {
    let meta = fs::metadata(path).expect("file created");
    assert!(meta.len() > 0, "chart file has content");
}

fn spray_dataset() -> Dataset {
    let mut ds = Dataset::new();
    ds.insert_num(
        "hc_x",
        vec![Some(100.0), Some(130.0), Some(160.0), Some(90.0)],
    )
    .unwrap();
    ds.insert_num(
        "hc_y",
        vec![Some(80.0), Some(110.0), Some(140.0), Some(170.0)],
    )
    .unwrap();
    ds.insert_cat(
        "events",
        vec![
            Some("home_run".into()),
            Some("double".into()),
            Some("single".into()),
            Some("field_out".into()),
        ],
    )
    .unwrap();
    ds
}

fn pitch_dataset() -> Dataset {
    let mut ds = Dataset::new();
    ds.insert_num(
        "plate_x",
        vec![Some(-0.5), Some(0.2), Some(0.6), Some(-0.1), Some(0.0)],
    )
    .unwrap();
    ds.insert_num(
        "plate_z",
        vec![Some(2.1), Some(2.8), Some(1.9), Some(3.2), Some(2.5)],
    )
    .unwrap();
    ds.insert_cat(
        "pitch_type",
        vec![
            Some("FF".into()),
            Some("FF".into()),
            Some("SL".into()),
            Some("SL".into()),
            Some("CH".into()),
        ],
    )
    .unwrap();
    ds
}

#[test]
fn spray_chart_renders_to_svg_and_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = Canvas::new();
    let opts = SprayChartOptions {
        color_by: "events".into(),
        title: Some("Spray chart".into()),
    };
    spraychart(&mut canvas, &spray_dataset(), &opts).unwrap();

    let svg = dir.path().join("spray.svg");
    save_chart(&canvas, &svg, 800, 800).unwrap();
    check_written(&svg);

    let png = dir.path().join("spray.png");
    save_chart(&canvas, &png, 800, 800).unwrap();
    check_written(&png);
}

#[test]
fn grouped_pitch_chart_renders_to_svg() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &pitch_dataset(), &PitchZoneOptions::default()).unwrap();
    let path = dir.path().join("zone.svg");
    save_chart(&canvas, &path, 600, 700).unwrap();
    check_written(&path);
}

#[test]
fn ungrouped_pitch_chart_renders_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = pitch_dataset();
    let opts = PitchZoneOptions {
        group_by: "nonexistent".into(),
        ..PitchZoneOptions::default()
    };
    ds.insert_num("sz_top", vec![Some(3.4); 5]).unwrap();
    ds.insert_num("sz_bot", vec![Some(1.6); 5]).unwrap();
    let mut canvas = Canvas::new();
    pitch_zone_chart(&mut canvas, &ds, &opts).unwrap();
    let path = dir.path().join("zone.png");
    save_chart(&canvas, &path, 600, 700).unwrap();
    check_written(&path);
}

#[test]
fn bare_field_renders_without_limits() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = Canvas::new();
    fieldviz::draw_field(&mut canvas);
    let path = dir.path().join("field.svg");
    save_chart(&canvas, &path, 640, 640).unwrap();
    check_written(&path);
}

#[test]
fn empty_chart_renders_an_empty_plot() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = Canvas::new();
    spraychart(
        &mut canvas,
        &{
            let mut ds = Dataset::new();
            ds.insert_num("hc_x", vec![]).unwrap();
            ds.insert_num("hc_y", vec![]).unwrap();
            ds
        },
        &SprayChartOptions::default(),
    )
    .unwrap();
    let path = dir.path().join("empty.svg");
    save_chart(&canvas, &path, 640, 640).unwrap();
    check_written(&path);
}
