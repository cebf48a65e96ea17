use fieldviz::dataset::{Dataset, DatasetError};
use fieldviz::transform::{ORIGIN_X, ORIGIN_Y, transform_coords};

fn raw_dataset(hc_x: Vec<Option<f64>>, hc_y: Vec<Option<f64>>) -> Dataset {
    let mut ds = Dataset::new();
    ds.insert_num("hc_x", hc_x).unwrap();
    ds.insert_num("hc_y", hc_y).unwrap();
    ds
}

#[test]
fn copy_semantics_preserve_the_input() {
    let mut ds = raw_dataset(vec![Some(100.0), None], vec![Some(150.0), Some(160.0)]);
    ds.insert_cat("events", vec![Some("single".into()), None])
        .unwrap();
    let before = ds.clone();

    let out = transform_coords(&ds).unwrap();

    assert_eq!(ds, before);
    // Every input column survives with its name and values intact.
    assert_eq!(out.num("hc_x").unwrap(), ds.num("hc_x").unwrap());
    assert_eq!(out.num("hc_y").unwrap(), ds.num("hc_y").unwrap());
    assert_eq!(out.cat("events").unwrap(), ds.cat("events").unwrap());
    assert!(out.has_column("x") && out.has_column("y"));
}

#[test]
fn home_plate_maps_to_origin() {
    let out = transform_coords(&raw_dataset(vec![Some(ORIGIN_X)], vec![Some(ORIGIN_Y)])).unwrap();
    assert!(out.num("x").unwrap()[0].unwrap().abs() < 0.01);
    assert!(out.num("y").unwrap()[0].unwrap().abs() < 0.01);
}

#[test]
fn forty_raw_units_are_one_hundred_feet() {
    let out = transform_coords(&raw_dataset(
        vec![Some(ORIGIN_X + 40.0)],
        vec![Some(ORIGIN_Y - 40.0)],
    ))
    .unwrap();
    assert!((out.num("x").unwrap()[0].unwrap() - 100.0).abs() < 0.01);
    assert!((out.num("y").unwrap()[0].unwrap() - 100.0).abs() < 0.01);
}

#[test]
fn empty_input_gains_empty_output_columns() {
    let out = transform_coords(&raw_dataset(vec![], vec![])).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.num("x").unwrap().len(), 0);
    assert_eq!(out.num("y").unwrap().len(), 0);
}

#[test]
fn absent_raw_column_surfaces_a_lookup_error() {
    let mut ds = Dataset::new();
    ds.insert_num("hc_y", vec![Some(1.0)]).unwrap();
    assert!(matches!(
        transform_coords(&ds),
        Err(DatasetError::MissingColumn(c)) if c == "hc_x"
    ));
}
