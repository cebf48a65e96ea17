//! fieldviz
//!
//! A lightweight Rust library for baseball chart composition: it maps raw
//! Statcast tracking coordinates into field-centered feet and draws spray
//! charts and pitch-location charts onto a caller-owned [`Canvas`], which
//! can then be rendered to SVG or PNG.
//!
//! ### Features
//! - Statcast `hc_x`/`hc_y` → feet coordinate transform (home plate at the
//!   origin, y toward center field)
//! - Field diagram: foul lines, infield arc, outfield fence, base paths,
//!   bases, pitcher's mound
//! - Spray charts with preset outcome colors or categorical palettes
//! - Pitch-location density charts with a strike-zone overlay
//!
//! ### Example
//! ```no_run
//! use fieldviz::{Canvas, Dataset, SprayChartOptions};
//!
//! let mut ds = Dataset::new();
//! ds.insert_num("hc_x", vec![Some(110.0), Some(160.0)])?;
//! ds.insert_num("hc_y", vec![Some(90.0), Some(120.0)])?;
//! ds.insert_cat("events", vec![Some("home_run".into()), Some("single".into())])?;
//!
//! let mut canvas = Canvas::new();
//! fieldviz::spraychart(&mut canvas, &ds, &SprayChartOptions::default())?;
//! fieldviz::render::save_chart(&canvas, "spray.svg", 800, 800)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod canvas;
pub mod dataset;
pub mod density;
pub mod field;
pub mod pitchzone;
pub mod render;
pub mod spraychart;
pub mod style;
pub mod transform;

pub use canvas::{
    Canvas, DensityLayer, DensitySpec, LegendEntry, MarkerShape, Primitive, ScatterSet,
};
pub use dataset::{Dataset, DatasetError};
pub use field::{draw_field, draw_field_with};
pub use pitchzone::{PitchZoneOptions, draw_strike_zone, draw_strike_zone_with, pitch_zone_chart};
pub use spraychart::{SprayChartOptions, spraychart};
pub use style::Color;
pub use transform::transform_coords;
