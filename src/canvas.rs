//! Caller-owned drawing surface.
//!
//! A [`Canvas`] is a display list: chart composers append primitives
//! (polylines, rectangles, scatter sets, density overlays) and set a small
//! number of display properties (axis limits, aspect, background, title,
//! legend). Draw order is layer order; nothing is ever cleared. The
//! [`crate::render`] module materializes a canvas to SVG or PNG.

use serde::{Deserialize, Serialize};

use crate::style::Color;

/// Marker geometry for scatter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    Circle,
    Square,
    /// Home-plate marker.
    Pentagon,
}

/// Parameters handed to the density-estimation collaborator.
///
/// The canvas itself performs no estimation; the renderer delegates to
/// [`crate::density`] with exactly these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensitySpec {
    /// Horizontal support of the estimate.
    pub clip_x: (f64, f64),
    /// Vertical support of the estimate.
    pub clip_y: (f64, f64),
    /// Fraction of the peak density below which nothing is shown.
    pub thresh: f64,
    /// Number of filled contour bands.
    pub levels: usize,
}

/// One set of scatter markers sharing color, size, and opacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSet {
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub marker: MarkerShape,
    /// Marker radius in pixels.
    pub size: u32,
    pub opacity: f64,
    /// Outline color drawn around each marker, if any.
    pub edge: Option<Color>,
    /// Legend label; labeled sets produce a legend entry.
    pub label: Option<String>,
}

impl ScatterSet {
    pub fn new(points: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            points,
            color,
            marker: MarkerShape::Circle,
            size: 5,
            opacity: 1.0,
            edge: None,
            label: None,
        }
    }

    pub fn with_marker(mut self, marker: MarkerShape) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_edge(mut self, edge: Color) -> Self {
        self.edge = Some(edge);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A density overlay: raw points plus estimation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityLayer {
    pub points: Vec<(f64, f64)>,
    pub spec: DensitySpec,
    pub color: Color,
    pub opacity: f64,
}

/// One drawable primitive, in layer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Polyline {
        points: Vec<(f64, f64)>,
        color: Color,
        width: f64,
        opacity: f64,
    },
    Rect {
        min: (f64, f64),
        max: (f64, f64),
        stroke: Color,
        width: f64,
        fill: Option<Color>,
    },
    Scatter(ScatterSet),
    Density(DensityLayer),
}

/// One legend row, accumulated from labeled scatter sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// The drawing surface chart composers target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    primitives: Vec<Primitive>,
    legend: Vec<LegendEntry>,
    legend_title: Option<String>,
    equal_aspect: bool,
    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    background: Option<Color>,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polyline(
        &mut self,
        points: Vec<(f64, f64)>,
        color: Color,
        width: f64,
        opacity: f64,
    ) -> &mut Self {
        self.primitives.push(Primitive::Polyline {
            points,
            color,
            width,
            opacity,
        });
        self
    }

    /// Axis-aligned rectangle; `fill = None` draws the outline only.
    pub fn rect(
        &mut self,
        min: (f64, f64),
        max: (f64, f64),
        stroke: Color,
        width: f64,
        fill: Option<Color>,
    ) -> &mut Self {
        self.primitives.push(Primitive::Rect {
            min,
            max,
            stroke,
            width,
            fill,
        });
        self
    }

    /// Append a scatter set; a labeled set also appends a legend entry.
    pub fn scatter(&mut self, set: ScatterSet) -> &mut Self {
        if let Some(label) = &set.label {
            self.legend.push(LegendEntry {
                label: label.clone(),
                color: set.color,
            });
        }
        self.primitives.push(Primitive::Scatter(set));
        self
    }

    pub fn density(&mut self, layer: DensityLayer) -> &mut Self {
        self.primitives.push(Primitive::Density(layer));
        self
    }

    pub fn set_equal_aspect(&mut self) -> &mut Self {
        self.equal_aspect = true;
        self
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_limits = Some((min, max));
        self
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_limits = Some((min, max));
        self
    }

    pub fn set_background(&mut self, color: Color) -> &mut Self {
        self.background = Some(color);
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_axis_labels(&mut self, x: impl Into<String>, y: impl Into<String>) -> &mut Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    pub fn set_legend_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.legend_title = Some(title.into());
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn legend_title(&self) -> Option<&str> {
        self.legend_title.as_deref()
    }

    pub fn equal_aspect(&self) -> bool {
        self.equal_aspect
    }

    pub fn x_limits(&self) -> Option<(f64, f64)> {
        self.x_limits
    }

    pub fn y_limits(&self) -> Option<(f64, f64)> {
        self.y_limits
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }
}
