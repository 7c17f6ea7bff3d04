//! Strokes for node borders and edges.
//!
//! ```
//! use modelgraph_core::{apply_stroke, color::Color, draw::{StrokeCap, StrokeDefinition}};
//! use svg::node::element::Path;
//!
//! let stroke = StrokeDefinition::new(Color::new("#4285F4").unwrap(), 2.0)
//!     .with_cap(StrokeCap::Round);
//! let path = apply_stroke!(Path::new(), &stroke);
//! assert!(path.to_string().contains("stroke-linecap=\"round\""));
//! ```

use crate::color::Color;

/// Line endpoint style, as SVG `stroke-linecap`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
}

impl StrokeCap {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// Color, width and cap of a stroke.
///
/// The color's alpha becomes the stroke opacity.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
        }
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Sets `stroke`, `stroke-opacity`, `stroke-width` and `stroke-linecap` on an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
    }};
}
