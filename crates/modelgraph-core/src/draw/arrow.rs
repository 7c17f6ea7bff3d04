//! Curved directed arrows between node centers.
//!
//! An arrow is a quadratic bezier curve whose control point sits diagonally
//! off the segment midpoint, finished by a filled triangular head aligned with
//! the curve's tangent at the destination.

use std::f32::consts::FRAC_PI_6;

use log::trace;
use svg::node::element as svg_element;

use crate::{
    apply_fill, apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// Endpoints closer than this on both axes produce no arrow.
const COINCIDENT_EPSILON: f32 = 1.0;

/// Defines the visual properties of a curved arrow.
#[derive(Debug, Clone)]
pub struct CurvedArrowDefinition {
    stroke: StrokeDefinition,
    bend: f32,
    head_length: f32,
}

impl CurvedArrowDefinition {
    /// Creates a definition with the given stroke, control-point offset and head length.
    pub fn new(stroke: StrokeDefinition, bend: f32, head_length: f32) -> Self {
        Self {
            stroke,
            bend,
            head_length,
        }
    }

    /// Gets the arrow stroke definition
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Distance the control point is pushed right and up from the midpoint.
    pub fn bend(&self) -> f32 {
        self.bend
    }

    /// Length of the arrowhead sides.
    pub fn head_length(&self) -> f32 {
        self.head_length
    }
}

/// A curved arrow from `source` to `destination`.
#[derive(Debug, Clone)]
pub struct CurvedArrow<'a> {
    definition: &'a CurvedArrowDefinition,
    source: Point,
    destination: Point,
}

impl<'a> CurvedArrow<'a> {
    /// Creates an arrow, or `None` when both endpoints coincide.
    pub fn new(definition: &'a CurvedArrowDefinition, source: Point, destination: Point) -> Option<Self> {
        if source.is_near(destination, COINCIDENT_EPSILON) {
            trace!(x = source.x(), y = source.y(); "Skipping arrow with coincident endpoints");
            return None;
        }
        Some(Self {
            definition,
            source,
            destination,
        })
    }

    /// Control point of the quadratic curve.
    pub fn control_point(&self) -> Point {
        let bend = self.definition.bend;
        self.source
            .midpoint(self.destination)
            .add_point(Point::new(bend, -bend))
    }

    /// Corners of the arrowhead triangle, tip first.
    pub fn head_points(&self) -> [Point; 3] {
        let tip = self.destination;
        let angle = tip.angle_from(self.control_point());
        let length = self.definition.head_length;
        let corner = |theta: f32| {
            tip.sub_point(Point::new(length * theta.cos(), length * theta.sin()))
        };
        [tip, corner(angle - FRAC_PI_6), corner(angle + FRAC_PI_6)]
    }

    fn path_data(&self) -> String {
        let control = self.control_point();
        format!(
            "M {} {} Q {} {} {} {}",
            self.source.x(),
            self.source.y(),
            control.x(),
            control.y(),
            self.destination.x(),
            self.destination.y()
        )
    }

    /// Renders the curve and its head to the edge layer.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let color = self.definition.stroke.color();

        let path = svg_element::Path::new()
            .set("d", self.path_data())
            .set("fill", "none");
        let path = apply_stroke!(path, self.definition.stroke());

        let points = self
            .head_points()
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");
        let head = apply_fill!(svg_element::Polygon::new().set("points", points), color);

        let group = svg_element::Group::new()
            .set("class", "edge")
            .add(path)
            .add(head);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Edge, Box::new(group));
        output
    }
}
