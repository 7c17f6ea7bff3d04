//! Rounded node box chrome shared by every node kind.
//!
//! A [`NodeBox`] paints the parts that all graph nodes have in common: a drop
//! shadow, a rounded body with a border, and a colored header band whose lower
//! corners are squared off. What goes inside the box is delegated to a
//! [`NodeContent`] implementation, so each node kind only describes its own
//! labels.

use std::fmt;

use svg::node::element as svg_element;

use crate::{
    apply_fill, apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, SvgNode},
    geometry::{Bounds, Point, Size},
};

/// Fraction of the header band covered by the rounded part.
const HEADER_ROUNDED_FRACTION: f32 = 0.6;

/// Where a node's content may draw: the whole box and its header band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeFrame {
    bounds: Bounds,
    header_height: f32,
}

impl NodeFrame {
    /// Bounds of the whole node box.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Height of the header band.
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Horizontal center of the box.
    pub fn center_x(&self) -> f32 {
        self.bounds.center().x()
    }
}

/// Kind-specific renderer for the inside of a [`NodeBox`].
pub trait NodeContent: fmt::Debug {
    /// Produces the SVG elements drawn on top of the box chrome.
    fn render_content(&self, frame: NodeFrame) -> Vec<SvgNode>;
}

/// Visual style of the node box chrome.
#[derive(Debug, Clone)]
pub struct NodeBoxDefinition {
    fill: Color,
    border: StrokeDefinition,
    header_color: Color,
    header_height: f32,
    corner_radius: f32,
    shadow_color: Color,
    shadow_offset: f32,
}

impl NodeBoxDefinition {
    /// Creates a box style using `accent` for both the border and the header band.
    pub fn new(fill: Color, accent: Color, border_width: f32) -> Self {
        Self {
            fill,
            border: StrokeDefinition::new(accent, border_width),
            header_color: accent,
            header_height: 32.0,
            corner_radius: 12.0,
            shadow_color: Color::default().with_alpha(0.15),
            shadow_offset: 4.0,
        }
    }

    /// Sets the header band height.
    pub fn set_header_height(&mut self, height: f32) {
        self.header_height = height;
    }

    /// Sets the corner radius of the box and the header band.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }

    /// Returns the header band height.
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    fn rounded_rect(&self, top_left: Point, size: Size) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", self.corner_radius)
            .set("ry", self.corner_radius)
    }
}

/// A node box of a given size with its content renderer.
#[derive(Debug)]
pub struct NodeBox<'a> {
    definition: &'a NodeBoxDefinition,
    size: Size,
    content: &'a dyn NodeContent,
}

impl<'a> NodeBox<'a> {
    pub fn new(definition: &'a NodeBoxDefinition, size: Size, content: &'a dyn NodeContent) -> Self {
        Self {
            definition,
            size,
            content,
        }
    }
}

impl Drawable for NodeBox<'_> {
    /// Renders the whole node as one group so that a later node fully covers an earlier one.
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let def = self.definition;
        let mut group = svg_element::Group::new().set("class", "node");

        let shadow = def.rounded_rect(
            position.add_point(Point::new(def.shadow_offset, def.shadow_offset)),
            self.size,
        );
        group = group.add(apply_fill!(shadow, def.shadow_color));

        let body = def.rounded_rect(position, self.size);
        group = group.add(apply_stroke!(apply_fill!(body, def.fill), &def.border));

        let header_size = Size::new(self.size.width(), def.header_height);
        let header = def.rounded_rect(position, header_size);
        group = group.add(apply_fill!(header, def.header_color));

        let squared = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y() + def.header_height * HEADER_ROUNDED_FRACTION)
            .set("width", self.size.width())
            .set(
                "height",
                def.header_height * (1.0 - HEADER_ROUNDED_FRACTION),
            );
        group = group.add(apply_fill!(squared, def.header_color));

        let frame = NodeFrame {
            bounds: Bounds::new_from_top_left(position, self.size),
            header_height: def.header_height,
        };
        for node in self.content.render_content(frame) {
            group = group.add(node);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Node, Box::new(group));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Text, TextDefinition};

    #[derive(Debug)]
    struct Label(&'static str);

    impl NodeContent for Label {
        fn render_content(&self, frame: NodeFrame) -> Vec<SvgNode> {
            let def = TextDefinition::default();
            let anchor = Point::new(frame.center_x(), frame.bounds().min_y() + 20.0);
            vec![Box::new(Text::new(&def, self.0).render_element(anchor)) as SvgNode]
        }
    }

    fn definition() -> NodeBoxDefinition {
        NodeBoxDefinition::new(
            Color::new("white").unwrap(),
            Color::new("#4285F4").unwrap(),
            2.0,
        )
    }

    #[test]
    fn test_node_box_renders_single_node_group() {
        let def = definition();
        let label = Label("document");
        let node = NodeBox::new(&def, Size::new(160.0, 100.0), &label);

        let output = node.render_to_layers(Point::new(50.0, 50.0));
        assert_eq!(output.layer_len(RenderLayer::Node), 1);
        assert_eq!(output.layer_len(RenderLayer::Text), 0);

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("document"));
        // shadow, body, header, squared header bottom
        assert_eq!(rendered.matches("<rect").count(), 4);
        assert!(rendered.contains("x=\"54\""));
    }

    #[test]
    fn test_node_box_size_and_frame() {
        let mut def = definition();
        def.set_header_height(16.0);
        def.set_corner_radius(6.0);
        assert_eq!(def.header_height(), 16.0);

        let label = Label("x");
        let node = NodeBox::new(&def, Size::new(80.0, 50.0), &label);
        assert_eq!(node.size(), Size::new(80.0, 50.0));
    }

    #[test]
    fn test_translucent_accent_sets_header_opacity() {
        let def = NodeBoxDefinition::new(
            Color::new("white").unwrap(),
            Color::new("rgba(0, 0, 255, 0.3)").unwrap(),
            2.0,
        );
        let label = Label("doc");
        let node = NodeBox::new(&def, Size::new(160.0, 100.0), &label);

        let rendered: String = node
            .render_to_layers(Point::new(50.0, 50.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();
        // Header band and its squared bottom
        assert_eq!(rendered.matches("fill=\"#0000ff\"").count(), 2);
        assert_eq!(rendered.matches("fill-opacity=\"0.3\"").count(), 2);
        assert!(rendered.contains("stroke=\"#0000ff\""));
        assert!(rendered.contains("stroke-opacity=\"0.3\""));
        // Shadow
        assert!(rendered.contains("fill=\"#000000\""));
        assert!(rendered.contains("fill-opacity=\"0.15\""));
    }
}
