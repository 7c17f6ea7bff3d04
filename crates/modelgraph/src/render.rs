//! Scene rendering.
//!
//! Rendering is a pure function of the model, the view parameters and the
//! palette. The draw order is fixed: all edges, then all type nodes, then
//! all condition nodes, so nodes always cover the edges that cross them. The
//! color legend sits on the text layer above everything else.

mod edge;
mod legend;
mod node;

pub use edge::{Edge, resolve_edges};
pub use legend::{legend_extent, render_legend};
pub use node::{prepare_labels, truncate};

use log::trace;
use svg::node::element as svg_element;

use modelgraph_core::{
    color::Color,
    draw::{Drawable, FontWeight, LayeredOutput, RenderLayer, Text, TextDefinition},
    geometry::{Point, Size},
};
use modelgraph_parser::Model;

use crate::{config::StyleConfig, node::nodes, view::ViewParams};

/// Message shown instead of a graph when the model has no types.
pub const PLACEHOLDER_MESSAGE: &str =
    "No types found. Enter a DSL model and click 'Refresh Graph'.";

const PLACEHOLDER_POSITION: Point = Point::new(50.0, 50.0);
const PLACEHOLDER_FONT_SIZE: f32 = 14.0;

/// Colors used to draw a graph.
///
/// The background, node accents and relation colors can be overridden from
/// [`StyleConfig`]; body and text colors are fixed.
#[derive(Debug, Clone)]
pub struct Palette {
    background: Color,
    type_accent: Color,
    condition_accent: Color,
    direct: Color,
    computed: Color,
    type_fill: Color,
    condition_fill: Color,
    header_text: Color,
    definition_text: Color,
    params_text: Color,
    expression_text: Color,
    placeholder_text: Color,
}

impl Palette {
    /// Builds a palette from the defaults and the overrides in `style`.
    ///
    /// # Errors
    ///
    /// Returns an error message naming the first color that fails to parse.
    pub fn from_style(style: &StyleConfig) -> Result<Self, String> {
        let mut palette = Self::default();
        if let Some(color) = style.background_color()? {
            palette.background = color;
        }
        if let Some(color) = style.type_color()? {
            palette.type_accent = color;
        }
        if let Some(color) = style.condition_color()? {
            palette.condition_accent = color;
        }
        if let Some(color) = style.direct_color()? {
            palette.direct = color;
        }
        if let Some(color) = style.computed_color()? {
            palette.computed = color;
        }
        Ok(palette)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Color of a relation label and its edges.
    pub fn relation(&self, is_computed: bool) -> Color {
        if is_computed {
            self.computed
        } else {
            self.direct
        }
    }
}

fn builtin(css: &str) -> Color {
    Color::new(css).expect("built-in palette colors are valid CSS colors")
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: builtin("white"),
            type_accent: builtin("#4285F4"),
            condition_accent: builtin("#B71C1C"),
            direct: builtin("rgb(27, 94, 32)"),
            computed: builtin("rgb(230, 81, 0)"),
            type_fill: builtin("rgb(248, 250, 255)"),
            condition_fill: builtin("rgb(255, 250, 250)"),
            header_text: builtin("white"),
            definition_text: builtin("rgb(80, 80, 80)"),
            params_text: builtin("rgb(100, 100, 100)"),
            expression_text: builtin("rgb(50, 50, 50)"),
            placeholder_text: builtin("gray"),
        }
    }
}

/// Renders edges and nodes of a laid-out model.
///
/// Relation labels are read as prepared by [`prepare_labels`].
pub fn render_graph(model: &Model, view: &ViewParams, palette: &Palette) -> LayeredOutput {
    let edges = resolve_edges(model, view);
    trace!(edges = edges.len(); "Rendering graph");

    let mut output = edge::render_edges(&edges, view, palette);
    for node in nodes(model) {
        output.merge(node::render_node(node, view, palette));
    }
    output
}

/// Renders the message shown for a model without types.
pub fn render_placeholder(palette: &Palette) -> LayeredOutput {
    let mut definition = TextDefinition::new();
    definition.set_font_size(PLACEHOLDER_FONT_SIZE);
    definition.set_weight(FontWeight::Normal);
    definition.set_color(Some(palette.placeholder_text));

    Text::new(&definition, PLACEHOLDER_MESSAGE).render_to_layers(PLACEHOLDER_POSITION)
}

/// Fills the whole canvas with the background color.
pub fn render_background(size: Size, color: Color) -> LayeredOutput {
    let rect = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size.width())
        .set("height", size.height());
    let rect = modelgraph_core::apply_fill!(rect, color);

    let mut output = LayeredOutput::new();
    output.add_to_layer(RenderLayer::Background, Box::new(rect));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    fn render_to_string(output: LayeredOutput) -> String {
        output.render().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_palette_from_style_overrides() {
        let style = StyleConfig {
            computed_color: Some(String::from("purple")),
            ..StyleConfig::default()
        };
        let palette = Palette::from_style(&style).unwrap();
        assert_eq!(palette.relation(true), Color::new("purple").unwrap());
        assert_eq!(palette.relation(false), Palette::default().direct);
    }

    #[test]
    fn test_palette_from_style_invalid_color() {
        let style = StyleConfig {
            type_color: Some(String::from("#12")),
            ..StyleConfig::default()
        };
        let err = Palette::from_style(&style).unwrap_err();
        assert!(err.contains("Invalid type color"));
    }

    #[test]
    fn test_render_graph_draw_order() {
        let mut model = modelgraph_parser::extract(
            "type user\ntype doc\n  define viewer: [user]\ncondition c(x: int) { x }\n",
        );
        layout::assign_grid(&mut model);
        let view = ViewParams::default();
        prepare_labels(&mut model, &view);

        let output = render_graph(&model, &view, &Palette::default());
        assert_eq!(output.layer_len(RenderLayer::Edge), 1);
        assert_eq!(output.layer_len(RenderLayer::Node), 3);

        let rendered = render_to_string(output);
        let edge_at = rendered.find("data-layer=\"edge\"").unwrap();
        let node_at = rendered.find("data-layer=\"node\"").unwrap();
        assert!(edge_at < node_at);
        assert!(rendered.find("user").unwrap() < rendered.find("condition: c").unwrap());
    }

    #[test]
    fn test_render_placeholder() {
        let output = render_placeholder(&Palette::default());
        assert_eq!(output.layer_len(RenderLayer::Text), 1);
        assert!(render_to_string(output).contains("No types found."));
    }

    #[test]
    fn test_render_background() {
        let output = render_background(Size::new(1200.0, 800.0), Palette::default().background());
        let rendered = render_to_string(output);
        assert!(rendered.contains("width=\"1200\""));
        assert!(rendered.contains("data-layer=\"background\""));
    }
}
