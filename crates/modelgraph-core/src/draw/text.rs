//! Text rendering definitions for node headers, relation lines and notices.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! Text is positioned by its baseline anchor point, the way a canvas
//! `fillText` call places it. Sizes are estimated from a fixed per-character
//! advance; node bodies truncate their content against the same kind of
//! estimate, so no font shaping is involved.
//!
//! ```
//! # use modelgraph_core::draw::{FontWeight, Text, TextAnchor, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(13.0);
//! style.set_weight(FontWeight::Bold);
//! style.set_anchor(TextAnchor::Middle);
//!
//! let text = Text::new(&style, "document");
//! assert!(text.calculate_size().width() > 0.0);
//! ```

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Average glyph advance as a fraction of the font size.
const AVERAGE_ADVANCE_RATIO: f32 = 0.6;

/// Font weight of a text element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
}

impl TextAnchor {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Defines the visual style for text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Weight | normal |
/// | Color | `None` (SVG default, black) |
/// | Anchor | start |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: FontWeight,
    color: Option<Color>,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font family (e.g. "sans-serif", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// Sets the fill color; `None` keeps the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the horizontal anchor.
    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 12.0,
            weight: FontWeight::default(),
            color: None,
            anchor: TextAnchor::default(),
        }
    }
}

/// A renderable text element combining content with styling.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Estimates the size of the rendered text.
    pub fn calculate_size(&self) -> Size {
        let chars = self.content.chars().count() as f32;
        let font_size = self.definition.font_size();
        Size::new(chars * font_size * AVERAGE_ADVANCE_RATIO, font_size)
    }
}

impl Text<'_> {
    /// Builds the SVG `<text>` element anchored at `position`.
    ///
    /// Node content embeds text directly into its own group, bypassing layers.
    pub fn render_element(&self, position: Point) -> svg_element::Text {
        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", self.definition.anchor.to_svg_value())
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.weight.to_svg_value());

        if let Some(color) = self.definition.color {
            rendered_text = crate::apply_fill!(rendered_text, color);
        }

        rendered_text.add(SvgText::new(self.content))
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(self.render_element(position)));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::default();
        assert_approx_eq!(f32, def.font_size(), 12.0);
        assert_eq!(def.weight, FontWeight::Normal);
        assert_eq!(def.anchor, TextAnchor::Start);
        assert!(def.color.is_none());
    }

    #[test]
    fn test_text_size_scales_with_length() {
        let def = TextDefinition::default();
        let short = Text::new(&def, "user");
        let long = Text::new(&def, "organization");

        assert!(long.size().width() > short.size().width());
        assert_approx_eq!(f32, short.size().height(), 12.0);
        assert_approx_eq!(f32, Text::new(&def, "").size().width(), 0.0);
    }

    #[test]
    fn test_text_render_attributes() {
        let mut def = TextDefinition::new();
        def.set_font_family("monospace");
        def.set_font_size(10.0);
        def.set_weight(FontWeight::Bold);
        def.set_anchor(TextAnchor::Middle);
        def.set_color(Some(Color::new("white").unwrap()));

        let output = Text::new(&def, "viewer").render_to_layers(Point::new(5.0, 7.0));
        assert_eq!(output.layer_len(RenderLayer::Text), 1);

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("viewer"));
        assert!(rendered.contains("font-weight=\"bold\""));
        assert!(rendered.contains("text-anchor=\"middle\""));
        assert!(rendered.contains("font-family=\"monospace\""));
    }
}
