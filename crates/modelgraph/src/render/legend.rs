//! Color legend.
//!
//! A single row of swatches naming what each accent color means, drawn above
//! the grid origin on the text layer so dragged nodes never hide it.

use svg::node::element as svg_element;

use modelgraph_core::{
    apply_fill,
    color::Color,
    draw::{FontWeight, LayeredOutput, RenderLayer, Text, TextDefinition},
    geometry::{Point, Size},
};

use super::Palette;

const ORIGIN: Point = Point::new(50.0, 12.0);
const SWATCH_SIZE: f32 = 16.0;
const SWATCH_GAP: f32 = 5.0;
const ITEM_GAP: f32 = 20.0;
const FONT_SIZE: f32 = 11.0;
/// Label baseline below the top of the swatch.
const BASELINE: f32 = 12.0;
const MARGIN: f32 = 50.0;

fn entries(palette: &Palette) -> [(Color, &'static str); 4] {
    [
        (palette.type_accent, "Type"),
        (palette.condition_accent, "Condition"),
        (palette.direct, "Direct Relation"),
        (palette.computed, "Computed Relation"),
    ]
}

fn label_style(palette: &Palette) -> TextDefinition {
    let mut style = TextDefinition::new();
    style.set_font_size(FONT_SIZE);
    style.set_weight(FontWeight::Normal);
    style.set_color(Some(palette.definition_text));
    style
}

/// Left edge of every swatch, followed by the right edge of the row.
fn item_offsets(palette: &Palette) -> (Vec<f32>, f32) {
    let style = label_style(palette);
    let mut offsets = Vec::with_capacity(4);
    let mut x = ORIGIN.x();
    for (_, label) in entries(palette) {
        offsets.push(x);
        x += SWATCH_SIZE + SWATCH_GAP + Text::new(&style, label).calculate_size().width() + ITEM_GAP;
    }
    (offsets, x - ITEM_GAP)
}

/// Canvas size needed to show the legend plus the margin.
pub fn legend_extent(palette: &Palette) -> Size {
    let (_, right) = item_offsets(palette);
    Size::new(right + MARGIN, ORIGIN.y() + SWATCH_SIZE + MARGIN)
}

/// Renders the legend of type, condition and relation colors.
pub fn render_legend(palette: &Palette) -> LayeredOutput {
    let style = label_style(palette);
    let (offsets, _) = item_offsets(palette);

    let mut output = LayeredOutput::new();
    for ((color, label), x) in entries(palette).into_iter().zip(offsets) {
        let swatch = svg_element::Rectangle::new()
            .set("x", x)
            .set("y", ORIGIN.y())
            .set("width", SWATCH_SIZE)
            .set("height", SWATCH_SIZE);
        output.add_to_layer(RenderLayer::Text, Box::new(apply_fill!(swatch, color)));

        let anchor = Point::new(x + SWATCH_SIZE + SWATCH_GAP, ORIGIN.y() + BASELINE);
        let text = Text::new(&style, label).render_element(anchor);
        output.add_to_layer(RenderLayer::Text, Box::new(text));
    }
    output
}
