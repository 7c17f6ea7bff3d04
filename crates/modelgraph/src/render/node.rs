//! Type and condition node content.
//!
//! Both node kinds are drawn with the shared [`NodeBox`] chrome; this module
//! supplies the content of each kind and the text budgets that decide how
//! much of a definition fits on one line.

use modelgraph_core::{
    color::Color,
    draw::{
        Drawable, FontWeight, LayeredOutput, NodeBox, NodeBoxDefinition, NodeContent, NodeFrame,
        SvgNode, Text, TextAnchor, TextDefinition,
    },
    geometry::Point,
};
use modelgraph_parser::{ConditionNode, Model, TypeNode};

use super::Palette;
use crate::{node::NodeKind, view::ViewParams};

const HEADER_HEIGHT: f32 = 32.0;
const CORNER_RADIUS: f32 = 12.0;
const BORDER_WIDTH: f32 = 2.0;
/// Header text baseline as a fraction of the header height.
const HEADER_BASELINE: f32 = 0.65;

const TEXT_INSET: f32 = 10.0;
const NAME_ADVANCE: f32 = 7.0;
const BODY_ADVANCE: f32 = 6.0;
const LINE_STEP: f32 = 18.0;
const PARAMS_OFFSET: f32 = 20.0;
const EXPRESSION_OFFSET: f32 = 40.0;

const TYPE_HEADER_FONT: f32 = 13.0;
const CONDITION_HEADER_FONT: f32 = 12.0;
const RELATION_NAME_FONT: f32 = 11.0;
const BODY_FONT: f32 = 10.0;
const MONOSPACE: &str = "monospace";

const ELLIPSIS: &str = "..";
const MIN_KEPT_CHARS: usize = 5;

/// Shortens `text` to fit a budget of `budget` characters.
///
/// Text longer than the budget keeps `budget - 2` characters followed by
/// `..`. At least five characters are always kept, so very small budgets
/// still show a recognizable prefix.
///
/// ```
/// # use modelgraph::render::truncate;
/// assert_eq!(truncate("[user]", 10), "[user]");
/// assert_eq!(truncate("[user, organization#member]", 12), "[user, org..");
/// assert_eq!(truncate("[user, organization#member]", 0), "[user..");
/// ```
pub fn truncate(text: &str, budget: usize) -> String {
    let limit = budget.max(MIN_KEPT_CHARS + ELLIPSIS.len());
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(limit - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Characters that fit in `width` at `advance` pixels each; negative widths fit none.
fn char_budget(width: f32, advance: f32) -> usize {
    (width / advance) as usize
}

fn relation_name_width(name: &str, view: &ViewParams) -> f32 {
    name.chars().count() as f32 * view.scaled(NAME_ADVANCE)
}

fn relation_budget(name: &str, view: &ViewParams) -> usize {
    let available =
        view.scaled_width() - view.scaled(2.0 * TEXT_INSET) - relation_name_width(name, view);
    char_budget(available, view.scaled(BODY_ADVANCE))
}

fn condition_budget(view: &ViewParams) -> usize {
    let available = view.scaled_width() - view.scaled(2.0 * TEXT_INSET);
    char_budget(available, view.scaled(BODY_ADVANCE))
}

/// Refreshes the display string of every relation for the current view.
pub fn prepare_labels(model: &mut Model, view: &ViewParams) {
    for type_node in model.types_mut() {
        for relation in type_node.relations_mut() {
            let budget = relation_budget(relation.name(), view);
            let truncated = truncate(relation.definition(), budget);
            relation.set_truncated(truncated);
        }
    }
}

fn text_style(size: f32, weight: FontWeight, color: Color) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_size(size);
    definition.set_weight(weight);
    definition.set_color(Some(color));
    definition
}

fn monospace_style(size: f32, weight: FontWeight, color: Color) -> TextDefinition {
    let mut definition = text_style(size, weight, color);
    definition.set_font_family(MONOSPACE);
    definition
}

fn header(content: &str, frame: NodeFrame, font_size: f32, palette: &Palette) -> SvgNode {
    let mut style = text_style(font_size, FontWeight::Bold, palette.header_text);
    style.set_anchor(TextAnchor::Middle);
    let anchor = Point::new(
        frame.center_x(),
        frame.bounds().min_y() + frame.header_height() * HEADER_BASELINE,
    );
    Box::new(Text::new(&style, content).render_element(anchor))
}

#[derive(Debug)]
struct TypeContent<'a> {
    node: &'a TypeNode,
    view: &'a ViewParams,
    palette: &'a Palette,
}

impl NodeContent for TypeContent<'_> {
    fn render_content(&self, frame: NodeFrame) -> Vec<SvgNode> {
        let view = self.view;
        let mut content = vec![header(
            self.node.name(),
            frame,
            view.scaled(TYPE_HEADER_FONT),
            self.palette,
        )];

        let left = frame.bounds().min_x() + view.scaled(TEXT_INSET);
        let definition_style = monospace_style(
            view.scaled(BODY_FONT),
            FontWeight::Normal,
            self.palette.definition_text,
        );

        let mut baseline = frame.bounds().min_y() + frame.header_height() + view.scaled(LINE_STEP);
        for relation in self.node.relations() {
            let name_style = monospace_style(
                view.scaled(RELATION_NAME_FONT),
                FontWeight::Bold,
                self.palette.relation(relation.is_computed()),
            );
            content.push(Box::new(
                Text::new(&name_style, relation.name()).render_element(Point::new(left, baseline)),
            ));

            let definition = format!(": {}", relation.truncated());
            let definition_left = left + relation_name_width(relation.name(), view);
            content.push(Box::new(
                Text::new(&definition_style, &definition)
                    .render_element(Point::new(definition_left, baseline)),
            ));

            baseline += view.scaled(LINE_STEP);
        }

        content
    }
}

#[derive(Debug)]
struct ConditionContent<'a> {
    node: &'a ConditionNode,
    view: &'a ViewParams,
    palette: &'a Palette,
}

impl NodeContent for ConditionContent<'_> {
    fn render_content(&self, frame: NodeFrame) -> Vec<SvgNode> {
        let view = self.view;
        let budget = condition_budget(view);
        let left = frame.bounds().min_x() + view.scaled(TEXT_INSET);
        let body_top = frame.bounds().min_y() + frame.header_height();

        let title = format!("condition: {}", self.node.name());
        let params = format!(
            "({})",
            truncate(self.node.params(), budget.saturating_sub(ELLIPSIS.len()))
        );
        let expression = truncate(self.node.expression(), budget);

        let params_style = monospace_style(
            view.scaled(BODY_FONT),
            FontWeight::Normal,
            self.palette.params_text,
        );
        let expression_style = monospace_style(
            view.scaled(BODY_FONT),
            FontWeight::Bold,
            self.palette.expression_text,
        );

        vec![
            header(&title, frame, view.scaled(CONDITION_HEADER_FONT), self.palette),
            Box::new(
                Text::new(&params_style, &params)
                    .render_element(Point::new(left, body_top + view.scaled(PARAMS_OFFSET))),
            ) as SvgNode,
            Box::new(
                Text::new(&expression_style, &expression)
                    .render_element(Point::new(left, body_top + view.scaled(EXPRESSION_OFFSET))),
            ) as SvgNode,
        ]
    }
}

fn box_definition(fill: Color, accent: Color, view: &ViewParams) -> NodeBoxDefinition {
    let mut definition = NodeBoxDefinition::new(fill, accent, view.scaled(BORDER_WIDTH));
    definition.set_header_height(view.scaled(HEADER_HEIGHT));
    definition.set_corner_radius(view.scaled(CORNER_RADIUS));
    definition
}

/// Draws one node, chrome and content, at its position.
pub(super) fn render_node(node: NodeKind<'_>, view: &ViewParams, palette: &Palette) -> LayeredOutput {
    let size = node.size(view);
    match node {
        NodeKind::Type(type_node) => {
            let definition = box_definition(palette.type_fill, palette.type_accent, view);
            let content = TypeContent {
                node: type_node,
                view,
                palette,
            };
            NodeBox::new(&definition, size, &content).render_to_layers(node.position())
        }
        NodeKind::Condition(condition) => {
            let definition =
                box_definition(palette.condition_fill, palette.condition_accent, view);
            let content = ConditionContent {
                node: condition,
                view,
                palette,
            };
            NodeBox::new(&definition, size, &content).render_to_layers(node.position())
        }
    }
}

#[cfg(test)]
mod tests {
    use modelgraph_core::draw::RenderLayer;

    use super::*;

    fn render_to_string(output: LayeredOutput) -> String {
        output.render().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("", 0), "");
        assert_eq!(truncate("[user]", 6), "[user]");
        assert_eq!(truncate("1234567", 3), "1234567");
    }

    #[test]
    fn test_truncate_keeps_budget_minus_marker() {
        assert_eq!(truncate("abcdefghijkl", 10), "abcdefgh..");
        assert_eq!(truncate("abcdefghijkl", 11), "abcdefghi..");
    }

    #[test]
    fn test_truncate_keeps_at_least_five() {
        assert_eq!(truncate("abcdefghijkl", 0), "abcde..");
        assert_eq!(truncate("abcdefghijkl", 4), "abcde..");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("ééééééééé", 8), "éééééé..");
    }

    #[test]
    fn test_relation_budget() {
        let view = ViewParams::default();
        // (160 - 20 - 6 * 7) / 6 = 16.33
        assert_eq!(relation_budget("viewer", &view), 16);
        // Names wider than the node leave no room
        assert_eq!(relation_budget(&"x".repeat(40), &view), 0);

        let wide = ViewParams::new(1.0, 300.0);
        assert_eq!(relation_budget("viewer", &wide), 39);
    }

    #[test]
    fn test_condition_budget_independent_of_scale() {
        assert_eq!(condition_budget(&ViewParams::default()), 23);
        assert_eq!(condition_budget(&ViewParams::new(2.0, 160.0)), 23);
    }

    #[test]
    fn test_prepare_labels() {
        let mut model = modelgraph_parser::extract(
            "type doc\n  define viewer: [user, organization#member, team#member] or owner\n  define owner: [user]\n",
        );
        prepare_labels(&mut model, &ViewParams::default());

        let relations = model.types()[0].relations();
        assert_eq!(relations[0].truncated(), "[user, organiz..");
        assert_eq!(relations[1].truncated(), "[user]");

        prepare_labels(&mut model, &ViewParams::new(1.0, 300.0));
        assert_eq!(
            model.types()[0].relations()[0].truncated(),
            "[user, organization#member, team#memb.."
        );
    }

    #[test]
    fn test_render_type_node() {
        let mut model =
            modelgraph_parser::extract("type doc\n  define viewer: [user] or owner\n");
        model.types_mut()[0].set_position(Point::new(50.0, 50.0));
        let view = ViewParams::default();
        prepare_labels(&mut model, &view);

        let output = render_node(NodeKind::Type(&model.types()[0]), &view, &Palette::default());
        assert_eq!(output.layer_len(RenderLayer::Node), 1);

        let rendered = render_to_string(output);
        assert!(rendered.contains("doc"));
        assert!(rendered.contains("viewer"));
        assert!(rendered.contains(": [user] or owner"));
        assert!(rendered.contains("font-family=\"monospace\""));
        // First relation baseline at 50 + 32 + 18
        assert!(rendered.contains("y=\"100\""));
    }

    #[test]
    fn test_render_condition_node() {
        let mut model = modelgraph_parser::extract(
            "condition non_expired(current_time: timestamp, expires_at: timestamp) { current_time < expires_at }",
        );
        model.conditions_mut()[0].set_position(Point::new(50.0, 50.0));
        let view = ViewParams::default();

        let output = render_node(
            NodeKind::Condition(&model.conditions()[0]),
            &view,
            &Palette::default(),
        );
        let rendered = render_to_string(output);

        assert!(rendered.contains("condition: non_expired"));
        assert!(rendered.contains("(current_time: times..)"));
        assert!(
            rendered.contains("current_time &lt; expire..")
                || rendered.contains("current_time < expire..")
        );
    }
}
