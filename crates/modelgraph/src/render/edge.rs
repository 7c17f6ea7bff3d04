//! Relation edges between node centers.

use indexmap::IndexMap;
use log::trace;

use modelgraph_core::{
    color::Color,
    draw::{CurvedArrow, CurvedArrowDefinition, LayeredOutput, StrokeCap, StrokeDefinition},
    geometry::Point,
};
use modelgraph_parser::{Model, reference::extract_type_name};

use super::Palette;
use crate::{node::nodes, view::ViewParams};

const EDGE_ALPHA: f32 = 0.8;
const EDGE_WIDTH: f32 = 2.0;
const EDGE_BEND: f32 = 30.0;
const ARROW_HEAD_LENGTH: f32 = 12.0;

/// A directed edge from a type to the node one of its relations references.
///
/// Edges are derived from the model on demand and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: String,
    target: String,
    relation: String,
    is_computed: bool,
    start: Point,
    end: Point,
}

impl Edge {
    /// Name of the type owning the relation.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Lookup key of the referenced node.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Name of the relation the edge comes from.
    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn is_computed(&self) -> bool {
        self.is_computed
    }

    /// Center of the source node.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Center of the target node.
    pub fn end(&self) -> Point {
        self.end
    }
}

/// Resolves every reference of every relation against the node centers.
///
/// References that do not name a known node are skipped. When two nodes share
/// a key, the later one wins.
pub fn resolve_edges(model: &Model, view: &ViewParams) -> Vec<Edge> {
    let centers: IndexMap<String, Point> = nodes(model)
        .map(|node| (node.key(), node.center(view)))
        .collect();

    let mut edges = Vec::new();
    for type_node in model.types() {
        let Some(&start) = centers.get(type_node.name()) else {
            continue;
        };

        for relation in type_node.relations() {
            for reference in relation.references() {
                let target = extract_type_name(reference);
                match centers.get(target) {
                    Some(&end) => edges.push(Edge {
                        source: type_node.name().to_string(),
                        target: target.to_string(),
                        relation: relation.name().to_string(),
                        is_computed: relation.is_computed(),
                        start,
                        end,
                    }),
                    None => {
                        trace!(reference = reference.as_str(), relation = relation.name(); "Unresolved reference");
                    }
                }
            }
        }
    }

    edges
}

fn arrow_definition(color: Color, view: &ViewParams) -> CurvedArrowDefinition {
    let stroke = StrokeDefinition::new(color.with_alpha(EDGE_ALPHA), view.scaled(EDGE_WIDTH))
        .with_cap(StrokeCap::Round);
    CurvedArrowDefinition::new(
        stroke,
        view.scaled(EDGE_BEND),
        view.scaled(ARROW_HEAD_LENGTH),
    )
}

/// Draws the edges as curved arrows; edges with coincident endpoints are skipped.
pub(super) fn render_edges(edges: &[Edge], view: &ViewParams, palette: &Palette) -> LayeredOutput {
    let direct = arrow_definition(palette.relation(false), view);
    let computed = arrow_definition(palette.relation(true), view);

    let mut output = LayeredOutput::new();
    for edge in edges {
        let definition = if edge.is_computed { &computed } else { &direct };
        if let Some(arrow) = CurvedArrow::new(definition, edge.start, edge.end) {
            output.merge(arrow.render_to_layers());
        }
    }
    output
}
