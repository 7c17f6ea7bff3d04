//! Uniform access to the two node kinds.

use modelgraph_core::geometry::{Bounds, Point, Size};
use modelgraph_parser::{ConditionNode, Model, TypeNode};

use crate::view::ViewParams;

const CONDITION_KEY_PREFIX: &str = "condition:";

/// A borrowed graph node: a type or a condition.
///
/// Both kinds share the rounded-box chrome and differ in content and in how
/// their height is computed.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Type(&'a TypeNode),
    Condition(&'a ConditionNode),
}

impl<'a> NodeKind<'a> {
    /// Lookup key used to resolve edge targets.
    ///
    /// Types are keyed by name; conditions by `condition:` and their name, so
    /// a plain reference never resolves to a condition.
    pub fn key(&self) -> String {
        match self {
            Self::Type(node) => node.name().to_string(),
            Self::Condition(node) => format!("{CONDITION_KEY_PREFIX}{}", node.name()),
        }
    }

    /// Top-left corner in logical coordinates.
    pub fn position(&self) -> Point {
        match self {
            Self::Type(node) => node.position(),
            Self::Condition(node) => node.position(),
        }
    }

    pub fn size(&self, view: &ViewParams) -> Size {
        match self {
            Self::Type(node) => view.type_size(node.relations().len()),
            Self::Condition(_) => view.condition_size(),
        }
    }

    pub fn bounds(&self, view: &ViewParams) -> Bounds {
        Bounds::new_from_top_left(self.position(), self.size(view))
    }

    /// Anchor point for edges.
    ///
    /// Conditions anchor at half of their unscaled height, scaled, which for a
    /// fixed height is the box center.
    pub fn center(&self, view: &ViewParams) -> Point {
        self.bounds(view).center()
    }
}

/// Iterates over all nodes: types first, then conditions, each in file order.
pub fn nodes(model: &Model) -> impl Iterator<Item = NodeKind<'_>> {
    model
        .types()
        .iter()
        .map(NodeKind::Type)
        .chain(model.conditions().iter().map(NodeKind::Condition))
}
