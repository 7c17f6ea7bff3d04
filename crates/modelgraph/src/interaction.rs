//! Pointer interaction: hit-testing and single-node dragging.
//!
//! At most one node is dragged at a time. The drag state refers to the node
//! by its index in the model, so the model stays the single owner of every
//! node.

use log::debug;

use modelgraph_core::geometry::Point;
use modelgraph_parser::Model;

use crate::{node::NodeKind, view::ViewParams};

/// State of the pointer gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging the type node at `index`; `offset` is the pointer relative to its top-left corner.
    DraggingType { index: usize, offset: Point },
    /// Dragging the condition node at `index`.
    DraggingCondition { index: usize, offset: Point },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Finds the node under `pointer`.
///
/// Types are tested before conditions, each in list order, and the first
/// bounding box containing the pointer wins. Boxes include their edges.
pub fn hit_test(model: &Model, view: &ViewParams, pointer: Point) -> DragState {
    let offset_in = |node: NodeKind<'_>| {
        node.bounds(view)
            .contains(pointer)
            .then(|| pointer.sub_point(node.position()))
    };

    let hit_type = model
        .types()
        .iter()
        .enumerate()
        .find_map(|(index, node)| {
            offset_in(NodeKind::Type(node)).map(|offset| DragState::DraggingType { index, offset })
        });
    if let Some(state) = hit_type {
        return state;
    }

    model
        .conditions()
        .iter()
        .enumerate()
        .find_map(|(index, node)| {
            offset_in(NodeKind::Condition(node))
                .map(|offset| DragState::DraggingCondition { index, offset })
        })
        .unwrap_or_default()
}

/// Moves the dragged node so that it keeps its offset to `pointer`.
///
/// The new position is clamped to non-negative coordinates. Returns `true`
/// if a node was moved.
pub fn drag_to(state: DragState, model: &mut Model, pointer: Point) -> bool {
    match state {
        DragState::Idle => false,
        DragState::DraggingType { index, offset } => match model.types_mut().get_mut(index) {
            Some(node) => {
                node.set_position(pointer.sub_point(offset).clamp_non_negative());
                true
            }
            None => false,
        },
        DragState::DraggingCondition { index, offset } => {
            match model.conditions_mut().get_mut(index) {
                Some(node) => {
                    node.set_position(pointer.sub_point(offset).clamp_non_negative());
                    true
                }
                None => false,
            }
        }
    }
}

/// Starts a gesture at `pointer`.
pub fn press(model: &Model, view: &ViewParams, pointer: Point) -> DragState {
    let state = hit_test(model, view, pointer);
    if state.is_dragging() {
        debug!(x = pointer.x(), y = pointer.y(), state:?; "Drag started");
    }
    state
}
