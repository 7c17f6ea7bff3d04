//! Grid layout and canvas extent.
//!
//! Nodes are placed on a square-ish grid in a single sequence, types first
//! and then conditions. Layout depends only on the order of nodes, never on
//! their previous positions.

use log::debug;

use modelgraph_core::geometry::{Point, Size};
use modelgraph_parser::Model;

use crate::{node, view::ViewParams};

const SPACING_X: f32 = 200.0;
const SPACING_Y: f32 = 180.0;
const ORIGIN: Point = Point::new(50.0, 50.0);

/// Space kept between the farthest node and the canvas edge.
const CANVAS_MARGIN: f32 = 50.0;

/// Number of grid columns for `total` nodes: `ceil(sqrt(total))`, at least one.
pub fn grid_columns(total: usize) -> usize {
    let mut columns = (total as f64).sqrt() as usize;
    if columns * columns < total {
        columns += 1;
    }
    columns.max(1)
}

/// Top-left corner of the grid cell at `index`.
pub fn grid_position(index: usize, columns: usize) -> Point {
    let column = index % columns;
    let row = index / columns;
    Point::new(
        ORIGIN.x() + column as f32 * SPACING_X,
        ORIGIN.y() + row as f32 * SPACING_Y,
    )
}

/// Places every node of `model` on the grid.
pub fn assign_grid(model: &mut Model) {
    let total = model.node_count();
    let columns = grid_columns(total);
    let type_count = model.types().len();

    for (index, type_node) in model.types_mut().iter_mut().enumerate() {
        type_node.set_position(grid_position(index, columns));
    }
    for (index, condition) in model.conditions_mut().iter_mut().enumerate() {
        condition.set_position(grid_position(type_count + index, columns));
    }

    debug!(total, columns; "Grid layout assigned");
}

/// Canvas size needed to show every node plus the margin.
pub fn required_extent(model: &Model, view: &ViewParams) -> Size {
    node::nodes(model)
        .map(|node| node.bounds(view).max_point())
        .fold(Size::default(), |extent, corner| {
            extent.max(Size::new(
                corner.x() + CANVAS_MARGIN,
                corner.y() + CANVAS_MARGIN,
            ))
        })
}
