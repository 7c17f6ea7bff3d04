//! Drawable components for graph scenes.
//!
//! All drawable components implement the [`Drawable`] trait, which provides a
//! consistent interface for rendering to layered SVG output and calculating size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered during
//! final SVG generation. Edges live on a layer below nodes, so a node box is
//! always painted over any edge that crosses it.

mod arrow;
mod layer;
mod node_box;
mod stroke;
mod text;

pub use arrow::{CurvedArrow, CurvedArrowDefinition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use node_box::{NodeBox, NodeBoxDefinition, NodeContent, NodeFrame};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{FontWeight, Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable scene elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// `position` is the top-left corner of the drawable for boxes and the
    /// anchor point for text.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size this drawable occupies.
    fn size(&self) -> Size;
}
