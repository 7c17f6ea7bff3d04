//! Layer-based rendering for SVG output.
//!
//! Drawable components tag each SVG element with the [`RenderLayer`] it
//! belongs to. [`LayeredOutput`] collects them and emits one `<g>` group per
//! layer, bottom to top.
//!
//! # Example
//!
//! ```
//! # use modelgraph_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Path, Rectangle};
//!
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Node, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Edge, Box::new(Path::new()));
//!
//! // Edge group is emitted before the Node group
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order of variant declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill - renders first
    Background,
    /// Relation edges and their arrowheads
    Edge,
    /// Node boxes together with their labels
    Node,
    /// Free-standing text such as the empty-model placeholder
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Edge => "edge",
            Self::Node => "node",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// Within a layer, nodes keep the order in which they were added.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    ///
    /// Nodes from the other output are appended after the existing ones.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes stored on `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
