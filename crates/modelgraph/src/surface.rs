//! Drawing surface holding the current scene.

use log::debug;

use modelgraph_core::{
    color::Color,
    draw::{LayeredOutput, SvgNode},
    geometry::Size,
};

use crate::render;

/// A vector drawing surface.
///
/// The surface grows to fit its content but never shrinks while it lives.
/// Every paint replaces the whole scene, background included.
#[derive(Debug)]
pub struct Surface {
    size: Size,
    background: Color,
    scene: Vec<SvgNode>,
}

impl Surface {
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            size,
            background,
            scene: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Grows the surface on each axis where `required` exceeds it.
    ///
    /// Returns `true` if the surface grew.
    pub fn grow_to_fit(&mut self, required: Size) -> bool {
        let grown = self.size.max(required);
        if grown == self.size {
            return false;
        }
        debug!(
            width = grown.width(),
            height = grown.height();
            "Growing drawing surface"
        );
        self.size = grown;
        true
    }

    /// Removes everything drawn so far.
    pub fn clear(&mut self) {
        self.scene.clear();
    }

    /// Returns `true` if nothing has been painted since the last clear.
    pub fn is_blank(&self) -> bool {
        self.scene.is_empty()
    }

    /// Replaces the scene with the background and `output`.
    pub fn paint(&mut self, output: LayeredOutput) {
        let mut layers = render::render_background(self.size, self.background);
        layers.merge(output);
        self.scene = layers.render();
    }

    /// Builds an SVG document of the current scene.
    pub fn to_document(&self) -> svg::Document {
        let document = svg::Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());

        self.scene
            .iter()
            .cloned()
            .fold(document, |document, node| document.add(node))
    }

    /// Serializes the current scene to SVG text.
    pub fn to_svg(&self) -> String {
        self.to_document().to_string()
    }
}
