//! View parameters shared by every node of a visualization.
//!
//! Scale and node width apply uniformly to all nodes; positions stay in
//! unscaled logical units while sizes, fonts and edge curvature scale.

use std::ops::RangeInclusive;

use modelgraph_core::geometry::Size;

use crate::config::ViewConfig;

/// Accepted scale factors.
pub const SCALE_RANGE: RangeInclusive<f32> = 0.5..=2.0;

/// Accepted unscaled node widths in pixels.
pub const NODE_WIDTH_RANGE: RangeInclusive<f32> = 120.0..=300.0;

const TYPE_BASE_HEIGHT: f32 = 100.0;
const TYPE_HEIGHT_PADDING: f32 = 40.0;
const TYPE_HEIGHT_PER_RELATION: f32 = 20.0;
const CONDITION_HEIGHT: f32 = 90.0;

/// Scale factor and node width of one visualization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    scale: f32,
    node_width: f32,
}

impl ViewParams {
    /// Creates view parameters, clamping both values into their ranges.
    ///
    /// Non-finite values fall back to the defaults.
    pub fn new(scale: f32, node_width: f32) -> Self {
        let mut view = Self::default();
        view.set_scale(scale);
        view.set_node_width(node_width);
        view
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Unscaled node width.
    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    /// Sets the scale factor, clamped into [`SCALE_RANGE`].
    ///
    /// Returns `false` and keeps the current value when `scale` is not finite.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        if !scale.is_finite() {
            return false;
        }
        self.scale = scale.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end());
        true
    }

    /// Sets the node width, clamped into [`NODE_WIDTH_RANGE`].
    ///
    /// Returns `false` and keeps the current value when `node_width` is not finite.
    pub fn set_node_width(&mut self, node_width: f32) -> bool {
        if !node_width.is_finite() {
            return false;
        }
        self.node_width = node_width.clamp(*NODE_WIDTH_RANGE.start(), *NODE_WIDTH_RANGE.end());
        true
    }

    /// Multiplies an unscaled length by the scale factor.
    pub fn scaled(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Rendered width of every node.
    pub fn scaled_width(&self) -> f32 {
        self.scaled(self.node_width)
    }

    /// Rendered size of a type node with `relation_count` relations.
    pub fn type_size(&self, relation_count: usize) -> Size {
        let content = TYPE_HEIGHT_PADDING + relation_count as f32 * TYPE_HEIGHT_PER_RELATION;
        Size::new(
            self.scaled_width(),
            self.scaled(TYPE_BASE_HEIGHT.max(content)),
        )
    }

    /// Rendered size of a condition node.
    pub fn condition_size(&self) -> Size {
        Size::new(self.scaled_width(), self.scaled(CONDITION_HEIGHT))
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            node_width: 160.0,
        }
    }
}

impl From<&ViewConfig> for ViewParams {
    fn from(config: &ViewConfig) -> Self {
        Self::new(config.scale(), config.node_width())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_sizes() {
        let view = ViewParams::default();
        assert_eq!(view.type_size(0), Size::new(160.0, 100.0));
        assert_eq!(view.type_size(3), Size::new(160.0, 100.0));
        assert_eq!(view.type_size(4), Size::new(160.0, 120.0));
        assert_eq!(view.condition_size(), Size::new(160.0, 90.0));
    }

    #[test]
    fn test_scaled_sizes() {
        let view = ViewParams::new(1.5, 200.0);
        assert_approx_eq!(f32, view.scaled_width(), 300.0);
        assert_approx_eq!(f32, view.type_size(5).height(), 210.0);
        assert_approx_eq!(f32, view.condition_size().height(), 135.0);
    }

    #[test]
    fn test_setters_clamp_into_range() {
        let mut view = ViewParams::default();

        assert!(view.set_scale(5.0));
        assert_eq!(view.scale(), 2.0);
        assert!(view.set_scale(0.1));
        assert_eq!(view.scale(), 0.5);

        assert!(view.set_node_width(10.0));
        assert_eq!(view.node_width(), 120.0);
        assert!(view.set_node_width(1000.0));
        assert_eq!(view.node_width(), 300.0);
    }

    #[test]
    fn test_setters_ignore_non_finite() {
        let mut view = ViewParams::new(1.2, 180.0);
        assert!(!view.set_scale(f32::NAN));
        assert!(!view.set_node_width(f32::INFINITY));
        assert_eq!(view, ViewParams::new(1.2, 180.0));

        assert_eq!(ViewParams::new(f32::NAN, f32::NAN), ViewParams::default());
    }

    #[test]
    fn test_from_view_config() {
        let config = ViewConfig::new(3.0, 250.0, 1200.0, 800.0);
        let view = ViewParams::from(&config);
        assert_eq!(view.scale(), 2.0);
        assert_eq!(view.node_width(), 250.0);
    }
}
