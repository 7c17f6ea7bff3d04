//! Configuration types for model graph rendering.
//!
//! This module provides configuration structures that control the initial
//! view and the palette of rendered graphs. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining view and style settings.
//! - [`ViewConfig`] - Initial scale, node width and canvas size.
//! - [`StyleConfig`] - Color overrides for the background, nodes and edges.
//!
//! # Example
//!
//! ```
//! # use modelgraph::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.view().node_width(), 160.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use modelgraph_core::{color::Color, geometry::Size};

/// Top-level application configuration combining view and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// View configuration section.
    #[serde(default)]
    view: ViewConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified view and style configurations.
    pub fn new(view: ViewConfig, style: StyleConfig) -> Self {
        Self { view, style }
    }

    /// Returns the view configuration.
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Returns a mutable view configuration, for command-line overrides.
    pub fn view_mut(&mut self) -> &mut ViewConfig {
        &mut self.view
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Initial view parameters and canvas size.
///
/// `scale` and `node_width` are the values a reset returns to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    scale: f32,
    node_width: f32,
    canvas_width: f32,
    canvas_height: f32,
}

impl ViewConfig {
    pub fn new(scale: f32, node_width: f32, canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            scale,
            node_width,
            canvas_width,
            canvas_height,
        }
    }

    /// Returns the default scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the default unscaled node width in pixels.
    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    /// Returns the initial canvas width.
    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    /// Returns the initial canvas height.
    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    /// Returns the initial canvas size.
    ///
    /// # Errors
    ///
    /// Returns an error message if either dimension is not a positive finite number.
    pub fn canvas_size(&self) -> Result<Size, String> {
        for (name, value) in [("width", self.canvas_width), ("height", self.canvas_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("Invalid canvas {name} in config: {value}"));
            }
        }
        Ok(Size::new(self.canvas_width, self.canvas_height))
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn set_node_width(&mut self, node_width: f32) {
        self.node_width = node_width;
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            node_width: 160.0,
            canvas_width: 1200.0,
            canvas_height: 800.0,
        }
    }
}

/// Visual styling configuration for rendered graphs.
///
/// Every field is a CSS color string. Fields that are not set fall back to
/// the built-in palette.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub(crate) background_color: Option<String>,
    #[serde(default)]
    pub(crate) type_color: Option<String>,
    #[serde(default)]
    pub(crate) condition_color: Option<String>,
    #[serde(default)]
    pub(crate) direct_color: Option<String>,
    #[serde(default)]
    pub(crate) computed_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed canvas background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color("background", self.background_color.as_deref())
    }

    /// Returns the parsed accent color of type nodes.
    pub fn type_color(&self) -> Result<Option<Color>, String> {
        parse_color("type", self.type_color.as_deref())
    }

    /// Returns the parsed accent color of condition nodes.
    pub fn condition_color(&self) -> Result<Option<Color>, String> {
        parse_color("condition", self.condition_color.as_deref())
    }

    /// Returns the parsed color of direct relations and their edges.
    pub fn direct_color(&self) -> Result<Option<Color>, String> {
        parse_color("direct relation", self.direct_color.as_deref())
    }

    /// Returns the parsed color of computed relations and their edges.
    pub fn computed_color(&self) -> Result<Option<Color>, String> {
        parse_color("computed relation", self.computed_color.as_deref())
    }
}

fn parse_color(what: &str, color: Option<&str>) -> Result<Option<Color>, String> {
    color
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {what} color in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_config_defaults() {
        let view = ViewConfig::default();
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.node_width(), 160.0);
        assert_eq!(view.canvas_width(), 1200.0);
        assert_eq!(view.canvas_height(), 800.0);
    }

    #[test]
    fn test_style_config_unset_colors() {
        let style = StyleConfig::default();
        assert_eq!(style.background_color(), Ok(None));
        assert_eq!(style.computed_color(), Ok(None));
    }

    #[test]
    fn test_style_config_invalid_color() {
        let style = StyleConfig {
            direct_color: Some(String::from("definitely-not-a-color")),
            ..StyleConfig::default()
        };
        let err = style.direct_color().unwrap_err();
        assert!(err.contains("direct relation"));
    }

    #[test]
    fn test_view_config_setters() {
        let mut view = ViewConfig::new(1.0, 160.0, 800.0, 600.0);
        view.set_scale(1.5);
        view.set_node_width(200.0);
        assert_eq!(view.scale(), 1.5);
        assert_eq!(view.node_width(), 200.0);
        assert_eq!(view.canvas_width(), 800.0);
    }
}
