//! Color handling for modelgraph scenes
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for filling and
//! stroking SVG elements.
//!
//! SVG 1.1 renderers only understand hex and `rgb()` paints, and expect
//! transparency in a separate `*-opacity` attribute. [`Color`] therefore
//! displays as opaque `#rrggbb`, and [`apply_fill!`](crate::apply_fill!)
//! writes the alpha into `fill-opacity`.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Rgba8, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelgraph_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let green = Color::new("rgb(27, 94, 32)").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelgraph_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let semi_transparent_red = red.with_alpha(0.5);
    /// assert_eq!(semi_transparent_red.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

/// Writes the color as opaque sRGB hex; the alpha is left to `*-opacity`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba8 { r, g, b, .. } = self.color.to_alpha_color::<Srgb>().to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Sets `fill` and `fill-opacity` on an SVG element.
#[macro_export]
macro_rules! apply_fill {
    ($element:expr, $color:expr) => {{
        let color: $crate::color::Color = $color;
        $element
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#4285F4").is_ok());
        assert!(Color::new("rgb(230, 81, 0)").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_color_default_is_opaque() {
        let color = Color::default();
        assert!((color.alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("rgb(27, 94, 32)").unwrap();
        let transparent = color.with_alpha(0.8);
        assert!((transparent.alpha() - 0.8).abs() < 0.001);
        assert_ne!(color, transparent);
    }

    #[test]
    fn test_color_display_is_opaque_hex() {
        assert_eq!(Color::new("blue").unwrap().to_string(), "#0000ff");
        assert_eq!(Color::new("rgb(27, 94, 32)").unwrap().to_string(), "#1b5e20");

        let translucent = Color::new("rgba(0, 0, 255, 0.3)").unwrap();
        assert_eq!(translucent.to_string(), "#0000ff");
        assert_eq!(Color::default().with_alpha(0.15).to_string(), "#000000");
    }

    #[test]
    fn test_apply_fill_splits_alpha() {
        let color = Color::new("rgb(230, 81, 0)").unwrap().with_alpha(0.8);
        let rendered = crate::apply_fill!(svg::node::element::Polygon::new(), color).to_string();

        assert!(rendered.contains("fill=\"#e65100\""));
        assert!(rendered.contains("fill-opacity=\"0.8\""));
    }
}
