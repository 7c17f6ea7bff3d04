//! Modelgraph - interactive graphs of authorization models.
//!
//! Turns authorization modeling-language text into a graph of types,
//! conditions and relation edges, laid out on a grid, rendered to a vector
//! scene and manipulable by dragging nodes.
//!
//! The [`Visualization`] value owns all state: the extracted model, the view
//! parameters, the drag gesture and the drawing surface. Layout and rendering
//! are pure functions of that state.

pub mod config;
pub mod render;

mod error;
mod interaction;
mod layout;
mod node;
mod surface;
mod view;

pub use modelgraph_core::{color, draw, geometry};
pub use modelgraph_parser::{ConditionNode, Model, RelationEntry, TypeNode, reference};

pub use error::ModelGraphError;
pub use interaction::DragState;
pub use layout::{grid_columns, grid_position};
pub use render::Edge;
pub use surface::Surface;
pub use view::{NODE_WIDTH_RANGE, SCALE_RANGE, ViewParams};

use std::path::Path;

use log::{debug, info, trace};

use config::{AppConfig, ViewConfig};
use geometry::{Point, Size};
use render::Palette;

/// An interactive graph of one authorization model.
///
/// # Examples
///
/// ```
/// use modelgraph::Visualization;
///
/// let mut graph = Visualization::default();
/// graph.refresh("type user\ntype document\n  relations\n    define viewer: [user]\n");
///
/// assert_eq!(graph.model().types().len(), 2);
/// assert_eq!(graph.edges().len(), 1);
///
/// // Drag the document node by its header
/// graph.on_pointer_down(260.0, 60.0);
/// graph.on_pointer_drag(400.0, 300.0);
/// graph.on_pointer_up();
///
/// let svg = graph.to_svg();
/// assert!(svg.contains("document"));
/// ```
#[derive(Debug)]
pub struct Visualization {
    defaults: ViewConfig,
    palette: Palette,
    view: ViewParams,
    model: Model,
    drag: DragState,
    surface: Surface,
    source: String,
}

impl Visualization {
    /// Creates an empty visualization from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelGraphError::Config`] if a configured color is invalid or
    /// the canvas size is not positive and finite.
    pub fn new(config: AppConfig) -> Result<Self, ModelGraphError> {
        config.view().canvas_size().map_err(ModelGraphError::Config)?;
        let palette = Palette::from_style(config.style()).map_err(ModelGraphError::Config)?;
        Ok(Self::with_palette(config.view().clone(), palette))
    }

    fn with_palette(defaults: ViewConfig, palette: Palette) -> Self {
        let canvas = Size::new(defaults.canvas_width(), defaults.canvas_height());
        Self {
            view: ViewParams::from(&defaults),
            surface: Surface::new(canvas, palette.background()),
            defaults,
            palette,
            model: Model::default(),
            drag: DragState::Idle,
            source: String::new(),
        }
    }

    /// Rebuilds the model from `text`, lays it out on a fresh grid and redraws.
    ///
    /// Positions from a previous refresh are discarded. Text without any type
    /// shows a placeholder message instead of a graph.
    pub fn refresh(&mut self, text: &str) {
        self.source = text.to_string();
        self.model = modelgraph_parser::extract(text);
        self.drag = DragState::Idle;

        if self.model.has_no_types() {
            debug!(conditions = self.model.conditions().len(); "No types found, showing placeholder");
            self.redraw();
            return;
        }

        layout::assign_grid(&mut self.model);
        self.redraw();

        info!(
            types = self.model.types().len(),
            conditions = self.model.conditions().len();
            "Graph rendered"
        );
    }

    /// Sets the scale factor, clamped into [`SCALE_RANGE`], and redraws.
    ///
    /// Positions are kept; sizes, fonts and edge curvature follow the scale.
    pub fn set_scale(&mut self, scale: f32) {
        if self.view.set_scale(scale) {
            debug!(scale = self.view.scale(); "Scale changed");
            self.redraw();
        }
    }

    /// Sets the unscaled node width, clamped into [`NODE_WIDTH_RANGE`], and redraws.
    pub fn set_node_width(&mut self, node_width: f32) {
        if self.view.set_node_width(node_width) {
            debug!(node_width = self.view.node_width(); "Node width changed");
            self.redraw();
        }
    }

    /// Restores the configured scale and node width and refreshes the last text.
    pub fn reset(&mut self) {
        self.view = ViewParams::from(&self.defaults);
        let source = std::mem::take(&mut self.source);
        self.refresh(&source);
    }

    /// Starts dragging the node under the pointer, if any.
    ///
    /// Types are hit-tested before conditions, each in list order.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if self.model.has_no_types() {
            return;
        }
        self.drag = interaction::press(&self.model, &self.view, Point::new(x, y));
    }

    /// Moves the dragged node with the pointer and redraws.
    pub fn on_pointer_drag(&mut self, x: f32, y: f32) {
        if interaction::drag_to(self.drag, &mut self.model, Point::new(x, y)) {
            self.redraw();
        }
    }

    /// Ends the current gesture.
    pub fn on_pointer_up(&mut self) {
        if self.drag.is_dragging() {
            debug!("Drag ended");
        }
        self.drag = DragState::Idle;
    }

    /// The extracted model with current positions.
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn view(&self) -> &ViewParams {
        &self.view
    }

    /// Edges derived from the current model, including those too short to draw.
    pub fn edges(&self) -> Vec<Edge> {
        render::resolve_edges(&self.model, &self.view)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Serializes the current scene to SVG text.
    pub fn to_svg(&self) -> String {
        self.surface.to_svg()
    }

    /// Writes the current scene as an SVG file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelGraphError::Export`] if the file cannot be written.
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<(), ModelGraphError> {
        let path = path.as_ref();
        svg::save(path, &self.surface.to_document())
            .map_err(|err| ModelGraphError::Export(Box::new(err)))?;
        info!(path = path.display().to_string(); "SVG written");
        Ok(())
    }

    fn redraw(&mut self) {
        self.surface.clear();
        self.surface.grow_to_fit(render::legend_extent(&self.palette));

        if self.model.has_no_types() {
            let mut output = render::render_placeholder(&self.palette);
            output.merge(render::render_legend(&self.palette));
            self.surface.paint(output);
            return;
        }

        let required = layout::required_extent(&self.model, &self.view);
        self.surface.grow_to_fit(required);

        render::prepare_labels(&mut self.model, &self.view);
        let mut output = render::render_graph(&self.model, &self.view, &self.palette);
        output.merge(render::render_legend(&self.palette));
        trace!(nodes = self.model.node_count(); "Redrawing graph");
        self.surface.paint(output);
    }
}

impl Default for Visualization {
    fn default() -> Self {
        Self::with_palette(ViewConfig::default(), Palette::default())
    }
}
