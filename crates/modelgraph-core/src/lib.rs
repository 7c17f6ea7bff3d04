//! Modelgraph Core Types and Drawing Primitives
//!
//! This crate provides the building blocks shared by the modelgraph
//! visualization crates:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Draw**: Node boxes, curved arrows and text rendered to layered SVG ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
