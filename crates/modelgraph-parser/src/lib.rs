//! Best-effort extraction of authorization model text.
//!
//! This crate turns modeling-language text into a display model of types,
//! their relations and conditions. It is a lightweight scanner, not a
//! grammar: it never rejects input and keeps whatever it can recognize.
//!
//! - [`extract`] scans a whole model text into a [`Model`]
//! - [`reference`] classifies relation definitions and extracts references
//! - [`model`] holds [`TypeNode`], [`RelationEntry`] and [`ConditionNode`]

mod condition;
mod extract;
pub mod model;
pub mod reference;

pub use extract::extract;
pub use model::{ConditionNode, Model, RelationEntry, TypeNode};
