//! Node model produced by extraction.
//!
//! A [`Model`] holds the ordered type nodes, each owning its relation entries,
//! and the ordered condition nodes. Positions are logical and unscaled; they
//! start at the origin and are assigned by the layout step of the
//! visualization crate.

use modelgraph_core::geometry::Point;

use crate::reference;

/// One `define` line of a type.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationEntry {
    name: String,
    definition: String,
    truncated: String,
    is_computed: bool,
    references: Vec<String>,
}

impl RelationEntry {
    /// Creates a relation, classifying it and scanning its references.
    ///
    /// The display string starts out as the full definition.
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        let definition = definition.into();
        Self {
            name: name.into(),
            truncated: definition.clone(),
            is_computed: reference::is_computed(&definition),
            references: reference::extract_references(&definition),
            definition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Definition text as last fitted into a node body.
    pub fn truncated(&self) -> &str {
        &self.truncated
    }

    pub fn set_truncated(&mut self, truncated: String) {
        self.truncated = truncated;
    }

    /// Whether the definition combines other relations (`or`, `and`, `from`).
    pub fn is_computed(&self) -> bool {
        self.is_computed
    }

    /// Raw reference tokens, in the order they appear in the definition.
    pub fn references(&self) -> &[String] {
        &self.references
    }
}

/// A `type` declaration and its relations.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    name: String,
    relations: Vec<RelationEntry>,
    position: Point,
}

impl TypeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: Vec::new(),
            position: Point::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn relations(&self) -> &[RelationEntry] {
        &self.relations
    }

    pub fn relations_mut(&mut self) -> &mut [RelationEntry] {
        &mut self.relations
    }

    pub fn push_relation(&mut self, relation: RelationEntry) {
        self.relations.push(relation);
    }

    /// Top-left corner in logical coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// A `condition name(params) { expression }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionNode {
    name: String,
    params: String,
    expression: String,
    position: Point,
}

impl ConditionNode {
    pub fn new(
        name: impl Into<String>,
        params: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            expression: expression.into(),
            position: Point::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw parameter list, without the surrounding parentheses.
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Raw expression body, without the surrounding braces.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// Everything extracted from one model text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    types: Vec<TypeNode>,
    conditions: Vec<ConditionNode>,
}

impl Model {
    pub fn new(types: Vec<TypeNode>, conditions: Vec<ConditionNode>) -> Self {
        Self { types, conditions }
    }

    /// Type nodes in file order.
    pub fn types(&self) -> &[TypeNode] {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut [TypeNode] {
        &mut self.types
    }

    /// Condition nodes in file order.
    pub fn conditions(&self) -> &[ConditionNode] {
        &self.conditions
    }

    pub fn conditions_mut(&mut self) -> &mut [ConditionNode] {
        &mut self.conditions
    }

    /// Total number of nodes, types and conditions together.
    pub fn node_count(&self) -> usize {
        self.types.len() + self.conditions.len()
    }

    /// Returns `true` when no type was found.
    ///
    /// Conditions alone do not make a drawable graph.
    pub fn has_no_types(&self) -> bool {
        self.types.is_empty()
    }
}
