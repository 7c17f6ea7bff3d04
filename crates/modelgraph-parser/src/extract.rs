//! Line scanner for `type` and `define` declarations.

use log::trace;

use crate::{
    condition,
    model::{Model, RelationEntry, TypeNode},
};

const TYPE_PREFIX: &str = "type ";
const DEFINE_PREFIX: &str = "define ";

/// Extracts types, relations and conditions from model text.
///
/// Extraction never fails. Lines that are neither a `type` nor a `define`
/// declaration are ignored, a `define` before any `type` is dropped, and
/// malformed condition blocks yield no node.
///
/// ```
/// let model = modelgraph_parser::extract(
///     "type user\n\
///      type document\n  relations\n    define viewer: [user]\n",
/// );
///
/// assert_eq!(model.types().len(), 2);
/// assert_eq!(model.types()[1].relations()[0].name(), "viewer");
/// ```
pub fn extract(text: &str) -> Model {
    let types = scan_types(text);
    let conditions = condition::find_conditions(text);

    trace!(types = types.len(), conditions = conditions.len(); "Extracted model");

    Model::new(types, conditions)
}

fn scan_types(text: &str) -> Vec<TypeNode> {
    let mut types: Vec<TypeNode> = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if let Some(name) = line.strip_prefix(TYPE_PREFIX) {
            types.push(TypeNode::new(name.trim()));
        } else if let Some(rest) = line.strip_prefix(DEFINE_PREFIX) {
            let Some(current) = types.last_mut() else {
                continue;
            };
            if let Some(relation) = parse_define(rest) {
                current.push_relation(relation);
            }
        }
    }

    types
}

/// Splits `name: definition` at the first colon.
///
/// A colon at the very start means there is no name and the line is dropped.
fn parse_define(rest: &str) -> Option<RelationEntry> {
    match rest.split_once(':') {
        Some((name, definition)) if !name.is_empty() => {
            Some(RelationEntry::new(name.trim(), definition.trim()))
        }
        _ => None,
    }
}
