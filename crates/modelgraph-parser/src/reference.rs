//! Reference resolution for relation definitions.
//!
//! A relation definition such as `[user, team#member with in_office] or owner`
//! mentions other types and relations. This module classifies definitions
//! and pulls out the raw reference tokens, without trying to understand the
//! boolean structure of the expression.
//!
//! ```
//! # use modelgraph_parser::reference::{extract_references, extract_type_name, is_computed};
//! let definition = "[user, team#member] or owner from parent";
//!
//! assert!(is_computed(definition));
//! assert_eq!(
//!     extract_references(definition),
//!     ["user", "team#member", "owner", "parent"]
//! );
//! assert_eq!(extract_type_name("team#member"), "team");
//! ```

use winnow::{
    Parser as _,
    ascii::multispace1,
    combinator::opt,
    error::{ContextError, ErrMode},
    token::{one_of, take_while},
};

type IResult<O> = Result<O, ErrMode<ContextError>>;

/// Words that join references but are never references themselves.
const RESERVED_WORDS: [&str; 4] = ["or", "and", "from", "with"];

/// Operators that make a relation computed from others.
const COMPUTED_OPERATORS: [&str; 3] = [" or ", " and ", " from "];

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn identifier<'s>(input: &mut &'s str) -> IResult<&'s str> {
    (
        one_of(is_identifier_start),
        take_while(0.., is_identifier_continue),
    )
        .take()
        .parse_next(input)
}

/// `#relation`
fn relation_suffix<'s>(input: &mut &'s str) -> IResult<&'s str> {
    ('#', take_while(1.., is_identifier_start))
        .take()
        .parse_next(input)
}

/// ` with condition`
fn condition_suffix<'s>(input: &mut &'s str) -> IResult<&'s str> {
    (
        multispace1,
        "with",
        multispace1,
        take_while(1.., is_identifier_start),
    )
        .take()
        .parse_next(input)
}

/// One reference token, qualifiers included.
fn reference<'s>(input: &mut &'s str) -> IResult<&'s str> {
    (identifier, opt(relation_suffix), opt(condition_suffix))
        .take()
        .parse_next(input)
}

/// Returns `true` if the definition combines other relations.
///
/// Only space-delimited `or`, `and` and `from` count; a definition made of
/// directly assignable types alone is direct.
pub fn is_computed(definition: &str) -> bool {
    COMPUTED_OPERATORS
        .iter()
        .any(|operator| definition.contains(operator))
}

/// Scans a definition for reference tokens.
///
/// Tokens are returned in order of appearance and keep their `#relation` and
/// ` with condition` qualifiers. Reserved words are dropped. Repeated
/// references are kept, so a definition naming a type twice yields two tokens.
pub fn extract_references(definition: &str) -> Vec<String> {
    let mut references = Vec::new();
    let mut rest = definition;

    while !rest.is_empty() {
        let mut attempt = rest;
        match reference(&mut attempt) {
            Ok(token) => {
                if !RESERVED_WORDS.contains(&token) {
                    references.push(token.to_string());
                }
                rest = attempt;
            }
            Err(_) => {
                // Not a token start; move on by one character
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }

    references
}

/// Normalizes one reference token to the name of the type it points at.
///
/// Strips a leading `[` and a trailing `]`, then cuts at the first `#` and at
/// the first ` with `.
pub fn extract_type_name(reference: &str) -> &str {
    let mut name = reference.trim();
    name = name.strip_prefix('[').unwrap_or(name);
    name = name.strip_suffix(']').unwrap_or(name);
    if let Some((head, _)) = name.split_once('#') {
        name = head;
    }
    if let Some((head, _)) = name.split_once(" with ") {
        name = head;
    }
    name.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_computed() {
        assert!(is_computed("[user] or owner"));
        assert!(!is_computed("[user]"));
        assert!(is_computed("owner from parent"));
        assert!(is_computed("[user] and active"));
        assert!(!is_computed("[user,organization#member]"));
    }

    #[test]
    fn test_is_computed_requires_spaces() {
        assert!(!is_computed("editor_or_owner"));
        assert!(!is_computed("[user]or owner"));
    }

    #[test]
    fn test_extract_type_name() {
        assert_eq!(extract_type_name("[user]"), "user");
        assert_eq!(extract_type_name("organization#member"), "organization");
        assert_eq!(extract_type_name("user with time_valid"), "user");
        assert_eq!(extract_type_name("  [team#member with office]  "), "team");
        assert_eq!(extract_type_name("owner"), "owner");
    }

    #[test]
    fn test_extract_type_name_single_token_only() {
        // A bracketed list is not split; only the outer brackets go
        assert_eq!(extract_type_name("[user, group]"), "user, group");
    }

    #[test]
    fn test_extract_references_plain() {
        assert_eq!(extract_references("[user]"), ["user"]);
        assert_eq!(extract_references("owner"), ["owner"]);
        assert!(extract_references("").is_empty());
        assert!(extract_references("[ ] , :").is_empty());
    }

    #[test]
    fn test_extract_references_qualified() {
        assert_eq!(
            extract_references("[user, group#member, user with time_valid]"),
            ["user", "group#member", "user with time_valid"]
        );
        assert_eq!(
            extract_references("[team#member with in_office]"),
            ["team#member with in_office"]
        );
    }

    #[test]
    fn test_extract_references_drops_reserved_words() {
        assert_eq!(
            extract_references("viewer from parent or owner and editor"),
            ["viewer", "parent", "owner", "editor"]
        );
        assert!(extract_references("or and from with").is_empty());
    }

    #[test]
    fn test_extract_references_keeps_duplicates() {
        assert_eq!(extract_references("[user] or user"), ["user", "user"]);
    }

    #[test]
    fn test_extract_references_incomplete_qualifiers() {
        // `#` without a name and `with` without a condition stay outside the token
        assert_eq!(extract_references("group#"), ["group"]);
        assert_eq!(extract_references("group#1"), ["group"]);
        assert_eq!(extract_references("user with"), ["user"]);
    }

    #[test]
    fn test_extract_references_skips_non_ascii() {
        assert_eq!(extract_references("é user ü"), ["user"]);
        assert_eq!(extract_references("9lives"), ["lives"]);
    }
}
