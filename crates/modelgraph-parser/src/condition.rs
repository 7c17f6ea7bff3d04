//! Condition block finder.
//!
//! Condition blocks are located anywhere in the text, independently of the
//! line scanner. The expression body ends at the first `}`, so a body that
//! itself contains braces is cut short.

use log::trace;
use winnow::{
    Parser as _,
    ascii::{multispace0, multispace1},
    combinator::{delimited, preceded},
    error::{ContextError, ErrMode},
    token::{take_till, take_while},
};

use crate::model::ConditionNode;

type IResult<O> = Result<O, ErrMode<ContextError>>;

const KEYWORD: &str = "condition";

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `condition name(params) { expression }`
fn condition_block<'s>(input: &mut &'s str) -> IResult<(&'s str, &'s str, &'s str)> {
    (
        preceded((KEYWORD, multispace1), take_while(1.., is_word)),
        delimited('(', take_till(1.., ')'), ')'),
        preceded(multispace0, delimited('{', take_till(1.., '}'), '}')),
    )
        .parse_next(input)
}

/// Finds every condition block in `text`, in order of appearance.
pub(crate) fn find_conditions(text: &str) -> Vec<ConditionNode> {
    let mut conditions = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(KEYWORD) {
        let mut attempt = &rest[start..];
        match condition_block(&mut attempt) {
            Ok((name, params, expression)) => {
                trace!(name; "Found condition block");
                conditions.push(ConditionNode::new(name, params.trim(), expression.trim()));
                rest = attempt;
            }
            Err(_) => {
                rest = &rest[start + KEYWORD.len()..];
            }
        }
    }

    conditions
}
