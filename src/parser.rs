//! Tokenizers for the two text fields describing a graph: a vertex list `A,B,C` and an edge
//! list `A-B,B-C` or `(A,B),(B,C)`. Both edge notations may be mixed in one list.
//!
//! The parsers only split text into labels. Blank, duplicate and dangling labels are judged by
//! [`crate::input::validate`].

use crate::error::ValidationError;

pub type Input<'a> = &'a str;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, nom::error::Error<Input<'a>>>;

/// One raw field of a comma separated list, possibly empty.
fn list_field(input: Input<'_>) -> ParseResult<'_, &str> {
    use nom::bytes::complete::take_till;
    take_till(|c: char| c == ',')(input)
}

/// A parenthesised edge token, kept whole so its inner comma does not split the list.
/// Only matches when the closing parenthesis ends the field.
fn parenthesised_field(input: Input<'_>) -> ParseResult<'_, &str> {
    use nom::{
        branch::alt,
        bytes::complete::take_till,
        character::complete::{char, space0},
        combinator::{eof, peek, recognize},
        sequence::{terminated, tuple},
    };

    terminated(
        recognize(tuple((
            space0,
            char('('),
            take_till(|c: char| c == ')'),
            char(')'),
            space0,
        ))),
        peek(alt((eof, recognize(char(','))))),
    )(input)
}

fn comma_separated<'a>(
    field: impl FnMut(Input<'a>) -> ParseResult<'a, &'a str>,
    input: Input<'a>,
) -> ParseResult<'a, Vec<&'a str>> {
    use nom::{character::complete::char, combinator::all_consuming, multi::separated_list1};
    all_consuming(separated_list1(char(','), field))(input)
}

/// Split a vertex list into trimmed labels. Blank text is an empty list.
pub fn vertex_labels(input: Input<'_>) -> Vec<&str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    match comma_separated(list_field, input) {
        Ok((_, fields)) => fields.into_iter().map(str::trim).collect(),
        // unreachable: every field parser accepts the empty string
        Err(_) => vec![input.trim()],
    }
}

/// Split an edge list into trimmed tokens. Blank text is an empty list.
pub fn edge_tokens(input: Input<'_>) -> Vec<&str> {
    use nom::branch::alt;

    if input.trim().is_empty() {
        return Vec::new();
    }

    match comma_separated(alt((parenthesised_field, list_field)), input) {
        Ok((_, fields)) => fields.into_iter().map(str::trim).collect(),
        Err(_) => vec![input.trim()],
    }
}

fn parenthesised_endpoint(input: Input<'_>) -> ParseResult<'_, &str> {
    use nom::bytes::complete::take_till;
    take_till(|c: char| c == ',' || c == ')')(input)
}

/// `(A,B)` with nothing else inside the parentheses.
fn parenthesised_pair(input: Input<'_>) -> ParseResult<'_, (&str, &str)> {
    use nom::{
        character::complete::char,
        sequence::{delimited, separated_pair},
    };

    delimited(
        char('('),
        separated_pair(parenthesised_endpoint, char(','), parenthesised_endpoint),
        char(')'),
    )(input)
}

fn dashed_endpoint(input: Input<'_>) -> ParseResult<'_, &str> {
    use nom::bytes::complete::take_till;
    take_till(|c: char| c == '-')(input)
}

/// `A-B` with exactly one dash.
fn dashed_pair(input: Input<'_>) -> ParseResult<'_, (&str, &str)> {
    use nom::{character::complete::char, sequence::separated_pair};
    separated_pair(dashed_endpoint, char('-'), dashed_endpoint)(input)
}

/// Parse one edge token into its two trimmed endpoints.
///
/// Endpoints may come back empty; that is reported as a blank label by the caller, which knows
/// the surrounding context.
pub fn edge_endpoints(token: Input<'_>) -> Result<(&str, &str), ValidationError> {
    use nom::combinator::all_consuming;

    let token = token.trim();
    let parsed = if token.starts_with('(') {
        all_consuming(parenthesised_pair)(token)
    } else {
        all_consuming(dashed_pair)(token)
    };

    let (_, (v1, v2)) = parsed.map_err(|_| ValidationError::MalformedEdge {
        token: token.to_owned(),
    })?;
    Ok((v1.trim(), v2.trim()))
}
