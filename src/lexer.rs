//! Tokenization for rpnexpr expressions
//!
//! Tokens are separated by the space character only. Runs of spaces produce
//! no empty tokens; tabs and other whitespace are ordinary token characters.

use nom::{
    bytes::complete::{take_while, take_while1},
    multi::many0,
    sequence::preceded,
    IResult,
};

const SEPARATOR: char = ' ';

/// Parse one token, skipping any separators in front of it
fn token(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(|c| c == SEPARATOR),
        take_while1(|c| c != SEPARATOR),
    )(input)
}

/// Split an expression into its tokens
///
/// Never fails: anything that is not a separator belongs to some token.
pub fn tokenize(input: &str) -> Vec<&str> {
    many0(token)(input)
        .map(|(_, tokens)| tokens)
        .unwrap_or_default()
}
